use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, warn};

use super::config::FilterConfig;

/// Live-reloadable configuration shared between the frame path and whoever
/// delivers parameter updates.
///
/// Updates replace the held snapshot wholesale; readers clone it once per
/// frame.
#[derive(Clone, Debug, Default)]
pub struct SharedConfig {
    inner: Arc<RwLock<FilterConfig>>,
}

impl SharedConfig {
    /// Wrap an initial configuration. An even kernel size in `initial` is
    /// replaced by the default one.
    pub fn new(initial: FilterConfig) -> Self {
        let initial = Self::checked(initial, &FilterConfig::default());
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    /// Copy of the current configuration.
    pub fn snapshot(&self) -> FilterConfig {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Validate `proposed` against the held configuration, store it and
    /// return what was accepted.
    ///
    /// An even `laplace_kernel_size` keeps the previously accepted value; this
    /// is corrected silently (logged, never returned as an error).
    pub fn reconfigure(&self, proposed: FilterConfig) -> FilterConfig {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let accepted = Self::checked(proposed, &guard);
        *guard = accepted.clone();
        info!(
            enabled = accepted.enabled,
            ksize = accepted.laplace_kernel_size,
            threshold = accepted.filter_threshold,
            shape = %accepted.struct_shape,
            dilate = accepted.dilate_struct_size,
            similarity = accepted.similarity_enabled,
            "Reconfigured depth filter"
        );
        accepted
    }

    fn checked(proposed: FilterConfig, previous: &FilterConfig) -> FilterConfig {
        let requested = proposed.laplace_kernel_size;
        let accepted = proposed.validated(previous);
        if accepted.laplace_kernel_size != requested {
            warn!(
                requested,
                kept = accepted.laplace_kernel_size,
                "Laplacian kernel size must be odd, keeping previous value"
            );
        }
        accepted
    }
}
