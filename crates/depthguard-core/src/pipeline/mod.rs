pub mod config;
mod filter;
mod shared;
mod types;

pub use config::{FilterConfig, StructShape};
pub use filter::{apply_mask, count_discarded, filter_frame};
pub use shared::SharedConfig;
pub use types::{FilterOutput, FilterStats};
