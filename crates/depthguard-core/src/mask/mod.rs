pub mod builder;
pub mod morphology;
pub mod threshold;

pub use builder::build_trust_mask;
pub use morphology::{dilate, StructuringElement};
pub use threshold::{invert, threshold_edges};
