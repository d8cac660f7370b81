pub mod border;
pub mod laplacian;

pub use border::reflect_101;
pub use laplacian::{detect_edges, laplacian};
