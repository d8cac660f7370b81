pub mod consts;
pub mod edge;
pub mod error;
pub mod frame;
pub mod io;
pub mod mask;
pub mod node;
pub mod pipeline;
pub mod rescue;
