pub mod app;
pub mod info;
pub mod ren;
#[cfg(feature = "spirv")]
pub mod shader;

pub use tint_gpu::{VertexOutput, glam};
