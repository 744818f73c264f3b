use tint_gpu::{VertexOutput, glam::Vec4};

/// The two programmable stages of a pipeline.
pub trait Shader {
    fn vertex(&self, index: u32) -> VertexOutput;
    fn fragment(&self, color: Vec4) -> Vec4;
}

/// Runs the same stage functions the `triangle` shader crate compiles to SPIR-V.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriangleShader;

impl Shader for TriangleShader {
    fn vertex(&self, index: u32) -> VertexOutput {
        tint_gpu::vertex(index)
    }

    fn fragment(&self, color: Vec4) -> Vec4 {
        tint_gpu::fragment(color)
    }
}
