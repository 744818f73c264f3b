pub mod draw;
pub mod framebuffer;
pub mod raster;
pub mod settings;
pub mod shader;
mod soft;

use thiserror::Error;

use crate::info::Info;
use draw::{Draw, DrawError};
use framebuffer::Framebuffer;
use settings::Settings;
use shader::Shader;

pub use soft::Renderer as SoftRenderer;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid draw call: {0}")]
    Draw(#[from] DrawError),
    #[error("failed to write frame: {0}")]
    Image(#[from] image::ImageError),
}

pub trait Renderer {
    fn new(info: &Info, settings: &Settings) -> Self;
    fn clear(&mut self);
    /// Returns the number of fragments shaded.
    fn draw<S: Shader>(&mut self, shader: &S, draw: &Draw) -> Result<u32, RenderError>;
    fn frame(&self) -> &Framebuffer;
}

pub fn new(info: &Info, settings: &Settings) -> SoftRenderer {
    SoftRenderer::new(info, settings)
}
