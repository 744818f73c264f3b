use std::path::Path;

use image::{ExtendedColorType, ImageFormat};
use log::debug;
use tint_gpu::glam::Vec4;

use super::{RenderError, settings::Resolution};

/// How a fragment color combines with what is already in the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Blend {
    Replace,
    /// Source-over: `src * src.a + dst * (1 - src.a)` for color,
    /// `src.a + dst.a * (1 - src.a)` for alpha.
    #[default]
    Alpha,
}

impl Blend {
    pub fn apply(self, src: Vec4, dst: Vec4) -> Vec4 {
        match self {
            Blend::Replace => src,
            Blend::Alpha => {
                let inv = 1.0 - src.w;
                let rgb = src.truncate() * src.w + dst.truncate() * inv;
                Vec4::from((rgb, src.w + dst.w * inv))
            }
        }
    }
}

/// Image format a frame saved to `path` would be written in, picked from the
/// extension.
pub fn output_format(path: &Path) -> Result<ImageFormat, RenderError> {
    Ok(ImageFormat::from_path(path)?)
}

/// A single RGBA render target with float channels.
pub struct Framebuffer {
    pub resolution: Resolution,
    pixels: Vec<Vec4>,
}

impl Framebuffer {
    pub fn new(resolution: Resolution, clear_color: Vec4) -> Self {
        Self {
            resolution,
            pixels: vec![clear_color; resolution.pixel_count()],
        }
    }

    pub fn width(&self) -> u32 {
        self.resolution.width
    }

    pub fn height(&self) -> u32 {
        self.resolution.height
    }

    pub fn clear(&mut self, color: Vec4) {
        self.pixels.fill(color);
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width() && y < self.height()).then(|| y as usize * self.width() as usize + x as usize)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Vec4> {
        self.offset(x, y).map(|i| self.pixels[i])
    }

    pub fn write(&mut self, x: u32, y: u32, color: Vec4, blend: Blend) {
        if let Some(i) = self.offset(x, y) {
            self.pixels[i] = blend.apply(color, self.pixels[i]);
        }
    }

    pub fn pixels(&self) -> &[Vec4] {
        &self.pixels
    }

    /// Quantizes every channel to 8 bits, clamping to [0, 1].
    pub fn to_rgba8(&self) -> Vec<[u8; 4]> {
        self.pixels
            .iter()
            .map(|p| p.to_array().map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8))
            .collect()
    }

    /// Writes the frame as an image, format picked from the path's extension.
    pub fn save(&self, path: &Path) -> Result<(), RenderError> {
        let format = output_format(path)?;
        let pixels = self.to_rgba8();
        image::save_buffer_with_format(
            path,
            bytemuck::cast_slice(&pixels),
            self.width(),
            self.height(),
            ExtendedColorType::Rgba8,
            format,
        )?;
        debug!("tint::ren::Framebuffer - saved {} frame to {}", self.resolution, path.display());
        Ok(())
    }
}
