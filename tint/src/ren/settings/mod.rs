use std::{fmt, path::PathBuf, str::FromStr};

use thiserror::Error;
use tint_gpu::glam::Vec4;

use super::framebuffer::Blend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Default for Resolution {
    fn default() -> Self {
        Self { width: 800, height: 800 }
    }
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("expected WIDTHxHEIGHT, got `{0}`")]
    Format(String),
    #[error("resolution must be at least 1x1, got {0}")]
    Empty(Resolution),
}

impl FromStr for Resolution {
    type Err = ResolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| ResolutionError::Format(s.to_owned()))?;
        let parse = |v: &str| v.trim().parse::<u32>().map_err(|_| ResolutionError::Format(s.to_owned()));
        let resolution = Resolution::new(parse(width)?, parse(height)?);
        match resolution.width == 0 || resolution.height == 0 {
            true => Err(ResolutionError::Empty(resolution)),
            false => Ok(resolution),
        }
    }
}

pub struct Settings {
    pub resolution: Resolution,
    pub clear_color: Vec4,
    pub blend: Blend,
    pub output: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            clear_color: Vec4::new(0.3, 0.5, 0.9, 1.0),
            blend: Blend::Alpha,
            output: PathBuf::from("triangle.png"),
        }
    }
}

impl Settings {
    pub fn resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn clear_color(mut self, clear_color: Vec4) -> Self {
        self.clear_color = clear_color;
        self
    }

    pub fn blend(mut self, blend: Blend) -> Self {
        self.blend = blend;
        self
    }

    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}
