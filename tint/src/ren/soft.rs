use log::{debug, info};
use tint_gpu::{VERTEX_COUNT, VertexOutput, glam::Vec4};

use super::{
    RenderError,
    draw::Draw,
    framebuffer::{Blend, Framebuffer},
    raster,
    settings::Settings,
    shader::Shader,
};
use crate::info::{Info, split_version};

/// Runs both shader stages and the fixed-function work in between on the CPU.
pub struct Renderer {
    frame: Framebuffer,
    clear_color: Vec4,
    blend: Blend,
}

impl super::Renderer for Renderer {
    fn new(info: &Info, settings: &Settings) -> Self {
        let (major, minor, patch) = split_version(info.app_version);
        info!(
            "{} {major}.{minor}.{patch} - {} software renderer, {} target",
            info.app_name, info.engine_name, settings.resolution
        );
        Self {
            frame: Framebuffer::new(settings.resolution, settings.clear_color),
            clear_color: settings.clear_color,
            blend: settings.blend,
        }
    }

    fn clear(&mut self) {
        self.frame.clear(self.clear_color);
    }

    fn draw<S: Shader>(&mut self, shader: &S, draw: &Draw) -> Result<u32, RenderError> {
        draw.validate()?;

        let mut shaded = 0;
        for instance in draw.instances.clone() {
            let outputs: [VertexOutput; VERTEX_COUNT as usize] =
                std::array::from_fn(|i| shader.vertex(draw.vertices.start + i as u32));
            shaded += raster::rasterize(shader, &outputs, &mut self.frame, self.blend);
            debug!("tint::ren::soft - instance {instance}: {shaded} fragments so far");
        }
        Ok(shaded)
    }

    fn frame(&self) -> &Framebuffer {
        &self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        info,
        ren::{Renderer as _, RenderError, draw::DrawError, settings::Resolution, shader::TriangleShader},
    };

    fn renderer(resolution: Resolution) -> Renderer {
        let info = info::new(String::from("test"), info::make_version(0, 1, 0, 0));
        Renderer::new(&info, &Settings::default().resolution(resolution))
    }

    #[test]
    fn invalid_draw_leaves_frame_untouched() {
        let mut ren = renderer(Resolution::new(16, 16));
        let result = ren.draw(&TriangleShader, &Draw::new(0..6, 0..1));
        assert!(matches!(result, Err(RenderError::Draw(DrawError::VertexCount(6)))));
        assert!(ren.frame().pixels().iter().all(|p| *p == Vec4::new(0.3, 0.5, 0.9, 1.0)));
    }

    #[test]
    fn extra_instances_redraw_the_same_triangle() {
        let mut once = renderer(Resolution::new(32, 32));
        let mut twice = renderer(Resolution::new(32, 32));
        let single = once.draw(&TriangleShader, &Draw::triangle()).unwrap();
        let double = twice.draw(&TriangleShader, &Draw::new(0..3, 0..2)).unwrap();
        assert_eq!(double, 2 * single);
        assert_eq!(once.frame().pixels(), twice.frame().pixels());
    }

    #[test]
    fn shifted_vertex_range_wraps_to_the_triangle() {
        let mut base = renderer(Resolution::new(32, 32));
        let mut shifted = renderer(Resolution::new(32, 32));
        base.draw(&TriangleShader, &Draw::triangle()).unwrap();
        shifted.draw(&TriangleShader, &Draw::new(3..6, 0..1)).unwrap();
        assert_eq!(base.frame().pixels(), shifted.frame().pixels());
    }

    #[test]
    fn clear_restores_clear_color() {
        let mut ren = renderer(Resolution::new(8, 8));
        ren.draw(&TriangleShader, &Draw::triangle()).unwrap();
        ren.clear();
        assert!(ren.frame().pixels().iter().all(|p| *p == Vec4::new(0.3, 0.5, 0.9, 1.0)));
    }
}
