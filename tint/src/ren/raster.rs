//! Fixed-function half of the reference pipeline: perspective divide, viewport
//! mapping, coverage and linear attribute interpolation.

use log::{debug, trace};
use tint_gpu::{
    VertexOutput,
    glam::{Vec2, Vec3, Vec4, Vec4Swizzles},
};

use super::{
    framebuffer::{Blend, Framebuffer},
    settings::Resolution,
    shader::Shader,
};

pub trait Barycentric {
    fn interpolated(&self, coords: Vec3, second: &Self, third: &Self) -> Self;
}

impl Barycentric for Vec4 {
    fn interpolated(&self, coords: Vec3, second: &Self, third: &Self) -> Self {
        *self * coords.x + *second * coords.y + *third * coords.z
    }
}

impl Barycentric for VertexOutput {
    fn interpolated(&self, coords: Vec3, second: &Self, third: &Self) -> Self {
        VertexOutput {
            clip_position: self.clip_position.interpolated(coords, &second.clip_position, &third.clip_position),
            color: self.color.interpolated(coords, &second.color, &third.color),
        }
    }
}

pub fn to_ndc(clip_position: Vec4) -> Vec2 {
    clip_position.xy() / clip_position.w
}

/// NDC has y pointing up, pixel rows grow downwards.
pub fn ndc_to_viewport(ndc: Vec2, resolution: Resolution) -> Vec2 {
    Vec2::new(
        (ndc.x + 1.0) * 0.5 * resolution.width as f32,
        (1.0 - ndc.y) * 0.5 * resolution.height as f32,
    )
}

pub fn viewport_to_ndc(pixel: Vec2, resolution: Resolution) -> Vec2 {
    Vec2::new(
        pixel.x / resolution.width as f32 * 2.0 - 1.0,
        1.0 - pixel.y / resolution.height as f32 * 2.0,
    )
}

fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b - a).perp_dot(p - a)
}

/// Weights of `p` relative to the triangle, or `None` when `p` lies outside it
/// or the triangle is degenerate. Either winding is accepted.
pub fn barycentric([a, b, c]: [Vec2; 3], p: Vec2) -> Option<Vec3> {
    let area = 2.0 * tint_gpu::signed_area(a, b, c);
    if area == 0.0 {
        return None;
    }
    let weights = Vec3::new(edge(b, c, p), edge(c, a, p), edge(a, b, p)) / area;
    (weights.min_element() >= 0.0).then_some(weights)
}

// No clipper, so any vertex with w <= 0 drops the whole triangle.
fn behind_eye(outputs: &[VertexOutput; 3]) -> bool {
    outputs.iter().any(|v| v.clip_position.w <= 0.0)
}

/// Runs the fragment stage for a single point given in normalized device
/// coordinates.
pub fn sample<S: Shader>(shader: &S, outputs: &[VertexOutput; 3], point: Vec2) -> Option<Vec4> {
    if behind_eye(outputs) {
        return None;
    }
    let weights = barycentric(outputs.map(|v| to_ndc(v.clip_position)), point)?;
    let [a, b, c] = outputs;
    Some(shader.fragment(a.interpolated(weights, b, c).color))
}

/// Shades every pixel whose center the triangle covers and returns how many
/// fragments were written.
pub fn rasterize<S: Shader>(shader: &S, outputs: &[VertexOutput; 3], frame: &mut Framebuffer, blend: Blend) -> u32 {
    if behind_eye(outputs) {
        debug!("tint::ren::raster - skipping triangle behind the eye");
        return 0;
    }

    let resolution = frame.resolution;
    let positions = outputs.map(|v| ndc_to_viewport(to_ndc(v.clip_position), resolution));
    let [a, b, c] = positions;
    let min = a.min(b).min(c).floor().max(Vec2::ZERO);
    let max = a
        .max(b)
        .max(c)
        .ceil()
        .min(Vec2::new(resolution.width as f32, resolution.height as f32));

    let mut shaded = 0;
    for y in min.y as u32..max.y as u32 {
        for x in min.x as u32..max.x as u32 {
            let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let Some(weights) = barycentric(positions, center) else {
                continue;
            };
            let [v0, v1, v2] = outputs;
            let varying = v0.interpolated(weights, v1, v2);
            frame.write(x, y, shader.fragment(varying.color), blend);
            shaded += 1;
        }
    }
    trace!("tint::ren::raster - {shaded} fragments in [{min}, {max})");
    shaded
}
