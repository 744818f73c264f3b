#![cfg_attr(target_arch = "spirv", no_std)]

pub use spirv_std::glam;

use spirv_std::glam::{Vec2, Vec4};

/// Number of vertices in the one triangle this crate describes.
pub const VERTEX_COUNT: u32 = 3;

/// Everything the vertex stage hands to the rasterizer.
#[cfg_attr(not(target_arch = "spirv"), derive(Debug, PartialEq))]
#[derive(Clone, Copy)]
#[repr(C)]
pub struct VertexOutput {
    pub clip_position: Vec4,
    pub color: Vec4,
}

// Indices past the last vertex fold back onto the triangle.
#[inline]
pub fn wrap_index(index: u32) -> u32 {
    index % VERTEX_COUNT
}

/// Clip-space position of vertex `index`.
///
/// 0 -> (0.5, -0.5), 1 -> (0.0, 0.5), 2 -> (-0.5, -0.5). Geometry is already in
/// normalized device range, so `w` is always 1.
pub fn position(index: u32) -> Vec4 {
    let i = wrap_index(index) as i32;
    let x = (1 - i) as f32 * 0.5;
    let y = ((i & 1) * 2 - 1) as f32 * 0.5;
    Vec4::new(x, y, 0.0, 1.0)
}

/// Flat color of vertex `index`.
pub fn color(index: u32) -> Vec4 {
    match wrap_index(index) {
        0 => Vec4::new(0.9, 0.3, 0.6, 1.0),
        1 => Vec4::new(0.9, 0.9, 0.9, 1.0),
        _ => Vec4::new(0.3, 0.5, 0.9, 1.0),
    }
}

/// Vertex stage.
pub fn vertex(index: u32) -> VertexOutput {
    VertexOutput {
        clip_position: position(index),
        color: color(index),
    }
}

/// Fragment stage. The rasterizer already did the blending.
#[inline]
pub fn fragment(color: Vec4) -> Vec4 {
    color
}

/// Signed area of the triangle `a b c`, positive for counter-clockwise winding.
pub fn signed_area(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    0.5 * (b - a).perp_dot(c - a)
}

#[cfg(not(target_arch = "spirv"))]
pub fn triangle() -> [VertexOutput; VERTEX_COUNT as usize] {
    [vertex(0), vertex(1), vertex(2)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glam::Vec4Swizzles;

    #[test]
    fn positions_are_fixed() {
        assert_eq!(position(0), Vec4::new(0.5, -0.5, 0.0, 1.0));
        assert_eq!(position(1), Vec4::new(0.0, 0.5, 0.0, 1.0));
        assert_eq!(position(2), Vec4::new(-0.5, -0.5, 0.0, 1.0));
    }

    #[test]
    fn colors_follow_table() {
        assert_eq!(color(0), Vec4::new(0.9, 0.3, 0.6, 1.0));
        assert_eq!(color(1), Vec4::new(0.9, 0.9, 0.9, 1.0));
        assert_eq!(color(2), Vec4::new(0.3, 0.5, 0.9, 1.0));
    }

    #[test]
    fn vertex_bundles_position_and_color() {
        for index in 0..VERTEX_COUNT {
            let output = vertex(index);
            assert_eq!(output.clip_position, position(index));
            assert_eq!(output.color, color(index));
        }
    }

    #[test]
    fn out_of_range_indices_wrap() {
        for index in 0..VERTEX_COUNT {
            assert_eq!(vertex(index + VERTEX_COUNT), vertex(index));
            assert_eq!(vertex(index + 7 * VERTEX_COUNT), vertex(index));
        }
        assert_eq!(vertex(u32::MAX), vertex(u32::MAX % VERTEX_COUNT));
    }

    #[test]
    fn triangle_is_not_degenerate() {
        let [a, b, c] = triangle().map(|v| v.clip_position.xy());
        let area = signed_area(a, b, c);
        assert_eq!(area, 0.5);
        assert_eq!(signed_area(a, c, b), -area);
    }

    #[test]
    fn fragment_is_identity() {
        let inputs = [
            Vec4::ZERO,
            Vec4::ONE,
            Vec4::new(0.7, 0.5666667, 0.8, 1.0),
            Vec4::new(-3.5, 1.0e-38, f32::MAX, f32::MIN_POSITIVE),
        ];
        for input in inputs {
            assert_eq!(fragment(input).to_array().map(f32::to_bits), input.to_array().map(f32::to_bits));
        }
    }

    #[test]
    fn stages_are_pure() {
        assert_eq!(triangle(), triangle());
    }
}
