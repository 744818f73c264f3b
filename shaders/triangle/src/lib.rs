#![cfg_attr(target_arch = "spirv", no_std)]

use spirv_std::{glam::Vec4, spirv};

#[spirv(vertex)]
pub fn main_vs(
    #[spirv(vertex_index)] vertex_index: u32,
    #[spirv(position)] out_pos: &mut Vec4,
    out_color: &mut Vec4,
) {
    let output = tint_gpu::vertex(vertex_index);
    *out_pos = output.clip_position;
    *out_color = output.color;
}

#[spirv(fragment)]
pub fn main_fs(in_color: Vec4, output: &mut Vec4) {
    *output = tint_gpu::fragment(in_color);
}
