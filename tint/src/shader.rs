//! SPIR-V modules built from the crates under `shaders/`.

pub const TRIANGLE_SHADER: &[u8] = include_bytes!(env!("triangle.spv"));

pub const VERTEX_ENTRY_POINT: &str = "main_vs";
pub const FRAGMENT_ENTRY_POINT: &str = "main_fs";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_starts_with_spirv_magic() {
        assert!(TRIANGLE_SHADER.len() >= 20);
        assert_eq!(TRIANGLE_SHADER[..4], 0x0723_0203u32.to_le_bytes());
    }
}
