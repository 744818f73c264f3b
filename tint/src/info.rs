pub struct Info {
    pub app_name: String,
    pub app_version: u32,
    pub engine_name: &'static str,
    pub engine_version: u32,
}

pub fn new(app_name: String, app_version: u32) -> Info {
    Info {
        app_name,
        app_version,
        engine_name: "tint",
        engine_version: make_version(0, 1, 0, 0),
    }
}

pub const fn make_version(variant: u32, major: u32, minor: u32, patch: u32) -> u32 {
    (variant << 29) | (major << 22) | (minor << 12) | patch
}

pub const fn split_version(version: u32) -> (u32, u32, u32) {
    ((version >> 22) & 0x7f, (version >> 12) & 0x3ff, version & 0xfff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_packs_like_vulkan() {
        let version = make_version(0, 1, 3, 7);
        assert_eq!(version, (1 << 22) | (3 << 12) | 7);
        assert_eq!(split_version(version), (1, 3, 7));
    }

    #[test]
    fn engine_is_tint() {
        let info = new(String::from("viewer"), make_version(0, 2, 0, 0));
        assert_eq!(info.engine_name, "tint");
        assert_eq!(info.app_name, "viewer");
        assert_eq!(split_version(info.app_version), (2, 0, 0));
    }
}
