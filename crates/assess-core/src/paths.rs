use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const ASSESS_DIR: &str = ".assess";
pub const CONFIG_FILE: &str = ".assess/config.yaml";
pub const WORKING_PROFILE_FILE: &str = ".assess/profile.json";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn assess_dir(root: &Path) -> PathBuf {
    root.join(ASSESS_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn working_profile_path(root: &Path) -> PathBuf {
    root.join(WORKING_PROFILE_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/org");
        assert_eq!(
            config_path(root),
            PathBuf::from("/tmp/org/.assess/config.yaml")
        );
        assert_eq!(
            working_profile_path(root),
            PathBuf::from("/tmp/org/.assess/profile.json")
        );
    }
}
