//! XDG-style path utilities for the configuration directory.

use std::path::PathBuf;

/// Returns the configuration directory for slx.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/slx` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/slx` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME").map_or_else(
        |_| home_dir().join(".config").join("slx"),
        |xdg| PathBuf::from(xdg).join("slx"),
    )
}

/// Returns the user's home directory.
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
#[allow(clippy::expect_used)]
fn home_dir() -> PathBuf {
    dirs::home_dir().expect("Failed to determine home directory")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // One test so the XDG_CONFIG_HOME mutations cannot race each other.
    #[test]
    fn test_config_dir_resolution() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();

        unsafe { std::env::remove_var("XDG_CONFIG_HOME") };
        assert!(config_dir().ends_with(".config/slx"));

        unsafe { std::env::set_var("XDG_CONFIG_HOME", "/custom/config") };
        assert_eq!(config_dir(), PathBuf::from("/custom/config/slx"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        } else {
            unsafe { std::env::remove_var("XDG_CONFIG_HOME") };
        }
    }
}
