//! File system utilities.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes content to a file atomically using a temp file and rename.
///
/// An existing translation file is never left truncated or half-written:
/// the content lands in a temp file in the same directory (same filesystem,
/// so the rename is atomic) and replaces the target only on full success.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or renamed.
pub fn atomic_write(file_path: &Path, content: &str) -> Result<()> {
    let parent = file_path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = file_path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write {}", temp_path.display()))?;
    fs::rename(&temp_path, file_path)
        .with_context(|| format!("Failed to replace {}", file_path.display()))?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("strings.xml");

        atomic_write(&file_path, "<resources/>").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "<resources/>");
    }

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("strings.xml");

        fs::write(&file_path, "old").unwrap();
        atomic_write(&file_path, "new").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new");
    }

    #[test]
    fn test_atomic_write_no_temp_file_remains() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("strings.xml");

        atomic_write(&file_path, "content").unwrap();

        assert!(!temp_dir.path().join(".strings.xml.tmp").exists());
    }

    #[test]
    fn test_atomic_write_missing_directory_leaves_no_target() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("no-such-dir").join("strings.xml");

        assert!(atomic_write(&file_path, "content").is_err());
        assert!(!file_path.exists());
    }

    #[test]
    fn test_atomic_write_unicode_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("strings.xml");

        let content = "<resources>\n\t<string name=\"hi\">こんにちは 🌍</string>\n</resources>";
        atomic_write(&file_path, content).unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), content);
    }
}
