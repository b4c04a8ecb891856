//! Image discovery in source directories.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Supported image extensions, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "png"];

/// Check whether a filename carries one of the supported extensions.
pub fn is_supported(name: &str) -> bool {
    let lower = name.to_lowercase();
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")))
}

/// Strip the last extension from a filename.
///
/// A leading dot is not treated as an extension separator, so `.png` keeps
/// its whole name as the basename.
pub fn basename(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) if name[..pos].trim_start_matches('.').is_empty() => name,
        Some(pos) => &name[..pos],
        None => name,
    }
}

/// List supported image files in a directory, sorted by filename.
///
/// The scan is a single level deep. Subdirectories and names that are not
/// valid UTF-8 are skipped, so a directory named `frames.png` is never
/// counted or paired. A plain `listdir`-style scan would include it.
pub fn list_image_files(dir: &Path) -> Result<Vec<String>> {
    let unreadable = |source| Error::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let path = entry.path();
        if path.is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            log::debug!("Skipping non UTF-8 filename in {}", dir.display());
            continue;
        };

        if is_supported(&name) {
            files.push(name);
        }
    }

    files.sort();
    Ok(files)
}

/// Basename to filename index built from a sorted file list.
#[derive(Debug, Clone, Default)]
pub struct BasenameMap {
    /// Winning filename for each basename.
    pub entries: BTreeMap<String, String>,
    /// Filenames replaced by a later file with the same basename.
    pub shadowed: Vec<String>,
}

impl BasenameMap {
    /// Build the map. When two files share a basename the later one in
    /// `files` replaces the earlier.
    pub fn build(files: &[String]) -> Self {
        let mut map = Self::default();
        for file in files {
            if let Some(previous) = map.entries.insert(basename(file).to_string(), file.clone()) {
                map.shadowed.push(previous);
            }
        }
        map
    }

    /// Look up the filename for a basename.
    pub fn get(&self, basename: &str) -> Option<&str> {
        self.entries.get(basename).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_is_supported() {
        assert!(is_supported("a.jpg"));
        assert!(is_supported("a.PNG"));
        assert!(is_supported("frame.0001.Jpg"));
        assert!(!is_supported("a.jpeg"));
        assert!(!is_supported("a.gif"));
        assert!(!is_supported("notes.txt"));
        assert!(!is_supported("png"));
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("img001.jpg"), "img001");
        assert_eq!(basename("frame.0001.png"), "frame.0001");
        assert_eq!(basename(".png"), ".png");
        assert_eq!(basename("noext"), "noext");
    }

    #[test]
    fn test_list_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.png", "a.JPG", "b.gif", "readme.txt", "b.jpg"] {
            touch(dir.path(), name);
        }
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let files = list_image_files(dir.path()).unwrap();
        assert_eq!(files, vec!["a.JPG", "b.jpg", "c.png"]);
    }

    #[test]
    fn test_list_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = list_image_files(&missing).unwrap_err();
        assert!(matches!(err, Error::DirectoryUnreadable { ref path, .. } if *path == missing));
    }

    #[test]
    fn test_basename_map_last_write_wins() {
        let files = vec!["a.jpg".to_string(), "a.png".to_string(), "b.png".to_string()];
        let map = BasenameMap::build(&files);
        assert_eq!(map.get("a"), Some("a.png"));
        assert_eq!(map.get("b"), Some("b.png"));
        assert_eq!(map.shadowed, vec!["a.jpg"]);
    }
}
