//! Shared fixtures for unit tests.

use std::ops::Deref;
use std::path::{Path, PathBuf};

/// Scratch directory under the system temp dir, removed on drop.
///
/// Unique per test name and process. Keep the value alive for as long as
/// anything reads from the directory.
pub(crate) struct Fixture {
    path: PathBuf,
}

impl Fixture {
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl Deref for Fixture {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.path
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// Fresh, empty fixture directory.
pub(crate) fn fixture_dir(name: &str) -> Fixture {
    let path = std::env::temp_dir().join(format!("horsefall-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&path);
    std::fs::create_dir_all(&path).unwrap();
    Fixture { path }
}

/// Writes a solid opaque PNG of the given size at `dir/rel`.
pub(crate) fn write_png(dir: &Path, rel: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    image::RgbaImage::from_pixel(width, height, image::Rgba([139, 90, 43, 255]))
        .save(&path)
        .unwrap();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_is_removed_on_drop() {
        let dir = fixture_dir("fixture-drop");
        write_png(&dir, "nested/a.png", 1, 1);
        let path = dir.path().to_path_buf();
        assert!(path.join("nested/a.png").is_file());

        drop(dir);

        assert!(!path.exists());
    }
}
