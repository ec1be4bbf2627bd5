// SPDX-License-Identifier: MPL-2.0
//! Directory scanner feeding the thumbnail grid.
//!
//! Lists the supported images of a single directory, sorts them and attaches
//! the optional captions from `captions.toml`. The resulting order is the
//! navigable sequence of the lightbox.

pub mod captions;

use crate::config::SortOrder;
use crate::error::{Error, Result};
use crate::gallery::ImageRef;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// File extensions shown in the grid (compared case-insensitively).
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "ico", "tiff", "tif",
];

/// Checks if a file has a supported image extension.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Scans `directory` for images and returns them in grid order.
///
/// Subdirectories are not visited. Returns [`Error::Scan`] if the directory
/// cannot be listed.
pub fn scan_directory(directory: &Path, sort_order: SortOrder) -> Result<Vec<ImageRef>> {
    let entries = std::fs::read_dir(directory)
        .map_err(|err| Error::Scan(format!("{}: {}", directory.display(), err)))?;

    let mut image_files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            image_files.push(path);
        }
    }

    sort_image_files(&mut image_files, sort_order);

    let captions = captions::load_captions(directory);
    let items = image_files
        .into_iter()
        .map(|path| {
            let alt = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let item = ImageRef::new(path.to_string_lossy(), alt.clone());
            match captions.get(&alt) {
                Some(caption) => item.with_caption(caption.clone()),
                None => item,
            }
        })
        .collect::<Vec<_>>();

    log::info!("Found {} image(s) in {}", items.len(), directory.display());
    Ok(items)
}

/// Runs [`scan_directory`] on the blocking pool so a `Task` can await it
/// without stalling the UI executor.
pub async fn scan_directory_async(
    directory: PathBuf,
    sort_order: SortOrder,
) -> Result<Vec<ImageRef>> {
    tokio::task::spawn_blocking(move || scan_directory(&directory, sort_order))
        .await
        .map_err(|e| Error::Scan(e.to_string()))?
}

fn modified_time(path: &Path) -> SystemTime {
    path.metadata()
        .and_then(|m| m.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

/// Sorts image paths; ties on modification time fall back to the file name.
fn sort_image_files(image_files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            image_files.sort_by_cached_key(|path| {
                (modified_time(path), path.file_name().map(|n| n.to_os_string()))
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::tempdir;

    fn create_test_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    fn alts(items: &[ImageRef]) -> Vec<&str> {
        items.iter().map(ImageRef::alt).collect()
    }

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(is_supported_image(Path::new("photo.JPG")));
        assert!(is_supported_image(Path::new("scan.tif")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }

    #[test]
    fn scan_directory_skips_other_files_and_subdirectories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "a.jpg");
        create_test_image(temp_dir.path(), "b.png");
        create_test_image(temp_dir.path(), "readme.txt");
        fs::create_dir(temp_dir.path().join("nested.jpg")).expect("failed to create dir");

        let items = scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(alts(&items), vec!["a.jpg", "b.png"]);
    }

    #[test]
    fn scan_directory_sorts_alphabetically() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "c.jpg");
        create_test_image(temp_dir.path(), "a.jpg");
        let img_b = create_test_image(temp_dir.path(), "b.gif");

        let items = scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(alts(&items), vec!["a.jpg", "b.gif", "c.jpg"]);
        assert_eq!(items[1].source(), img_b.to_string_lossy());
    }

    #[test]
    fn scan_directory_sorts_by_modified_date() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let newest = create_test_image(temp_dir.path(), "a.jpg");
        let oldest = create_test_image(temp_dir.path(), "b.jpg");

        let now = SystemTime::now();
        fs::File::options()
            .write(true)
            .open(&oldest)
            .and_then(|f| f.set_modified(now - Duration::from_secs(3600)))
            .expect("failed to set mtime");
        fs::File::options()
            .write(true)
            .open(&newest)
            .and_then(|f| f.set_modified(now))
            .expect("failed to set mtime");

        let items = scan_directory(temp_dir.path(), SortOrder::ModifiedDate)
            .expect("failed to scan directory");

        assert_eq!(alts(&items), vec!["b.jpg", "a.jpg"]);
    }

    #[test]
    fn scan_directory_attaches_captions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "a.jpg");
        create_test_image(temp_dir.path(), "b.jpg");
        fs::write(
            temp_dir.path().join(captions::CAPTIONS_FILE),
            "\"a.jpg\" = \"Harbour at dawn\"\n",
        )
        .expect("failed to write captions");

        let items = scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(items[0].caption(), "Harbour at dawn");
        assert!(!items[1].has_caption());
    }

    #[test]
    fn scan_directory_of_missing_path_is_a_scan_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("missing");

        let result = scan_directory(&missing, SortOrder::Alphabetical);

        assert!(matches!(result, Err(Error::Scan(_))));
    }

    #[test]
    fn empty_directory_yields_no_items() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let items = scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn async_scan_runs_on_blocking_pool_and_matches_sync_scan() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "b.png");
        create_test_image(temp_dir.path(), "a.jpg");

        let items = scan_directory_async(temp_dir.path().to_path_buf(), SortOrder::Alphabetical)
            .await
            .expect("failed to scan directory");

        assert_eq!(alts(&items), vec!["a.jpg", "b.png"]);
    }

    #[tokio::test]
    async fn async_scan_of_missing_path_is_a_scan_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let result =
            scan_directory_async(temp_dir.path().join("missing"), SortOrder::Alphabetical).await;

        assert!(matches!(result, Err(Error::Scan(_))));
    }
}
