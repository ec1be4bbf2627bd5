// SPDX-License-Identifier: MPL-2.0
//! Optional per-directory captions.
//!
//! `captions.toml` maps file names to caption text:
//!
//! ```toml
//! "harbour.jpg" = "Harbour at dawn"
//! ```

use std::collections::HashMap;
use std::path::Path;

pub const CAPTIONS_FILE: &str = "captions.toml";

/// Loads the captions of `directory`.
///
/// A missing file yields an empty map. An unreadable or malformed file is
/// logged and also yields an empty map, so a bad caption file never hides
/// the images themselves.
pub fn load_captions(directory: &Path) -> HashMap<String, String> {
    let path = directory.join(CAPTIONS_FILE);
    if !path.exists() {
        return HashMap::new();
    }

    let parsed = std::fs::read_to_string(&path)
        .map_err(crate::error::Error::from)
        .and_then(|content| {
            toml::from_str::<HashMap<String, String>>(&content).map_err(crate::error::Error::from)
        });

    match parsed {
        Ok(captions) => captions,
        Err(err) => {
            log::warn!("Ignoring captions in {}: {}", path.display(), err);
            HashMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_empty_map() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        assert!(load_captions(temp_dir.path()).is_empty());
    }

    #[test]
    fn reads_file_name_to_caption_pairs() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(
            temp_dir.path().join(CAPTIONS_FILE),
            "\"a.jpg\" = \"First\"\n\"b c.png\" = \"Second\"\n",
        )
        .expect("write");

        let captions = load_captions(temp_dir.path());

        assert_eq!(captions.len(), 2);
        assert_eq!(captions.get("b c.png").map(String::as_str), Some("Second"));
    }

    #[test]
    fn malformed_file_yields_empty_map() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CAPTIONS_FILE), "a.jpg = [1, 2]").expect("write");

        assert!(load_captions(temp_dir.path()).is_empty());
    }
}
