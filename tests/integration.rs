// SPDX-License-Identifier: MPL-2.0
use iced_gallery::config::{self, Config, SortOrder};
use iced_gallery::gallery::{Lightbox, ScrollLock};
use iced_gallery::grid;
use iced_gallery::i18n::fluent::I18n;
use std::fs;
use std::time::Instant;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    fs::write(&config_path, "[general]\nlanguage = \"en-US\"\n")
        .expect("Failed to write initial config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    fs::write(&config_path, "[general]\nlanguage = \"fr\"\n")
        .expect("Failed to write french config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("lightbox-next"), "Image suivante");
}

#[test]
fn cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &config);

    assert_eq!(i18n.tr("lightbox-close"), "Close");
}

#[test]
fn scanned_directory_opens_in_lightbox_with_captions() {
    let dir = tempdir().expect("Failed to create temporary directory");
    for name in ["b.png", "a.jpg", "c.webp", "notes.md"] {
        fs::write(dir.path().join(name), b"fake image data").expect("Failed to write file");
    }
    fs::write(
        dir.path().join("captions.toml"),
        "\"c.webp\" = \"Last one\"\n",
    )
    .expect("Failed to write captions");

    let items =
        grid::scan_directory(dir.path(), SortOrder::Alphabetical).expect("Failed to scan");
    assert_eq!(items.len(), 3);

    let mut lightbox = Lightbox::new(ScrollLock::new());
    lightbox.open(99, items, Instant::now());

    let current = lightbox.current_item().expect("an image is shown");
    assert_eq!(current.alt(), "c.webp");
    assert_eq!(current.caption(), "Last one");
    assert_eq!(
        lightbox.counter().map(|counter| counter.to_string()),
        Some("3 / 3".to_string())
    );
}

#[test]
fn grid_settings_are_read_from_config_directory() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[grid]\ncolumns = 5\nsort_order = \"modified-date\"\n",
    )
    .expect("Failed to write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded.grid.effective_columns(), 5);
    assert_eq!(loaded.grid.sort_order, Some(SortOrder::ModifiedDate));
}
