// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::ImageRef;
use crate::ui::{grid_view, lightbox};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Grid(grid_view::Message),
    Lightbox(lightbox::Message),
    /// Result of the asynchronous directory scan started at boot.
    DirectoryScanned(Result<Vec<ImageRef>, Error>),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Directory whose images are shown in the grid; the working directory
    /// when absent.
    pub directory: Option<String>,
}
