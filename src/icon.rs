// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the embedded project SVG into an RGBA icon for the title bar.

use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/iced_gallery.svg");

/// Edge length of the rasterized icon.
const ICON_SIZE: u32 = 128;

/// Rasterize the embedded SVG icon to a square RGBA buffer.
/// Returns `None` if parsing or rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    let tree = match usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()) {
        Ok(tree) => tree,
        Err(err) => {
            log::warn!("Window icon could not be parsed: {}", err);
            return None;
        }
    };

    let orig_size = tree.size();
    let scale_x = ICON_SIZE as f32 / orig_size.width();
    let scale_y = ICON_SIZE as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.data().to_vec(), ICON_SIZE, ICON_SIZE).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_svg_rasterizes() {
        assert!(load_window_icon().is_some());
    }
}
