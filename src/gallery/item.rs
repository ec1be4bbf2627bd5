// SPDX-License-Identifier: MPL-2.0
//! Image references captured from the grid when the lightbox opens.

/// One navigable image: where to load it from and how to label it.
///
/// Captured in grid order each time the lightbox opens and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    source: String,
    alt: String,
    caption: Option<String>,
}

impl ImageRef {
    /// Creates a reference without a caption.
    pub fn new(source: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt: alt.into(),
            caption: None,
        }
    }

    /// Attaches a caption. Blank captions are treated as missing.
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        let caption = caption.into();
        self.caption = if caption.trim().is_empty() {
            None
        } else {
            Some(caption)
        };
        self
    }

    /// Path or URL of the full-size image.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Alternative text describing the image.
    #[must_use]
    pub fn alt(&self) -> &str {
        &self.alt
    }

    /// Caption text, or an empty string when the image has none.
    #[must_use]
    pub fn caption(&self) -> &str {
        self.caption.as_deref().unwrap_or("")
    }

    #[must_use]
    pub fn has_caption(&self) -> bool {
        self.caption.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_caption_displays_as_empty_string() {
        let item = ImageRef::new("a.jpg", "a");
        assert_eq!(item.caption(), "");
        assert!(!item.has_caption());
    }

    #[test]
    fn blank_caption_is_treated_as_missing() {
        let item = ImageRef::new("a.jpg", "a").with_caption("   ");
        assert!(!item.has_caption());
    }

    #[test]
    fn caption_is_kept_verbatim() {
        let item = ImageRef::new("sunset.jpg", "sunset.jpg").with_caption("Sunset over the bay");
        assert_eq!(item.source(), "sunset.jpg");
        assert_eq!(item.alt(), "sunset.jpg");
        assert_eq!(item.caption(), "Sunset over the bay");
    }
}
