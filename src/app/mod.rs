// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the grid and the lightbox.
//!
//! The `App` struct owns the scanned images, the lightbox component and the
//! scroll lock they share, and translates messages into runtime tasks.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, GridConfig};
use crate::error::Error;
use crate::gallery::{ImageRef, ScrollLock};
use crate::grid;
use crate::i18n::fluent::I18n;
use crate::ui::{grid_view, lightbox};
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// Contents of the grid area.
#[derive(Debug, Clone)]
pub enum Gallery {
    NoDirectory,
    Loading,
    Ready(Vec<ImageRef>),
    Failed(Error),
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    grid_config: GridConfig,
    directory: Option<PathBuf>,
    gallery: Gallery,
    scroll_lock: ScrollLock,
    lightbox: lightbox::State,
    /// i18n key of a startup warning shown above the grid.
    warning: Option<String>,
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and starts the directory scan, if any.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let sort_order = config.grid.sort_order.unwrap_or_default();

        let scroll_lock = ScrollLock::new();
        let directory = flags
            .directory
            .map(PathBuf::from)
            .or_else(|| std::env::current_dir().ok());
        let mut app = App {
            i18n,
            grid_config: config.grid,
            directory: directory.clone(),
            gallery: Gallery::NoDirectory,
            lightbox: lightbox::State::new(scroll_lock.clone()),
            scroll_lock,
            warning,
        };

        let task = match directory {
            Some(directory) => {
                log::info!("Scanning {}", directory.display());
                app.gallery = Gallery::Loading;
                Task::perform(
                    grid::scan_directory_async(directory, sort_order),
                    Message::DirectoryScanned,
                )
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let directory_name = self
            .directory
            .as_deref()
            .and_then(|dir| dir.file_name())
            .map(|name| name.to_string_lossy().into_owned());

        match directory_name {
            Some(name) => self
                .i18n
                .tr_with_args("window-title-with-directory", &[("directory", name.as_str())]),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.lightbox.is_open())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Grid(grid_view::Message::ThumbnailPressed(index)) => match &self.gallery {
                Gallery::Ready(items) => self
                    .lightbox
                    .open(index, items.clone())
                    .map(Message::Lightbox),
                _ => Task::none(),
            },
            Message::Lightbox(message) => self.lightbox.update(message).map(Message::Lightbox),
            Message::DirectoryScanned(Ok(items)) => {
                self.gallery = Gallery::Ready(items);
                Task::none()
            }
            Message::DirectoryScanned(Err(err)) => {
                log::error!("Directory scan failed: {}", err);
                self.gallery = Gallery::Failed(err);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            grid_config: &self.grid_config,
            scroll_lock: &self.scroll_lock,
            lightbox: &self.lightbox,
            warning: self.warning.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::Phase;

    fn app_with(items: Vec<ImageRef>) -> App {
        let scroll_lock = ScrollLock::new();
        App {
            i18n: I18n::default(),
            grid_config: GridConfig::default(),
            directory: Some(PathBuf::from("/photos/holidays")),
            gallery: Gallery::Ready(items),
            lightbox: lightbox::State::new(scroll_lock.clone()),
            scroll_lock,
            warning: None,
        }
    }

    fn items(count: usize) -> Vec<ImageRef> {
        (0..count)
            .map(|i| ImageRef::new(format!("img-{i}.jpg"), format!("img-{i}.jpg")))
            .collect()
    }

    #[test]
    fn thumbnail_click_opens_lightbox_and_locks_scrolling() {
        let mut app = app_with(items(3));

        let _ = app.update(Message::Grid(grid_view::Message::ThumbnailPressed(2)));

        assert!(app.lightbox.is_open());
        assert!(app.scroll_lock.is_engaged());
        assert_eq!(app.lightbox.lightbox().current_index(), Some(2));
        assert_eq!(app.lightbox.lightbox().phase(), Phase::Entering);
    }

    #[test]
    fn closing_releases_scroll_lock() {
        let mut app = app_with(items(3));
        let _ = app.update(Message::Grid(grid_view::Message::ThumbnailPressed(0)));

        let _ = app.update(Message::Lightbox(lightbox::Message::ClosePressed));

        assert!(!app.lightbox.is_open());
        assert!(!app.scroll_lock.is_engaged());
    }

    #[test]
    fn thumbnail_click_before_scan_completes_is_ignored() {
        let mut app = app_with(Vec::new());
        app.gallery = Gallery::Loading;

        let _ = app.update(Message::Grid(grid_view::Message::ThumbnailPressed(0)));

        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn scan_result_replaces_loading_state() {
        let mut app = app_with(Vec::new());
        app.gallery = Gallery::Loading;

        let _ = app.update(Message::DirectoryScanned(Ok(items(2))));
        assert!(matches!(&app.gallery, Gallery::Ready(items) if items.len() == 2));

        let _ = app.update(Message::DirectoryScanned(Err(Error::Scan("gone".into()))));
        assert!(matches!(app.gallery, Gallery::Failed(Error::Scan(_))));
    }

    #[test]
    fn title_includes_directory_name() {
        let app = app_with(Vec::new());
        let title = app.title();
        assert!(title.contains("holidays"));
    }

    #[test]
    fn title_without_directory_is_app_name() {
        let mut app = app_with(Vec::new());
        app.directory = None;
        assert_eq!(app.title(), app.i18n.tr("window-title"));
    }
}
