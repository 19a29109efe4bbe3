// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the
//! lightbox.
//!
//! The `App` struct owns the photo collection, the viewer state machine,
//! and the fetched image handles, and translates messages into side effects
//! like the one-shot collection fetch or the download pipeline. All state
//! mutation happens in the update loop; the views are pure reactions.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::{ApiClient, DEFAULT_BASE_URL};
use crate::collection::{LoadState, PhotoCollection};
use crate::config::{self, ThemeChoice};
use crate::viewer::Lightbox;
use iced::widget::image;
use iced::{window, Task, Theme};
use std::collections::HashMap;

/// Event key loaded when neither the CLI nor the config names one.
pub const DEFAULT_EVENT_KEY: &str = "20250329";

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Root Iced application state.
pub struct App {
    /// Shared HTTP client for the photo service.
    api: ApiClient,
    /// Event key shown in the title and used for the collection fetch.
    event_key: String,
    /// The loaded photo collection (empty until the fetch completes).
    collection: PhotoCollection,
    /// Whether the one-shot collection fetch is still outstanding.
    is_loading: bool,
    /// Fetched tile images, keyed by collection index.
    images: HashMap<usize, image::Handle>,
    /// The viewer state machine.
    lightbox: Lightbox,
    /// In-flight guard for the download pipeline.
    is_downloading: bool,
    /// Current window width, for the gallery breakpoints.
    viewport_width: f32,
    /// Chrome theme from the config file.
    theme_choice: ThemeChoice,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("event_key", &self.event_key)
            .field("photos", &self.collection.len())
            .field("lightbox", &self.lightbox)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
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
    /// Initializes application state and kicks off the one-shot collection
    /// fetch for the configured event key.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load(flags.config_dir.as_deref());
        if let Some(warning) = config_warning {
            log::warn!("{warning}");
        }

        let base_url = flags
            .api_base
            .or(config.api.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let event_key = flags
            .event_key
            .or(config.api.event_key)
            .unwrap_or_else(|| DEFAULT_EVENT_KEY.to_string());

        // Without an HTTP client the application has nothing to show.
        let api = ApiClient::new(base_url).expect("HTTP client should build");

        let app = App {
            api: api.clone(),
            event_key: event_key.clone(),
            collection: PhotoCollection::new(),
            is_loading: true,
            images: HashMap::new(),
            lightbox: Lightbox::new(),
            is_downloading: false,
            viewport_width: WINDOW_DEFAULT_WIDTH as f32,
            theme_choice: config.display.theme.unwrap_or_default(),
        };

        let fetch = Task::perform(
            async move { api.fetch_event_photos(&event_key).await },
            Message::CollectionLoaded,
        );

        (app, fetch)
    }

    /// Window title carrying the event key.
    fn title(&self) -> String {
        format!("Photowall - {}", self.event_key)
    }

    /// Chrome theme from the config file.
    fn theme(&self) -> Theme {
        match self.theme_choice {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }

    /// Derives the gallery presentation state.
    fn load_state(&self) -> LoadState {
        LoadState::derive(self.is_loading, &self.collection)
    }
}

#[cfg(test)]
pub(crate) fn test_app() -> App {
    App {
        api: ApiClient::new("https://photos.invalid/v1").expect("HTTP client should build"),
        event_key: DEFAULT_EVENT_KEY.to_string(),
        collection: PhotoCollection::new(),
        is_loading: true,
        images: HashMap::new(),
        lightbox: Lightbox::new(),
        is_downloading: false,
        viewport_width: WINDOW_DEFAULT_WIDTH as f32,
        theme_choice: ThemeChoice::Dark,
    }
}
