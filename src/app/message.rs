// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::FetchError;
use crate::collection::PhotoPayload;
use crate::download::DownloadOutcome;
use crate::ui::{gallery, lightbox};
use iced::widget::image;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A gallery tile was activated.
    Gallery(gallery::Message),
    /// A lightbox control was activated (pointer or keyboard).
    Lightbox(lightbox::Message),
    /// The one-shot collection fetch finished.
    CollectionLoaded(Result<PhotoPayload, FetchError>),
    /// A tile image fetch finished.
    PhotoFetched {
        index: usize,
        result: Result<image::Handle, FetchError>,
    },
    /// The download pipeline finished, on any path.
    DownloadCompleted(DownloadOutcome),
    /// The window was resized; drives the gallery breakpoints.
    ViewportResized(iced::Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Event key to load; falls back to the config file, then the default.
    pub event_key: Option<String>,
    /// Photo service base URL override.
    pub api_base: Option<String>,
    /// Config directory override (for settings.toml).
    /// Takes precedence over the `PHOTOWALL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
