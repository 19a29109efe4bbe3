// SPDX-License-Identifier: MPL-2.0
//! The single update entrypoint: routes every message to the collection,
//! the viewer state machine, or the download pipeline.

use super::{App, Message};
use crate::api::{ApiClient, FetchError, FetchResult};
use crate::collection::{PhotoCollection, PhotoPayload};
use crate::download::{self, DownloadOutcome};
use crate::ui::{gallery, lightbox};
use iced::widget::image;
use iced::Task;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => self.on_gallery(message),
            Message::Lightbox(message) => self.on_lightbox(message),
            Message::CollectionLoaded(result) => self.on_collection_loaded(result),
            Message::PhotoFetched { index, result } => {
                self.on_photo_fetched(index, result);
                Task::none()
            }
            Message::DownloadCompleted(outcome) => {
                self.on_download_completed(outcome);
                Task::none()
            }
            Message::ViewportResized(size) => {
                self.viewport_width = size.width;
                Task::none()
            }
        }
    }

    fn on_gallery(&mut self, message: gallery::Message) -> Task<Message> {
        match message {
            gallery::Message::TileActivated(index) => {
                self.lightbox.open(index, self.collection.len());
            }
        }
        Task::none()
    }

    fn on_lightbox(&mut self, message: lightbox::Message) -> Task<Message> {
        match message {
            lightbox::Message::CloseRequested => self.lightbox.close(),
            lightbox::Message::NextRequested => self.lightbox.next(self.collection.len()),
            lightbox::Message::PreviousRequested => self.lightbox.prev(),
            lightbox::Message::ZoomInRequested => self.lightbox.zoom_in(),
            lightbox::Message::ZoomOutRequested => self.lightbox.zoom_out(),
            lightbox::Message::DownloadRequested => return self.start_download(),
        }
        Task::none()
    }

    /// Handles the one-shot collection fetch result.
    ///
    /// Failures degrade to an empty collection in loaded state; the gallery
    /// then shows the "no photos found" notice instead of an error.
    fn on_collection_loaded(&mut self, result: FetchResult<PhotoPayload>) -> Task<Message> {
        self.is_loading = false;

        match result {
            Ok(payload) => {
                self.collection = PhotoCollection::from_payload(payload);
                log::info!(
                    "loaded {} photos for event {}",
                    self.collection.len(),
                    self.event_key
                );
                self.fetch_tile_images()
            }
            Err(err) => {
                log::error!("collection fetch for event {} failed: {err}", self.event_key);
                self.collection = PhotoCollection::new();
                Task::none()
            }
        }
    }

    /// Spawns one image fetch per collection index.
    fn fetch_tile_images(&self) -> Task<Message> {
        let fetches = self.collection.iter().enumerate().map(|(index, locator)| {
            let api = self.api.clone();
            let locator = locator.to_string();
            Task::perform(fetch_tile(api, locator), move |result| {
                Message::PhotoFetched { index, result }
            })
        });

        Task::batch(fetches)
    }

    fn on_photo_fetched(&mut self, index: usize, result: FetchResult<image::Handle>) {
        match result {
            Ok(handle) => {
                // A handle for an index the current collection does not know
                // is a stale completion; dropping it is the whole cleanup.
                if index < self.collection.len() {
                    self.images.insert(index, handle);
                }
            }
            Err(err) => {
                log::warn!("image fetch for photo {} failed: {err}", index + 1);
            }
        }
    }

    /// Entry point of the download pipeline, guarded so only one download
    /// runs at a time: a second request while one is in flight is dropped,
    /// not queued.
    fn start_download(&mut self) -> Task<Message> {
        if self.is_downloading {
            log::debug!("download already in flight, ignoring request");
            return Task::none();
        }

        let Some(index) = self.lightbox.current_index() else {
            return Task::none();
        };
        let Some(locator) = self.collection.get(index) else {
            return Task::none();
        };

        self.is_downloading = true;
        let api = self.api.clone();
        let locator = locator.to_string();

        Task::perform(
            download::save_photo(api, locator, index),
            Message::DownloadCompleted,
        )
    }

    /// Clears the in-flight guard on every pipeline outcome.
    fn on_download_completed(&mut self, outcome: DownloadOutcome) {
        self.is_downloading = false;

        match outcome {
            DownloadOutcome::Saved(path) => {
                log::info!("photo saved to {}", path.display());
            }
            DownloadOutcome::Cancelled => {
                log::debug!("save dialog dismissed");
            }
            DownloadOutcome::OpenedInBrowser => {
                log::info!("photo opened in the browser instead");
            }
            DownloadOutcome::FallbackFailed => {
                log::error!("download and browser fallback both failed");
            }
        }
    }
}

/// Fetches one tile image and wraps the bytes into an Iced handle.
async fn fetch_tile(api: ApiClient, locator: String) -> Result<image::Handle, FetchError> {
    let bytes = api.fetch_image_bytes(&locator).await?;
    Ok(image::Handle::from_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_app;
    use crate::collection::{LoadState, PhotoPayload};
    use std::path::PathBuf;

    fn payload(json: &str) -> PhotoPayload {
        serde_json::from_str(json).expect("payload should decode")
    }

    fn loaded_app(json: &str) -> App {
        let mut app = test_app();
        let _ = app.update(Message::CollectionLoaded(Ok(payload(json))));
        app
    }

    #[test]
    fn collection_load_normalizes_and_finishes_loading() {
        let app = loaded_app(r#"["a","b","c"]"#);

        assert_eq!(app.load_state(), LoadState::Loaded);
        assert_eq!(app.collection.get(0), Some("c"));
        assert_eq!(app.collection.len(), 3);
    }

    #[test]
    fn failed_collection_load_degrades_to_empty() {
        let mut app = test_app();
        let _ = app.update(Message::CollectionLoaded(Err(FetchError::Status(500))));

        assert_eq!(app.load_state(), LoadState::Empty);
        assert!(app.collection.is_empty());
    }

    #[test]
    fn tile_activation_opens_lightbox_at_index() {
        let mut app = loaded_app(r#"["a","b","c"]"#);
        let _ = app.update(Message::Gallery(gallery::Message::TileActivated(2)));

        assert_eq!(app.lightbox.current_index(), Some(2));
    }

    #[test]
    fn lightbox_messages_drive_the_machine() {
        let mut app = loaded_app(r#"["a","b","c"]"#);
        let _ = app.update(Message::Gallery(gallery::Message::TileActivated(0)));

        let _ = app.update(Message::Lightbox(lightbox::Message::NextRequested));
        assert_eq!(app.lightbox.current_index(), Some(1));

        let _ = app.update(Message::Lightbox(lightbox::Message::PreviousRequested));
        assert_eq!(app.lightbox.current_index(), Some(0));

        let _ = app.update(Message::Lightbox(lightbox::Message::CloseRequested));
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn download_request_sets_the_in_flight_guard() {
        let mut app = loaded_app(r#"["https://x/y/a.png"]"#);
        let _ = app.update(Message::Gallery(gallery::Message::TileActivated(0)));

        let _ = app.update(Message::Lightbox(lightbox::Message::DownloadRequested));
        assert!(app.is_downloading);
    }

    #[test]
    fn second_download_request_is_dropped_while_in_flight() {
        let mut app = loaded_app(r#"["https://x/y/a.png"]"#);
        let _ = app.update(Message::Gallery(gallery::Message::TileActivated(0)));

        let _ = app.update(Message::Lightbox(lightbox::Message::DownloadRequested));
        let _ = app.update(Message::Lightbox(lightbox::Message::DownloadRequested));

        // The guard stays set until the completion message clears it.
        assert!(app.is_downloading);
    }

    #[test]
    fn download_request_without_open_lightbox_is_ignored() {
        let mut app = loaded_app(r#"["https://x/y/a.png"]"#);
        let _ = app.update(Message::Lightbox(lightbox::Message::DownloadRequested));

        assert!(!app.is_downloading);
    }

    #[test]
    fn completion_clears_the_guard_on_every_outcome() {
        for outcome in [
            DownloadOutcome::Saved(PathBuf::from("/tmp/a.png")),
            DownloadOutcome::Cancelled,
            DownloadOutcome::OpenedInBrowser,
            DownloadOutcome::FallbackFailed,
        ] {
            let mut app = loaded_app(r#"["https://x/y/a.png"]"#);
            let _ = app.update(Message::Gallery(gallery::Message::TileActivated(0)));
            let _ = app.update(Message::Lightbox(lightbox::Message::DownloadRequested));
            assert!(app.is_downloading);

            let _ = app.update(Message::DownloadCompleted(outcome));
            assert!(!app.is_downloading);
        }
    }

    #[test]
    fn stale_photo_fetch_for_unknown_index_is_discarded() {
        let mut app = loaded_app(r#"["a"]"#);
        app.on_photo_fetched(7, Ok(image::Handle::from_bytes(vec![0u8; 4])));

        assert!(app.images.is_empty());
    }

    #[test]
    fn failed_photo_fetch_keeps_placeholder() {
        let mut app = loaded_app(r#"["a"]"#);
        app.on_photo_fetched(0, Err(FetchError::Status(404)));

        assert!(app.images.is_empty());
    }

    #[test]
    fn viewport_resize_updates_breakpoint_input() {
        let mut app = test_app();
        let _ = app.update(Message::ViewportResized(iced::Size::new(700.0, 500.0)));

        assert_eq!(app.viewport_width, 700.0);
    }
}
