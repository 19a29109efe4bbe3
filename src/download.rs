// SPDX-License-Identifier: MPL-2.0
//! Full-resolution photo download pipeline.
//!
//! The pipeline fetches the asset behind the current locator, stages the
//! bytes in a named temporary file, and offers a native save-as dialog
//! pre-filled with a filename derived from the locator. Any retrieval or
//! persistence failure degrades to opening the locator in the system
//! browser instead of surfacing an error. The single-download-at-a-time
//! guard lives in the application state; this module is stateless.

use crate::api::{ApiClient, FetchError};
use std::path::PathBuf;

/// Extensions accepted verbatim when deriving a download filename.
const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Errors raised inside the pipeline before the fallback path takes over.
#[derive(Debug, Clone)]
pub enum DownloadError {
    /// Asset retrieval failed.
    Fetch(FetchError),
    /// Staging or persisting the bytes failed.
    Io(String),
}

impl std::fmt::Display for DownloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DownloadError::Fetch(e) => write!(f, "asset retrieval failed: {e}"),
            DownloadError::Io(msg) => write!(f, "file handling failed: {msg}"),
        }
    }
}

impl std::error::Error for DownloadError {}

impl From<FetchError> for DownloadError {
    fn from(err: FetchError) -> Self {
        DownloadError::Fetch(err)
    }
}

/// Terminal state of one pipeline run. Infallible by construction: failures
/// are folded into the fallback variants so the caller only has to clear
/// its in-flight flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Bytes persisted to the path the user chose.
    Saved(PathBuf),
    /// The user dismissed the save dialog.
    Cancelled,
    /// The pipeline failed and the locator was opened in the browser.
    OpenedInBrowser,
    /// The pipeline failed and the browser fallback failed too.
    FallbackFailed,
}

/// Derives the filename offered in the save dialog.
///
/// The last path segment of the locator is used verbatim when it already
/// carries a known image extension, and gets `.jpg` appended otherwise.
/// Locators that do not parse as URLs (or have an empty last segment) fall
/// back to a synthetic `photo-<n>.jpg` name based on the 1-based photo
/// number.
pub fn derive_filename(locator: &str, index: usize) -> String {
    let synthetic = || format!("photo-{}.jpg", index + 1);

    let Ok(url) = reqwest::Url::parse(locator) else {
        return synthetic();
    };

    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or("");

    if segment.is_empty() {
        return synthetic();
    }

    let has_image_extension = segment
        .rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false);

    if has_image_extension {
        segment.to_string()
    } else {
        format!("{segment}.jpg")
    }
}

/// Runs the pipeline for the photo at `index`.
///
/// Always resolves to a [`DownloadOutcome`]; errors on the happy path are
/// logged and rerouted through the browser fallback.
pub async fn save_photo(client: ApiClient, locator: String, index: usize) -> DownloadOutcome {
    match fetch_and_save(&client, &locator, index).await {
        Ok(outcome) => outcome,
        Err(err) => {
            log::warn!("download of {locator} failed ({err}), opening in browser");
            open_fallback(&locator)
        }
    }
}

/// Happy path: fetch, stage in a temporary file, prompt, persist.
async fn fetch_and_save(
    client: &ApiClient,
    locator: &str,
    index: usize,
) -> Result<DownloadOutcome, DownloadError> {
    let filename = derive_filename(locator, index);
    let bytes = client.fetch_image_bytes(locator).await?;

    // The temp file is the revocable handle for the staged bytes; dropping
    // it at the end of this scope removes the file again.
    let staged = tempfile::NamedTempFile::new().map_err(|e| DownloadError::Io(e.to_string()))?;
    tokio::fs::write(staged.path(), &bytes)
        .await
        .map_err(|e| DownloadError::Io(e.to_string()))?;

    let chosen = rfd::AsyncFileDialog::new()
        .set_title("Save Photo As")
        .set_file_name(&filename)
        .save_file()
        .await;

    let Some(target) = chosen else {
        return Ok(DownloadOutcome::Cancelled);
    };

    let target_path = target.path().to_path_buf();
    tokio::fs::copy(staged.path(), &target_path)
        .await
        .map_err(|e| DownloadError::Io(e.to_string()))?;

    Ok(DownloadOutcome::Saved(target_path))
}

/// Degraded path: hand the locator to the system browser.
fn open_fallback(locator: &str) -> DownloadOutcome {
    match webbrowser::open(locator) {
        Ok(()) => DownloadOutcome::OpenedInBrowser,
        Err(err) => {
            log::error!("browser fallback for {locator} failed: {err}");
            DownloadOutcome::FallbackFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_with_known_extension_is_kept() {
        assert_eq!(derive_filename("https://x/y/photo.png", 0), "photo.png");
        assert_eq!(derive_filename("https://x/y/photo.jpeg", 0), "photo.jpeg");
        assert_eq!(derive_filename("https://x/y/anim.gif", 0), "anim.gif");
        assert_eq!(derive_filename("https://x/y/pic.webp", 0), "pic.webp");
    }

    #[test]
    fn filename_extension_check_is_case_insensitive() {
        assert_eq!(derive_filename("https://x/y/photo.PNG", 0), "photo.PNG");
        assert_eq!(derive_filename("https://x/y/photo.JpG", 0), "photo.JpG");
    }

    #[test]
    fn filename_without_extension_gets_jpg_appended() {
        assert_eq!(derive_filename("https://x/y/photo", 0), "photo.jpg");
    }

    #[test]
    fn unknown_extension_gets_jpg_appended() {
        assert_eq!(derive_filename("https://x/y/photo.tiff", 0), "photo.tiff.jpg");
    }

    #[test]
    fn query_string_does_not_leak_into_filename() {
        assert_eq!(
            derive_filename("https://x/y/photo.png?sig=abc&w=400", 0),
            "photo.png"
        );
    }

    #[test]
    fn malformed_locator_falls_back_to_synthetic_name() {
        assert_eq!(derive_filename("not a url", 0), "photo-1.jpg");
        assert_eq!(derive_filename("relative/path/photo.png", 4), "photo-5.jpg");
    }

    #[test]
    fn empty_path_falls_back_to_synthetic_name() {
        assert_eq!(derive_filename("https://x/", 2), "photo-3.jpg");
    }

    #[test]
    fn download_error_display() {
        let err = DownloadError::Io("permission denied".into());
        assert!(err.to_string().contains("permission denied"));

        let err: DownloadError = FetchError::Status(404).into();
        assert!(err.to_string().contains("404"));
    }
}
