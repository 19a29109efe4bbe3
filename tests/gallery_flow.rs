// SPDX-License-Identifier: MPL-2.0
//! End-to-end flow over the library pieces: decode a wire payload, walk the
//! resulting collection with the lightbox machine, and derive the filename
//! the download pipeline would offer for the current photo.

use photowall::collection::{LoadState, PhotoCollection, PhotoPayload};
use photowall::download::derive_filename;
use photowall::ui::gallery;
use photowall::viewer::{Lightbox, ZoomLevel};

fn collection_from(json: &str) -> PhotoCollection {
    let payload: PhotoPayload = serde_json::from_str(json).expect("payload should decode");
    PhotoCollection::from_payload(payload)
}

#[test]
fn keyed_payload_feeds_viewer_and_download() {
    let collection = collection_from(
        r#"{
            "event": "workshop",
            "photos": [
                "https://cdn.example/events/a.png",
                "https://cdn.example/events/b",
                "https://cdn.example/events/c.JPG"
            ]
        }"#,
    );

    // Display order is the reverse of wire order.
    assert_eq!(collection.get(0), Some("https://cdn.example/events/c.JPG"));
    assert_eq!(LoadState::derive(false, &collection), LoadState::Loaded);

    // Walk to the end of the collection; the boundary is a no-op.
    let mut lightbox = Lightbox::new();
    lightbox.open(0, collection.len());
    lightbox.next(collection.len());
    lightbox.next(collection.len());
    lightbox.next(collection.len());
    assert_eq!(lightbox.current_index(), Some(2));

    // The current photo resolves to a locator and a dialog filename.
    let index = lightbox.current_index().expect("lightbox should be open");
    let locator = collection.get(index).expect("index should resolve");
    assert_eq!(derive_filename(locator, index), "a.png");
}

#[test]
fn bare_payload_round_trip_matches_display_order() {
    let collection = collection_from(r#"["one", "two", "three"]"#);
    let display: Vec<&str> = collection.iter().collect();
    assert_eq!(display, vec!["three", "two", "one"]);
}

#[test]
fn empty_and_malformed_payloads_show_the_empty_notice_state() {
    for json in [r#"[]"#, r#"{"x": "not-array"}"#, "null", "42"] {
        let collection = collection_from(json);
        assert!(collection.is_empty(), "payload {json} should be empty");
        assert_eq!(LoadState::derive(false, &collection), LoadState::Empty);
    }
}

#[test]
fn hidden_second_tile_stays_reachable_by_navigation() {
    let collection = collection_from(r#"["a", "b", "c", "d"]"#);

    // The grid never shows index 1...
    let visible = gallery::visible_indices(collection.len());
    assert!(!visible.contains(&1));
    assert_eq!(visible.len(), collection.len() - 1);

    // ...but arrow navigation still lands on it.
    let mut lightbox = Lightbox::new();
    lightbox.open(0, collection.len());
    lightbox.next(collection.len());
    assert_eq!(lightbox.current_index(), Some(1));
}

#[test]
fn zoom_resets_on_every_index_change_in_a_long_session() {
    let collection = collection_from(r#"["a", "b", "c", "d", "e"]"#);
    let mut lightbox = Lightbox::new();
    lightbox.open(4, collection.len());

    for _ in 0..3 {
        lightbox.zoom_in();
    }
    assert_eq!(lightbox.zoom(), Some(ZoomLevel::new(2.5)));

    lightbox.prev();
    assert_eq!(lightbox.zoom(), Some(ZoomLevel::new(1.0)));

    lightbox.zoom_out();
    lightbox.close();
    lightbox.open(0, collection.len());
    assert_eq!(lightbox.zoom(), Some(ZoomLevel::new(1.0)));
}

#[test]
fn synthetic_filenames_number_photos_from_one() {
    let collection = collection_from(r#"["not a url", "also not a url"]"#);

    for index in 0..collection.len() {
        let locator = collection.get(index).expect("index should resolve");
        assert_eq!(
            derive_filename(locator, index),
            format!("photo-{}.jpg", index + 1)
        );
    }
}
