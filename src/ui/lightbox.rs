// SPDX-License-Identifier: MPL-2.0
//! Full-window lightbox chrome.
//!
//! Renders the photo at the machine's current index over a dark backdrop,
//! with navigation, zoom, close, and download controls. The view is a pure
//! reaction to the machine state; every control maps 1:1 to one transition
//! or to the download pipeline entry point.

use crate::ui::styles;
use crate::viewer::{Lightbox, ZoomLevel};
use iced::widget::{button, container, image, scrollable, text, Column, Row, Space};
use iced::{Element, Length};

/// Messages emitted by the lightbox chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    CloseRequested,
    NextRequested,
    PreviousRequested,
    ZoomInRequested,
    ZoomOutRequested,
    DownloadRequested,
}

/// Renders the lightbox for an open machine state.
///
/// `Closed` machines render nothing; the caller switches surfaces before
/// that happens, this is only a safety net.
pub fn view<'a>(
    lightbox: &Lightbox,
    collection_len: usize,
    handle: Option<&'a image::Handle>,
    is_downloading: bool,
    viewport_width: f32,
) -> Element<'a, Message> {
    let (index, zoom) = match (lightbox.current_index(), lightbox.zoom()) {
        (Some(index), Some(zoom)) => (index, zoom),
        _ => return Space::new().into(),
    };

    let content = Column::new()
        .spacing(styles::spacing::SM)
        .push(top_bar(index, collection_len, is_downloading))
        .push(photo_area(handle, zoom, viewport_width))
        .push(bottom_bar(lightbox, collection_len, zoom));

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(styles::spacing::MD)
        .style(styles::backdrop)
        .into()
}

/// Counter, download trigger, and close control.
fn top_bar<'a>(index: usize, collection_len: usize, is_downloading: bool) -> Element<'a, Message> {
    let counter = text(format!("{} / {}", index + 1, collection_len)).size(16);

    let download_label = if is_downloading { "Saving..." } else { "Download" };
    let download = chrome_button(
        download_label,
        (!is_downloading).then_some(Message::DownloadRequested),
    );

    let close = chrome_button("Close", Some(Message::CloseRequested));

    Row::new()
        .spacing(styles::spacing::SM)
        .push(counter)
        .push(Space::new().width(Length::Fill))
        .push(download)
        .push(close)
        .into()
}

/// The photo itself, scaled by the zoom factor and pannable when it
/// overflows the window.
fn photo_area<'a>(
    handle: Option<&'a image::Handle>,
    zoom: ZoomLevel,
    viewport_width: f32,
) -> Element<'a, Message> {
    let inner: Element<'a, Message> = match handle {
        Some(handle) => {
            // Zoom scales against the viewport rather than the intrinsic
            // image size, which is unknown until decode.
            let target_width = (viewport_width - 2.0 * styles::spacing::MD) * zoom.factor();
            image(handle.clone())
                .width(Length::Fixed(target_width))
                .into()
        }
        None => text("Loading photo...").size(16).into(),
    };

    let panned = scrollable(container(inner).center_x(Length::Shrink))
        .direction(scrollable::Direction::Both {
            vertical: scrollable::Scrollbar::new(),
            horizontal: scrollable::Scrollbar::new(),
        })
        .width(Length::Fill)
        .height(Length::Fill);

    container(panned)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// Navigation and zoom controls, disabled at their boundaries.
fn bottom_bar<'a>(
    lightbox: &Lightbox,
    collection_len: usize,
    zoom: ZoomLevel,
) -> Element<'a, Message> {
    let previous = chrome_button(
        "Previous",
        (!lightbox.is_at_first()).then_some(Message::PreviousRequested),
    );
    let next = chrome_button(
        "Next",
        (!lightbox.is_at_last(collection_len)).then_some(Message::NextRequested),
    );

    let zoom_out = chrome_button("-", (!zoom.is_min()).then_some(Message::ZoomOutRequested));
    let zoom_label = text(format!("{:.0}%", zoom.factor() * 100.0)).size(14);
    let zoom_in = chrome_button("+", (!zoom.is_max()).then_some(Message::ZoomInRequested));

    Row::new()
        .spacing(styles::spacing::SM)
        .push(previous)
        .push(Space::new().width(Length::Fill))
        .push(zoom_out)
        .push(container(zoom_label).padding(styles::spacing::XS))
        .push(zoom_in)
        .push(Space::new().width(Length::Fill))
        .push(next)
        .into()
}

/// One chrome button; `None` renders it disabled.
fn chrome_button<'a>(label: &'a str, on_press: Option<Message>) -> Element<'a, Message> {
    let style = if on_press.is_some() {
        styles::overlay
    } else {
        styles::overlay_disabled
    };

    button(text(label).size(14))
        .padding([styles::spacing::XS, styles::spacing::MD])
        .style(style)
        .on_press_maybe(on_press)
        .into()
}
