// SPDX-License-Identifier: MPL-2.0
//! Masonry gallery view.
//!
//! A pure function of the load state, the collection, the fetched image
//! handles, and the viewport width. Tiles flow into columns without ever
//! being split across them; the column count follows the viewport
//! breakpoints, and 20 placeholder blocks keep the layout stable while the
//! collection loads.

use crate::collection::{LoadState, PhotoCollection};
use crate::ui::styles;
use iced::widget::{button, container, image, text, Column, Row, Space};
use iced::{Element, Length};
use std::collections::HashMap;

/// Number of placeholder blocks shown while the collection loads.
pub const PLACEHOLDER_TILES: usize = 20;

/// Fixed height of a placeholder block.
const PLACEHOLDER_HEIGHT: f32 = 200.0;

/// Messages emitted by the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A tile was activated; carries the tile's collection index.
    TileActivated(usize),
}

/// Returns the column count for a viewport width.
///
/// Mirrors the responsive flow of the web gallery this view descends from:
/// one column on narrow windows, up to five on wide ones.
#[must_use]
pub fn column_count(viewport_width: f32) -> usize {
    if viewport_width < 640.0 {
        1
    } else if viewport_width < 768.0 {
        2
    } else if viewport_width < 1024.0 {
        3
    } else if viewport_width < 1280.0 {
        4
    } else {
        5
    }
}

/// Returns the collection indices that actually render in the grid.
///
/// Index 1 is suppressed from display while staying addressable for viewer
/// navigation.
// TODO: confirm with the event team whether the second photo should really
// stay hidden; because the grid is the only click entry point, it can only
// be reached with the arrow keys today.
#[must_use]
pub fn visible_indices(collection_len: usize) -> Vec<usize> {
    (0..collection_len).filter(|&index| index != 1).collect()
}

/// Distributes tile slots round-robin across columns.
///
/// Tile heights are unknown until the image bytes arrive, so slots are dealt
/// in display order instead of balancing by measured height. Each slot lands
/// in exactly one column, which keeps tiles whole.
#[must_use]
pub fn distribute(slots: &[usize], columns: usize) -> Vec<Vec<usize>> {
    let columns = columns.max(1);
    let mut lanes = vec![Vec::new(); columns];
    for (position, &slot) in slots.iter().enumerate() {
        lanes[position % columns].push(slot);
    }
    lanes
}

/// Renders the gallery for the current load state.
pub fn view<'a>(
    load_state: LoadState,
    collection: &'a PhotoCollection,
    images: &'a HashMap<usize, image::Handle>,
    viewport_width: f32,
) -> Element<'a, Message> {
    match load_state {
        LoadState::Loading => placeholder_grid(viewport_width),
        LoadState::Empty => empty_notice(),
        LoadState::Loaded => photo_grid(collection, images, viewport_width),
    }
}

/// Grid of equally-sized placeholder blocks, in the same column flow the
/// real content will use so the layout does not shift on load completion.
fn placeholder_grid<'a>(viewport_width: f32) -> Element<'a, Message> {
    let slots: Vec<usize> = (0..PLACEHOLDER_TILES).collect();
    let lanes = distribute(&slots, column_count(viewport_width));

    let mut grid = Row::new().spacing(styles::spacing::SM);
    for lane in lanes {
        let mut stack = Column::new().spacing(styles::spacing::SM);
        for _ in lane {
            stack = stack.push(placeholder_block());
        }
        grid = grid.push(stack.width(Length::FillPortion(1)));
    }

    container(grid)
        .width(Length::Fill)
        .padding(styles::spacing::MD)
        .into()
}

fn placeholder_block<'a>() -> Element<'a, Message> {
    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(PLACEHOLDER_HEIGHT))
        .style(styles::placeholder)
        .into()
}

/// Centered notice for an event without photos.
fn empty_notice<'a>() -> Element<'a, Message> {
    container(
        text("No photos found")
            .size(18)
            .color(styles::palette::GRAY_400),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

/// The loaded grid: one activation tile per visible collection index.
fn photo_grid<'a>(
    collection: &'a PhotoCollection,
    images: &'a HashMap<usize, image::Handle>,
    viewport_width: f32,
) -> Element<'a, Message> {
    let visible = visible_indices(collection.len());
    let lanes = distribute(&visible, column_count(viewport_width));

    let mut grid = Row::new().spacing(styles::spacing::SM);
    for lane in lanes {
        let mut stack = Column::new().spacing(styles::spacing::SM);
        for index in lane {
            stack = stack.push(tile(index, images.get(&index)));
        }
        grid = grid.push(stack.width(Length::FillPortion(1)));
    }

    container(grid)
        .width(Length::Fill)
        .padding(styles::spacing::MD)
        .into()
}

/// One tile: the fetched image when available, a placeholder block until
/// then. The whole tile is the (invisible) activation control that opens the
/// viewer at this index.
fn tile(index: usize, handle: Option<&image::Handle>) -> Element<'_, Message> {
    let content: Element<'_, Message> = match handle {
        Some(handle) => image(handle.clone()).width(Length::Fill).into(),
        None => container(Space::new())
            .width(Length::Fill)
            .height(Length::Fixed(PLACEHOLDER_HEIGHT))
            .style(styles::placeholder)
            .into(),
    };

    button(content)
        .padding(0.0)
        .style(styles::tile)
        .on_press(Message::TileActivated(index))
        .into()
}
