// SPDX-License-Identifier: MPL-2.0
//! Centralized colors and widget styles.
//!
//! Kept in one place so the gallery and the lightbox stay visually
//! consistent without repeating color math at every call site.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

/// Style for gallery tiles: invisible at rest, a faint white veil on hover
/// so the tile reads as an activation target without extra chrome.
pub fn tile(_theme: &Theme, status: button::Status) -> button::Style {
    let veil = match status {
        button::Status::Hovered => 0.15,
        button::Status::Pressed => 0.25,
        _ => 0.0,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: veil,
            ..palette::WHITE
        })),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Style for lightbox chrome buttons (navigation, close, zoom, download).
pub fn overlay(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => 0.75,
        button::Status::Pressed => 0.9,
        _ => 0.5,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Style for disabled chrome buttons (boundary navigation, download in
/// flight).
pub fn overlay_disabled(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(Color {
            a: 0.3,
            ..palette::BLACK
        })),
        text_color: palette::GRAY_400,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Style for the gray placeholder blocks shown while the collection or a
/// tile image is still loading.
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_700)),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Style for the full-window lightbox backdrop.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.95,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}
