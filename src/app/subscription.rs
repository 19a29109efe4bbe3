// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The keyboard subscription exists only while the lightbox is open: the
//! Iced runtime attaches it on open and detaches it on close or teardown,
//! so no key has any effect while the gallery is the active surface and no
//! handler outlives the application. Window resize events are always
//! tracked because the gallery breakpoints depend on them.

use super::{App, Message};
use crate::ui::lightbox;
use iced::keyboard::{self, key};
use iced::{event, Subscription};

impl App {
    pub fn subscription(&self) -> Subscription<Message> {
        let resize = event::listen_with(|event, _status, _window| match event {
            event::Event::Window(iced::window::Event::Resized(size)) => {
                Some(Message::ViewportResized(size))
            }
            _ => None,
        });

        if self.lightbox.is_open() {
            Subscription::batch([resize, viewer_keys()])
        } else {
            resize
        }
    }
}

/// Keyboard bindings active while viewing a photo.
fn viewer_keys() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| {
        let key = match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => key,
            _ => return None,
        };
        let message = match key {
            keyboard::Key::Named(key::Named::Escape) => lightbox::Message::CloseRequested,
            keyboard::Key::Named(key::Named::ArrowRight) => lightbox::Message::NextRequested,
            keyboard::Key::Named(key::Named::ArrowLeft) => lightbox::Message::PreviousRequested,
            _ => return None,
        };
        Some(Message::Lightbox(message))
    })
}
