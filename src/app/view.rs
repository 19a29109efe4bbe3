// SPDX-License-Identifier: MPL-2.0
//! Top-level view dispatch: the lightbox replaces the gallery surface while
//! the machine is open; otherwise the scrollable gallery is shown.

use super::{App, Message};
use crate::ui::{gallery, lightbox};
use iced::widget::scrollable;
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        if self.lightbox.is_open() {
            let handle = self
                .lightbox
                .current_index()
                .and_then(|index| self.images.get(&index));

            lightbox::view(
                &self.lightbox,
                self.collection.len(),
                handle,
                self.is_downloading,
                self.viewport_width,
            )
            .map(Message::Lightbox)
        } else {
            let grid = gallery::view(
                self.load_state(),
                &self.collection,
                &self.images,
                self.viewport_width,
            )
            .map(Message::Gallery);

            scrollable(grid)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
    }
}
