// SPDX-License-Identifier: MPL-2.0
//! Lightbox state machine.
//!
//! All navigation and zoom goes through the transition methods on
//! [`Lightbox`]; rendering is a pure reaction to the resulting state. The
//! machine is either `Closed` or `Open` at a valid index with a clamped
//! zoom level, so the "open iff an index is selected" invariant is
//! structural rather than checked at runtime.

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 3.0;
pub const DEFAULT_ZOOM: f32 = 1.0;
pub const ZOOM_STEP: f32 = 0.5;

/// Zoom factor, guaranteed to stay within the supported range (0.5–3.0).
///
/// The type clamps on construction, so usage sites never re-validate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLevel(f32);

impl ZoomLevel {
    /// Creates a zoom level, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        Self(factor.clamp(MIN_ZOOM, MAX_ZOOM))
    }

    /// Returns the raw zoom factor.
    #[must_use]
    pub fn factor(self) -> f32 {
        self.0
    }

    /// Returns whether the zoom is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM
    }

    /// Returns whether the zoom is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM
    }

    /// Increases zoom by one step.
    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self::new(self.0 + ZOOM_STEP)
    }

    /// Decreases zoom by one step.
    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self::new(self.0 - ZOOM_STEP)
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(DEFAULT_ZOOM)
    }
}

/// Full-window viewer state: closed, or open on one photo of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Lightbox {
    /// No photo selected; the gallery is the active surface.
    #[default]
    Closed,
    /// Viewing the photo at `index` with the given zoom.
    Open { index: usize, zoom: ZoomLevel },
}

impl Lightbox {
    /// Creates a closed lightbox.
    pub fn new() -> Self {
        Self::Closed
    }

    /// Checks whether the lightbox is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open { .. })
    }

    /// Returns the current photo index while open.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self {
            Lightbox::Open { index, .. } => Some(*index),
            Lightbox::Closed => None,
        }
    }

    /// Returns the current zoom level while open.
    #[must_use]
    pub fn zoom(&self) -> Option<ZoomLevel> {
        match self {
            Lightbox::Open { zoom, .. } => Some(*zoom),
            Lightbox::Closed => None,
        }
    }

    /// Opens the viewer on the photo at `index`.
    ///
    /// Out-of-range indices are ignored, as is opening while already open.
    pub fn open(&mut self, index: usize, collection_len: usize) {
        if matches!(self, Lightbox::Closed) && index < collection_len {
            *self = Lightbox::Open {
                index,
                zoom: ZoomLevel::default(),
            };
        }
    }

    /// Closes the viewer and resets zoom for the next open.
    pub fn close(&mut self) {
        *self = Lightbox::Closed;
    }

    /// Advances to the next photo, resetting zoom.
    ///
    /// A no-op at the last index (no wraparound) and while closed.
    pub fn next(&mut self, collection_len: usize) {
        if let Lightbox::Open { index, .. } = self {
            if *index + 1 < collection_len {
                *self = Lightbox::Open {
                    index: *index + 1,
                    zoom: ZoomLevel::default(),
                };
            }
        }
    }

    /// Steps back to the previous photo, resetting zoom.
    ///
    /// A no-op at index 0 (no wraparound) and while closed.
    pub fn prev(&mut self) {
        if let Lightbox::Open { index, .. } = self {
            if *index > 0 {
                *self = Lightbox::Open {
                    index: *index - 1,
                    zoom: ZoomLevel::default(),
                };
            }
        }
    }

    /// Zooms in by one step; saturates at the maximum.
    pub fn zoom_in(&mut self) {
        if let Lightbox::Open { zoom, .. } = self {
            *zoom = zoom.zoom_in();
        }
    }

    /// Zooms out by one step; saturates at the minimum.
    pub fn zoom_out(&mut self) {
        if let Lightbox::Open { zoom, .. } = self {
            *zoom = zoom.zoom_out();
        }
    }

    /// Checks if the current photo is the first in the collection.
    #[must_use]
    pub fn is_at_first(&self) -> bool {
        matches!(self, Lightbox::Open { index: 0, .. })
    }

    /// Checks if the current photo is the last in the collection.
    #[must_use]
    pub fn is_at_last(&self, collection_len: usize) -> bool {
        matches!(self, Lightbox::Open { index, .. } if index + 1 >= collection_len)
    }
}
