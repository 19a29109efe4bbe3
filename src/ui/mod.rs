// SPDX-License-Identifier: MPL-2.0
//! UI components: the masonry gallery, the lightbox chrome, and the shared
//! style helpers they draw from.

pub mod gallery;
pub mod lightbox;
pub mod styles;
