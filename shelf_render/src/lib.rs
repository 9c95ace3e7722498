// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel buffers, paint canvas, compositing, and damage tracking for shelf.
//!
//! This crate sits underneath [`shelf_core`]'s redraw pass. It defines:
//!
//! - [`IntPoint`], [`IntSize`], [`IntRect`]: integer pixel geometry used by
//!   the layout engine
//! - [`Color`]: straight-alpha RGBA color
//! - [`Pixmap`]: an owned premultiplied RGBA8 buffer with source-over
//!   compositing
//! - [`Canvas`]: the drawing surface handed to paint hooks, backed by
//!   `vello_cpu`
//! - [`DamageRegion`]: the set of frame rectangles repainted in one frame
//!
//! [`shelf_core`]: https://docs.rs/shelf_core

mod canvas;
mod color;
mod damage;
mod geometry;
mod pixmap;

pub use canvas::Canvas;
pub use color::Color;
pub use damage::DamageRegion;
pub use geometry::{IntPoint, IntRect, IntSize};
pub use pixmap::Pixmap;
