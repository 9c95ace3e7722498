// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared background/border style records.
//!
//! A panel theme defines a handful of backgrounds (panel, active task,
//! inactive task, clock, ...) that many nodes reuse. Styles are registered
//! once into a [`StyleRegistry`], which is then frozen behind an
//! [`Arc`](std::sync::Arc) and shared by every panel window. Nodes refer to a
//! record through a [`StyleId`]; destroying a node never touches the record.

use core::fmt;

use shelf_render::{Canvas, Color};

/// Border part of a [`Style`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Border {
    /// Border color; its alpha is the border alpha.
    pub color: Color,
    /// Border width in pixels. Layout reserves this much on every side.
    pub width: u32,
    /// Corner radius in pixels, shared by fill and border.
    pub radius: u32,
}

/// An immutable background/border record.
///
/// The default style is fully transparent with no border and paints nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Background fill; its alpha is the fill alpha.
    pub fill: Color,
    /// Border description.
    pub border: Border,
}

impl Style {
    /// The style that paints nothing.
    pub const NONE: Self = Self {
        fill: Color::TRANSPARENT,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0,
            radius: 0,
        },
    };

    /// A borderless style with the given fill.
    #[must_use]
    pub const fn filled(fill: Color) -> Self {
        Self {
            fill,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0,
                radius: 0,
            },
        }
    }

    /// Returns the same style with a border.
    #[must_use]
    pub const fn with_border(self, color: Color, width: u32, radius: u32) -> Self {
        Self {
            border: Border {
                color,
                width,
                radius,
            },
            ..self
        }
    }

    /// Paints the background, then the border, covering the whole canvas.
    pub fn paint(&self, canvas: &mut Canvas) {
        let bounds = canvas.bounds();
        let radius = f64::from(self.border.radius);
        canvas.fill_rounded_rect(bounds, radius, self.fill);

        if self.border.width > 0 {
            let w = f64::from(self.border.width);
            // Strokes are centered on the path; pull it in by half the width
            // so the border stays inside the node.
            let edge = bounds.inset(-w / 2.0);
            canvas.stroke_rounded_rect(edge, (radius - w / 2.0).max(0.0), w, self.border.color);
        }
    }
}

/// A handle to a [`Style`] in a [`StyleRegistry`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleId(pub(crate) u32);

impl StyleId {
    /// The built-in transparent style, always present.
    pub const NONE: Self = Self(0);
}

impl fmt::Debug for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StyleId({})", self.0)
    }
}

/// Owns every style record of the process.
///
/// Records are append-only: once registered, a style is never mutated or
/// removed, so a [`StyleId`] stays valid for the registry's lifetime. Lookups
/// of unknown ids resolve to [`Style::NONE`] so a bad id paints nothing
/// instead of failing.
#[derive(Clone, Debug)]
pub struct StyleRegistry {
    styles: Vec<Style>,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleRegistry {
    /// Creates a registry holding only [`StyleId::NONE`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            styles: vec![Style::NONE],
        }
    }

    /// Registers a style and returns its handle.
    pub fn register(&mut self, style: Style) -> StyleId {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "a theme never registers anywhere near 2^32 styles"
        )]
        let id = StyleId(self.styles.len() as u32);
        self.styles.push(style);
        id
    }

    /// Returns the style for `id`, or [`Style::NONE`] for unknown ids.
    #[must_use]
    pub fn get(&self, id: StyleId) -> &Style {
        self.styles.get(id.0 as usize).unwrap_or(&Style::NONE)
    }

    /// Number of registered styles, including [`StyleId::NONE`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Always `false`: the transparent style is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
