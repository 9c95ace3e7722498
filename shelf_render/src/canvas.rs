// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface handed to paint hooks.

use std::sync::Arc;

use vello_cpu::kurbo::{Affine, Shape as _, Stroke};

use crate::color::Color;
use crate::geometry::IntSize;
use crate::pixmap::Pixmap;

/// Flattening tolerance for rounded corners, in pixels.
const TOLERANCE: f64 = 0.1;

/// A drawing surface exactly as large as the node being painted.
///
/// Coordinates are local to the node: `(0, 0)` is its top-left corner. Draw
/// calls are recorded and rasterized by [`finish_into`](Self::finish_into).
/// Fully transparent colors are skipped, so painting "nothing" is free.
pub struct Canvas {
    ctx: vello_cpu::RenderContext,
    size: IntSize,
    width: u16,
    height: u16,
}

impl core::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Canvas")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl Canvas {
    /// Creates a canvas for a surface of `size`.
    ///
    /// Returns `None` for empty sizes and for sizes beyond the rasterizer's
    /// `u16` limit; callers treat that as "nothing to draw".
    #[must_use]
    pub fn new(size: IntSize) -> Option<Self> {
        if size.is_empty() {
            return None;
        }
        let width = u16::try_from(size.width).ok()?;
        let height = u16::try_from(size.height).ok()?;
        Some(Self {
            ctx: vello_cpu::RenderContext::new(width, height),
            size,
            width,
            height,
        })
    }

    /// Size of the surface being painted.
    #[inline]
    #[must_use]
    pub fn size(&self) -> IntSize {
        self.size
    }

    /// The whole surface as a rectangle in local coordinates.
    #[must_use]
    pub fn bounds(&self) -> kurbo::Rect {
        kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.size.width),
            f64::from(self.size.height),
        )
    }

    /// Fills an axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: kurbo::Rect, color: Color) {
        if color.is_transparent() || rect.is_zero_area() {
            return;
        }
        self.ctx.set_paint(color.to_peniko());
        self.ctx.fill_rect(&to_vello(rect));
    }

    /// Fills a rectangle with rounded corners.
    ///
    /// The radius is clamped by the rasterizer to half the shorter side.
    pub fn fill_rounded_rect(&mut self, rect: kurbo::Rect, radius: f64, color: Color) {
        if color.is_transparent() || rect.is_zero_area() {
            return;
        }
        let shape = vello_cpu::kurbo::RoundedRect::from_rect(to_vello(rect), radius.max(0.0));
        self.ctx.set_paint(color.to_peniko());
        self.ctx.fill_path(&shape.to_path(TOLERANCE));
    }

    /// Strokes the outline of a rounded rectangle, centered on its edge.
    pub fn stroke_rounded_rect(&mut self, rect: kurbo::Rect, radius: f64, width: f64, color: Color) {
        if color.is_transparent() || width <= 0.0 {
            return;
        }
        let shape = vello_cpu::kurbo::RoundedRect::from_rect(to_vello(rect), radius.max(0.0));
        self.ctx.set_paint(color.to_peniko());
        self.ctx.set_stroke(Stroke::new(width));
        self.ctx.stroke_path(&shape.to_path(TOLERANCE));
    }

    /// Draws `image` scaled to fill `dest`.
    ///
    /// Used for icons. Empty images and images beyond the rasterizer's `u16`
    /// limit draw nothing.
    pub fn draw_pixmap(&mut self, image: &Pixmap, dest: kurbo::Rect) {
        let size = image.size();
        if size.is_empty() || dest.is_zero_area() {
            return;
        }
        let (Ok(w), Ok(h)) = (u16::try_from(size.width), u16::try_from(size.height)) else {
            return;
        };

        let mut may_have_opacities = false;
        let pixels = image
            .data()
            .chunks_exact(4)
            .map(|px| {
                may_have_opacities |= px[3] != 255;
                vello_cpu::peniko::color::PremulRgba8 {
                    r: px[0],
                    g: px[1],
                    b: px[2],
                    a: px[3],
                }
            })
            .collect();
        let source = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, may_have_opacities);
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(source)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };

        let sx = dest.width() / f64::from(size.width);
        let sy = dest.height() / f64::from(size.height);
        let transform = Affine::translate((dest.x0, dest.y0)) * Affine::scale_non_uniform(sx, sy);
        self.ctx.set_transform(transform);
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(size.width),
            f64::from(size.height),
        ));
        self.ctx.set_transform(Affine::IDENTITY);
    }

    /// Direct access to the underlying rasterizer for widgets that draw
    /// richer content (icons, glyph runs).
    pub fn render_context(&mut self) -> &mut vello_cpu::RenderContext {
        &mut self.ctx
    }

    /// Rasterizes everything drawn so far into `target`, replacing its
    /// contents.
    ///
    /// `target` must have the canvas's size; a mismatched target is left
    /// untouched.
    pub fn finish_into(mut self, target: &mut Pixmap) {
        if target.size() != self.size {
            return;
        }
        let mut out = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut out);
        let bytes = out.data_as_u8_slice();
        if bytes.len() == target.data().len() {
            target.data_mut().copy_from_slice(bytes);
        }
    }
}

fn to_vello(r: kurbo::Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_size_has_no_canvas() {
        assert!(Canvas::new(IntSize::new(0, 24)).is_none());
        assert!(Canvas::new(IntSize::new(24, 0)).is_none());
        assert!(Canvas::new(IntSize::new(70_000, 24)).is_none());
    }

    #[test]
    fn opaque_fill_covers_surface() {
        let size = IntSize::new(8, 6);
        let mut canvas = Canvas::new(size).unwrap();
        let bounds = canvas.bounds();
        canvas.fill_rect(bounds, Color::from_rgb8(255, 0, 0));
        let mut target = Pixmap::new(size);
        canvas.finish_into(&mut target);
        assert_eq!(target.pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(target.pixel(4, 3), Some([255, 0, 0, 255]));
        assert_eq!(target.pixel(7, 5), Some([255, 0, 0, 255]));
    }

    #[test]
    fn transparent_fill_draws_nothing() {
        let size = IntSize::new(4, 4);
        let mut canvas = Canvas::new(size).unwrap();
        let bounds = canvas.bounds();
        canvas.fill_rect(bounds, Color::TRANSPARENT);
        let mut target = Pixmap::new(size);
        target.fill(Color::WHITE);
        canvas.finish_into(&mut target);
        assert_eq!(target.pixel(2, 2), Some([0, 0, 0, 0]));
    }

    #[test]
    fn border_stroke_leaves_interior_clear() {
        let size = IntSize::new(20, 20);
        let mut canvas = Canvas::new(size).unwrap();
        let inset = canvas.bounds().inset(-2.0);
        canvas.stroke_rounded_rect(inset, 0.0, 4.0, Color::from_rgb8(0, 0, 255));
        let mut target = Pixmap::new(size);
        canvas.finish_into(&mut target);
        assert_eq!(target.pixel(1, 10), Some([0, 0, 255, 255]));
        assert_eq!(target.pixel(10, 10), Some([0, 0, 0, 0]));
    }

    #[test]
    fn pixmap_is_scaled_into_destination() {
        let mut icon = Pixmap::new(IntSize::new(2, 2));
        icon.fill(Color::from_rgb8(0, 255, 0));
        let size = IntSize::new(10, 10);
        let mut canvas = Canvas::new(size).unwrap();
        canvas.draw_pixmap(&icon, kurbo::Rect::new(2.0, 2.0, 8.0, 8.0));
        let mut target = Pixmap::new(size);
        canvas.finish_into(&mut target);
        let [r, g, _, a] = target.pixel(5, 5).unwrap();
        assert!(r == 0 && g > 250 && a > 250, "image covers the middle of dest");
        assert_eq!(target.pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn mismatched_target_is_untouched() {
        let mut canvas = Canvas::new(IntSize::new(4, 4)).unwrap();
        let bounds = canvas.bounds();
        canvas.fill_rect(bounds, Color::WHITE);
        let mut target = Pixmap::new(IntSize::new(2, 2));
        canvas.finish_into(&mut target);
        assert_eq!(target.pixel(0, 0), Some([0, 0, 0, 0]));
    }
}
