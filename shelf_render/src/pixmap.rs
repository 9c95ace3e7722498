// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned premultiplied RGBA8 pixel buffers.

use crate::color::Color;
use crate::geometry::{IntPoint, IntRect, IntSize};

/// A premultiplied RGBA8 pixel buffer.
///
/// Each node in the layout tree owns at most one pixmap holding its painted
/// appearance; the window frame is one more pixmap the node buffers are
/// composited onto. Zero-sized pixmaps are valid and hold no pixels.
#[derive(Clone, PartialEq, Eq)]
pub struct Pixmap {
    size: IntSize,
    data: Vec<u8>,
}

impl core::fmt::Debug for Pixmap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pixmap")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl Pixmap {
    /// Creates a fully transparent pixmap.
    #[must_use]
    pub fn new(size: IntSize) -> Self {
        Self {
            size,
            data: vec![0; size.area() * 4],
        }
    }

    /// Returns the pixmap's extent.
    #[inline]
    #[must_use]
    pub fn size(&self) -> IntSize {
        self.size
    }

    /// Raw premultiplied RGBA8 bytes, row-major, no padding.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the raw premultiplied RGBA8 bytes.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Returns the premultiplied pixel at `(x, y)`, or `None` outside the
    /// buffer.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let i = (y as usize * self.size.width as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        let premul = color.to_premul();
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&premul);
        }
    }

    /// Sets every pixel to transparent.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Composites `src` over `self` with its top-left corner at `at`.
    ///
    /// Parts of `src` falling outside `self` are clipped. Returns the
    /// rectangle of `self` that was touched, which is empty when nothing
    /// overlapped.
    pub fn composite_over(&mut self, src: &Self, at: IntPoint) -> IntRect {
        let dst_w = i64::from(self.size.width);
        let dst_h = i64::from(self.size.height);
        let x0 = i64::from(at.x).max(0);
        let y0 = i64::from(at.y).max(0);
        let x1 = (i64::from(at.x) + i64::from(src.size.width)).min(dst_w);
        let y1 = (i64::from(at.y) + i64::from(src.size.height)).min(dst_h);
        if x0 >= x1 || y0 >= y1 {
            return IntRect::default();
        }

        let row_px = (x1 - x0) as usize;
        for y in y0..y1 {
            let sy = (y - i64::from(at.y)) as usize;
            let sx = (x0 - i64::from(at.x)) as usize;
            let s_start = (sy * src.size.width as usize + sx) * 4;
            let d_start = (y as usize * self.size.width as usize + x0 as usize) * 4;
            let s_row = &src.data[s_start..s_start + row_px * 4];
            let d_row = &mut self.data[d_start..d_start + row_px * 4];
            for (d, s) in d_row.chunks_exact_mut(4).zip(s_row.chunks_exact(4)) {
                let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
                d.copy_from_slice(&out);
            }
        }

        #[expect(
            clippy::cast_possible_truncation,
            reason = "bounds are clamped to the destination, which fits in u32"
        )]
        let touched = IntRect::from_xywh(x0 as i32, y0 as i32, (x1 - x0) as u32, (y1 - y0) as u32);
        touched
    }
}

/// Premultiplied source-over for a single pixel.
fn over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }
    let inv = 255 - u16::from(sa);
    let mut out = [0_u8; 4];
    for i in 0..4 {
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = u16::from(src[i]).saturating_add(dc).min(255) as u8;
    }
    out
}

fn mul_div255(a: u16, b: u16) -> u16 {
    let t = u32::from(a) * u32::from(b) + 128;
    ((t + (t >> 8)) >> 8) as u16
}
