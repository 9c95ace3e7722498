// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Straight-alpha RGBA color.

/// An sRGB color with straight (non-premultiplied) alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, `0` fully transparent.
    pub a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::from_rgba8(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);

    /// Creates a color from straight-alpha components.
    #[inline]
    #[must_use]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[inline]
    #[must_use]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Returns the same color with alpha scaled to `alpha` in `0.0..=1.0`.
    ///
    /// Panel themes express alpha as a percentage of opacity; out-of-range
    /// values are clamped.
    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round();
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "value is clamped to 0..=255 above"
        )]
        let a = a as u8;
        Self { a, ..self }
    }

    /// Returns `true` if painting this color has no visible effect.
    #[inline]
    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Premultiplied RGBA8 bytes.
    #[must_use]
    pub fn to_premul(self) -> [u8; 4] {
        let af = u16::from(self.a) + 1;
        let premul = |c: u8| -> u8 { ((u16::from(c) * af) >> 8) as u8 };
        [premul(self.r), premul(self.g), premul(self.b), self.a]
    }

    pub(crate) fn to_peniko(self) -> vello_cpu::peniko::Color {
        vello_cpu::peniko::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}
