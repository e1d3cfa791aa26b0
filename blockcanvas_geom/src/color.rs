// Copyright 2026 the Blockcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// An 8-bit-per-channel RGBA color.
///
/// Blocks only store and compare colors; blending and distance metrics
/// belong to whoever renders or scores a canvas.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba {
    /// Opaque white, the background of a fresh canvas.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Create a color from its four channels.
    #[inline(always)]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
