// Copyright 2026 the Blockcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=blockcanvas_geom --heading-base-level=0

//! Blockcanvas Geom: integer geometry primitives for block canvases.
//!
//! This crate holds the small value types the block model is built from:
//!
//! - [`Point`]: an integer grid point with componentwise [`Point::add`] and
//!   [`Point::get_diff`]. [`Size`] is the same type read as width/height.
//! - [`Rgba`]: an opaque 8-bit-per-channel color.
//! - [`Bounds`]: a half-open rectangle `[bottom_left, top_right)` with area,
//!   containment, overlap, and intersection queries.
//!
//! The grid has its origin at the bottom-left; `px` grows to the right and
//! `py` grows upwards. Nothing here validates corner ordering; that is the
//! job of the blocks built on top (see `blockcanvas_tree`).
//!
//! ## Features
//!
//! - `kurbo`: `From<Bounds> for kurbo::Rect`, for renderers built on kurbo.
//!
//! # Example
//!
//! ```rust
//! use blockcanvas_geom::{Bounds, Point};
//!
//! let canvas = Bounds::new(Point::ZERO, Point::new(400, 400));
//! let half = Bounds::new(Point::ZERO, Point::new(200, 400));
//!
//! assert!(canvas.contains(&half));
//! assert_eq!(half.size(), Point::new(200, 400));
//! assert_eq!(half.area() * 2, canvas.area());
//! assert!(half.contains_point(Point::new(199, 0)));
//! assert!(!half.contains_point(Point::new(200, 0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod bounds;
mod color;
mod point;

pub use bounds::Bounds;
pub use color::Rgba;
pub use point::{Point, Size};
