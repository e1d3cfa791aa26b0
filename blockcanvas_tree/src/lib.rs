// Copyright 2026 the Blockcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=blockcanvas_tree --heading-base-level=0

//! Blockcanvas Tree: the block model of a rectangle-cutting canvas.
//!
//! A canvas starts as one block and is repeatedly cut, merged, recolored, and
//! swapped. This crate is the state those moves operate on:
//!
//! - [`SimpleBlock`]: a single-colored rectangle, the unit of coloring.
//! - [`ComplexBlock`]: a rectangle made of an ordered list of [`SimpleBlock`]s.
//! - [`Block`]: either of the two, with the shared accessors (`id`, corners,
//!   `size`, `children`).
//! - [`validate_tiling`]: checks that a list of blocks partitions a rectangle.
//! - [`Canvas`]: owns the top-level blocks and applies edits as
//!   all-or-nothing replacements.
//!
//! It does not interpret moves, render pixels, or score canvases.
//!
//! ## Geometry
//!
//! Coordinates are integers with the origin at the bottom-left (see
//! [`blockcanvas_geom`]). A block covers the half-open rectangle
//! `[bottom_left, top_right)`, so blocks that share an edge do not overlap.
//! Both constructors reject corners that are out of order on either axis
//! with [`BlockError::InvalidBlockGeometry`]; zero-width or zero-height
//! blocks are accepted by the constructors and rejected by tiling checks.
//!
//! ## Shape of the tree
//!
//! The tree is at most two levels deep: a composite's children are always
//! leaves. [`Block::children`] therefore flattens any block in one step, and
//! a leaf's children are the leaf itself:
//!
//! ```rust
//! use blockcanvas_tree::{Block, ComplexBlock, Point, Rgba, SimpleBlock};
//!
//! let red = Rgba::new(255, 0, 0, 255);
//! let blue = Rgba::new(0, 0, 255, 255);
//!
//! let leaf = SimpleBlock::new("0", Point::new(0, 0), Point::new(10, 10), Rgba::WHITE)?;
//! assert_eq!(leaf.size(), Point::new(10, 10));
//! assert_eq!(leaf.children().len(), 1);
//!
//! let composite = ComplexBlock::new(
//!     "1",
//!     Point::new(0, 0),
//!     Point::new(10, 10),
//!     [
//!         SimpleBlock::new("1.0", Point::new(0, 0), Point::new(5, 10), red)?,
//!         SimpleBlock::new("1.1", Point::new(5, 0), Point::new(10, 10), blue)?,
//!     ],
//! )?;
//! composite.validate_tiling().expect("halves tile the square");
//!
//! let blocks = [Block::from(leaf), Block::from(composite)];
//! let leaves: usize = blocks.iter().map(|b| b.children().len()).sum();
//! assert_eq!(leaves, 3);
//!
//! assert!(SimpleBlock::new("2", Point::new(5, 5), Point::new(3, 3), red).is_err());
//! # Ok::<(), blockcanvas_tree::BlockError>(())
//! ```
//!
//! ## Immutability
//!
//! Blocks have no setters. An edit builds new blocks and hands them to
//! [`Canvas::replace`] or [`Canvas::replace_many`], which check ids and tiling
//! before swapping them in. Since nothing is mutated after construction,
//! blocks are `Send + Sync` and can be shared read-only freely.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for rejected constructions and edits.
//! - `kurbo`: enables `From<Bounds> for kurbo::Rect` in [`blockcanvas_geom`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod block;
mod canvas;
mod error;
mod id;
mod logging;
mod tiling;

pub use block::{Block, BlockKind, ComplexBlock, SimpleBlock};
pub use canvas::Canvas;
pub use error::{BlockError, CanvasError, TilingError};
pub use id::BlockId;
pub use tiling::{Tile, validate_tiling};

pub use blockcanvas_geom::{Bounds, Point, Rgba, Size};
