// Copyright 2026 the Blockcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for block construction, tiling checks, and canvas edits.

use blockcanvas_geom::{Bounds, Point};

use crate::id::BlockId;

/// Why a block could not be constructed.
///
/// Construction either yields a complete block or one of these; there is no
/// partially built block to observe.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BlockError {
    /// The bottom-left corner lies after the top-right corner on some axis.
    #[error("invalid block geometry for `{id}`: {bottom_left} does not precede {top_right}")]
    InvalidBlockGeometry {
        /// Id the block would have had.
        id: BlockId,
        /// Requested lower-left corner.
        bottom_left: Point,
        /// Requested upper-right corner.
        top_right: Point,
    },
    /// The corners are in order but lie more than `i32::MAX` apart on some
    /// axis, so the block's size cannot be represented.
    #[error("block `{id}` from {bottom_left} to {top_right} is too large")]
    ExtentOverflow {
        /// Id the block would have had.
        id: BlockId,
        /// Requested lower-left corner.
        bottom_left: Point,
        /// Requested upper-right corner.
        top_right: Point,
    },
    /// The block was given an empty id.
    #[error("block id must not be empty")]
    EmptyId,
}

/// Why a set of pieces does not partition a rectangle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TilingError {
    /// A piece reaches outside the parent rectangle.
    #[error("piece `{id}` at {bounds:?} lies outside {parent:?}")]
    OutOfBounds {
        /// Offending piece.
        id: BlockId,
        /// Its bounds.
        bounds: Bounds,
        /// The rectangle being tiled.
        parent: Bounds,
    },
    /// A piece covers no cells.
    #[error("piece `{id}` has no area")]
    EmptyPiece {
        /// Offending piece.
        id: BlockId,
    },
    /// Two pieces share at least one cell.
    #[error("pieces `{first}` and `{second}` overlap at {shared:?}")]
    Overlap {
        /// Earlier piece in the input order.
        first: BlockId,
        /// Later piece in the input order.
        second: BlockId,
        /// The doubly covered region.
        shared: Bounds,
    },
    /// The pieces leave part of the parent uncovered.
    #[error("pieces cover {covered} of {expected} cells")]
    Gap {
        /// Area of the parent rectangle.
        expected: i64,
        /// Total area of the pieces.
        covered: i64,
    },
}

/// Why a canvas rejected an operation. The canvas is unchanged afterwards.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CanvasError {
    /// A block could not be built.
    #[error(transparent)]
    Block(#[from] BlockError),
    /// Blocks do not exactly cover the region they replace.
    #[error("blocks do not tile their region: {0}")]
    Tiling(#[from] TilingError),
    /// The canvas rectangle has inverted corners.
    #[error("canvas bounds {0:?} are inverted")]
    InvalidBounds(Bounds),
    /// The blocks being replaced do not together form a rectangle.
    #[error("replaced blocks cover {covered} cells of their enclosing {region:?}")]
    NotRectangular {
        /// Smallest rectangle enclosing the replaced blocks.
        region: Bounds,
        /// Total area of the replaced blocks.
        covered: i64,
    },
    /// No top-level block has this id.
    #[error("no block with id `{0}`")]
    UnknownBlock(BlockId),
    /// An id is already in use on the canvas.
    #[error("block id `{0}` is already in use")]
    DuplicateId(BlockId),
}
