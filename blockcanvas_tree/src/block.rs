// Copyright 2026 the Blockcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leaf and composite blocks.

use alloc::vec::Vec;
use core::{iter, slice};

use blockcanvas_geom::{Bounds, Point, Rgba, Size};

use crate::error::{BlockError, TilingError};
use crate::id::BlockId;
use crate::logging::debug;
use crate::tiling::validate_tiling;

/// Validate the id and corners shared by both block variants, returning the
/// bounds and the size to cache.
fn checked_bounds(
    id: &BlockId,
    bottom_left: Point,
    top_right: Point,
) -> Result<(Bounds, Size), BlockError> {
    let bounds = Bounds::new(bottom_left, top_right);
    if bounds.is_inverted() {
        debug!(%id, %bottom_left, %top_right, "rejected block with inverted corners");
        return Err(BlockError::InvalidBlockGeometry {
            id: id.clone(),
            bottom_left,
            top_right,
        });
    }
    let Some(size) = top_right.checked_diff(bottom_left) else {
        debug!(%id, %bottom_left, %top_right, "rejected block with oversized extent");
        return Err(BlockError::ExtentOverflow {
            id: id.clone(),
            bottom_left,
            top_right,
        });
    };
    if id.is_empty() {
        debug!(%bottom_left, %top_right, "rejected block with empty id");
        return Err(BlockError::EmptyId);
    }
    Ok((bounds, size))
}

/// A single-colored rectangle; the unit of coloring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleBlock {
    id: BlockId,
    bounds: Bounds,
    size: Size,
    color: Rgba,
}

impl SimpleBlock {
    /// Create a leaf covering `[bottom_left, top_right)` in `color`.
    ///
    /// Zero-width and zero-height leaves are accepted; corners that are out
    /// of order on either axis are not.
    ///
    /// # Errors
    ///
    /// - [`BlockError::InvalidBlockGeometry`] if `bottom_left` does not precede `top_right`.
    /// - [`BlockError::ExtentOverflow`] if the width or height does not fit in an `i32`.
    /// - [`BlockError::EmptyId`] if `id` is empty.
    pub fn new(
        id: impl Into<BlockId>,
        bottom_left: Point,
        top_right: Point,
        color: Rgba,
    ) -> Result<Self, BlockError> {
        let id = id.into();
        let (bounds, size) = checked_bounds(&id, bottom_left, top_right)?;
        Ok(Self {
            id,
            bounds,
            size,
            color,
        })
    }

    /// Identifier.
    pub fn id(&self) -> &BlockId {
        &self.id
    }

    /// Inclusive lower-left corner.
    pub fn bottom_left(&self) -> Point {
        self.bounds.bottom_left()
    }

    /// Exclusive upper-right corner.
    pub fn top_right(&self) -> Point {
        self.bounds.top_right()
    }

    /// Width and height, fixed at construction.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The covered rectangle.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Fill color.
    pub fn color(&self) -> Rgba {
        self.color
    }

    /// The leaf itself, as a one-element slice.
    pub fn children(&self) -> &[Self] {
        slice::from_ref(self)
    }

    /// A copy of this leaf painted `color`, keeping the id and bounds.
    #[must_use]
    pub fn recolored(&self, color: Rgba) -> Self {
        Self {
            color,
            ..self.clone()
        }
    }
}

/// A rectangle decomposed into an ordered list of leaves.
///
/// The order of the leaves is the order they are painted in and is kept
/// exactly as given. The constructor checks the outer corners only; whether
/// the leaves actually partition the rectangle is checked separately with
/// [`ComplexBlock::validate_tiling`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComplexBlock {
    id: BlockId,
    bounds: Bounds,
    size: Size,
    sub_blocks: Vec<SimpleBlock>,
}

impl ComplexBlock {
    /// Create a composite covering `[bottom_left, top_right)` made of `sub_blocks`.
    ///
    /// # Errors
    ///
    /// - [`BlockError::InvalidBlockGeometry`] if `bottom_left` does not precede `top_right`.
    /// - [`BlockError::ExtentOverflow`] if the width or height does not fit in an `i32`.
    /// - [`BlockError::EmptyId`] if `id` is empty.
    pub fn new(
        id: impl Into<BlockId>,
        bottom_left: Point,
        top_right: Point,
        sub_blocks: impl IntoIterator<Item = SimpleBlock>,
    ) -> Result<Self, BlockError> {
        let id = id.into();
        let (bounds, size) = checked_bounds(&id, bottom_left, top_right)?;
        Ok(Self {
            id,
            bounds,
            size,
            sub_blocks: sub_blocks.into_iter().collect(),
        })
    }

    /// Identifier.
    pub fn id(&self) -> &BlockId {
        &self.id
    }

    /// Inclusive lower-left corner.
    pub fn bottom_left(&self) -> Point {
        self.bounds.bottom_left()
    }

    /// Exclusive upper-right corner.
    pub fn top_right(&self) -> Point {
        self.bounds.top_right()
    }

    /// Width and height, fixed at construction.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The covered rectangle.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The leaves, in paint order.
    pub fn sub_blocks(&self) -> &[SimpleBlock] {
        &self.sub_blocks
    }

    /// The leaves, in paint order. Same as [`ComplexBlock::sub_blocks`].
    pub fn children(&self) -> &[SimpleBlock] {
        &self.sub_blocks
    }

    /// Take the leaves out, e.g. to rebuild them into a new composite.
    pub fn into_sub_blocks(self) -> Vec<SimpleBlock> {
        self.sub_blocks
    }

    /// Check that the leaves partition this block's rectangle exactly.
    ///
    /// # Errors
    ///
    /// Returns the first [`TilingError`] found.
    pub fn validate_tiling(&self) -> Result<(), TilingError> {
        validate_tiling(self.bounds, &self.sub_blocks)
    }
}

/// Which variant a [`Block`] is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// [`Block::Simple`].
    Simple,
    /// [`Block::Complex`].
    Complex,
}

/// A rectangular region of the canvas.
///
/// Code that walks a canvas should go through the shared accessors here
/// rather than matching on the variant. In particular [`Block::children`]
/// always yields leaves, so a single call flattens any block: composites
/// only ever hold [`SimpleBlock`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// A single-colored leaf.
    Simple(SimpleBlock),
    /// A composite of leaves.
    Complex(ComplexBlock),
}

impl Block {
    /// Which variant this is.
    pub fn kind(&self) -> BlockKind {
        match self {
            Self::Simple(_) => BlockKind::Simple,
            Self::Complex(_) => BlockKind::Complex,
        }
    }

    /// Identifier.
    pub fn id(&self) -> &BlockId {
        match self {
            Self::Simple(b) => b.id(),
            Self::Complex(b) => b.id(),
        }
    }

    /// Inclusive lower-left corner.
    pub fn bottom_left(&self) -> Point {
        self.bounds().bottom_left()
    }

    /// Exclusive upper-right corner.
    pub fn top_right(&self) -> Point {
        self.bounds().top_right()
    }

    /// Width and height, fixed at construction.
    pub fn size(&self) -> Size {
        match self {
            Self::Simple(b) => b.size(),
            Self::Complex(b) => b.size(),
        }
    }

    /// The covered rectangle.
    pub fn bounds(&self) -> Bounds {
        match self {
            Self::Simple(b) => b.bounds(),
            Self::Complex(b) => b.bounds(),
        }
    }

    /// The leaves making up this block: the leaf itself, or a composite's leaves in paint order.
    pub fn children(&self) -> &[SimpleBlock] {
        match self {
            Self::Simple(b) => b.children(),
            Self::Complex(b) => b.children(),
        }
    }

    /// Consume the block into its leaves.
    pub fn into_children(self) -> Vec<SimpleBlock> {
        match self {
            Self::Simple(b) => alloc::vec![b],
            Self::Complex(b) => b.into_sub_blocks(),
        }
    }

    /// The block's own id followed by the ids of a composite's leaves.
    pub fn reachable_ids(&self) -> impl Iterator<Item = &BlockId> + '_ {
        let leaves: &[SimpleBlock] = match self {
            Self::Simple(_) => &[],
            Self::Complex(b) => b.sub_blocks(),
        };
        iter::once(self.id()).chain(leaves.iter().map(SimpleBlock::id))
    }

    /// The leaf variant, if this is one.
    pub fn as_simple(&self) -> Option<&SimpleBlock> {
        match self {
            Self::Simple(b) => Some(b),
            Self::Complex(_) => None,
        }
    }

    /// The composite variant, if this is one.
    pub fn as_complex(&self) -> Option<&ComplexBlock> {
        match self {
            Self::Simple(_) => None,
            Self::Complex(b) => Some(b),
        }
    }
}

impl From<SimpleBlock> for Block {
    fn from(block: SimpleBlock) -> Self {
        Self::Simple(block)
    }
}

impl From<ComplexBlock> for Block {
    fn from(block: ComplexBlock) -> Self {
        Self::Complex(block)
    }
}
