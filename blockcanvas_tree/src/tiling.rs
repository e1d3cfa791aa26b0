// Copyright 2026 the Blockcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checking that a set of blocks partitions a rectangle.
//!
//! Block constructors only check their own corners. Whoever assembles a list
//! of blocks for a region (a composite's leaves, the products of a cut, the
//! top level of a canvas) calls [`validate_tiling`] to make sure the list
//! covers the region exactly once.

use alloc::vec::Vec;

use blockcanvas_geom::Bounds;
use smallvec::SmallVec;

use crate::block::{Block, SimpleBlock};
use crate::error::TilingError;
use crate::id::BlockId;

/// Something with an id that occupies a rectangle.
pub trait Tile {
    /// Identifier used in error reports.
    fn id(&self) -> &BlockId;

    /// Occupied rectangle.
    fn bounds(&self) -> Bounds;
}

impl Tile for SimpleBlock {
    fn id(&self) -> &BlockId {
        Self::id(self)
    }

    fn bounds(&self) -> Bounds {
        Self::bounds(self)
    }
}

impl Tile for Block {
    fn id(&self) -> &BlockId {
        Self::id(self)
    }

    fn bounds(&self) -> Bounds {
        Self::bounds(self)
    }
}

/// Check that `pieces` partition `parent` without gaps or overlaps.
///
/// Checks run in this order, and the first failure is returned:
///
/// 1. every piece lies inside `parent` ([`TilingError::OutOfBounds`]),
/// 2. every piece covers at least one cell ([`TilingError::EmptyPiece`]),
/// 3. no two pieces share a cell ([`TilingError::Overlap`], reporting the
///    overlapping pair that comes first in input order),
/// 4. the pieces' areas add up to the parent's ([`TilingError::Gap`]).
///
/// Given the first three, equal area means full coverage. An empty parent is
/// tiled by an empty list.
///
/// # Example
///
/// ```
/// use blockcanvas_tree::{Bounds, Point, Rgba, SimpleBlock, TilingError, validate_tiling};
///
/// let parent = Bounds::new(Point::new(0, 0), Point::new(10, 10));
/// let left = SimpleBlock::new("0.0", Point::new(0, 0), Point::new(5, 10), Rgba::WHITE)?;
/// let right = SimpleBlock::new("0.1", Point::new(5, 0), Point::new(10, 10), Rgba::WHITE)?;
///
/// assert_eq!(validate_tiling(parent, &[left.clone(), right]), Ok(()));
/// assert_eq!(
///     validate_tiling(parent, &[left]),
///     Err(TilingError::Gap { expected: 100, covered: 50 })
/// );
/// # Ok::<(), blockcanvas_tree::BlockError>(())
/// ```
pub fn validate_tiling<T: Tile>(parent: Bounds, pieces: &[T]) -> Result<(), TilingError> {
    for piece in pieces {
        let bounds = piece.bounds();
        if !parent.contains(&bounds) {
            return Err(TilingError::OutOfBounds {
                id: piece.id().clone(),
                bounds,
                parent,
            });
        }
        if bounds.is_empty() {
            return Err(TilingError::EmptyPiece {
                id: piece.id().clone(),
            });
        }
    }

    if let Some((first, second, shared)) = first_overlap(pieces) {
        return Err(TilingError::Overlap {
            first: pieces[first].id().clone(),
            second: pieces[second].id().clone(),
            shared,
        });
    }

    // Disjoint and contained, so this cannot exceed the parent's area.
    let covered: i64 = pieces.iter().map(|p| p.bounds().area()).sum();
    let expected = parent.area();
    if covered != expected {
        return Err(TilingError::Gap { expected, covered });
    }
    Ok(())
}

/// Find the overlapping pair `(i, j)`, `i < j`, that is smallest in input order.
///
/// Sweeps pieces by left edge, keeping the pieces whose horizontal extent is
/// still open at the sweep position.
fn first_overlap<T: Tile>(pieces: &[T]) -> Option<(usize, usize, Bounds)> {
    let mut order: Vec<usize> = (0..pieces.len()).collect();
    order.sort_by_key(|&i| pieces[i].bounds().bottom_left().px);

    let mut active: SmallVec<[usize; 8]> = SmallVec::new();
    let mut found: Option<(usize, usize, Bounds)> = None;
    for &i in &order {
        let bounds = pieces[i].bounds();
        let left = bounds.bottom_left().px;
        active.retain(|j| pieces[*j].bounds().top_right().px > left);
        for &j in &active {
            let Some(shared) = pieces[j].bounds().intersection(&bounds) else {
                continue;
            };
            let pair = (i.min(j), i.max(j), shared);
            found = match found {
                Some(prev) if (prev.0, prev.1) <= (pair.0, pair.1) => Some(prev),
                _ => Some(pair),
            };
        }
        active.push(i);
    }
    found
}
