// Copyright 2026 the Blockcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The owner of a canvas's top-level blocks.

use alloc::string::ToString;
use alloc::vec::Vec;

use blockcanvas_geom::{Bounds, Point, Rgba};
use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

use crate::block::{Block, SimpleBlock};
use crate::error::CanvasError;
use crate::id::BlockId;
use crate::logging::{debug, trace};
use crate::tiling::validate_tiling;

/// A canvas: a rectangle partitioned into top-level blocks.
///
/// The canvas owns its blocks and keeps three things true between calls:
///
/// - the top-level blocks tile [`Canvas::bounds`] exactly,
/// - every composite's leaves tile the composite,
/// - every id reachable from the canvas (top-level blocks and their leaves)
///   is unique.
///
/// Blocks are never edited in place. The only structural edit is
/// [`Canvas::replace_many`] (and its single-block form [`Canvas::replace`]),
/// which swaps a rectangular group of blocks for new ones covering the same
/// region. Cuts, merges, recolors, and swaps are all expressed this way by
/// the layer that interprets moves.
///
/// ## Example
///
/// ```rust
/// use blockcanvas_tree::{Canvas, Point, Rgba, SimpleBlock};
///
/// let mut canvas = Canvas::new(400, 400, Rgba::WHITE)?;
///
/// // Cut the root block vertically at x = 100.
/// let red = Rgba::new(255, 0, 0, 255);
/// let left = SimpleBlock::new("0.0", Point::new(0, 0), Point::new(100, 400), red)?;
/// let right = SimpleBlock::new("0.1", Point::new(100, 0), Point::new(400, 400), Rgba::WHITE)?;
/// let root = canvas.replace("0", vec![left.into(), right.into()])?;
///
/// assert_eq!(root.id(), "0");
/// assert_eq!(canvas.len(), 2);
/// assert_eq!(canvas.leaf_at(Point::new(99, 0)).unwrap().color(), red);
/// # Ok::<(), blockcanvas_tree::CanvasError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Canvas {
    bounds: Bounds,
    /// Top-level blocks, in paint order.
    blocks: Vec<Block>,
    /// Top-level id -> index into `blocks`.
    positions: HashMap<BlockId, usize>,
    /// Every id reachable from the canvas.
    ids: HashSet<BlockId>,
    /// `None` once the numeric ids are used up.
    next_top_level: Option<u64>,
}

impl Canvas {
    /// A `width` x `height` canvas holding one block `"0"` painted `background`.
    ///
    /// # Errors
    ///
    /// Negative sizes fail with [`CanvasError::Block`]; a zero size fails the
    /// tiling check because the root block would be empty.
    pub fn new(width: i32, height: i32, background: Rgba) -> Result<Self, CanvasError> {
        let root = SimpleBlock::new("0", Point::ZERO, Point::new(width, height), background)?;
        Self::from_blocks(root.bounds(), [Block::from(root)])
    }

    /// A canvas covering `bounds` with the given top-level blocks.
    ///
    /// # Errors
    ///
    /// - [`CanvasError::InvalidBounds`] if `bounds` is inverted.
    /// - [`CanvasError::DuplicateId`] if an id is reachable twice.
    /// - [`CanvasError::Tiling`] if the blocks do not tile `bounds`, or a
    ///   composite's leaves do not tile the composite.
    pub fn from_blocks(
        bounds: Bounds,
        blocks: impl IntoIterator<Item = Block>,
    ) -> Result<Self, CanvasError> {
        if bounds.is_inverted() {
            debug!(?bounds, "rejected canvas with inverted bounds");
            return Err(CanvasError::InvalidBounds(bounds));
        }
        let blocks: Vec<Block> = blocks.into_iter().collect();

        let mut ids = HashSet::new();
        for id in blocks.iter().flat_map(Block::reachable_ids) {
            if !ids.insert(id.clone()) {
                debug!(%id, "rejected canvas with duplicate id");
                return Err(CanvasError::DuplicateId(id.clone()));
            }
        }
        validate_structure(bounds, &blocks)?;

        let positions = blocks
            .iter()
            .enumerate()
            .map(|(i, b)| (b.id().clone(), i))
            .collect();
        let next_top_level = blocks
            .iter()
            .filter_map(|b| b.id().as_str().parse::<u64>().ok())
            .max()
            .map_or(Some(0), |n| n.checked_add(1));

        Ok(Self {
            bounds,
            blocks,
            positions,
            ids,
            next_top_level,
        })
    }

    /// The canvas rectangle.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Canvas width.
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Canvas height.
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of top-level blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the canvas has no blocks. Only an empty canvas rectangle can.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The top-level block with this id.
    pub fn get(&self, id: &str) -> Option<&Block> {
        self.positions.get(id).map(|&i| &self.blocks[i])
    }

    /// Whether `id` names any block on the canvas, top-level or leaf.
    pub fn contains_id(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Top-level blocks, in paint order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Every leaf on the canvas, in paint order.
    pub fn leaves(&self) -> impl Iterator<Item = &SimpleBlock> + '_ {
        self.blocks.iter().flat_map(Block::children)
    }

    /// The top-level block covering `point`.
    pub fn block_at(&self, point: Point) -> Option<&Block> {
        self.blocks.iter().find(|b| b.bounds().contains_point(point))
    }

    /// The leaf covering `point`; the last-painted one if leaves overlap.
    pub fn leaf_at(&self, point: Point) -> Option<&SimpleBlock> {
        self.block_at(point)?
            .children()
            .iter()
            .rev()
            .find(|leaf| leaf.bounds().contains_point(point))
    }

    /// Hand out an unused top-level id for a merge product.
    ///
    /// Ids are decimal counters continuing after the largest numeric
    /// top-level id the canvas started with. Each call returns a new id even
    /// if the previous one was never used. Returns `None` once the counter
    /// has passed `u64::MAX`.
    pub fn next_top_level_id(&mut self) -> Option<BlockId> {
        loop {
            let n = self.next_top_level?;
            self.next_top_level = n.checked_add(1);
            let id = BlockId::new(n.to_string());
            if !self.ids.contains(&id) {
                return Some(id);
            }
        }
    }

    /// Replace the top-level block `id` with `replacements`, returning it.
    ///
    /// See [`Canvas::replace_many`] for the checks applied.
    ///
    /// # Errors
    ///
    /// As for [`Canvas::replace_many`].
    pub fn replace(&mut self, id: &str, replacements: Vec<Block>) -> Result<Block, CanvasError> {
        self.replace_many(&[id], replacements)?
            .pop()
            .ok_or_else(|| CanvasError::UnknownBlock(id.into()))
    }

    /// Replace the top-level blocks `ids` with `replacements`.
    ///
    /// The blocks named by `ids` must together form a rectangle, and
    /// `replacements` must tile that rectangle. Replacements may reuse ids of
    /// the blocks (and leaves) being removed, but no other id already on the
    /// canvas. The replacements take the paint position of the earliest
    /// removed block.
    ///
    /// The edit is all-or-nothing: on error the canvas is unchanged. On
    /// success the removed blocks are returned in the order of `ids`.
    ///
    /// # Errors
    ///
    /// - [`CanvasError::UnknownBlock`] if an id is not a top-level block.
    /// - [`CanvasError::DuplicateId`] if `ids` repeats a block, or the
    ///   replacements use an id that is taken.
    /// - [`CanvasError::NotRectangular`] if the removed blocks leave holes in
    ///   their enclosing rectangle.
    /// - [`CanvasError::Tiling`] if the replacements do not tile the region.
    pub fn replace_many<S: AsRef<str>>(
        &mut self,
        ids: &[S],
        replacements: Vec<Block>,
    ) -> Result<Vec<Block>, CanvasError> {
        let slots = self.resolve(ids)?;
        self.check_replacements(&slots, &replacements)?;
        if slots.is_empty() {
            return Ok(Vec::new());
        }

        let mut sorted = slots.clone();
        sorted.sort_unstable();
        let first = sorted[0];
        let added = replacements.len();

        let mut removed: Vec<Option<Block>> = Vec::with_capacity(sorted.len());
        let mut replacements = replacements.into_iter();
        let old = core::mem::take(&mut self.blocks);
        self.blocks.reserve(old.len() + added);
        for (i, block) in old.into_iter().enumerate() {
            if i == first {
                self.blocks.extend(replacements.by_ref());
            }
            if sorted.binary_search(&i).is_ok() {
                removed.push(Some(block));
            } else {
                self.blocks.push(block);
            }
        }

        // `removed[k]` belongs to `sorted[k]`; hand them back in `ids` order.
        let removed: Vec<Block> = slots
            .iter()
            .filter_map(|slot| {
                let k = sorted.binary_search(slot).ok()?;
                removed[k].take()
            })
            .collect();

        for block in &removed {
            self.positions.remove(block.id());
            for id in block.reachable_ids() {
                self.ids.remove(id);
            }
        }
        for block in &self.blocks[first..first + added] {
            self.ids.extend(block.reachable_ids().cloned());
        }
        for (i, block) in self.blocks.iter().enumerate().skip(first) {
            self.positions.insert(block.id().clone(), i);
        }

        trace!(
            removed = removed.len(),
            added,
            top_level = self.blocks.len(),
            "replaced blocks"
        );
        Ok(removed)
    }

    /// Map ids to slots, rejecting unknown and repeated ids.
    fn resolve<S: AsRef<str>>(
        &self,
        ids: &[S],
    ) -> Result<SmallVec<[usize; 2]>, CanvasError> {
        let mut slots = SmallVec::with_capacity(ids.len());
        for id in ids {
            let id = id.as_ref();
            let Some(&slot) = self.positions.get(id) else {
                debug!(%id, "edit names an unknown block");
                return Err(CanvasError::UnknownBlock(id.into()));
            };
            if slots.contains(&slot) {
                debug!(%id, "edit names a block twice");
                return Err(CanvasError::DuplicateId(id.into()));
            }
            slots.push(slot);
        }
        Ok(slots)
    }

    /// Check that `replacements` can stand in for the blocks at `slots`.
    fn check_replacements(
        &self,
        slots: &[usize],
        replacements: &[Block],
    ) -> Result<(), CanvasError> {
        let region = slots
            .iter()
            .map(|&i| self.blocks[i].bounds())
            .reduce(|a, b| a.union(&b))
            .unwrap_or_default();
        // Top-level blocks are disjoint, so the group is a rectangle exactly
        // when its area fills the enclosing one.
        let covered: i64 = slots.iter().map(|&i| self.blocks[i].bounds().area()).sum();
        if covered != region.area() {
            debug!(?region, covered, "replaced blocks are not rectangular");
            return Err(CanvasError::NotRectangular { region, covered });
        }

        let released: HashSet<&BlockId> = slots
            .iter()
            .flat_map(|&i| self.blocks[i].reachable_ids())
            .collect();
        let mut incoming: HashSet<&BlockId> = HashSet::new();
        for id in replacements.iter().flat_map(Block::reachable_ids) {
            let taken = self.ids.contains(id) && !released.contains(id);
            if taken || !incoming.insert(id) {
                debug!(%id, "replacement reuses a taken id");
                return Err(CanvasError::DuplicateId(id.clone()));
            }
        }

        validate_structure(region, replacements)
    }
}

/// Top-level tiling plus each composite's own tiling.
fn validate_structure(region: Bounds, blocks: &[Block]) -> Result<(), CanvasError> {
    if let Err(err) = validate_tiling(region, blocks) {
        debug!(%err, "blocks do not tile their region");
        return Err(err.into());
    }
    for complex in blocks.iter().filter_map(Block::as_complex) {
        if let Err(err) = complex.validate_tiling() {
            debug!(id = %complex.id(), %err, "composite leaves do not tile it");
            return Err(err.into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::ComplexBlock;
    use crate::error::TilingError;
    use alloc::vec;

    const RED: Rgba = Rgba::new(255, 0, 0, 255);
    const BLUE: Rgba = Rgba::new(0, 0, 255, 255);

    fn p(px: i32, py: i32) -> Point {
        Point::new(px, py)
    }

    fn leaf(id: &str, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) -> SimpleBlock {
        SimpleBlock::new(id, p(x0, y0), p(x1, y1), color).unwrap()
    }

    /// Root cut vertically at x = 4 on a 10x10 canvas.
    fn halves() -> Canvas {
        let mut canvas = Canvas::new(10, 10, Rgba::WHITE).unwrap();
        canvas
            .replace(
                "0",
                vec![
                    leaf("0.0", 0, 0, 4, 10, RED).into(),
                    leaf("0.1", 4, 0, 10, 10, BLUE).into(),
                ],
            )
            .unwrap();
        canvas
    }

    #[test]
    fn new_canvas_has_one_root_block() {
        let canvas = Canvas::new(400, 300, Rgba::WHITE).unwrap();
        assert_eq!(canvas.len(), 1);
        assert_eq!((canvas.width(), canvas.height()), (400, 300));
        let root = canvas.get("0").unwrap();
        assert_eq!(root.size(), p(400, 300));
        assert_eq!(root.as_simple().unwrap().color(), Rgba::WHITE);
    }

    #[test]
    fn degenerate_canvas_sizes_are_rejected() {
        assert!(matches!(
            Canvas::new(-1, 10, Rgba::WHITE),
            Err(CanvasError::Block(_))
        ));
        assert!(matches!(
            Canvas::new(0, 10, Rgba::WHITE),
            Err(CanvasError::Tiling(TilingError::EmptyPiece { .. }))
        ));
    }

    #[test]
    fn cut_replaces_the_root_in_place() {
        let canvas = halves();
        assert_eq!(canvas.len(), 2);
        assert!(canvas.get("0").is_none());
        assert!(!canvas.contains_id("0"));
        assert_eq!(canvas.block_at(p(3, 9)).unwrap().id(), "0.0");
        assert_eq!(canvas.block_at(p(4, 0)).unwrap().id(), "0.1");
        assert!(canvas.block_at(p(10, 0)).is_none());
        let ids: Vec<&str> = canvas.leaves().map(|l| l.id().as_str()).collect();
        assert_eq!(ids, ["0.0", "0.1"]);
    }

    #[test]
    fn merge_builds_a_composite_from_two_blocks() {
        let mut canvas = halves();
        let merged_id = canvas.next_top_level_id().unwrap();
        assert_eq!(merged_id, "1");

        let leaves = ["0.0", "0.1"]
            .into_iter()
            .flat_map(|id| canvas.get(id).unwrap().children().to_vec())
            .collect::<Vec<_>>();
        let merged = ComplexBlock::new(merged_id, p(0, 0), p(10, 10), leaves).unwrap();
        let removed = canvas
            .replace_many(&["0.1", "0.0"], vec![merged.into()])
            .unwrap();

        let removed_ids: Vec<&str> = removed.iter().map(|b| b.id().as_str()).collect();
        assert_eq!(removed_ids, ["0.1", "0.0"]);
        assert_eq!(canvas.len(), 1);
        assert!(canvas.contains_id("1"));
        // The leaves keep their ids inside the composite.
        assert!(canvas.contains_id("0.0"));
        assert_eq!(canvas.get("0.0"), None);
        assert_eq!(canvas.leaf_at(p(5, 5)).unwrap().color(), BLUE);
        assert_eq!(canvas.next_top_level_id().unwrap(), "2");
    }

    #[test]
    fn recolor_may_reuse_the_removed_id() {
        let mut canvas = halves();
        let recolored = canvas.get("0.0").unwrap().as_simple().unwrap().recolored(BLUE);
        let old = canvas.replace("0.0", vec![recolored.into()]).unwrap();
        assert_eq!(old.as_simple().unwrap().color(), RED);
        assert_eq!(canvas.leaf_at(p(0, 0)).unwrap().color(), BLUE);
        // Paint order is kept.
        assert_eq!(canvas.blocks()[0].id(), "0.0");
    }

    #[test]
    fn swap_exchanges_colors_of_equal_blocks() {
        let mut canvas = Canvas::new(10, 10, Rgba::WHITE).unwrap();
        canvas
            .replace(
                "0",
                vec![
                    leaf("0.0", 0, 0, 5, 10, RED).into(),
                    leaf("0.1", 5, 0, 10, 10, BLUE).into(),
                ],
            )
            .unwrap();
        canvas
            .replace_many(
                &["0.0", "0.1"],
                vec![
                    leaf("0.0", 0, 0, 5, 10, BLUE).into(),
                    leaf("0.1", 5, 0, 10, 10, RED).into(),
                ],
            )
            .unwrap();
        assert_eq!(canvas.leaf_at(p(0, 0)).unwrap().color(), BLUE);
        assert_eq!(canvas.leaf_at(p(9, 0)).unwrap().color(), RED);
    }

    #[test]
    fn rejected_edits_leave_the_canvas_unchanged() {
        let mut canvas = halves();
        let before: Vec<Block> = canvas.blocks().to_vec();

        // Unknown block.
        assert_eq!(
            canvas.replace("9", vec![]),
            Err(CanvasError::UnknownBlock("9".into()))
        );
        // Same block named twice.
        assert_eq!(
            canvas.replace_many(&["0.0", "0.0"], vec![]),
            Err(CanvasError::DuplicateId("0.0".into()))
        );
        // Replacement does not cover the region.
        assert!(matches!(
            canvas.replace("0.0", vec![leaf("0.0.0", 0, 0, 4, 5, RED).into()]),
            Err(CanvasError::Tiling(TilingError::Gap { .. }))
        ));
        // Replacement steals an id from elsewhere on the canvas.
        assert_eq!(
            canvas.replace("0.0", vec![leaf("0.1", 0, 0, 4, 10, RED).into()]),
            Err(CanvasError::DuplicateId("0.1".into()))
        );
        // Composite whose leaves leave a hole.
        let holey = ComplexBlock::new("5", p(0, 0), p(4, 10), [leaf("5.0", 0, 0, 4, 9, RED)]);
        assert!(matches!(
            canvas.replace("0.0", vec![holey.unwrap().into()]),
            Err(CanvasError::Tiling(TilingError::Gap { .. }))
        ));

        assert_eq!(canvas.blocks(), before.as_slice());
        assert!(canvas.contains_id("0.0") && canvas.contains_id("0.1"));
    }

    #[test]
    fn non_rectangular_group_is_rejected() {
        let mut canvas = Canvas::new(10, 10, Rgba::WHITE).unwrap();
        canvas
            .replace(
                "0",
                vec![
                    leaf("0.0", 0, 0, 5, 5, RED).into(),
                    leaf("0.1", 5, 0, 10, 5, RED).into(),
                    leaf("0.2", 5, 5, 10, 10, RED).into(),
                    leaf("0.3", 0, 5, 5, 10, RED).into(),
                ],
            )
            .unwrap();
        assert_eq!(
            canvas.replace_many(&["0.0", "0.2"], vec![]),
            Err(CanvasError::NotRectangular {
                region: Bounds::new(p(0, 0), p(10, 10)),
                covered: 50,
            })
        );
    }

    #[test]
    fn from_blocks_checks_ids_and_tiling() {
        let bounds = Bounds::new(p(0, 0), p(10, 10));
        let dup = [
            Block::from(leaf("a", 0, 0, 5, 10, RED)),
            Block::from(
                ComplexBlock::new("b", p(5, 0), p(10, 10), [leaf("a", 5, 0, 10, 10, RED)])
                    .unwrap(),
            ),
        ];
        assert_eq!(
            Canvas::from_blocks(bounds, dup).unwrap_err(),
            CanvasError::DuplicateId("a".into())
        );

        let short = [Block::from(leaf("a", 0, 0, 5, 10, RED))];
        assert!(matches!(
            Canvas::from_blocks(bounds, short),
            Err(CanvasError::Tiling(TilingError::Gap { .. }))
        ));

        let inverted = Bounds::new(p(10, 10), p(0, 0));
        assert_eq!(
            Canvas::from_blocks(inverted, []).unwrap_err(),
            CanvasError::InvalidBounds(inverted)
        );
    }

    #[test]
    fn top_level_counter_skips_ids_in_use() {
        let bounds = Bounds::new(p(0, 0), p(10, 10));
        let blocks = [
            Block::from(leaf("3", 0, 0, 5, 10, RED)),
            Block::from(
                ComplexBlock::new("x", p(5, 0), p(10, 10), [leaf("4", 5, 0, 10, 10, RED)])
                    .unwrap(),
            ),
        ];
        let mut canvas = Canvas::from_blocks(bounds, blocks).unwrap();
        assert_eq!(canvas.next_top_level_id().unwrap(), "5");
    }

    #[test]
    fn top_level_counter_runs_out_at_u64_max() {
        let bounds = Bounds::new(p(0, 0), p(10, 10));
        let last = u64::MAX.to_string();
        let mut canvas =
            Canvas::from_blocks(bounds, [Block::from(leaf(&last, 0, 0, 10, 10, RED))]).unwrap();
        assert_eq!(canvas.next_top_level_id(), None);
        assert_eq!(canvas.next_top_level_id(), None);

        let second_last = (u64::MAX - 1).to_string();
        let blocks = [
            Block::from(leaf(&second_last, 0, 0, 5, 10, RED)),
            Block::from(leaf("x", 5, 0, 10, 10, RED)),
        ];
        let mut canvas = Canvas::from_blocks(bounds, blocks).unwrap();
        assert_eq!(canvas.next_top_level_id().unwrap(), last.as_str());
        assert_eq!(canvas.next_top_level_id(), None);
    }
}
