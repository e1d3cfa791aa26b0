// Copyright 2026 the Blockcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Block identifiers.

use alloc::format;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;

/// Stable identifier of a block.
///
/// Ids are dotted paths such as `"0"`, `"0.1"`, or `"3.0.2"`. A block never
/// picks its own id: whoever builds a block (a cut, a merge, a canvas) is
/// responsible for handing out ids that are not already in use.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId(String);

impl BlockId {
    /// Wrap an id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id is the empty string. Blocks refuse empty ids.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The id of the `index`-th product of cutting this block: `"{self}.{index}"`.
    ///
    /// ```
    /// use blockcanvas_tree::BlockId;
    ///
    /// let root = BlockId::from("0");
    /// assert_eq!(root.child(3).child(1).as_str(), "0.3.1");
    /// ```
    pub fn child(&self, index: usize) -> Self {
        Self(format!("{}.{index}", self.0))
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for BlockId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&BlockId> for BlockId {
    fn from(id: &BlockId) -> Self {
        id.clone()
    }
}

impl Borrow<str> for BlockId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BlockId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for BlockId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BlockId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
