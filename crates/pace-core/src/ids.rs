//! Category identity.
//!
//! A `CategoryId` is an opaque, externally supplied handle for one kind of
//! paced event (an ore vein, a crystal cluster, a wave of enemies, …).  The
//! scheduler keys its plans by it and iterates them in ascending `CategoryId`
//! order, so the numeric value also fixes callback delivery order.
//!
//! Ids must be stable and unique for as long as a plan is registered under
//! them; the scheduler never allocates or recycles them itself.

use std::fmt;

/// Identity of one event category.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryId(pub u32);

impl CategoryId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CategoryId({})", self.0)
    }
}

impl From<u32> for CategoryId {
    #[inline(always)]
    fn from(n: u32) -> CategoryId {
        CategoryId(n)
    }
}

impl From<CategoryId> for usize {
    #[inline(always)]
    fn from(id: CategoryId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for CategoryId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<CategoryId, Self::Error> {
        u32::try_from(n).map(CategoryId)
    }
}
