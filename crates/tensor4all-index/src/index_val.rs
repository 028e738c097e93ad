//! An [`Index`] paired with one concrete value.

use std::fmt;

use crate::error::{IndexError, Result};
use crate::index::Index;

/// An index together with a value `val` in `[1, index.dim()]`.
///
/// Two `IndexVal`s are equal when both the index and the value match. An
/// `IndexVal` compares equal to an [`Index`] when its embedded index does,
/// whatever the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct IndexVal {
    /// The index the value lives on.
    pub index: Index,
    /// 1-based value, or 0 when unset.
    pub val: usize,
}

impl IndexVal {
    /// Pair `index` with `val`, checking `1 <= val <= index.dim()`.
    pub fn new(index: Index, val: usize) -> Result<Self> {
        if val == 0 || val > index.dim() {
            return Err(IndexError::ValueOutOfRange {
                val,
                dim: index.dim(),
            });
        }
        Ok(Self { index, val })
    }

    /// Dimension of the embedded index.
    pub fn dim(&self) -> usize {
        self.index.dim()
    }

    /// Whether the embedded index is the null index.
    pub fn is_null(&self) -> bool {
        self.index.is_null()
    }

    /// Whether the embedded index was explicitly constructed.
    pub fn is_valid(&self) -> bool {
        self.index.is_valid()
    }
}

impl PartialEq<Index> for IndexVal {
    fn eq(&self, other: &Index) -> bool {
        self.index == *other
    }
}

impl PartialEq<IndexVal> for Index {
    fn eq(&self, other: &IndexVal) -> bool {
        *self == other.index
    }
}

impl fmt::Display for IndexVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.index, self.val)
    }
}
