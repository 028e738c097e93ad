//! Coarse category tags for indices.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of an index within a tensor network (ITensor's `IndexType`).
///
/// `All` is a query wildcard accepted by the prime-level filters, and `NullIndex`
/// marks a default-constructed index. Neither may label a constructed index.
///
/// The declaration order fixes the binary category code (`Link = 0`, ..., `Vind = 8`)
/// and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IndexType {
    /// Bond (virtual) index between two tensors.
    #[default]
    Link,
    /// Physical site index.
    Site,
    /// Wildcard that matches every category in filters.
    All,
    /// Category of the null (default-constructed) index.
    NullIndex,
    /// Auxiliary category X.
    Xind,
    /// Auxiliary category Y.
    Yind,
    /// Auxiliary category Z.
    Zind,
    /// Auxiliary category W.
    Wind,
    /// Auxiliary category V.
    Vind,
}

impl IndexType {
    /// All categories, in code order.
    pub const VARIANTS: [IndexType; 9] = [
        IndexType::Link,
        IndexType::Site,
        IndexType::All,
        IndexType::NullIndex,
        IndexType::Xind,
        IndexType::Yind,
        IndexType::Zind,
        IndexType::Wind,
        IndexType::Vind,
    ];

    /// Whether this category is reserved (`All` or `NullIndex`).
    pub fn is_reserved(self) -> bool {
        matches!(self, IndexType::All | IndexType::NullIndex)
    }

    /// Whether an index of category `self` is selected by `filter`.
    ///
    /// `All` selects everything; any other filter selects only its own category.
    pub fn matches(self, filter: IndexType) -> bool {
        filter == IndexType::All || self == filter
    }

    /// Name of the category as printed by [`fmt::Display`].
    pub fn as_str(self) -> &'static str {
        match self {
            IndexType::Link => "Link",
            IndexType::Site => "Site",
            IndexType::All => "All",
            IndexType::NullIndex => "NullIndex",
            IndexType::Xind => "Xind",
            IndexType::Yind => "Yind",
            IndexType::Zind => "Zind",
            IndexType::Wind => "Wind",
            IndexType::Vind => "Vind",
        }
    }
}

impl fmt::Display for IndexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
