//! The [`Index`] type: identity, prime levels, ordering and rendering.
//!
//! An index labels one leg of a tensor. Its identity is a random [`IndexId`]
//! assigned at construction and shared by every clone, so two tensors holding
//! clones of the same index contract over it, while two independently built
//! indices never do, even when name, dimension and category coincide.
//!
//! The prime level is the only mutable part. It lets a leg be duplicated
//! deliberately (`s` and `s'` are the same leg at different prime levels):
//!
//! - **Equality** (`==`, `Hash`): identifier and prime level
//! - **[`Index::noprime_eq`]**: identifier only
//! - **Ordering** (`Ord`): dimension, then identifier, then prime level
//!
//! ```
//! use tensor4all_index::{Index, IndexType};
//!
//! let s = Index::new_with_category("s1", 2, IndexType::Site).unwrap();
//! let mut sp = s.clone();
//! sp.prime(1).unwrap();
//!
//! assert_ne!(s, sp);
//! assert!(s.noprime_eq(&sp));
//! assert_eq!(sp.to_string(), "s1'(2)");
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{IndexError, Result};
use crate::id::{generate_id, IdGenerator, IndexId};
use crate::index_type::IndexType;
use crate::index_val::IndexVal;

/// A labeled, fixed-dimension tensor leg.
///
/// The default value is the null index: identifier 0, category
/// [`IndexType::NullIndex`], dimension 1, prime level 0. It stands for
/// "no index" and reports `false` from [`Index::is_valid`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "crate::serialization::IndexRecord")]
pub struct Index {
    id: IndexId,
    prime_level: u32,
    dim: usize,
    category: IndexType,
    name: String,
}

impl Index {
    /// The null index (same as [`Index::default`]).
    pub fn null() -> Self {
        Self {
            id: IndexId::NULL,
            prime_level: 0,
            dim: 1,
            category: IndexType::NullIndex,
            name: String::new(),
        }
    }

    /// Create a `Link` index with a fresh identifier and prime level 0.
    pub fn new(name: impl Into<String>, dim: usize) -> Result<Self> {
        Self::builder(name).with_dim(dim).build()
    }

    /// Create an index of the given category with a fresh identifier and prime level 0.
    pub fn new_with_category(
        name: impl Into<String>,
        dim: usize,
        category: IndexType,
    ) -> Result<Self> {
        Self::builder(name)
            .with_dim(dim)
            .with_category(category)
            .build()
    }

    /// Start building an index. Defaults: dimension 1, `Link`, prime level 0.
    pub fn builder(name: impl Into<String>) -> IndexBuilder {
        IndexBuilder::new(name)
    }

    /// Reassemble an index from stored fields without drawing a new identifier.
    pub(crate) fn from_parts(
        id: IndexId,
        prime_level: u32,
        dim: usize,
        category: IndexType,
        name: String,
    ) -> Self {
        Self {
            id,
            prime_level,
            dim,
            category,
            name,
        }
    }

    /// Raw identifier, for external hashing or keying.
    pub fn id(&self) -> IndexId {
        self.id
    }

    /// Number of values this index can take.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Current prime level.
    pub fn prime_level(&self) -> u32 {
        self.prime_level
    }

    /// Category tag fixed at construction.
    pub fn category(&self) -> IndexType {
        self.category
    }

    /// Display name including prime marks, e.g. `s1''`.
    pub fn name(&self) -> String {
        let mut name = self.name.clone();
        name.push_str(&prime_marks(self.prime_level));
        name
    }

    /// Display name without prime marks.
    pub fn raw_name(&self) -> &str {
        &self.name
    }

    /// Whether this is the null (default-constructed) index.
    pub fn is_null(&self) -> bool {
        self.category == IndexType::NullIndex
    }

    /// Whether this index was explicitly constructed.
    pub fn is_valid(&self) -> bool {
        !self.is_null()
    }

    /// Overwrite the prime level.
    pub fn set_prime_level(&mut self, level: u32) -> &mut Self {
        self.prime_level = level;
        self
    }

    /// Add `increment` to the prime level.
    ///
    /// Fails, leaving the index untouched, if the result would be negative or
    /// would not fit in `u32`.
    pub fn prime(&mut self, increment: i32) -> Result<&mut Self> {
        let next = i64::from(self.prime_level) + i64::from(increment);
        if next < 0 {
            return Err(IndexError::NegativePrimeLevel {
                current: self.prime_level,
                increment,
            });
        }
        self.prime_level = u32::try_from(next).map_err(|_| IndexError::PrimeLevelOverflow {
            current: self.prime_level,
            increment,
        })?;
        Ok(self)
    }

    /// Add `increment` to the prime level if this index matches `category`
    /// (`IndexType::All` matches every index).
    pub fn prime_category(&mut self, category: IndexType, increment: i32) -> Result<&mut Self> {
        if self.category.matches(category) {
            self.prime(increment)
        } else {
            Ok(self)
        }
    }

    /// Reset the prime level to zero if this index matches `category`.
    pub fn noprime(&mut self, category: IndexType) -> &mut Self {
        if self.category.matches(category) {
            self.prime_level = 0;
        }
        self
    }

    /// Change the prime level from `old_level` to `new_level`.
    ///
    /// No effect unless the current level equals `old_level` and this index
    /// matches `category`.
    pub fn map_prime(&mut self, old_level: u32, new_level: u32, category: IndexType) -> &mut Self {
        if self.prime_level == old_level && self.category.matches(category) {
            self.prime_level = new_level;
        }
        self
    }

    /// Whether `other` is a copy of this index at any prime level.
    pub fn noprime_eq(&self, other: &Index) -> bool {
        self.id == other.id
    }

    /// Pair this index with the value `val` (1-based).
    pub fn at(&self, val: usize) -> Result<IndexVal> {
        IndexVal::new(self.clone(), val)
    }

    /// Conjugate this index.
    ///
    /// Indices here carry no arrow direction, so this has no effect.
    pub fn dag(&mut self) -> &mut Self {
        self
    }
}

impl Default for Index {
    fn default() -> Self {
        Self::null()
    }
}

impl PartialEq for Index {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.prime_level == other.prime_level
    }
}

impl Eq for Index {}

impl Hash for Index {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.prime_level.hash(state);
    }
}

// Agrees with `Eq` only while every index sharing an id also shares a dimension,
// which holds for constructed indices but not for arbitrary decoded data.
impl Ord for Index {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dim
            .cmp(&other.dim)
            .then_with(|| self.id.cmp(&other.id))
            .then_with(|| self.prime_level.cmp(&other.prime_level))
    }
}

impl PartialOrd for Index {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.dim)
    }
}

/// Builder for named indices.
///
/// ```
/// use tensor4all_index::{Index, IndexType};
///
/// let i = Index::builder("x")
///     .with_dim(3)
///     .with_category(IndexType::Xind)
///     .with_prime_level(2)
///     .build()
///     .unwrap();
/// assert_eq!(i.name(), "x''");
/// ```
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    name: String,
    dim: usize,
    category: IndexType,
    prime_level: u32,
}

impl IndexBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dim: 1,
            category: IndexType::default(),
            prime_level: 0,
        }
    }

    /// Set the dimension (at least 1).
    pub fn with_dim(mut self, dim: usize) -> Self {
        self.dim = dim;
        self
    }

    /// Set the category; `All` and `NullIndex` fail at build time.
    pub fn with_category(mut self, category: IndexType) -> Self {
        self.category = category;
        self
    }

    /// Set the initial prime level.
    pub fn with_prime_level(mut self, prime_level: u32) -> Self {
        self.prime_level = prime_level;
        self
    }

    /// Build the index with an identifier from the process-wide generator.
    pub fn build(self) -> Result<Index> {
        self.validate()?;
        Ok(self.finish(generate_id()))
    }

    /// Build the index with an identifier from `generator`.
    pub fn build_with(self, generator: &mut IdGenerator) -> Result<Index> {
        self.validate()?;
        Ok(self.finish(generator.generate()))
    }

    fn validate(&self) -> Result<()> {
        if self.category.is_reserved() {
            debug!(
                name = self.name.as_str(),
                category = self.category.as_str();
                "Rejected index construction"
            );
            return Err(IndexError::InvalidCategory(self.category));
        }
        if self.dim == 0 {
            debug!(name = self.name.as_str(); "Rejected index construction with zero dimension");
            return Err(IndexError::InvalidDimension(self.dim));
        }
        Ok(())
    }

    fn finish(self, id: IndexId) -> Index {
        Index::from_parts(id, self.prime_level, self.dim, self.category, self.name)
    }
}

/// Prime marks for `level`: one `'` per level up to three, `'N` beyond.
pub fn prime_marks(level: u32) -> String {
    match level {
        0 => String::new(),
        1..=3 => "'".repeat(level as usize),
        n => format!("'{n}"),
    }
}

/// Dimension of `index` as shown in diagnostics, e.g. `m=4`.
pub fn showm(index: &Index) -> String {
    nameint("m=", index.dim())
}

/// Concatenate a name prefix and a number, e.g. `nameint("s", 3) == "s3"`.
pub fn nameint(prefix: &str, n: usize) -> String {
    format!("{prefix}{n}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::IdGeneratorOptions;

    #[test]
    fn test_prime_marks() {
        assert_eq!(prime_marks(0), "");
        assert_eq!(prime_marks(1), "'");
        assert_eq!(prime_marks(3), "'''");
        assert_eq!(prime_marks(4), "'4");
        assert_eq!(prime_marks(12), "'12");
    }

    #[test]
    fn test_showm_and_nameint() {
        let i = Index::new("a", 5).unwrap();
        assert_eq!(showm(&i), "m=5");
        assert_eq!(nameint("s", 3), "s3");
    }

    #[test]
    fn test_build_with_explicit_generator() {
        let mut g1 = IdGenerator::new(IdGeneratorOptions::fixed(99));
        let mut g2 = IdGenerator::new(IdGeneratorOptions::fixed(99));
        let a = Index::builder("a").with_dim(2).build_with(&mut g1).unwrap();
        let b = Index::builder("b").with_dim(3).build_with(&mut g2).unwrap();
        // Same seed, same first draw.
        assert_eq!(a.id(), b.id());
        assert!(a.noprime_eq(&b));
    }

    #[test]
    fn test_failed_prime_leaves_level_untouched() {
        let mut i = Index::builder("i").with_prime_level(1).build().unwrap();
        assert!(i.prime(-2).is_err());
        assert_eq!(i.prime_level(), 1);

        let mut j = Index::builder("j").with_prime_level(u32::MAX).build().unwrap();
        assert_eq!(
            j.prime(1).unwrap_err(),
            IndexError::PrimeLevelOverflow {
                current: u32::MAX,
                increment: 1
            }
        );
        assert_eq!(j.prime_level(), u32::MAX);
    }

    #[test]
    fn test_dag_is_noop() {
        let i = Index::new("i", 2).unwrap();
        let mut j = i.clone();
        j.dag();
        assert_eq!(i, j);
        assert_eq!(i.dim(), j.dim());
    }
}
