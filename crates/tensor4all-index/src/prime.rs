//! Prime-level capability traits and their non-mutating free functions.
//!
//! [`Index`] and [`IndexVal`] implement every trait here. A new index-like
//! type joins the prime algebra by implementing them; the free functions then
//! work for it unchanged.
//!
//! ```
//! use tensor4all_index::{map_prime, noprime, prime, Index, IndexType};
//!
//! let i = Index::new("i", 3).unwrap();
//! let ip = prime(&i, 2).unwrap();
//! assert_eq!(ip.prime_level(), 2);
//! assert_eq!(i.prime_level(), 0);
//!
//! assert_eq!(noprime(&ip, IndexType::All), i);
//! assert_eq!(map_prime(&i, 0, 5, IndexType::All).prime_level(), 5);
//! ```

use crate::error::Result;
use crate::index::Index;
use crate::index_type::IndexType;
use crate::index_val::IndexVal;

/// Types whose prime level can be incremented.
pub trait Prime {
    /// Add `increment` to the prime level.
    fn prime(&mut self, increment: i32) -> Result<&mut Self>;

    /// Add `increment` to the prime level if the category matches `category`.
    fn prime_category(&mut self, category: IndexType, increment: i32) -> Result<&mut Self>;
}

/// Types whose prime level can be reset.
pub trait NoPrime {
    /// Reset the prime level to zero if the category matches `category`.
    fn noprime(&mut self, category: IndexType) -> &mut Self;
}

/// Types whose prime level can be relabeled.
pub trait MapPrime {
    /// Move prime level `old_level` to `new_level` if the category matches.
    fn map_prime(&mut self, old_level: u32, new_level: u32, category: IndexType) -> &mut Self;
}

/// Types that can be conjugated.
pub trait Dag {
    /// Conjugate in place.
    fn dag(&mut self) -> &mut Self;
}

impl Prime for Index {
    fn prime(&mut self, increment: i32) -> Result<&mut Self> {
        Index::prime(self, increment)
    }

    fn prime_category(&mut self, category: IndexType, increment: i32) -> Result<&mut Self> {
        Index::prime_category(self, category, increment)
    }
}

impl NoPrime for Index {
    fn noprime(&mut self, category: IndexType) -> &mut Self {
        Index::noprime(self, category)
    }
}

impl MapPrime for Index {
    fn map_prime(&mut self, old_level: u32, new_level: u32, category: IndexType) -> &mut Self {
        Index::map_prime(self, old_level, new_level, category)
    }
}

impl Dag for Index {
    fn dag(&mut self) -> &mut Self {
        Index::dag(self)
    }
}

impl Prime for IndexVal {
    fn prime(&mut self, increment: i32) -> Result<&mut Self> {
        self.index.prime(increment)?;
        Ok(self)
    }

    fn prime_category(&mut self, category: IndexType, increment: i32) -> Result<&mut Self> {
        self.index.prime_category(category, increment)?;
        Ok(self)
    }
}

impl NoPrime for IndexVal {
    fn noprime(&mut self, category: IndexType) -> &mut Self {
        self.index.noprime(category);
        self
    }
}

impl MapPrime for IndexVal {
    fn map_prime(&mut self, old_level: u32, new_level: u32, category: IndexType) -> &mut Self {
        self.index.map_prime(old_level, new_level, category);
        self
    }
}

impl Dag for IndexVal {
    fn dag(&mut self) -> &mut Self {
        self.index.dag();
        self
    }
}

/// Copy of `item` with its prime level raised by `increment`.
pub fn prime<T: Prime + Clone>(item: &T, increment: i32) -> Result<T> {
    let mut res = item.clone();
    res.prime(increment)?;
    Ok(res)
}

/// Copy of `item` with its prime level raised by `increment` if its category matches.
pub fn prime_category<T: Prime + Clone>(
    item: &T,
    category: IndexType,
    increment: i32,
) -> Result<T> {
    let mut res = item.clone();
    res.prime_category(category, increment)?;
    Ok(res)
}

/// Copy of `item` with prime level zero if its category matches.
pub fn noprime<T: NoPrime + Clone>(item: &T, category: IndexType) -> T {
    let mut res = item.clone();
    res.noprime(category);
    res
}

/// Copy of `item` with prime level `new_level` if it was at `old_level`
/// and its category matches. Otherwise an unchanged copy.
pub fn map_prime<T: MapPrime + Clone>(
    item: &T,
    old_level: u32,
    new_level: u32,
    category: IndexType,
) -> T {
    let mut res = item.clone();
    res.map_prime(old_level, new_level, category);
    res
}

/// Conjugated copy of `item`.
pub fn dag<T: Dag + Clone>(item: &T) -> T {
    let mut res = item.clone();
    res.dag();
    res
}
