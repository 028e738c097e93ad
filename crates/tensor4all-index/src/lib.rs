//! ITensors-style tensor index identity.
//!
//! An [`Index`] labels one leg of a tensor. Indices are plain values: cloning
//! copies every field, and two indices are "the same leg" exactly when their
//! randomly generated [`IndexId`]s match. Prime levels distinguish deliberate
//! duplicates of a leg, and [`IndexVal`] pairs an index with one of its values.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeSet;
//! use tensor4all_index::{noprime, prime, Index, IndexType};
//!
//! let s = Index::new_with_category("s", 2, IndexType::Site).unwrap();
//! let l = Index::new("l", 4).unwrap();
//!
//! // A primed copy is a different key but the same leg.
//! let sp = prime(&s, 1).unwrap();
//! assert_ne!(s, sp);
//! assert!(s.noprime_eq(&sp));
//! assert_eq!(noprime(&sp, IndexType::All), s);
//!
//! // Sorted by dimension first.
//! let set: BTreeSet<_> = [l.clone(), sp.clone(), s.clone()].into_iter().collect();
//! assert_eq!(set.iter().last(), Some(&l));
//!
//! // Values along an index.
//! let v = s.at(2).unwrap();
//! assert!(v == s);
//! assert!(s.at(3).is_err());
//! ```

pub mod error;
pub mod id;
pub mod index;
pub mod index_type;
pub mod index_val;
pub mod prime;
pub mod serialization;

pub use error::{IndexError, Result};
pub use id::{
    configure_global_generator, generate_id, IdGenerator, IdGeneratorOptions, IdSeed, IndexId,
};
pub use index::{nameint, prime_marks, showm, Index, IndexBuilder};
pub use index_type::IndexType;
pub use index_val::IndexVal;
pub use prime::{dag, map_prime, noprime, prime, prime_category, Dag, MapPrime, NoPrime, Prime};
pub use serialization::{read_indices, serialized_size, write_indices};
