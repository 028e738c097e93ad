//! Error types for index construction, prime-level algebra and persistence

use thiserror::Error;

use crate::index_type::IndexType;

/// Result type for index operations
pub type Result<T> = std::result::Result<T, IndexError>;

/// Errors that can occur when building, priming or (de)serializing indices
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// `All` and `NullIndex` are reserved and cannot label a constructed index
    #[error("Constructing Index with type {0} disallowed")]
    InvalidCategory(IndexType),

    /// An index must have at least one value
    #[error("Index dimension must be at least 1, got {0}")]
    InvalidDimension(usize),

    /// The increment would drive the prime level below zero
    #[error("Negative primeLevel: {current} + ({increment}) < 0")]
    NegativePrimeLevel {
        /// Prime level before the increment
        current: u32,
        /// Requested increment
        increment: i32,
    },

    /// The increment would exceed the representable prime level
    #[error("Prime level overflow: {current} + {increment}")]
    PrimeLevelOverflow {
        /// Prime level before the increment
        current: u32,
        /// Requested increment
        increment: i32,
    },

    /// An index value lies outside `[1, dim]`
    #[error("Index value {val} out of range [1, {dim}]")]
    ValueOutOfRange {
        /// The rejected value
        val: usize,
        /// Dimension of the index
        dim: usize,
    },

    /// A stored index could not be decoded or does not describe a valid index
    #[error("Serialization mismatch: {0}")]
    SerializationMismatch(String),

    /// Writing an index to a stream failed
    #[error("Failed to write index: {0}")]
    Write(String),

    /// The process-wide id generator was already seeded
    #[error("Global index id generator is already initialized")]
    GeneratorAlreadyInitialized,
}
