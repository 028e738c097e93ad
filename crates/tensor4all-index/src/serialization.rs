//! Binary persistence of indices.
//!
//! Layout (little-endian, fixed width), one index after another:
//!
//! ```text
//! id           u64
//! prime_level  u32
//! dim          u64
//! category     u32   (Link=0, Site=1, All=2, NullIndex=3, Xind=4 .. Vind=8)
//! name         u64 byte length, then UTF-8 bytes
//! ```
//!
//! Index sets are written as a `u64` count followed by the entries.
//! Reading validates every record; data that does not describe a valid or
//! null index is rejected with [`IndexError::SerializationMismatch`].

use bincode::Options;
use log::warn;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

use crate::error::{IndexError, Result};
use crate::id::IndexId;
use crate::index::Index;
use crate::index_type::IndexType;

/// Upper bound on one encoded value, so a corrupt length prefix cannot
/// trigger a huge allocation.
const MAX_ENCODED_LEN: u64 = 1 << 26;

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
        .with_limit(MAX_ENCODED_LEN)
}

/// Serializes a value into a writer.
fn serialize_into<W, S>(writer: W, value: &S) -> Result<()>
where
    W: Write,
    S: Serialize + ?Sized,
{
    options().serialize_into(writer, value).map_err(|e| {
        warn!("Failed to write index data: {e}");
        IndexError::Write(e.to_string())
    })
}

/// Deserializes a value from a reader.
fn deserialize_from<R, D>(reader: R) -> Result<D>
where
    R: Read,
    D: serde::de::DeserializeOwned,
{
    options().deserialize_from(reader).map_err(mismatch)
}

fn mismatch(e: bincode::Error) -> IndexError {
    warn!("Rejected stored index data: {e}");
    IndexError::SerializationMismatch(e.to_string())
}

/// Stored form of an [`Index`], validated before it becomes one.
#[derive(Deserialize)]
pub(crate) struct IndexRecord {
    id: IndexId,
    prime_level: u32,
    dim: usize,
    category: IndexType,
    name: String,
}

impl TryFrom<IndexRecord> for Index {
    type Error = IndexError;

    fn try_from(record: IndexRecord) -> Result<Self> {
        if let Some(reason) = record.defect() {
            return Err(IndexError::SerializationMismatch(reason));
        }
        Ok(Index::from_parts(
            record.id,
            record.prime_level,
            record.dim,
            record.category,
            record.name,
        ))
    }
}

impl IndexRecord {
    /// Why this record cannot be an index, if it cannot.
    fn defect(&self) -> Option<String> {
        if self.dim == 0 {
            return Some("index dimension 0".to_string());
        }
        match self.category {
            IndexType::All => Some("index category All".to_string()),
            IndexType::NullIndex if !self.id.is_null() => {
                Some(format!("null index with id {}", self.id))
            }
            IndexType::NullIndex => None,
            c if self.id.is_null() => Some(format!("{c} index with null id")),
            _ => None,
        }
    }
}

impl Index {
    /// Write this index to `writer`.
    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        serialize_into(writer, self)
    }

    /// Read an index written by [`Index::write`], identifier included.
    ///
    /// The record is not checked against indices already in memory: a stream
    /// that pairs a known id with a different dimension decodes fine but breaks
    /// the agreement between `==` and ordering for that pair.
    pub fn read<R: Read>(reader: R) -> Result<Self> {
        deserialize_from(reader)
    }

    /// Encode this index as bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(serialized_size(self)? as usize);
        self.write(&mut buf)?;
        Ok(buf)
    }

    /// Decode an index from exactly the bytes produced by [`Index::to_bytes`].
    ///
    /// Trailing bytes are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        options().deserialize(bytes).map_err(mismatch)
    }
}

/// Number of bytes [`Index::write`] produces for `index`.
pub fn serialized_size(index: &Index) -> Result<u64> {
    options()
        .serialized_size(index)
        .map_err(|e| IndexError::Write(e.to_string()))
}

/// Write a set of indices: a `u64` count followed by each index.
pub fn write_indices<W: Write>(writer: W, indices: &[Index]) -> Result<()> {
    serialize_into(writer, indices)
}

/// Read a set of indices written by [`write_indices`].
pub fn read_indices<R: Read>(reader: R) -> Result<Vec<Index>> {
    deserialize_from(reader)
}
