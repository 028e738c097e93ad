//! Identifier generation for dynamic index identity.
//!
//! Every named [`Index`](crate::Index) draws a fresh 64-bit [`IndexId`] from a
//! random generator. Two indices are the same leg iff their ids match, so ids
//! are random tokens rather than content hashes; a collision is astronomically
//! unlikely but not structurally prevented.
//!
//! The process-wide generator is created lazily on first use and never reset.
//! It sits behind a mutex, so indices may be constructed from any thread. Code
//! that wants isolated or reproducible sequences can own an [`IdGenerator`] and
//! pass it to [`IndexBuilder::build_with`](crate::IndexBuilder::build_with).

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Mutex, OnceLock, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{IndexError, Result};

/// Runtime identifier of an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct IndexId(pub u64);

impl IndexId {
    /// Identifier carried by the null (default-constructed) index.
    pub const NULL: IndexId = IndexId(0);

    /// Whether this is the null sentinel.
    pub fn is_null(self) -> bool {
        self == Self::NULL
    }
}

impl fmt::Display for IndexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How an [`IdGenerator`] is seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdSeed {
    /// Wall-clock seconds plus the process id.
    #[default]
    TimeAndPid,
    /// A fixed seed, for reproducible id sequences.
    Fixed(u64),
    /// Seed from operating-system entropy.
    Entropy,
}

impl IdSeed {
    fn kind(self) -> &'static str {
        match self {
            IdSeed::TimeAndPid => "time_and_pid",
            IdSeed::Fixed(_) => "fixed",
            IdSeed::Entropy => "entropy",
        }
    }
}

/// Options for creating an [`IdGenerator`].
///
/// # Example
///
/// ```
/// use tensor4all_index::{IdGenerator, IdGeneratorOptions};
///
/// let mut a = IdGenerator::new(IdGeneratorOptions::fixed(7));
/// let mut b = IdGenerator::new(IdGeneratorOptions::fixed(7));
/// assert_eq!(a.generate(), b.generate());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdGeneratorOptions {
    /// Seeding strategy.
    pub seed: IdSeed,
}

impl IdGeneratorOptions {
    /// Options with a fixed seed.
    pub fn fixed(seed: u64) -> Self {
        Self {
            seed: IdSeed::Fixed(seed),
        }
    }

    /// Options seeded from operating-system entropy.
    pub fn entropy() -> Self {
        Self {
            seed: IdSeed::Entropy,
        }
    }

    /// Set the seeding strategy.
    pub fn with_seed(mut self, seed: IdSeed) -> Self {
        self.seed = seed;
        self
    }
}

/// Source of unique index identifiers.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    rng: ChaCha8Rng,
}

impl IdGenerator {
    /// Create a generator seeded according to `options`.
    pub fn new(options: IdGeneratorOptions) -> Self {
        let rng = match options.seed {
            IdSeed::TimeAndPid => ChaCha8Rng::seed_from_u64(time_and_pid_seed()),
            IdSeed::Fixed(seed) => ChaCha8Rng::seed_from_u64(seed),
            IdSeed::Entropy => ChaCha8Rng::from_entropy(),
        };
        debug!(seed = options.seed.kind(); "Seeded index id generator");
        Self { rng }
    }

    /// Draw the next identifier. Never returns [`IndexId::NULL`].
    pub fn generate(&mut self) -> IndexId {
        loop {
            let id: u64 = self.rng.gen();
            if id != 0 {
                return IndexId(id);
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(IdGeneratorOptions::default())
    }
}

fn time_and_pid_seed() -> u64 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    secs.wrapping_add(u64::from(std::process::id()))
}

static GLOBAL_GENERATOR: OnceLock<Mutex<IdGenerator>> = OnceLock::new();

fn global_generator() -> &'static Mutex<IdGenerator> {
    GLOBAL_GENERATOR.get_or_init(|| Mutex::new(IdGenerator::default()))
}

/// Seed the process-wide generator before any index is constructed.
///
/// Fails with [`IndexError::GeneratorAlreadyInitialized`] once the generator
/// exists, either from an earlier call or because an index was already built.
pub fn configure_global_generator(options: IdGeneratorOptions) -> Result<()> {
    let mut installed = false;
    GLOBAL_GENERATOR.get_or_init(|| {
        installed = true;
        Mutex::new(IdGenerator::new(options))
    });
    if installed {
        info!(seed = options.seed.kind(); "Configured global index id generator");
        Ok(())
    } else {
        Err(IndexError::GeneratorAlreadyInitialized)
    }
}

/// Draw an identifier from the process-wide generator.
pub fn generate_id() -> IndexId {
    global_generator()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .generate()
}
