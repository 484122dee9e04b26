use std::fmt::{self, Display};
use std::sync::LazyLock;

use fxhash::FxHashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::chrom::is_valid_chrom;
use crate::errors::{ReferenceError, ReferenceResult};

///
/// Base-pair margins trimmed from either end of a chromosome
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Flank {
    pub upstream: u32,
    pub downstream: u32,
}

impl Flank {
    pub const fn new(upstream: u32, downstream: u32) -> Self {
        Flank {
            upstream,
            downstream,
        }
    }

    /// Combined size of both margins.
    pub fn total(&self) -> u64 {
        self.upstream as u64 + self.downstream as u64
    }
}

impl From<(u32, u32)> for Flank {
    fn from(value: (u32, u32)) -> Self {
        Flank::new(value.0, value.1)
    }
}

impl From<Flank> for (u32, u32) {
    fn from(value: Flank) -> Self {
        (value.upstream, value.downstream)
    }
}

impl Display for Flank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.upstream, self.downstream)
    }
}

///
/// Flank sizes per chromosome. Covers chr1-chr22, chrX and chrY; chr0 has no entry.
///
pub const CHROM_FLANKS: [(&str, Flank); 24] = [
    ("chr1", Flank::new(10000, 10000)),
    ("chr2", Flank::new(10000, 10000)),
    ("chr3", Flank::new(10000, 60000)),
    ("chr4", Flank::new(10000, 10000)),
    ("chr5", Flank::new(10000, 60000)),
    ("chr6", Flank::new(60000, 60000)),
    ("chr7", Flank::new(10000, 10000)),
    ("chr8", Flank::new(60000, 60000)),
    ("chr9", Flank::new(10000, 60000)),
    ("chr10", Flank::new(10000, 10000)),
    ("chr11", Flank::new(60000, 10000)),
    ("chr12", Flank::new(10000, 10000)),
    ("chr13", Flank::new(16000000, 10000)),
    ("chr14", Flank::new(16000000, 160000)),
    ("chr15", Flank::new(17000000, 10000)),
    ("chr16", Flank::new(10000, 110000)),
    ("chr17", Flank::new(60000, 10000)),
    ("chr18", Flank::new(10000, 110000)),
    ("chr19", Flank::new(60000, 10000)),
    ("chr20", Flank::new(60000, 110000)),
    ("chr21", Flank::new(5010000, 10000)),
    ("chr22", Flank::new(10510000, 10000)),
    ("chrX", Flank::new(10000, 10000)),
    ("chrY", Flank::new(10000, 10000)),
];

static FLANK_MAP: LazyLock<FxHashMap<&'static str, Flank>> =
    LazyLock::new(|| CHROM_FLANKS.iter().copied().collect());

/// Hash view over [`CHROM_FLANKS`], built on first use.
pub fn flank_map() -> &'static FxHashMap<&'static str, Flank> {
    &FLANK_MAP
}

/// Look up the flank sizes of a chromosome.
pub fn chrom_flank(chrom: &str) -> Option<Flank> {
    flank_map().get(chrom).copied()
}

///
/// Look up the flank sizes of a chromosome, distinguishing unknown names
/// from valid chromosomes that have no flank entry.
///
/// # Arguments
/// - chrom: chromosome name
///
/// # Returns
/// - the flank pair
/// - `ReferenceError::UnknownChromosome` if `chrom` is not a valid name
/// - `ReferenceError::MissingFlank` if `chrom` is valid but has no entry (chr0)
///
pub fn try_chrom_flank(chrom: &str) -> ReferenceResult<Flank> {
    if !is_valid_chrom(chrom) {
        return Err(ReferenceError::UnknownChromosome(chrom.to_string()));
    }
    chrom_flank(chrom).ok_or_else(|| ReferenceError::MissingFlank(chrom.to_string()))
}
