use crate::errors::{ReferenceError, ReferenceResult};

///
/// Chromosome names accepted by the uBERTa pipeline, in canonical order.
///
/// `chr0` is part of the set even though no flank sizes exist for it.
///
pub const VALID_CHROM: [&str; 25] = [
    "chr0", "chr1", "chr2", "chr3", "chr4", "chr5", "chr6", "chr7", "chr8", "chr9", "chr10",
    "chr11", "chr12", "chr13", "chr14", "chr15", "chr16", "chr17", "chr18", "chr19", "chr20",
    "chr21", "chr22", "chrX", "chrY",
];

/// Check if a chromosome name belongs to [`VALID_CHROM`].
pub fn is_valid_chrom(name: &str) -> bool {
    VALID_CHROM.contains(&name)
}

///
/// Resolve a chromosome name to its static entry in [`VALID_CHROM`].
///
/// # Arguments
/// - name: chromosome name, e.g. `chr7`
///
/// # Returns
/// - the canonical `&'static str`, or `ReferenceError::UnknownChromosome`
///
pub fn canonical_chrom(name: &str) -> ReferenceResult<&'static str> {
    VALID_CHROM
        .iter()
        .find(|c| **c == name)
        .copied()
        .ok_or_else(|| ReferenceError::UnknownChromosome(name.to_string()))
}
