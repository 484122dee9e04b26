pub mod chrom;
pub mod columns;
pub mod flank;
pub mod scores;
pub mod setup;

// re-export for cleaner imports
pub use self::chrom::{VALID_CHROM, canonical_chrom, is_valid_chrom};
pub use self::columns::ColNames;
pub use self::flank::{CHROM_FLANKS, Flank, chrom_flank, flank_map, try_chrom_flank};
pub use self::scores::Scores;
pub use self::setup::{ModelSetup, OptSetup, RunSetup, StopSetup};
