//! # uberta-core
//!
//! Reference data and record schemas shared by the uBERTa start-codon models.
//!
//! ## Main Components
//!
//! - **`VALID_CHROM`**: chromosome names accepted by the pipeline
//! - **`CHROM_FLANKS`**: per-chromosome flank sizes in base pairs
//! - **`ColNames`**: column labels of annotated start-codon interval tables
//! - **`ModelSetup`, `RunSetup`, `OptSetup`, `StopSetup`**: training setup records
//! - **`Scores`**: evaluation metrics
//! - **`TrainingConfig`**: run/optimizer/stopping setup loaded from TOML (`config` feature)
//!
//! ## Example
//!
//! ```rust
//! use uberta_core::models::{chrom_flank, is_valid_chrom, ColNames, Flank};
//!
//! assert!(is_valid_chrom("chr21"));
//! assert_eq!(chrom_flank("chr21"), Some(Flank::new(5010000, 10000)));
//! assert_eq!(chrom_flank("chr0"), None);
//!
//! let cols = ColNames::default();
//! assert_eq!(cols.chrom, "Chrom");
//! ```
//!
#[cfg(feature = "config")]
pub mod config;
pub mod errors;
pub mod models;

// re-export things
#[cfg(feature = "config")]
pub use config::{ConfigError, TrainingConfig};
pub use errors::*;
pub use models::*;
