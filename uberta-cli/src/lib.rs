use anyhow::{Result, bail};
use tracing::error;
use tracing_subscriber::EnvFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "uberta-base";
    pub const LOG_ENV: &str = "UBERTA_LOG";
}

/// Set up a stderr subscriber filtered by `UBERTA_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(consts::LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    // a subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

///
/// Entry point of the `uberta-base` binary.
///
/// The uBERTa reference data is a library; running it on its own is always
/// an error.
///
pub fn run() -> Result<()> {
    error!(
        bin = consts::BIN_NAME,
        version = consts::VERSION,
        "refusing to run reference data module directly"
    );
    bail!(
        "{} only provides reference data for the uBERTa pipeline and cannot be run directly; depend on `uberta-core` instead",
        consts::BIN_NAME
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_run_always_fails() {
        init_tracing();
        let err = run().unwrap_err();
        assert_eq!(err.to_string().starts_with(consts::BIN_NAME), true);
    }
}
