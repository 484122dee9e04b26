use anyhow::Result;

fn main() -> Result<()> {
    uberta_cli::init_tracing();
    uberta_cli::run()
}
