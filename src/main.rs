use anyhow::Result;

fn main() -> Result<()> {
    numterm::cli::run_cli()
}
