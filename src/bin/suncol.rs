fn main() -> anyhow::Result<()> {
    suncol::cli::run_cli()
}
