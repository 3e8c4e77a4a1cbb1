use clap::Parser;
use miette::Result;
use symbols::cli::Cli;
use symbols::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    symbols::cli::draw::run(cli.draw, &printer)?;

    Ok(())
}
