pub mod draw;

use clap::Parser;

/// symbols - Random symbol picture generator
#[derive(Parser, Debug)]
#[command(name = "symbols")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub draw: draw::DrawArgs,
}
