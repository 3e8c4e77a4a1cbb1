//! Draw command implementation.
//!
//! Renders one picture and writes it as PNG.

use std::path::PathBuf;

use clap::Args;

use crate::config::{Config, DEFAULT_COUNT, DEFAULT_OUTPUT};
use crate::error::{Result, SymbolsError};
use crate::generate::RandomSampler;
use crate::output::{display_path, plural, Printer};
use crate::render::{captioned_canvas, draw_shapes, Picture};

/// Draw a picture of random symbols
#[derive(Args, Debug)]
pub struct DrawArgs {
    /// PNG output file
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Number of objects
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Initialize with a random seed taken from the clock
    #[arg(short = 's', long)]
    pub reseed: bool,

    /// Print the generated shapes as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl From<&DrawArgs> for Config {
    fn from(args: &DrawArgs) -> Self {
        Self {
            output: args.output.clone(),
            count: args.count,
            reseed: args.reseed,
        }
    }
}

pub fn run(args: DrawArgs, printer: &Printer) -> Result<()> {
    let config = Config::from(&args);

    // Canvas and typeface come first so a font failure aborts before seeding.
    let mut canvas = captioned_canvas()?;

    let mut sampler = RandomSampler::new();
    if config.reseed {
        let seed = sampler.reseed();
        printer.info("Seeded", &format!("from clock ({})", seed));
    }

    printer.status(
        "Drawing",
        &format!(
            "{} on a {}x{} canvas",
            plural(config.count, "shape", "shapes"),
            canvas.width(),
            canvas.height()
        ),
    );

    let shapes = draw_shapes(&mut canvas, config.count, &mut sampler);
    let picture = Picture { canvas, shapes };
    picture.save_png(&config.output)?;

    if args.json {
        let json = serde_json::to_string_pretty(&picture.shapes).map_err(|e| SymbolsError::Json {
            message: e.to_string(),
        })?;
        println!("{}", json);
    }

    printer.status("Finished", &display_path(&config.output));

    Ok(())
}
