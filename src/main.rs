//! Omok GUI
//!
//! Play five-in-a-row against the bot.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use omok::ui::{GameState, OmokApp};
use omok::GameConfig;

#[derive(Parser, Debug)]
#[command(name = "omok", about = "Five-in-a-row against a heuristic bot")]
struct Args {
    /// TOML config file
    #[arg(short, long, default_value = "omok.toml")]
    config: PathBuf,

    /// Seed for the bot's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Let the human open each round
    #[arg(long)]
    human_first: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let mut config = GameConfig::load_or_default(&args.config)?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    if args.human_first {
        config.engine_first = false;
    }
    config.validate()?;

    let state = GameState::new(&config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 950.0])
            .with_min_inner_size([600.0, 650.0])
            .with_title("Omok"),
        ..Default::default()
    };

    eframe::run_native(
        "Omok",
        options,
        Box::new(move |cc| Ok(Box::new(OmokApp::new(cc, state)))),
    )?;
    Ok(())
}
