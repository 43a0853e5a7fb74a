mod config;
mod ui;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use common::games::tictactoe::{Player, TicTacToeSessionSettings};
use common::{log, logger};
use eframe::egui;

use config::{Config, get_config_manager};
use ui::TicTacToeApp;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MarkArg {
    X,
    O,
}

impl From<MarkArg> for Player {
    fn from(mark: MarkArg) -> Self {
        match mark {
            MarkArg::X => Player::X,
            MarkArg::O => Player::O,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client", version, about = "Tic-tac-toe against a minimax opponent")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Path to the YAML config file (defaults to a file next to the executable)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side the human plays for this run, overriding the config file
    #[arg(long, value_enum)]
    human: Option<MarkArg>,
}

fn load_config(path: Option<PathBuf>) -> Config {
    match get_config_manager(path).get_or_create_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = args.use_log_prefix.then(|| "Client".to_string());
    logger::init_logger(prefix);

    let config = load_config(args.config);
    let human_player = args.human.map(Player::from).unwrap_or(config.human_mark);
    log!("Starting game, human plays {}", human_player);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    let settings = TicTacToeSessionSettings { human_player };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(settings)))),
    )?;

    Ok(())
}
