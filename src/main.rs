mod anim;
mod app;
mod classify;
mod color;
mod data;
mod format;
mod state;
mod ui;
mod view;

use std::path::PathBuf;

use app::AireApp;
use clap::Parser;
use eframe::egui;
use state::AppState;

#[derive(Parser)]
#[command(name = "aire-dashboard")]
#[command(about = "Air quality and community impact dashboard", long_about = None)]
struct Cli {
    /// Snapshot to show instead of the built-in sample data (.json or .csv)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Show every section in its final state immediately
    #[arg(long)]
    no_animations: bool,
}

fn main() -> eframe::Result {
    env_logger::init();
    let cli = Cli::parse();

    let mut state = AppState::default();
    state.animations = !cli.no_animations;
    if let Some(path) = &cli.data {
        state.load_path(path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 960.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tablero Ambiental",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(AireApp::new(state)))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_samples_with_animations() {
        let cli = Cli::try_parse_from(["aire-dashboard"]).unwrap();
        assert!(cli.data.is_none());
        assert!(!cli.no_animations);
    }

    #[test]
    fn cli_accepts_snapshot_and_flag() {
        let cli =
            Cli::try_parse_from(["aire-dashboard", "--data", "smog.json", "--no-animations"])
                .unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("smog.json")));
        assert!(cli.no_animations);
    }
}
