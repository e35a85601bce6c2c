mod app;
mod chat;
mod layout;
mod profile;
mod recommend;
mod util;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Load the profile from a JSON file instead of the built-in sample.
    #[arg(long)]
    profile: Option<String>,

    /// Seed for the bubble scatter, for a reproducible first layout.
    #[arg(long)]
    layout_seed: Option<u64>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1200.0, 860.0]),
        ..Default::default()
    };

    let layout_seed = args.layout_seed.unwrap_or_else(rand::random);

    eframe::run_native(
        "CommunityBrain",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::CommunityBrainApp::new(
                cc,
                args.profile.clone(),
                layout_seed,
            )))
        }),
    )
}
