//! gstview - A terminal UI for GST registration lookups
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;
use gstview_core::prelude::*;

/// gstview - look up GST registration details in the terminal
#[derive(Parser, Debug)]
#[command(name = "gstview")]
#[command(about = "A terminal UI for GST registration lookups", long_about = None)]
struct Args {
    /// GST number to pre-fill the input with
    #[arg(value_name = "GSTIN")]
    gstin: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    gstview_core::logging::init()?;

    let settings = gstview_app::config::load_settings();
    info!(base_url = %settings.api.base_url, "loaded settings");

    gstview_tui::run(settings, args.gstin).await
}
