//! Capture the current settings as a named preset.

use clap::Args;
use std::path::Path;

use super::common::{self, StdinPrompt};

#[derive(Args)]
pub struct SaveArgs {
    /// Name for the preset; prompts when omitted. An existing preset with
    /// the same name is overwritten in place.
    name: Option<String>,
}

pub fn run(dir: &Path, args: SaveArgs) -> anyhow::Result<()> {
    let mut controller = common::open_controller(dir)?;

    let saved = match args.name {
        Some(name) => controller.save_named(&name)?,
        None => controller.save(&mut StdinPrompt)?,
    };

    match saved {
        Some(name) => {
            tracing::info!(name = %name, "preset saved");
            println!("Saved preset '{name}'.");
        }
        None => println!("Nothing saved."),
    }

    Ok(())
}
