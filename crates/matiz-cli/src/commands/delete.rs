//! Delete a stored preset.

use clap::Args;
use std::path::Path;

use super::common::{self, StdinPrompt};

#[derive(Args)]
pub struct DeleteArgs {
    /// Preset name to delete; prompts with a list when omitted
    name: Option<String>,
}

pub fn run(dir: &Path, args: DeleteArgs) -> anyhow::Result<()> {
    let mut controller = common::open_controller(dir)?;

    let deleted = match args.name {
        Some(name) => Some(controller.delete_named(&name)?),
        None => controller.delete(&mut StdinPrompt)?,
    };

    match deleted {
        Some(name) => {
            tracing::info!(name = %name, "preset deleted");
            println!("Deleted preset '{name}'.");
        }
        None => println!("Nothing deleted."),
    }

    Ok(())
}
