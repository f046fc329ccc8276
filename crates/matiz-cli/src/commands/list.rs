//! List stored presets.

use clap::Args;
use std::path::Path;

use super::common;

#[derive(Args)]
pub struct ListArgs {}

pub fn run(dir: &Path, _args: ListArgs) -> anyhow::Result<()> {
    let controller = common::open_controller(dir)?;
    let store = controller.store();

    println!("Presets:");
    println!("========");

    if store.is_empty() {
        println!("  (none)");
        println!();
        println!("  Create a preset with: matiz save <name>");
        return Ok(());
    }

    for (i, preset) in store.presets.iter().enumerate() {
        let marker = if i == store.current_preset { "*" } else { " " };
        println!("{marker} {}. {}", i + 1, preset.name);
    }

    Ok(())
}
