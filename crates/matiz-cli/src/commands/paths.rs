//! Show preference document locations.

use clap::Args;
use matiz_config::paths;
use std::path::Path;

#[derive(Args)]
pub struct PathsArgs {}

pub fn run(dir: &Path, _args: PathsArgs) -> anyhow::Result<()> {
    println!("Preference documents:");
    println!("=====================");
    println!();
    println!("Plugin preferences: {}", paths::plugin_prefs_in(dir).display());
    println!("Global preferences: {}", paths::global_prefs_in(dir).display());

    Ok(())
}
