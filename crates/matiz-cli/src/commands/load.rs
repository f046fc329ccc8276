//! Apply a stored preset.

use clap::Args;
use std::path::Path;

use super::common::{self, StdinPrompt};

#[derive(Args)]
pub struct LoadArgs {
    /// Preset name to apply; prompts with a list when omitted
    name: Option<String>,
}

pub fn run(dir: &Path, args: LoadArgs) -> anyhow::Result<()> {
    let mut controller = common::open_controller(dir)?;

    let switched = match args.name {
        Some(name) => {
            let Some(index) = controller.store().find(&name) else {
                anyhow::bail!("Preset '{}' not found. See: matiz list", name);
            };
            controller.switch_to(index as isize)?
        }
        None => controller.load(&mut StdinPrompt)?,
    };

    common::report_switch(switched, controller.store().len());
    Ok(())
}
