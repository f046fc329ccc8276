//! Cycle to the next or previous preset.

use clap::{Args, ValueEnum};
use matiz_config::Direction;
use std::path::Path;

use super::common;

#[derive(Args)]
pub struct CycleArgs {
    /// Direction to step through the preset list
    #[arg(long, value_enum, default_value_t = CycleDirection::Next)]
    direction: CycleDirection,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CycleDirection {
    Next,
    Previous,
}

impl From<CycleDirection> for Direction {
    fn from(direction: CycleDirection) -> Self {
        match direction {
            CycleDirection::Next => Direction::Next,
            CycleDirection::Previous => Direction::Previous,
        }
    }
}

pub fn run(dir: &Path, args: CycleArgs) -> anyhow::Result<()> {
    let mut controller = common::open_controller(dir)?;

    if controller.store().is_empty() {
        println!("No presets saved yet. Create one with: matiz save <name>");
        return Ok(());
    }

    tracing::debug!(direction = ?args.direction, "cycling presets");

    let switched = controller.cycle(args.direction.into())?;
    common::report_switch(switched, controller.store().len());

    Ok(())
}
