//! Shared helpers for the preset commands.

use std::io::{BufRead, Write};
use std::path::Path;

use matiz_config::{
    FileStore, PresetController, PresetStore, Prompt, SnapshotContext, paths,
};

/// A one-invocation controller over file-backed stores.
pub type CliController = PresetController<FileStore, FileStore, SnapshotContext>;

/// Open the preference documents under `dir` and build a controller.
///
/// The active editing context is a snapshot of the global preferences
/// document taken now, before any mutation.
pub fn open_controller(dir: &Path) -> anyhow::Result<CliController> {
    let plugin = FileStore::open(paths::plugin_prefs_in(dir))?;
    let global = FileStore::open(paths::global_prefs_in(dir))?;

    let store = PresetStore::load(&plugin)?;
    let context = SnapshotContext::from_prefs(&global, &store.controlled_settings);

    Ok(PresetController::new(plugin, global, context)?)
}

/// Prompt implementation reading answers from stdin.
///
/// A blank or unparsable selection, and end-of-input, count as a dismissed
/// prompt; the invoking command treats that as a completed no-op.
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn select(&mut self, title: &str, items: &[String]) -> Option<usize> {
        println!("{title}:");
        for (i, item) in items.iter().enumerate() {
            println!("  {}. {}", i + 1, item);
        }
        print!("Choice (1-{}): ", items.len());
        std::io::stdout().flush().ok()?;

        let answer = read_line()?;
        match answer.trim().parse::<usize>() {
            Ok(choice) if (1..=items.len()).contains(&choice) => Some(choice - 1),
            _ => None,
        }
    }

    fn input(&mut self, label: &str) -> Option<String> {
        print!("{label}: ");
        std::io::stdout().flush().ok()?;

        read_line().map(|line| line.trim().to_string())
    }
}

/// Read one line from stdin; `None` on end-of-input.
fn read_line() -> Option<String> {
    let mut line = String::new();
    match std::io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}

/// Report the outcome of a switch to the user.
pub fn report_switch(switched: Option<matiz_config::Switched>, total: usize) {
    match switched {
        Some(switched) => {
            if switched.reconciled {
                tracing::info!(name = %switched.name, "preset re-saved with missing settings filled in");
            }
            println!(
                "Switched to preset '{}' ({} of {})",
                switched.name,
                switched.index + 1,
                total
            );
        }
        None => println!("No preset applied."),
    }
}
