//! Preset store demo: capture, cycle, reconciliation, and deletion against
//! in-memory preference documents.
//!
//! Run with: cargo run -p matiz-config --example preset_demo

use matiz_config::{
    Direction, MemoryStore, Preset, PresetController, PresetStore, SnapshotContext,
};

fn main() {
    // --- Preset basics ---
    println!("=== Presets ===\n");

    let night = Preset::new("Night")
        .with_setting("color_scheme", "Monokai")
        .with_setting("font_face", "Iosevka")
        .with_setting("font_size", 13);

    let day = Preset::new("Day")
        .with_setting("color_scheme", "Solarized Light")
        .with_setting("font_face", "Iosevka")
        .with_setting("font_size", 14);

    println!("Preset: {}", night.name);
    for (key, value) in &night.settings {
        println!("  {key} = {value:?}");
    }

    // --- Seed a store ---
    let mut plugin = MemoryStore::new();
    let mut store = PresetStore::load(&plugin).unwrap();
    store.upsert(night);
    store.upsert(day);
    store.write(&mut plugin).unwrap();

    println!("\nStored presets: {:?}", store.names());

    // --- Cycle through them ---
    println!("\n=== Cycling ===\n");

    let context = SnapshotContext::new()
        .with_setting("color_scheme", "Gruvbox")
        .with_setting("font_face", "Hack")
        .with_setting("font_size", 12);

    let mut controller = PresetController::new(plugin, MemoryStore::new(), context).unwrap();

    for _ in 0..3 {
        let switched = controller.cycle(Direction::Next).unwrap().unwrap();
        println!(
            "Switched to '{}' (index {}, reconciled: {})",
            switched.name, switched.index, switched.reconciled
        );
    }

    // --- Save a capture of the "current" context ---
    println!("\n=== Saving ===\n");

    let saved = controller.save_named("Scratch").unwrap();
    println!("Saved: {saved:?}");
    println!("Stored presets: {:?}", controller.store().names());

    // Saving again under the same name overwrites in place.
    controller.save_named("Scratch").unwrap();
    println!("After re-save: {} presets", controller.store().len());

    // --- Reconciliation ---
    println!("\n=== Reconciliation ===\n");

    // A preset that predates the font_size controlled setting.
    let mut controller = {
        let mut plugin = MemoryStore::new();
        let mut store = PresetStore::load(&plugin).unwrap();
        store.upsert(
            Preset::new("Sparse")
                .with_setting("color_scheme", "Nord")
                .with_setting("font_face", "Fira Code"),
        );
        store.write(&mut plugin).unwrap();

        let context = SnapshotContext::new().with_setting("font_size", 15);
        PresetController::new(plugin, MemoryStore::new(), context).unwrap()
    };

    let switched = controller.switch_to(0).unwrap().unwrap();
    println!("Applied '{}', reconciled: {}", switched.name, switched.reconciled);
    println!(
        "Healed payload: {:?}",
        controller.store().get(0).unwrap().settings
    );

    // --- Deletion ---
    println!("\n=== Deletion ===\n");

    let deleted = controller.delete_named("Sparse").unwrap();
    println!("Deleted '{deleted}', {} presets left", controller.store().len());

    println!("\nPreset demo complete.");
}
