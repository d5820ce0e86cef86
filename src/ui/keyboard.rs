//! Globale Keyboard-Shortcuts.
//!
//! Escape wird vom Canvas-Input selbst ausgewertet (Gesten-Abbruch).

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub fn collect_keyboard_intents(ctx: &egui::Context) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_q_pressed, key_comma_pressed) = ctx.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Q),
            i.key_pressed(egui::Key::Comma),
        )
    });

    if modifiers.command && key_q_pressed {
        events.push(AppIntent::ExitRequested);
    }

    if modifiers.command && key_comma_pressed {
        events.push(AppIntent::OpenOptionsDialogRequested);
    }

    events
}
