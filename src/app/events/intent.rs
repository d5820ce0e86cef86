use crate::shared::EditorOptions;
use glam::Vec2;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Geste läuft: Zeiger seit `start_location` gedrückt, aktuell bei `location`
    PointerDragUpdated { start_location: Vec2, location: Vec2 },
    /// Geste beendet: Zeiger bei `location` losgelassen
    PointerDragReleased { start_location: Vec2, location: Vec2 },
    /// Geste abgebrochen (Escape, Zeiger verloren)
    PointerDragCancelled,
    /// Anwendung beenden
    ExitRequested,
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
