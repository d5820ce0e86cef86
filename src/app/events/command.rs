use crate::core::DragSample;
use crate::shared::EditorOptions;

/// Mutierende Commands, die der Controller auf den AppState anwendet.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Vorschau-Sample der laufenden Geste setzen (committeter Pfad bleibt unverändert)
    UpdateLiveDrag { sample: DragSample },
    /// Finales Sample als neues Segment an den Pfad hängen
    CommitDrag { sample: DragSample },
    /// Vorschau verwerfen
    ClearLiveDrag,
    /// Anwendung beenden
    RequestExit,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen und speichern
    ResetOptions,
}
