//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::DragSample;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerDragUpdated {
            start_location,
            location,
        } => {
            let sample = DragSample::live(start_location, location);
            if !sample.is_finite() {
                log::warn!("Nicht-endliches Drag-Sample verworfen: {:?}", sample);
                return vec![];
            }
            vec![AppCommand::UpdateLiveDrag { sample }]
        }
        AppIntent::PointerDragReleased {
            start_location,
            location,
        } => {
            let sample = DragSample::finished(start_location, location);
            if !sample.is_finite() {
                log::warn!("Nicht-endliches Drag-Sample verworfen: {:?}", sample);
                return vec![AppCommand::ClearLiveDrag];
            }
            vec![AppCommand::CommitDrag { sample }, AppCommand::ClearLiveDrag]
        }
        AppIntent::PointerDragCancelled => vec![AppCommand::ClearLiveDrag],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

#[cfg(test)]
mod tests;
