use crate::app::{AppCommand, AppIntent, AppState};
use glam::Vec2;

use super::map_intent_to_commands;

#[test]
fn drag_updated_maps_to_live_sample() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerDragUpdated {
            start_location: Vec2::new(1.0, 2.0),
            location: Vec2::new(3.0, 4.0),
        },
    );

    assert_eq!(commands.len(), 1);
    match &commands[0] {
        AppCommand::UpdateLiveDrag { sample } => {
            assert!(!sample.is_final);
            assert_eq!(sample.start_location, Vec2::new(1.0, 2.0));
            assert_eq!(sample.location, Vec2::new(3.0, 4.0));
        }
        other => panic!("UpdateLiveDrag erwartet, erhalten: {:?}", other),
    }
}

#[test]
fn drag_released_maps_to_commit_then_clear_in_order() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerDragReleased {
            start_location: Vec2::new(10.0, 0.0),
            location: Vec2::new(10.0, 5.0),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(
        commands[0],
        AppCommand::CommitDrag { sample } if sample.is_final
    ));
    assert!(matches!(commands[1], AppCommand::ClearLiveDrag));
}

#[test]
fn drag_cancelled_maps_to_clear() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::PointerDragCancelled);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::ClearLiveDrag));
}

#[test]
fn non_finite_samples_are_dropped() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerDragUpdated {
            start_location: Vec2::new(f32::NAN, 0.0),
            location: Vec2::ZERO,
        },
    );
    assert!(commands.is_empty());

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerDragReleased {
            start_location: Vec2::ZERO,
            location: Vec2::new(f32::INFINITY, 0.0),
        },
    );
    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::ClearLiveDrag));
}
