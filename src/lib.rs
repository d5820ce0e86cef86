//! Vector-Pen-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState};
pub use core::{
    handles_for, mirror, DragSample, HandleSet, IndexedHandles, PathSegment, SegmentKind,
    VectorPath, DRAG_THRESHOLD,
};
pub use shared::{EditorOptions, RenderScene};
