//! Core-Domänentypen: Pfad-Segmente, Vektorpfad, Drag-Geste, Handle-Projektion.
//!
//! Reine Geometrie ohne UI-Abhängigkeiten; alle Operationen sind synchron
//! und seiteneffektfrei.

pub mod drag_sample;
pub mod geometry;
pub mod handles;
pub mod path;
pub mod segment;

pub use drag_sample::DragSample;
pub use geometry::{mirror, DRAG_THRESHOLD};
pub use handles::{handles_for, HandleSet, IndexedHandles};
pub use path::{next_segment, VectorPath};
pub use segment::{PathSegment, SegmentKind};
