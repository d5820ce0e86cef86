//! UI-Komponenten: Menü, Status-Bar, Optionen, Canvas und Input-Handling.

pub mod canvas;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert die UI-Hülle um den Pfad-Kern. Gesten werden
/// in `AppIntent`s übersetzt, gezeichnet wird ausschließlich aus der `RenderScene`.
pub mod menu;
pub mod options_dialog;
pub mod status;

pub use canvas::paint_scene;
pub use input::InputState;
pub use keyboard::collect_keyboard_intents;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
