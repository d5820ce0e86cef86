//! Canvas-Input-Handling: Zeiger-Gesten → AppIntent.
//!
//! Jede Geste beginnt mit dem Drücken der Primärtaste auf der Zeichenfläche
//! (ohne Mindestdistanz, auch ein Klick ist eine Geste). Solange die Taste
//! gehalten wird, entsteht pro Frame ein `PointerDragUpdated`; Loslassen
//! erzeugt `PointerDragReleased`, Escape oder Zeigerverlust `PointerDragCancelled`.

use crate::app::AppIntent;
use glam::Vec2;

/// Verwaltet den Gesten-Zustand der Zeichenfläche.
#[derive(Debug, Default)]
pub struct InputState {
    /// Startposition der laufenden Geste (lokale Koordinaten)
    drag_origin: Option<Vec2>,
    /// Zuletzt bekannte Zeigerposition der laufenden Geste
    last_location: Option<Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            drag_origin: None,
            last_location: None,
        }
    }

    /// Gibt zurück, ob gerade eine Geste verfolgt wird.
    pub fn is_tracking(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Sammelt Gesten-Events der Zeichenfläche und gibt AppIntents zurück.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let rect = response.rect;

        let (primary_down, primary_released, escape_pressed, has_pointer, pointer_pos, press_origin) =
            ui.input(|i| {
                (
                    i.pointer.primary_down(),
                    i.pointer.primary_released(),
                    i.key_pressed(egui::Key::Escape),
                    i.pointer.has_pointer(),
                    i.pointer.interact_pos(),
                    i.pointer.press_origin(),
                )
            });

        if self.drag_origin.is_none() {
            if response.is_pointer_button_down_on() && primary_down {
                // press_origin() liefert die exakte Druckposition, auch wenn
                // egui den Drag erst nach einigen Pixeln erkennt
                if let Some(origin) = press_origin.or(pointer_pos) {
                    self.drag_origin = Some(to_local(origin, rect));
                }
            } else if response.clicked_by(egui::PointerButton::Primary) {
                // Drücken und Loslassen im selben Frame
                if let Some(pos) = response.interact_pointer_pos() {
                    let location = to_local(pos, rect);
                    events.push(AppIntent::PointerDragReleased {
                        start_location: location,
                        location,
                    });
                }
                return events;
            }
        }

        let Some(start_location) = self.drag_origin else {
            return events;
        };

        if let Some(pos) = pointer_pos {
            self.last_location = Some(to_local(pos, rect));
        }
        let location = self.last_location.unwrap_or(start_location);

        if primary_released || (!primary_down && has_pointer) {
            self.reset();
            events.push(AppIntent::PointerDragReleased {
                start_location,
                location,
            });
        } else if escape_pressed || !has_pointer {
            log::debug!("Geste abgebrochen");
            self.reset();
            events.push(AppIntent::PointerDragCancelled);
        } else {
            events.push(AppIntent::PointerDragUpdated {
                start_location,
                location,
            });
        }

        events
    }

    fn reset(&mut self) {
        self.drag_origin = None;
        self.last_location = None;
    }
}

/// Rechnet eine Screen-Position in den lokalen Koordinatenraum der Zeichenfläche um.
pub(crate) fn to_local(pos: egui::Pos2, rect: egui::Rect) -> Vec2 {
    Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y)
}
