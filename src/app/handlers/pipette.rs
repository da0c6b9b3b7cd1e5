//! Handler für die Pipette.

use crate::app::use_cases;
use crate::app::AppState;

/// Aktualisiert das Band unter der Pipette.
pub fn hover(state: &mut AppState, tonal: Option<f32>) {
    use_cases::pipette::hover(state, tonal);
}

/// Beginnt den Pipetten-Drag.
pub fn begin_drag(state: &mut AppState) {
    use_cases::pipette::begin_drag(state);
}

/// Setzt den Pipetten-Drag fort.
pub fn drag(state: &mut AppState, delta_screen_y: f64) {
    use_cases::pipette::drag(state, delta_screen_y);
}

/// Beendet den Pipetten-Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::pipette::end_drag(state);
}
