//! Use-Cases für die Pipette auf der parametrischen Kurve.
//!
//! Spline/NURBS behandeln die Pipette im Widget selbst; hier reagiert nur
//! die parametrische Kurve.

use crate::app::state::PipetteDrag;
use crate::app::AppState;
use crate::core::parametric::drag_adjuster;
use crate::core::CurveKind;

fn pipette_active(state: &AppState) -> bool {
    state.editor.active_kind() == CurveKind::Parametric
}

/// Hebt das Band unter dem Tonwert hervor. Während eines Drags bleibt das
/// Band fest.
pub fn hover(state: &mut AppState, tonal: Option<f32>) {
    if !pipette_active(state) || state.editor.pipette_drag.is_some() {
        return;
    }
    let curve = *state.editor.parametric();
    state.editor.active_param = tonal.map(|t| curve.band_for(f64::from(t)));
}

/// Beginnt einen Drag auf dem hervorgehobenen Band.
pub fn begin_drag(state: &mut AppState) {
    if !pipette_active(state) {
        return;
    }
    let Some(band) = state.editor.active_param else {
        return;
    };
    state.editor.pipette_drag = Some(PipetteDrag {
        band,
        start_value: state.editor.parametric().adjuster(band),
    });
}

/// Setzt den Regler des gezogenen Bands relativ zum Startwert.
pub fn drag(state: &mut AppState, delta_screen_y: f64) {
    let Some(active) = state.editor.pipette_drag else {
        return;
    };
    let value = drag_adjuster(active.start_value, delta_screen_y);
    let mut curve = *state.editor.parametric();
    if curve.adjuster(active.band) == value {
        return;
    }
    curve.set_adjuster(active.band, value);
    state.editor.store_parametric(curve);
}

/// Beendet den Drag.
pub fn end_drag(state: &mut AppState) {
    state.editor.pipette_drag = None;
}
