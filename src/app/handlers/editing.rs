//! Handler für Kurven-Editing (Typwechsel, Punkte, parametrische Regler).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{CurveKind, ToneBand};
use glam::DVec2;

/// Hängt eine Kurve an.
pub fn add_curve(
    state: &mut AppState,
    label: String,
    milestones: Option<[f64; 3]>,
    range_labels: Option<[String; 4]>,
) {
    use_cases::editing::add_curve(state, label, milestones, range_labels);
}

/// Wechselt die angezeigte Kurve.
pub fn select_curve(state: &mut AppState, index: usize) {
    use_cases::editing::select_displayed_curve(state, index);
}

/// Wechselt den sichtbaren Editor.
pub fn switch_kind(state: &mut AppState, kind: CurveKind) {
    use_cases::editing::switch_curve_kind(state, kind);
}

/// Übernimmt Kontrollpunkte aus dem Spline-/NURBS-Editor.
pub fn store_points(state: &mut AppState, kind: CurveKind, points: &[DVec2]) {
    use_cases::editing::store_curve_points(state, kind, points);
}

/// Setzt die SHC-Split-Positionen.
pub fn set_shc_positions(state: &mut AppState, shadow: f64, dark: f64, light: f64) {
    use_cases::editing::set_shc_positions(state, shadow, dark, light);
}

/// Setzt einen Band-Regler.
pub fn set_adjuster(state: &mut AppState, band: ToneBand, value: f64) {
    use_cases::editing::set_parametric_adjuster(state, band, value);
}

/// Setzt das hervorgehobene Band.
pub fn set_active_param(state: &mut AppState, band: Option<ToneBand>) {
    use_cases::editing::set_active_param(state, band);
}

/// Setzt die angezeigte Kurve zurück.
pub fn reset(state: &mut AppState) {
    use_cases::editing::reset_curve(state);
}

/// Schaltet die Punktbearbeitung um.
pub fn toggle_point_editing(state: &mut AppState) {
    use_cases::editing::toggle_point_editing(state);
}
