//! Use-Cases für die Bearbeitung der angezeigten Kurve.

use crate::app::{AppState, CurveSlot};
use crate::core::{CurveKind, CurveRecord, ToneBand};
use glam::DVec2;

/// Fügt dem Editor eine weitere Kurve hinzu. Die Anzeige wechselt nicht.
pub fn add_curve(
    state: &mut AppState,
    label: String,
    milestones: Option<[f64; 3]>,
    range_labels: Option<[String; 4]>,
) -> usize {
    let slot = CurveSlot::new(label, milestones, range_labels, &state.options);
    let index = state.editor.add_curve(slot);
    log::debug!("Kurve {} hinzugefügt: {}", index, state.editor.curves()[index].label);
    index
}

/// Zeigt eine andere Kurve des Editors an.
pub fn select_displayed_curve(state: &mut AppState, index: usize) {
    if !state.editor.select_displayed(index) {
        log::warn!(
            "Kurve {} existiert nicht ({} Kurven)",
            index,
            state.editor.curves().len()
        );
    }
}

/// Wechselt den aktiven Kurventyp.
pub fn switch_curve_kind(state: &mut AppState, kind: CurveKind) {
    state.editor.switch_kind(kind);
    log::debug!("Kurventyp gewechselt: {}", kind);
}

/// Übernimmt geänderte Kontrollpunkte aus einem Spline-/NURBS-Editor.
pub fn store_curve_points(state: &mut AppState, kind: CurveKind, points: &[DVec2]) {
    match CurveRecord::from_points(kind, points) {
        Ok(record) => {
            state.editor.store_curve(record);
        }
        Err(e) => log::warn!("Kontrollpunkte verworfen: {}", e),
    }
}

/// Setzt die Split-Positionen der parametrischen Kurve.
pub fn set_shc_positions(state: &mut AppState, shadow: f64, dark: f64, light: f64) {
    let mut curve = *state.editor.parametric();
    curve.set_splits(shadow, dark, light);
    state.editor.store_parametric(curve);
}

/// Setzt einen Band-Regler der parametrischen Kurve.
pub fn set_parametric_adjuster(state: &mut AppState, band: ToneBand, value: f64) {
    let mut curve = *state.editor.parametric();
    curve.set_adjuster(band, value);
    state.editor.store_parametric(curve);
}

/// Hebt ein Band der parametrischen Kurve hervor (`None` = keins).
pub fn set_active_param(state: &mut AppState, band: Option<ToneBand>) {
    state.editor.active_param = band;
}

/// Setzt die angezeigte Kurve auf die Reset-Kurve aus den Optionen.
pub fn reset_curve(state: &mut AppState) {
    if state.editor.reset_displayed(&state.options) {
        log::info!("{}-Kurve zurückgesetzt", state.editor.active_kind());
    }
}

/// Schaltet die Punktbearbeitung per Zahleneingabe um.
pub fn toggle_point_editing(state: &mut AppState) {
    state.editor.point_editing = !state.editor.point_editing;
}
