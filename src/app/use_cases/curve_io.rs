//! Use-Case-Funktionen für Kurven-Transfer.
//! Alle Dateisystem- und Zwischenablage-Zugriffe der App laufen hierüber.

use crate::app::AppState;
use crate::transfer;
use std::path::Path;

/// Öffnet den Speichern-Dialog über UI-State.
pub fn request_save_dialog(state: &mut AppState) {
    state.ui.show_save_dialog = true;
}

/// Öffnet den Laden-Dialog über UI-State.
pub fn request_load_dialog(state: &mut AppState) {
    state.ui.show_load_dialog = true;
}

/// Merkt sich das Verzeichnis eines gewählten Pfads für den nächsten Dialog.
pub fn remember_curve_dir(state: &mut AppState, path: &str) {
    let Some(dir) = Path::new(path).parent() else {
        return;
    };
    if dir.as_os_str().is_empty() {
        return;
    }
    state.options.curve_dir = dir.to_string_lossy().into_owned();
}

/// Speichert die angezeigte Kurve unter `path`.
///
/// Linear/Unchanged werden nicht gespeichert.
pub fn save_displayed_curve(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let record = state.editor.displayed_curve();
    if !record.kind().is_editable() {
        log::debug!("Speichern übersprungen: {} hat keine Kurvendaten", record.kind());
        return Ok(());
    }
    if path.is_empty() {
        return Ok(());
    }

    transfer::save_curve_file(&record, path)?;
    state.ui.status_message = Some(format!("{}-Kurve gespeichert: {}", record.kind(), path));
    Ok(())
}

/// Lädt eine Kurve aus `path` in den Slot ihres eigenen Typs.
///
/// Unlesbare oder unbekannte Dateien lassen den Zustand unverändert.
pub fn load_curve(state: &mut AppState, path: &str) {
    let Some(record) = transfer::load_curve_file(path) else {
        return;
    };
    let kind = record.kind();
    if state.editor.store_curve(record) {
        state.ui.status_message = Some(format!("{}-Kurve geladen: {}", kind, path));
    } else {
        log::debug!("Laden: {} hat keinen Kurven-Slot", kind);
    }
}

/// Kopiert die angezeigte Kurve in die Zwischenablage.
pub fn copy_displayed_curve(state: &mut AppState) {
    let record = state.editor.displayed_curve();
    transfer::copy_curve(&mut state.clipboard, record.kind(), record.values());
}

/// Fügt die Kurve aus der Zwischenablage ein, wenn ihr Typ passt.
pub fn paste_into_displayed_curve(state: &mut AppState) {
    let kind = state.editor.active_kind();
    if let Some(record) = transfer::paste_curve(&state.clipboard, kind) {
        state.editor.store_curve(record);
        log::info!("{}-Kurve aus Zwischenablage eingefügt", kind);
    }
}
