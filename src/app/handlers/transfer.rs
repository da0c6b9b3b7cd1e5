//! Handler für Kurven-Transfer (Speichern, Laden, Kopieren, Einfügen).

use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Kurve-Speichern-Dialog.
pub fn request_save(state: &mut AppState) {
    use_cases::curve_io::request_save_dialog(state);
}

/// Öffnet den Kurve-Laden-Dialog.
pub fn request_load(state: &mut AppState) {
    use_cases::curve_io::request_load_dialog(state);
}

/// Merkt sich das Verzeichnis des gewählten Pfads.
pub fn remember_dir(state: &mut AppState, path: &str) {
    use_cases::curve_io::remember_curve_dir(state, path);
}

/// Speichert die angezeigte Kurve unter dem übergebenen Pfad.
pub fn save(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    use_cases::curve_io::save_displayed_curve(state, path)
}

/// Lädt eine Kurve aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: &str) {
    use_cases::curve_io::load_curve(state, path);
}

/// Kopiert die angezeigte Kurve.
pub fn copy(state: &mut AppState) {
    use_cases::curve_io::copy_displayed_curve(state);
}

/// Fügt die Kurve aus der Zwischenablage ein.
pub fn paste(state: &mut AppState) {
    use_cases::curve_io::paste_into_displayed_curve(state);
}
