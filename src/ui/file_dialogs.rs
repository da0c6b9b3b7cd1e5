use crate::app::{AppIntent, UiState};
use crate::curve_file::CURVE_FILE_EXTENSION;
use std::path::{Path, PathBuf};

/// Quelle für Dateipfade (nativer Dialog oder Test-Double).
///
/// `None` bedeutet: Dialog abgebrochen.
pub trait FilePicker {
    /// Fragt eine bestehende Kurvendatei ab.
    fn pick_load_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf>;
    /// Fragt einen Zielpfad zum Speichern ab.
    fn pick_save_path(&mut self, start_dir: Option<&Path>, file_name: &str) -> Option<PathBuf>;
}

/// Native Dateidialoge über `rfd`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RfdFilePicker;

impl RfdFilePicker {
    fn dialog(start_dir: Option<&Path>) -> rfd::FileDialog {
        let dialog = rfd::FileDialog::new().add_filter("Tone Curve", &[CURVE_FILE_EXTENSION]);
        match start_dir {
            Some(dir) => dialog.set_directory(dir),
            None => dialog,
        }
    }
}

impl FilePicker for RfdFilePicker {
    fn pick_load_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        Self::dialog(start_dir).pick_file()
    }

    fn pick_save_path(&mut self, start_dir: Option<&Path>, file_name: &str) -> Option<PathBuf> {
        Self::dialog(start_dir).set_file_name(file_name).save_file()
    }
}

fn path_to_ui_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
///
/// `curve_dir` ist das zuletzt benutzte Verzeichnis (leer = keins).
pub fn handle_file_dialogs(
    ui_state: &mut UiState,
    curve_dir: &str,
    picker: &mut impl FilePicker,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if !ui_state.has_pending_dialog() {
        return events;
    }
    let start_dir = (!curve_dir.is_empty()).then(|| Path::new(curve_dir));

    if ui_state.show_load_dialog {
        ui_state.show_load_dialog = false;

        if let Some(path) = picker.pick_load_path(start_dir) {
            events.push(AppIntent::LoadCurvePathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    if ui_state.show_save_dialog {
        ui_state.show_save_dialog = false;

        let default_name = format!("curve.{}", CURVE_FILE_EXTENSION);
        if let Some(path) = picker.pick_save_path(start_dir, &default_name) {
            events.push(AppIntent::SaveCurvePathSelected {
                path: path_to_ui_string(&with_curve_extension(path)),
            });
        }
    }

    events
}

/// Ergänzt die Kurven-Endung, wenn der Nutzer keine angegeben hat.
fn with_curve_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(CURVE_FILE_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Liefert vorgegebene Pfade und merkt sich das Startverzeichnis.
    #[derive(Default)]
    struct ScriptedPicker {
        load: Option<PathBuf>,
        save: Option<PathBuf>,
        seen_dir: Option<PathBuf>,
        calls: usize,
    }

    impl FilePicker for ScriptedPicker {
        fn pick_load_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
            self.calls += 1;
            self.seen_dir = start_dir.map(Path::to_path_buf);
            self.load.take()
        }

        fn pick_save_path(&mut self, start_dir: Option<&Path>, _file_name: &str) -> Option<PathBuf> {
            self.calls += 1;
            self.seen_dir = start_dir.map(Path::to_path_buf);
            self.save.take()
        }
    }

    #[test]
    fn no_pending_dialog_yields_no_intents() {
        let mut ui = UiState::new();
        let mut picker = ScriptedPicker::default();

        assert!(!ui.has_pending_dialog());
        assert!(handle_file_dialogs(&mut ui, "/curves", &mut picker).is_empty());
        assert_eq!(picker.calls, 0);
    }

    #[test]
    fn both_flags_open_both_dialogs_once() {
        let mut ui = UiState::new();
        ui.show_load_dialog = true;
        ui.show_save_dialog = true;
        let mut picker = ScriptedPicker::default();

        handle_file_dialogs(&mut ui, "", &mut picker);
        handle_file_dialogs(&mut ui, "", &mut picker);

        assert_eq!(picker.calls, 2);
        assert!(!ui.has_pending_dialog());
    }

    #[test]
    fn load_dialog_passes_curve_dir_and_clears_flag() {
        let mut ui = UiState::new();
        ui.show_load_dialog = true;
        let mut picker = ScriptedPicker {
            load: Some(PathBuf::from("/curves/a.rtc")),
            ..ScriptedPicker::default()
        };

        let events = handle_file_dialogs(&mut ui, "/curves", &mut picker);

        assert!(!ui.show_load_dialog);
        assert_eq!(picker.seen_dir, Some(PathBuf::from("/curves")));
        assert!(matches!(
            &events[..],
            [AppIntent::LoadCurvePathSelected { path }] if path == "/curves/a.rtc"
        ));
    }

    #[test]
    fn cancelled_save_dialog_yields_no_intent() {
        let mut ui = UiState::new();
        ui.show_save_dialog = true;
        let mut picker = ScriptedPicker::default();

        assert!(handle_file_dialogs(&mut ui, "", &mut picker).is_empty());
        assert!(!ui.show_save_dialog);
        assert_eq!(picker.seen_dir, None);
    }

    #[test]
    fn save_path_without_extension_gets_rtc() {
        let mut ui = UiState::new();
        ui.show_save_dialog = true;
        let mut picker = ScriptedPicker {
            save: Some(PathBuf::from("/curves/mine")),
            ..ScriptedPicker::default()
        };

        let events = handle_file_dialogs(&mut ui, "", &mut picker);

        assert!(matches!(
            &events[..],
            [AppIntent::SaveCurvePathSelected { path }] if path == "/curves/mine.rtc"
        ));
    }
}
