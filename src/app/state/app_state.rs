use crate::app::CommandLog;
use crate::core::ClipboardSlot;
use crate::shared::EditorOptions;
use std::path::PathBuf;

use super::{CurveEditorState, UiState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kurven-Editor (aktiver Typ, gespeicherte Kurven, Pipette)
    pub editor: CurveEditorState,
    /// UI-State
    pub ui: UiState,
    /// Prozessweite Kurven-Zwischenablage
    pub clipboard: ClipboardSlot,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Verzeichnis, Milestones, Reset-Kurven)
    pub options: EditorOptions,
    /// Zielpfad für persistierte Optionen
    pub options_path: PathBuf,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit bereits geladenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            editor: CurveEditorState::new(&options),
            ui: UiState::new(),
            clipboard: ClipboardSlot::new(),
            command_log: CommandLog::with_capacity(options.command_log_capacity),
            options,
            options_path: EditorOptions::config_path(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
