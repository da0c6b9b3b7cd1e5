/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob der Kurve-Laden-Dialog geöffnet werden soll
    pub show_load_dialog: bool,
    /// Ob der Kurve-Speichern-Dialog geöffnet werden soll
    pub show_save_dialog: bool,
    /// Temporäre Statusnachricht (z.B. nach Speichern/Laden)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self {
            show_load_dialog: false,
            show_save_dialog: false,
            status_message: None,
        }
    }

    /// Gibt `true` zurück, wenn ein Dateidialog aussteht.
    pub fn has_pending_dialog(&self) -> bool {
        self.show_load_dialog || self.show_save_dialog
    }
}
