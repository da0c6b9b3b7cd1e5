//! UI-Anbindung: Dateidialoge für Kurvendateien.
//!
//! Die eigentlichen Kurven-Widgets liefert der Host; dieses Modul übersetzt
//! nur ausstehende Dialog-Flags in `AppIntent`s.

pub mod file_dialogs;

pub use file_dialogs::{handle_file_dialogs, FilePicker, RfdFilePicker};
