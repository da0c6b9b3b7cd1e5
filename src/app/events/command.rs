use crate::core::{CurveKind, ToneBand};
use crate::shared::EditorOptions;
use glam::DVec2;

/// Mutierende Commands, die zentral vom Controller ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Transfer ===
    /// Speichern-Dialog öffnen
    RequestSaveCurveDialog,
    /// Laden-Dialog öffnen
    RequestLoadCurveDialog,
    /// Verzeichnis des gewählten Pfads als Startverzeichnis merken
    RememberCurveDir { path: String },
    /// Aktive Kurve unter Pfad speichern
    SaveCurve { path: String },
    /// Kurve aus Pfad laden
    LoadCurve { path: String },
    /// Aktive Kurve kopieren
    CopyCurve,
    /// Kurve aus der Zwischenablage einfügen
    PasteCurve,

    // === Editor ===
    /// Kurve anhängen
    AddCurve {
        label: String,
        milestones: Option<[f64; 3]>,
        range_labels: Option<[String; 4]>,
    },
    /// Angezeigte Kurve wechseln
    SelectDisplayedCurve { index: usize },
    /// Sichtbaren Editor wechseln
    SwitchCurveKind { kind: CurveKind },
    /// Kontrollpunkte einer Spline-/NURBS-Kurve übernehmen
    StoreCurvePoints { kind: CurveKind, points: Vec<DVec2> },
    /// Split-Positionen der parametrischen Kurve setzen
    SetShcPositions { shadow: f64, dark: f64, light: f64 },
    /// Band-Regler der parametrischen Kurve setzen
    SetParametricAdjuster { band: ToneBand, value: f64 },
    /// Hervorgehobenes Band setzen oder löschen
    SetActiveParam { band: Option<ToneBand> },
    /// Angezeigte Kurve zurücksetzen
    ResetCurve,
    /// Punktbearbeitung umschalten
    TogglePointEditing,

    // === Pipette ===
    /// Tonwert unter der Pipette (None = kein gültiger Kanal)
    PipetteHover { tonal: Option<f32> },
    /// Pipetten-Drag beginnen
    BeginPipetteDrag,
    /// Pipetten-Drag fortsetzen
    PipetteDrag { delta_screen_y: f64 },
    /// Pipetten-Drag beenden
    EndPipetteDrag,

    // === Optionen ===
    /// Optionen übernehmen und speichern
    ApplyOptions { options: EditorOptions },
}
