use crate::core::{CurveKind, ToneBand};
use crate::shared::EditorOptions;
use glam::DVec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // === Transfer ===
    /// Aktive Kurve speichern (zeigt Dateidialog)
    SaveCurveRequested,
    /// Kurve laden (zeigt Dateidialog)
    LoadCurveRequested,
    /// Speicherpfad wurde im Dialog gewählt
    SaveCurvePathSelected { path: String },
    /// Ladepfad wurde im Dialog gewählt
    LoadCurvePathSelected { path: String },
    /// Aktive Kurve in die Zwischenablage kopieren
    CopyCurveRequested,
    /// Kurve aus der Zwischenablage einfügen
    PasteCurveRequested,

    // === Editor ===
    /// Weitere Kurve anlegen (z.B. ein Kanal); `None` = Standardwerte
    AddCurveRequested {
        label: String,
        milestones: Option<[f64; 3]>,
        range_labels: Option<[String; 4]>,
    },
    /// Andere Kurve zur Anzeige gewählt
    DisplayedCurveSelected { index: usize },
    /// Kurventyp in der Typ-Auswahl geändert
    CurveKindSelected { kind: CurveKind },
    /// Kontrollpunkte im Spline-/NURBS-Editor geändert
    CurvePointsEdited { kind: CurveKind, points: Vec<DVec2> },
    /// SHC-Schieber (Split-Positionen) verschoben
    ShcPositionsChanged { shadow: f64, dark: f64, light: f64 },
    /// Band-Regler der parametrischen Kurve geändert
    ParametricAdjusterChanged { band: ToneBand, value: f64 },
    /// Maus über einem Band-Regler
    AdjusterHovered { band: ToneBand },
    /// Maus hat die Band-Regler verlassen
    AdjusterLeft,
    /// Reset-Schaltfläche gedrückt
    CurveResetRequested,
    /// Punktbearbeitung per Zahleneingabe umschalten
    PointEditingToggled,

    // === Pipette ===
    /// Pipette über dem Bild bewegt (Kanäle, `-1` = kein Wert)
    PipetteMoved { channels: [f32; 3] },
    /// Pipette gedrückt
    PipettePressed,
    /// Pipette mit gedrückter Taste vertikal gezogen (Pixel seit Drücken)
    PipetteDragged { delta_screen_y: f64 },
    /// Pipette losgelassen
    PipetteReleased,

    // === Optionen ===
    /// Optionen wurden geändert
    OptionsChanged { options: EditorOptions },
}
