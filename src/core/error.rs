//! Fehlertypen für Kurvendaten, Kurvendateien und die Zwischenablage.

use super::CurveKind;
use std::path::PathBuf;

/// Formatfehler beim Aufbau oder Dekodieren eines [`CurveRecord`](super::CurveRecord).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveFormatError {
    /// Leere Werteliste (kein Typ-Tag)
    #[error("Kurvendaten sind leer")]
    Empty,
    /// Kopfzeile bzw. Typ-Tag unbekannt
    #[error("Unbekannter Kurventyp: '{0}'")]
    UnknownKind(String),
    /// `values[0]` passt nicht zum erwarteten Typ
    #[error("Typ-Tag {found} passt nicht zu {expected}")]
    KindTagMismatch { expected: CurveKind, found: f64 },
    /// Parametrische Kurve mit falscher Werteanzahl
    #[error("{kind}: {expected} Werte erwartet, {found} gefunden")]
    Truncated {
        kind: CurveKind,
        expected: usize,
        found: usize,
    },
    /// Kontrollpunkt-Kurve mit ungerader Koordinatenanzahl
    #[error("{kind}: ungerade Anzahl Koordinaten ({count})")]
    UnpairedCoordinate { kind: CurveKind, count: usize },
    /// Typ erlaubt keine Kontrollpunkte bzw. keine Zusatzwerte
    #[error("{kind} erlaubt keine Zusatzwerte")]
    UnexpectedValues { kind: CurveKind },
    /// Wert ist NaN oder unendlich
    #[error("{kind}: Wert an Position {index} ist nicht endlich")]
    NonFiniteValue { kind: CurveKind, index: usize },
}

/// Fehler beim Schreiben oder Lesen einer Kurvendatei.
#[derive(Debug, thiserror::Error)]
pub enum CurveFileError {
    /// Datei nicht schreib-/lesbar
    #[error("Kurvendatei '{path}' nicht zugreifbar: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Inhalt nicht als Kurve lesbar
    #[error("Kurvendatei '{path}' fehlerhaft: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: CurveFormatError,
    },
}
