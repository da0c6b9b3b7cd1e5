//! Core-Domänentypen: Kurventyp, Kurvendatensatz, parametrische Kurve, Zwischenablage.

pub mod clipboard;
pub mod curve_kind;
/// Getaggter Wertevektor einer Kurve
///
/// Dieses Modul definiert die Haupt-Datenstruktur:
/// - CurveRecord: Typ + Wertevektor mit geprüften Invarianten
pub mod curve_record;
pub mod error;
pub mod parametric;

pub use clipboard::{ClipboardSlot, CurveClipboard};
pub use curve_kind::CurveKind;
pub use curve_record::CurveRecord;
pub use error::{CurveFileError, CurveFormatError};
pub use parametric::{ParametricCurve, ToneBand};
