//! Text-Import/Export für Kurvendateien.
//!
//! Dieses Modul implementiert das Lesen und Schreiben einzelner Kurven.
//! Das Format ist zeilenorientiert und bleibt von Hand editierbar:
//!
//! ```text
//! Spline
//! 0 0
//! 1 1
//! ```

pub mod parser;
pub mod writer;

pub use parser::decode_curve;
pub use writer::encode_curve;

/// Dateiendung für Kurvendateien.
pub const CURVE_FILE_EXTENSION: &str = "rtc";
