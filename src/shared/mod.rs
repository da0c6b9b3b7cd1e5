//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;

pub use options::EditorOptions;
pub use options::{COMMAND_LOG_CAPACITY, NURBS_RESET_CURVE, SPLINE_RESET_CURVE};
