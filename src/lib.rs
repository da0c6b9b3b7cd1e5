//! Tone Curve Editor Library.
//! Kurvenmodell, Textformat, Transfer und Editor-Logik der Diagonal-Kurven.

pub mod app;
pub mod core;
pub mod curve_file;
pub mod shared;
pub mod transfer;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CurveChange, CurveEditorState, CurveSlot,
    UiState,
};
pub use core::{
    ClipboardSlot, CurveClipboard, CurveFileError, CurveFormatError, CurveKind, CurveRecord,
    ParametricCurve, ToneBand,
};
pub use curve_file::{decode_curve, encode_curve};
pub use shared::EditorOptions;
pub use transfer::{copy_curve, load_curve_file, paste_curve, read_curve_file, save_curve_file};
