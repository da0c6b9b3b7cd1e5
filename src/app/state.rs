//! Application State: zentrale Datenhaltung.

mod app_state;
mod curve_slot;
mod editor;
mod ui;

pub use app_state::AppState;
pub use curve_slot::{CurveSlot, DEFAULT_RANGE_LABELS};
pub use editor::{CurveChange, CurveEditorState, PipetteDrag, DEFAULT_CURVE_LABEL};
pub use ui::UiState;
