//! Handler für Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen und persistiert sie.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.command_log.set_capacity(options.command_log_capacity);
    state.options = options;
    state.options.save_to_file(&state.options_path)
}
