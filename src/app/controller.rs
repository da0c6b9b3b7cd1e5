//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Transfer ===
            AppCommand::RequestSaveCurveDialog => handlers::transfer::request_save(state),
            AppCommand::RequestLoadCurveDialog => handlers::transfer::request_load(state),
            AppCommand::RememberCurveDir { path } => handlers::transfer::remember_dir(state, &path),
            AppCommand::SaveCurve { path } => handlers::transfer::save(state, &path)?,
            AppCommand::LoadCurve { path } => handlers::transfer::load(state, &path),
            AppCommand::CopyCurve => handlers::transfer::copy(state),
            AppCommand::PasteCurve => handlers::transfer::paste(state),

            // === Editor ===
            AppCommand::AddCurve {
                label,
                milestones,
                range_labels,
            } => handlers::editing::add_curve(state, label, milestones, range_labels),
            AppCommand::SelectDisplayedCurve { index } => {
                handlers::editing::select_curve(state, index)
            }
            AppCommand::SwitchCurveKind { kind } => handlers::editing::switch_kind(state, kind),
            AppCommand::StoreCurvePoints { kind, points } => {
                handlers::editing::store_points(state, kind, &points)
            }
            AppCommand::SetShcPositions {
                shadow,
                dark,
                light,
            } => handlers::editing::set_shc_positions(state, shadow, dark, light),
            AppCommand::SetParametricAdjuster { band, value } => {
                handlers::editing::set_adjuster(state, band, value)
            }
            AppCommand::SetActiveParam { band } => handlers::editing::set_active_param(state, band),
            AppCommand::ResetCurve => handlers::editing::reset(state),
            AppCommand::TogglePointEditing => handlers::editing::toggle_point_editing(state),

            // === Pipette ===
            AppCommand::PipetteHover { tonal } => handlers::pipette::hover(state, tonal),
            AppCommand::BeginPipetteDrag => handlers::pipette::begin_drag(state),
            AppCommand::PipetteDrag { delta_screen_y } => {
                handlers::pipette::drag(state, delta_screen_y)
            }
            AppCommand::EndPipetteDrag => handlers::pipette::end_drag(state),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, options)?,
        }

        Ok(())
    }
}
