//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::parametric::pipette_tonal_value;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SaveCurveRequested => {
            if state.editor.active_kind().is_editable() {
                vec![AppCommand::RequestSaveCurveDialog]
            } else {
                Vec::new()
            }
        }
        AppIntent::LoadCurveRequested => vec![AppCommand::RequestLoadCurveDialog],
        AppIntent::SaveCurvePathSelected { path } => vec![
            AppCommand::RememberCurveDir { path: path.clone() },
            AppCommand::SaveCurve { path },
        ],
        AppIntent::LoadCurvePathSelected { path } => vec![
            AppCommand::RememberCurveDir { path: path.clone() },
            AppCommand::LoadCurve { path },
        ],
        AppIntent::CopyCurveRequested => vec![AppCommand::CopyCurve],
        AppIntent::PasteCurveRequested => vec![AppCommand::PasteCurve],

        AppIntent::AddCurveRequested {
            label,
            milestones,
            range_labels,
        } => vec![AppCommand::AddCurve {
            label,
            milestones,
            range_labels,
        }],
        AppIntent::DisplayedCurveSelected { index } => {
            vec![AppCommand::SelectDisplayedCurve { index }]
        }
        AppIntent::CurveKindSelected { kind } => vec![AppCommand::SwitchCurveKind { kind }],
        AppIntent::CurvePointsEdited { kind, points } => {
            vec![AppCommand::StoreCurvePoints { kind, points }]
        }
        AppIntent::ShcPositionsChanged {
            shadow,
            dark,
            light,
        } => vec![AppCommand::SetShcPositions {
            shadow,
            dark,
            light,
        }],
        AppIntent::ParametricAdjusterChanged { band, value } => {
            vec![AppCommand::SetParametricAdjuster { band, value }]
        }
        AppIntent::AdjusterHovered { band } => {
            vec![AppCommand::SetActiveParam { band: Some(band) }]
        }
        AppIntent::AdjusterLeft => vec![AppCommand::SetActiveParam { band: None }],
        AppIntent::CurveResetRequested => vec![AppCommand::ResetCurve],
        AppIntent::PointEditingToggled => vec![AppCommand::TogglePointEditing],

        AppIntent::PipetteMoved { channels } => vec![AppCommand::PipetteHover {
            tonal: pipette_tonal_value(channels),
        }],
        AppIntent::PipettePressed => vec![AppCommand::BeginPipetteDrag],
        AppIntent::PipetteDragged { delta_screen_y } => {
            vec![AppCommand::PipetteDrag { delta_screen_y }]
        }
        AppIntent::PipetteReleased => vec![AppCommand::EndPipetteDrag],

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}
