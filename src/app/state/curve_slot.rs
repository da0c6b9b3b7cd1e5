use crate::core::{CurveKind, CurveRecord, ParametricCurve, ToneBand};
use crate::shared::EditorOptions;

/// Standard-Beschriftung der Bänder in der Reihenfolge Schatten, Dunkel, Hell, Lichter.
pub const DEFAULT_RANGE_LABELS: [&str; 4] = ["Schatten", "Dunkle Töne", "Helle Töne", "Lichter"];

/// Eine Kurve des Editors, z.B. ein Kanal eines Werkzeugs.
///
/// Jede Kurve hat ihren eigenen Typ und hält pro editierbarem Typ eine
/// eigene Kurve, so dass ein Typwechsel nichts verwirft.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSlot {
    /// Anzeigename
    pub label: String,
    /// Band-Beschriftungen (Schatten, Dunkel, Hell, Lichter)
    pub range_labels: [String; 4],
    /// Eigene Standard-Split-Positionen (`None` = aus den Optionen)
    pub milestones: Option<[f64; 3]>,
    kind: CurveKind,
    spline: CurveRecord,
    nurbs: CurveRecord,
    parametric: ParametricCurve,
}

impl CurveSlot {
    /// Neue Kurve vom Typ Linear, Spline/NURBS mit den Reset-Kurven der Optionen.
    pub fn new(
        label: impl Into<String>,
        milestones: Option<[f64; 3]>,
        range_labels: Option<[String; 4]>,
        options: &EditorOptions,
    ) -> Self {
        Self {
            label: label.into(),
            range_labels: range_labels
                .unwrap_or_else(|| DEFAULT_RANGE_LABELS.map(str::to_string)),
            milestones,
            kind: CurveKind::Linear,
            spline: options
                .reset_curve(CurveKind::Spline)
                .unwrap_or_else(CurveRecord::linear),
            nurbs: options
                .reset_curve(CurveKind::Nurbs)
                .unwrap_or_else(CurveRecord::linear),
            parametric: ParametricCurve::with_milestones(
                milestones.unwrap_or(options.default_milestones),
            ),
        }
    }

    /// Gewählter Kurventyp.
    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    pub(super) fn set_kind(&mut self, kind: CurveKind) {
        self.kind = kind;
    }

    /// Kurve des gewählten Typs.
    pub fn selected_curve(&self) -> CurveRecord {
        self.curve(self.kind)
    }

    /// Kurve eines beliebigen Typs (Linear/Unchanged tragen nur den Tag).
    pub fn curve(&self, kind: CurveKind) -> CurveRecord {
        match kind {
            CurveKind::Spline => self.spline.clone(),
            CurveKind::Nurbs => self.nurbs.clone(),
            CurveKind::Parametric => CurveRecord::parametric(&self.parametric),
            CurveKind::Linear => CurveRecord::linear(),
            CurveKind::Unchanged => CurveRecord::unchanged(),
        }
    }

    /// Parametrische Kurve dieses Slots.
    pub fn parametric(&self) -> &ParametricCurve {
        &self.parametric
    }

    /// Beschriftung eines Bands.
    pub fn range_label(&self, band: ToneBand) -> &str {
        let index = match band {
            ToneBand::Shadows => 0,
            ToneBand::Darks => 1,
            ToneBand::Lights => 2,
            ToneBand::Highlights => 3,
        };
        &self.range_labels[index]
    }

    /// Split-Positionen für den Reset der parametrischen Kurve.
    pub fn default_milestones(&self, options: &EditorOptions) -> [f64; 3] {
        self.milestones.unwrap_or(options.default_milestones)
    }

    /// Legt eine Kurve im Slot ihres Typs ab. Linear/Unchanged: `false`.
    pub(super) fn store(&mut self, record: &CurveRecord) -> bool {
        match record.kind() {
            CurveKind::Spline => self.spline = record.clone(),
            CurveKind::Nurbs => self.nurbs = record.clone(),
            CurveKind::Parametric => match record.parametric_curve() {
                Some(curve) => self.parametric = curve,
                None => return false,
            },
            CurveKind::Linear | CurveKind::Unchanged => return false,
        }
        true
    }

    pub(super) fn set_parametric(&mut self, curve: ParametricCurve) {
        self.parametric = curve;
    }
}
