use super::CurveSlot;
use crate::core::{CurveKind, CurveRecord, ParametricCurve, ToneBand};
use crate::shared::EditorOptions;

/// Name der Kurve, mit der jeder Editor startet.
pub const DEFAULT_CURVE_LABEL: &str = "Kurve";

/// Laufender Pipetten-Drag auf einem parametrischen Band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipetteDrag {
    /// Band, dessen Regler gezogen wird
    pub band: ToneBand,
    /// Reglerwert beim Drücken
    pub start_value: f64,
}

/// Gemeldete Änderung: Index der Kurve und ihr neuer Stand.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveChange {
    /// Index der geänderten Kurve (siehe [`CurveEditorState::curves`])
    pub curve: usize,
    /// Kurve des gewählten Typs nach der Änderung
    pub record: CurveRecord,
}

/// Zustand des Kurven-Editors.
///
/// Verwaltet mehrere Kurven ([`CurveSlot`]), von denen immer genau eine
/// angezeigt wird. Alle Bearbeitungs-Operationen wirken auf die angezeigte
/// Kurve. Jede Änderung landet als [`CurveChange`] in einer Queue, die der
/// Host über [`take_changes`](Self::take_changes) abholt.
#[derive(Debug, Clone)]
pub struct CurveEditorState {
    curves: Vec<CurveSlot>,
    displayed: usize,
    /// Hervorgehobenes Band der parametrischen Kurve
    pub active_param: Option<ToneBand>,
    /// Laufender Pipetten-Drag
    pub pipette_drag: Option<PipetteDrag>,
    /// Kontrollpunkte per Zahleneingabe bearbeiten
    pub point_editing: bool,
    pending_changes: Vec<CurveChange>,
}

impl CurveEditorState {
    /// Erstellt den Editor mit einer Kurve (Typ: Linear).
    pub fn new(options: &EditorOptions) -> Self {
        Self {
            curves: vec![CurveSlot::new(DEFAULT_CURVE_LABEL, None, None, options)],
            displayed: 0,
            active_param: None,
            pipette_drag: None,
            point_editing: false,
            pending_changes: Vec::new(),
        }
    }

    /// Hängt eine Kurve an und gibt ihren Index zurück. Die Anzeige bleibt.
    pub fn add_curve(&mut self, slot: CurveSlot) -> usize {
        self.curves.push(slot);
        self.curves.len() - 1
    }

    /// Zeigt die Kurve mit Index `index` an. Hover- und Drag-Zustand werden verworfen.
    ///
    /// Unbekannter Index: Rückgabe `false`, nichts ändert sich.
    pub fn select_displayed(&mut self, index: usize) -> bool {
        if index >= self.curves.len() {
            return false;
        }
        if index != self.displayed {
            self.displayed = index;
            self.active_param = None;
            self.pipette_drag = None;
        }
        true
    }

    /// Alle Kurven in Einfüge-Reihenfolge.
    pub fn curves(&self) -> &[CurveSlot] {
        &self.curves
    }

    /// Index der angezeigten Kurve.
    pub fn displayed_index(&self) -> usize {
        self.displayed
    }

    /// Angezeigte Kurve.
    pub fn displayed_slot(&self) -> &CurveSlot {
        &self.curves[self.displayed]
    }

    fn displayed_slot_mut(&mut self) -> &mut CurveSlot {
        &mut self.curves[self.displayed]
    }

    /// Typ der angezeigten Kurve (bestimmt den sichtbaren Editor).
    pub fn active_kind(&self) -> CurveKind {
        self.displayed_slot().kind()
    }

    /// Angezeigte Kurve im gewählten Typ.
    pub fn displayed_curve(&self) -> CurveRecord {
        self.displayed_slot().selected_curve()
    }

    /// Kurve eines beliebigen Typs der angezeigten Kurve.
    pub fn curve(&self, kind: CurveKind) -> CurveRecord {
        self.displayed_slot().curve(kind)
    }

    /// Parametrische Kurve der angezeigten Kurve (unabhängig vom Typ).
    pub fn parametric(&self) -> &ParametricCurve {
        self.displayed_slot().parametric()
    }

    /// Legt eine Kurve im Slot ihres Typs ab und meldet die Änderung.
    ///
    /// Linear/Unchanged haben keinen Slot: Rückgabe `false`.
    pub fn store_curve(&mut self, record: CurveRecord) -> bool {
        if !self.displayed_slot_mut().store(&record) {
            return false;
        }
        self.push_change(record);
        true
    }

    /// Ersetzt die parametrische Kurve und meldet die Änderung.
    pub fn store_parametric(&mut self, curve: ParametricCurve) {
        self.displayed_slot_mut().set_parametric(curve);
        self.push_change(CurveRecord::parametric(&curve));
    }

    /// Wechselt den Typ der angezeigten Kurve. Hover- und Drag-Zustand werden verworfen.
    pub fn switch_kind(&mut self, kind: CurveKind) {
        if self.active_kind() == kind {
            return;
        }
        self.displayed_slot_mut().set_kind(kind);
        self.active_param = None;
        self.pipette_drag = None;
        self.mark_changed();
    }

    /// Meldet die aktuell angezeigte Kurve als geändert.
    pub fn mark_changed(&mut self) {
        let snapshot = self.displayed_curve();
        self.push_change(snapshot);
    }

    fn push_change(&mut self, record: CurveRecord) {
        self.pending_changes.push(CurveChange {
            curve: self.displayed,
            record,
        });
    }

    /// Entnimmt alle seit dem letzten Aufruf gemeldeten Änderungen.
    pub fn take_changes(&mut self) -> Vec<CurveChange> {
        std::mem::take(&mut self.pending_changes)
    }

    /// Gibt `true` zurück, wenn Änderungen auf Abholung warten.
    pub fn has_pending_changes(&self) -> bool {
        !self.pending_changes.is_empty()
    }

    /// Setzt die angezeigte Kurve auf ihre Reset-Kurve zurück.
    ///
    /// Parametric: Standard-Milestones der Kurve, alle Regler 0.
    pub fn reset_displayed(&mut self, options: &EditorOptions) -> bool {
        let kind = self.active_kind();
        match kind {
            CurveKind::Spline | CurveKind::Nurbs => match options.reset_curve(kind) {
                Some(record) => self.store_curve(record),
                None => false,
            },
            CurveKind::Parametric => {
                let milestones = self.displayed_slot().default_milestones(options);
                self.store_parametric(ParametricCurve::with_milestones(milestones));
                true
            }
            CurveKind::Linear | CurveKind::Unchanged => false,
        }
    }
}

impl Default for CurveEditorState {
    fn default() -> Self {
        Self::new(&EditorOptions::default())
    }
}
