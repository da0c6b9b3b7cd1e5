//! Zwischenablage für Diagonal-Kurven (ein Slot, kein Stack).

use super::CurveKind;

/// Schnittstelle der anwendungsweiten Kurven-Zwischenablage.
///
/// Der Host kann eine eigene Implementierung (z.B. geteilt mit anderen
/// Werkzeugen) bereitstellen; [`ClipboardSlot`] ist die In-Process-Variante.
pub trait CurveClipboard {
    /// Legt Werte + Typ ab und überschreibt den bisherigen Inhalt.
    fn set_diagonal_curve_data(&mut self, values: Vec<f64>, kind: CurveKind);

    /// Typ des aktuellen Inhalts, `None` wenn leer. Verbraucht nichts.
    fn has_diagonal_curve_data(&self) -> Option<CurveKind>;

    /// Kopie der abgelegten Werte (leer, wenn nichts abgelegt ist).
    fn diagonal_curve_data(&self) -> Vec<f64>;
}

/// Einfache Zwischenablage mit genau einem Slot.
#[derive(Debug, Clone, Default)]
pub struct ClipboardSlot {
    stored: Option<(CurveKind, Vec<f64>)>,
}

impl ClipboardSlot {
    /// Erstellt eine leere Zwischenablage.
    pub fn new() -> Self {
        Self { stored: None }
    }

    /// Leert den Slot.
    pub fn clear(&mut self) {
        self.stored = None;
    }
}

impl CurveClipboard for ClipboardSlot {
    fn set_diagonal_curve_data(&mut self, values: Vec<f64>, kind: CurveKind) {
        self.stored = Some((kind, values));
    }

    fn has_diagonal_curve_data(&self) -> Option<CurveKind> {
        self.stored.as_ref().map(|(kind, _)| *kind)
    }

    fn diagonal_curve_data(&self) -> Vec<f64> {
        self.stored
            .as_ref()
            .map(|(_, values)| values.clone())
            .unwrap_or_default()
    }
}
