//! Kurventyp einer Diagonal-Kurve und dessen numerische Kodierung.

use serde::{Deserialize, Serialize};

/// Typ einer Diagonal-Kurve (Eingangs- → Ausgangs-Tonwert).
///
/// Die numerischen Werte entsprechen dem Typ-Tag in `values[0]` eines
/// [`CurveRecord`](super::CurveRecord). Tag 4 ist für Catmull-Rom-Kurven
/// des Hosts reserviert und wird hier nicht verarbeitet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CurveKind {
    /// Identität, keine Kontrollpunkte
    #[default]
    Linear,
    /// Spline durch Kontrollpunkte ("Custom")
    Spline,
    /// Parametrische Kurve (3 Splits + 4 Band-Regler)
    Parametric,
    /// NURBS-Kontrollkäfig
    #[serde(rename = "NURBS")]
    Nurbs,
    /// Kurve wird nicht verändert (Mehrfachbearbeitung)
    Unchanged,
}

impl CurveKind {
    /// Alle Typen in Tag-Reihenfolge.
    pub const ALL: [CurveKind; 5] = [
        CurveKind::Linear,
        CurveKind::Spline,
        CurveKind::Parametric,
        CurveKind::Nurbs,
        CurveKind::Unchanged,
    ];

    /// Numerischer Typ-Tag wie in `values[0]`.
    pub fn to_f64(self) -> f64 {
        match self {
            CurveKind::Linear => 0.0,
            CurveKind::Spline => 1.0,
            CurveKind::Parametric => 2.0,
            CurveKind::Nurbs => 3.0,
            CurveKind::Unchanged => 5.0,
        }
    }

    /// Liest einen Typ-Tag. Unbekannte oder nicht ganzzahlige Werte → `None`.
    pub fn from_f64(tag: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.to_f64() == tag)
    }

    /// Name in der Kopfzeile einer Kurvendatei.
    pub fn file_header(self) -> &'static str {
        match self {
            CurveKind::Linear => "Linear",
            CurveKind::Spline => "Spline",
            CurveKind::Parametric => "Parametric",
            CurveKind::Nurbs => "NURBS",
            CurveKind::Unchanged => "Unchanged",
        }
    }

    /// Erkennt eine Kopfzeile. Nur die vier ladbaren Typen werden akzeptiert.
    pub fn from_file_header(token: &str) -> Option<Self> {
        match token {
            "Linear" => Some(CurveKind::Linear),
            "Spline" => Some(CurveKind::Spline),
            "NURBS" => Some(CurveKind::Nurbs),
            "Parametric" => Some(CurveKind::Parametric),
            _ => None,
        }
    }

    /// `true` für Typen mit eigenem Editor und speicherbaren Daten.
    pub fn is_editable(self) -> bool {
        matches!(
            self,
            CurveKind::Spline | CurveKind::Parametric | CurveKind::Nurbs
        )
    }

    /// `true` für Kontrollpunkt-Kurven (x,y-Paare).
    pub fn has_control_points(self) -> bool {
        matches!(self, CurveKind::Spline | CurveKind::Nurbs)
    }
}

impl std::fmt::Display for CurveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_header())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_roundtrip_for_all_kinds() {
        for kind in CurveKind::ALL {
            assert_eq!(CurveKind::from_f64(kind.to_f64()), Some(kind));
        }
    }

    #[test]
    fn reserved_and_fractional_tags_are_rejected() {
        assert_eq!(CurveKind::from_f64(4.0), None);
        assert_eq!(CurveKind::from_f64(1.5), None);
        assert_eq!(CurveKind::from_f64(-1.0), None);
    }

    #[test]
    fn unchanged_header_is_not_loadable() {
        assert_eq!(CurveKind::from_file_header("Unchanged"), None);
        assert_eq!(CurveKind::from_file_header("spline"), None);
        assert_eq!(
            CurveKind::from_file_header("NURBS"),
            Some(CurveKind::Nurbs)
        );
    }

    #[test]
    fn only_spline_parametric_nurbs_are_editable() {
        let editable: Vec<_> = CurveKind::ALL
            .into_iter()
            .filter(|k| k.is_editable())
            .collect();
        assert_eq!(
            editable,
            vec![CurveKind::Spline, CurveKind::Parametric, CurveKind::Nurbs]
        );
    }
}
