//! Getaggter Wertevektor einer Diagonal-Kurve.

use super::parametric::PARAMETRIC_LEN;
use super::{CurveFormatError, CurveKind, ParametricCurve};
use glam::DVec2;

/// Kurve als Typ + Wertevektor, so wie sie gespeichert, kopiert und geladen wird.
///
/// Invarianten (bei jeder Konstruktion geprüft):
/// - `values[0] == kind.to_f64()`
/// - Parametric: genau 8 Werte
/// - Spline/NURBS: `values.len() - 1` gerade (x,y-Paare)
/// - Linear/Unchanged: genau 1 Wert
/// - alle Werte endlich (kein NaN, kein ±∞)
#[derive(Debug, Clone, PartialEq)]
pub struct CurveRecord {
    kind: CurveKind,
    values: Vec<f64>,
}

impl CurveRecord {
    /// Lineare Kurve (nur Typ-Tag).
    pub fn linear() -> Self {
        Self {
            kind: CurveKind::Linear,
            values: vec![CurveKind::Linear.to_f64()],
        }
    }

    /// Unveränderte Kurve (nur Typ-Tag).
    pub fn unchanged() -> Self {
        Self {
            kind: CurveKind::Unchanged,
            values: vec![CurveKind::Unchanged.to_f64()],
        }
    }

    /// Parametrische Kurve aus Split-Positionen und Reglern.
    ///
    /// Nicht-endliche Felder werden als 0 übernommen.
    pub fn parametric(curve: &ParametricCurve) -> Self {
        let values = curve
            .to_values()
            .into_iter()
            .map(|v| if v.is_finite() { v } else { 0.0 })
            .collect();
        Self {
            kind: CurveKind::Parametric,
            values,
        }
    }

    /// Kontrollpunkt-Kurve (Spline oder NURBS) aus Punkten in Kurvenreihenfolge.
    pub fn from_points(kind: CurveKind, points: &[DVec2]) -> Result<Self, CurveFormatError> {
        if !kind.has_control_points() {
            return Err(CurveFormatError::UnexpectedValues { kind });
        }
        let mut values = Vec::with_capacity(1 + points.len() * 2);
        values.push(kind.to_f64());
        for p in points {
            values.push(p.x);
            values.push(p.y);
        }
        check_finite(kind, &values)?;
        Ok(Self { kind, values })
    }

    /// Übernimmt einen rohen Wertevektor (z.B. aus der Zwischenablage) und prüft die Invarianten.
    pub fn from_values(values: Vec<f64>) -> Result<Self, CurveFormatError> {
        let Some(&tag) = values.first() else {
            return Err(CurveFormatError::Empty);
        };
        let kind =
            CurveKind::from_f64(tag).ok_or_else(|| CurveFormatError::UnknownKind(tag.to_string()))?;

        match kind {
            CurveKind::Parametric => {
                if values.len() != PARAMETRIC_LEN {
                    return Err(CurveFormatError::Truncated {
                        kind,
                        expected: PARAMETRIC_LEN,
                        found: values.len(),
                    });
                }
            }
            CurveKind::Spline | CurveKind::Nurbs => {
                let coords = values.len() - 1;
                if coords % 2 != 0 {
                    return Err(CurveFormatError::UnpairedCoordinate {
                        kind,
                        count: coords,
                    });
                }
            }
            CurveKind::Linear | CurveKind::Unchanged => {
                if values.len() != 1 {
                    return Err(CurveFormatError::UnexpectedValues { kind });
                }
            }
        }

        check_finite(kind, &values)?;
        Ok(Self { kind, values })
    }

    /// Kurventyp.
    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    /// Wertevektor inkl. Typ-Tag.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Gibt den Wertevektor zurück.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Kontrollpunkte (leer für Typen ohne Kontrollpunkte).
    pub fn points(&self) -> Vec<DVec2> {
        if !self.kind.has_control_points() {
            return Vec::new();
        }
        self.values[1..]
            .chunks_exact(2)
            .map(|pair| DVec2::new(pair[0], pair[1]))
            .collect()
    }

    /// Anzahl der Kontrollpunkte.
    pub fn point_count(&self) -> usize {
        if self.kind.has_control_points() {
            (self.values.len() - 1) / 2
        } else {
            0
        }
    }

    /// Parametrische Sicht auf die Werte (nur für Parametric).
    pub fn parametric_curve(&self) -> Option<ParametricCurve> {
        if self.kind != CurveKind::Parametric {
            return None;
        }
        ParametricCurve::from_values(&self.values).ok()
    }
}

/// Meldet den ersten NaN- bzw. unendlichen Wert.
pub(crate) fn check_finite(kind: CurveKind, values: &[f64]) -> Result<(), CurveFormatError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(CurveFormatError::NonFiniteValue { kind, index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_prefixes_kind_tag() {
        let record = CurveRecord::from_points(
            CurveKind::Nurbs,
            &[DVec2::new(0.0, 0.0), DVec2::new(0.5, 0.7), DVec2::new(1.0, 1.0)],
        )
        .expect("NURBS-Kurve erwartet");

        assert_eq!(record.values(), &[3.0, 0.0, 0.0, 0.5, 0.7, 1.0, 1.0]);
        assert_eq!(record.point_count(), 3);
        assert_eq!(record.points()[1], DVec2::new(0.5, 0.7));
    }

    #[test]
    fn from_points_rejects_parametric() {
        let err = CurveRecord::from_points(CurveKind::Parametric, &[]).unwrap_err();
        assert_eq!(
            err,
            CurveFormatError::UnexpectedValues {
                kind: CurveKind::Parametric
            }
        );
    }

    #[test]
    fn from_values_checks_pair_invariant() {
        let err = CurveRecord::from_values(vec![1.0, 0.0, 0.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            CurveFormatError::UnpairedCoordinate { count: 3, .. }
        ));
    }

    #[test]
    fn from_points_rejects_non_finite() {
        let err = CurveRecord::from_points(
            CurveKind::Spline,
            &[
                DVec2::new(0.0, 0.0),
                DVec2::new(f64::INFINITY, 0.5),
                DVec2::new(1.0, 1.0),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            CurveFormatError::NonFiniteValue {
                kind: CurveKind::Spline,
                index: 3
            }
        );
    }

    #[test]
    fn from_values_rejects_nan() {
        assert!(matches!(
            CurveRecord::from_values(vec![3.0, 0.0, f64::NAN]),
            Err(CurveFormatError::NonFiniteValue { index: 2, .. })
        ));
        assert!(matches!(
            CurveRecord::from_values(vec![
                2.0,
                0.25,
                0.5,
                0.75,
                0.0,
                f64::NEG_INFINITY,
                0.0,
                0.0
            ]),
            Err(CurveFormatError::NonFiniteValue { index: 5, .. })
        ));
    }

    #[test]
    fn parametric_record_zeroes_non_finite_fields() {
        let curve = ParametricCurve {
            highlights: f64::NAN,
            ..ParametricCurve::default()
        };
        let record = CurveRecord::parametric(&curve);
        assert_eq!(record.values()[4], 0.0);
        assert!(CurveRecord::from_values(record.into_values()).is_ok());
    }

    #[test]
    fn from_values_checks_parametric_length() {
        let err = CurveRecord::from_values(vec![2.0, 0.25, 0.5, 0.75]).unwrap_err();
        assert!(matches!(err, CurveFormatError::Truncated { found: 4, .. }));
    }

    #[test]
    fn from_values_rejects_empty_and_unknown_tag() {
        assert_eq!(
            CurveRecord::from_values(Vec::new()),
            Err(CurveFormatError::Empty)
        );
        assert!(matches!(
            CurveRecord::from_values(vec![4.0]),
            Err(CurveFormatError::UnknownKind(_))
        ));
    }

    #[test]
    fn linear_record_has_single_tag() {
        let record = CurveRecord::from_values(vec![0.0]).expect("Linear erwartet");
        assert_eq!(record, CurveRecord::linear());
        assert!(record.points().is_empty());
        assert!(CurveRecord::from_values(vec![0.0, 1.0]).is_err());
    }

    #[test]
    fn parametric_view_roundtrips() {
        let curve = ParametricCurve::default();
        let record = CurveRecord::parametric(&curve);
        assert_eq!(record.kind(), CurveKind::Parametric);
        assert_eq!(record.parametric_curve(), Some(curve));
        assert_eq!(CurveRecord::linear().parametric_curve(), None);
    }
}
