//! Parametrische Kurve: drei Split-Positionen (SHC) und vier Band-Regler.
//!
//! Layout des Wertevektors:
//! `[tag, shadow_split, dark_split, light_split, highlights, lights, darks, shadows]`

use super::curve_record::check_finite;
use super::{CurveFormatError, CurveKind};

/// Anzahl der Werte einer parametrischen Kurve inkl. Typ-Tag.
pub const PARAMETRIC_LEN: usize = 8;
/// Untere Grenze der Band-Regler.
pub const ADJUSTER_MIN: f64 = -100.0;
/// Obere Grenze der Band-Regler.
pub const ADJUSTER_MAX: f64 = 100.0;
/// Standard-Split-Positionen (Schatten/Dunkel/Hell).
pub const DEFAULT_MILESTONES: [f64; 3] = [0.25, 0.5, 0.75];
/// Sentinel eines ungültigen Pipetten-Kanals.
pub const PIPETTE_NO_VALUE: f32 = -1.0;

/// Tonwert-Band eines parametrischen Reglers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToneBand {
    /// Lichter (oberhalb `light_split`)
    Highlights,
    /// Helle Töne
    Lights,
    /// Dunkle Töne
    Darks,
    /// Schatten (unterhalb `shadow_split`)
    Shadows,
}

impl ToneBand {
    /// Alle Bänder in Vektor-Reihenfolge.
    pub const ALL: [ToneBand; 4] = [
        ToneBand::Highlights,
        ToneBand::Lights,
        ToneBand::Darks,
        ToneBand::Shadows,
    ];

    /// Index des Band-Werts im Wertevektor (zugleich Active-Param-ID).
    pub fn value_index(self) -> usize {
        match self {
            ToneBand::Highlights => 4,
            ToneBand::Lights => 5,
            ToneBand::Darks => 6,
            ToneBand::Shadows => 7,
        }
    }
}

/// Parametrische Diagonal-Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParametricCurve {
    /// Grenze Schatten | Dunkel
    pub shadow_split: f64,
    /// Grenze Dunkel | Hell
    pub dark_split: f64,
    /// Grenze Hell | Lichter
    pub light_split: f64,
    /// Regler Lichter
    pub highlights: f64,
    /// Regler helle Töne
    pub lights: f64,
    /// Regler dunkle Töne
    pub darks: f64,
    /// Regler Schatten
    pub shadows: f64,
}

impl Default for ParametricCurve {
    fn default() -> Self {
        Self::with_milestones(DEFAULT_MILESTONES)
    }
}

impl ParametricCurve {
    /// Neutrale Kurve (alle Regler 0) mit den gegebenen Split-Positionen.
    pub fn with_milestones(milestones: [f64; 3]) -> Self {
        let mut curve = Self {
            shadow_split: 0.0,
            dark_split: 0.0,
            light_split: 0.0,
            highlights: 0.0,
            lights: 0.0,
            darks: 0.0,
            shadows: 0.0,
        };
        curve.set_splits(milestones[0], milestones[1], milestones[2]);
        curve
    }

    /// Liest eine Kurve aus dem 8-elementigen Wertevektor.
    ///
    /// Werte werden unverändert übernommen (kein Clamping), damit
    /// Laden/Einfügen bit-genau bleibt.
    pub fn from_values(values: &[f64]) -> Result<Self, CurveFormatError> {
        let Some(&tag) = values.first() else {
            return Err(CurveFormatError::Empty);
        };
        if tag != CurveKind::Parametric.to_f64() {
            return Err(CurveFormatError::KindTagMismatch {
                expected: CurveKind::Parametric,
                found: tag,
            });
        }
        if values.len() != PARAMETRIC_LEN {
            return Err(CurveFormatError::Truncated {
                kind: CurveKind::Parametric,
                expected: PARAMETRIC_LEN,
                found: values.len(),
            });
        }
        check_finite(CurveKind::Parametric, values)?;
        Ok(Self {
            shadow_split: values[1],
            dark_split: values[2],
            light_split: values[3],
            highlights: values[4],
            lights: values[5],
            darks: values[6],
            shadows: values[7],
        })
    }

    /// Baut den Wertevektor inkl. Typ-Tag.
    pub fn to_values(&self) -> Vec<f64> {
        vec![
            CurveKind::Parametric.to_f64(),
            self.shadow_split,
            self.dark_split,
            self.light_split,
            self.highlights,
            self.lights,
            self.darks,
            self.shadows,
        ]
    }

    /// Setzt die Split-Positionen, begrenzt auf [0, 1] und monoton sortiert.
    /// NaN zählt als 0.
    pub fn set_splits(&mut self, shadow: f64, dark: f64, light: f64) {
        let mut splits = [shadow, dark, light].map(|v| {
            if v.is_nan() {
                0.0
            } else {
                v.clamp(0.0, 1.0)
            }
        });
        splits.sort_by(f64::total_cmp);
        [self.shadow_split, self.dark_split, self.light_split] = splits;
    }

    /// Split-Positionen als Tripel.
    pub fn splits(&self) -> [f64; 3] {
        [self.shadow_split, self.dark_split, self.light_split]
    }

    /// Aktueller Wert eines Band-Reglers.
    pub fn adjuster(&self, band: ToneBand) -> f64 {
        match band {
            ToneBand::Highlights => self.highlights,
            ToneBand::Lights => self.lights,
            ToneBand::Darks => self.darks,
            ToneBand::Shadows => self.shadows,
        }
    }

    /// Setzt einen Band-Regler (begrenzt auf den Reglerbereich).
    pub fn set_adjuster(&mut self, band: ToneBand, value: f64) {
        let value = trim_adjuster(value);
        match band {
            ToneBand::Highlights => self.highlights = value,
            ToneBand::Lights => self.lights = value,
            ToneBand::Darks => self.darks = value,
            ToneBand::Shadows => self.shadows = value,
        }
    }

    /// Band, in das ein Tonwert (0..1) fällt.
    pub fn band_for(&self, tonal: f64) -> ToneBand {
        if tonal >= self.light_split {
            ToneBand::Highlights
        } else if tonal >= self.dark_split {
            ToneBand::Lights
        } else if tonal >= self.shadow_split {
            ToneBand::Darks
        } else {
            ToneBand::Shadows
        }
    }
}

/// Begrenzt einen Reglerwert auf ganzzahlige Schritte im Reglerbereich.
/// NaN ergibt 0.
pub fn trim_adjuster(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.round().clamp(ADJUSTER_MIN, ADJUSTER_MAX)
}

/// Reglerwert während eines Pipetten-Drags.
///
/// Eine vertikale Bewegung um 2 Pixel ändert den Regler um einen Schritt;
/// nach oben (negatives Delta) erhöht den Wert. Angefangene Schritte
/// zählen nicht (Ganzzahl-Division des Pixel-Deltas).
pub fn drag_adjuster(start_value: f64, delta_screen_y: f64) -> f64 {
    trim_adjuster(start_value - (delta_screen_y / 2.0).trunc())
}

/// Mittelt die gültigen Pipetten-Kanäle (Sentinel `-1` wird ignoriert).
pub fn pipette_tonal_value(channels: [f32; 3]) -> Option<f32> {
    let valid: Vec<f32> = channels
        .into_iter()
        .filter(|&v| v != PIPETTE_NO_VALUE)
        .collect();
    if valid.is_empty() {
        return None;
    }
    Some(valid.iter().sum::<f32>() / valid.len() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> ParametricCurve {
        ParametricCurve {
            shadow_split: 0.25,
            dark_split: 0.5,
            light_split: 0.75,
            highlights: 10.0,
            lights: -10.0,
            darks: 5.0,
            shadows: -5.0,
        }
    }

    #[test]
    fn values_layout_matches_adjuster_indices() {
        let curve = sample();
        let values = curve.to_values();

        assert_eq!(values.len(), PARAMETRIC_LEN);
        assert_eq!(values[0], CurveKind::Parametric.to_f64());
        for band in ToneBand::ALL {
            assert_eq!(values[band.value_index()], curve.adjuster(band));
        }
        assert_eq!(ParametricCurve::from_values(&values), Ok(curve));
    }

    #[test]
    fn from_values_rejects_short_vector() {
        let err = ParametricCurve::from_values(&[2.0, 0.25, 0.5]).unwrap_err();
        assert_eq!(
            err,
            CurveFormatError::Truncated {
                kind: CurveKind::Parametric,
                expected: 8,
                found: 3
            }
        );
    }

    #[test]
    fn from_values_rejects_foreign_tag() {
        let err = ParametricCurve::from_values(&[1.0; 8]).unwrap_err();
        assert!(matches!(err, CurveFormatError::KindTagMismatch { .. }));
    }

    #[test]
    fn set_splits_clamps_and_keeps_order() {
        let mut curve = ParametricCurve::default();
        curve.set_splits(0.9, -0.2, 0.4);
        assert_eq!(curve.splits(), [0.0, 0.4, 0.9]);
    }

    #[test]
    fn band_for_partitions_tonal_range() {
        let curve = sample();
        assert_eq!(curve.band_for(0.1), ToneBand::Shadows);
        assert_eq!(curve.band_for(0.25), ToneBand::Darks);
        assert_eq!(curve.band_for(0.6), ToneBand::Lights);
        assert_eq!(curve.band_for(0.75), ToneBand::Highlights);
        assert_eq!(curve.band_for(1.0), ToneBand::Highlights);
    }

    #[test]
    fn set_adjuster_is_trimmed_to_slider_range() {
        let mut curve = ParametricCurve::default();
        curve.set_adjuster(ToneBand::Lights, 250.0);
        curve.set_adjuster(ToneBand::Shadows, -12.4);
        assert_eq!(curve.lights, ADJUSTER_MAX);
        assert_eq!(curve.shadows, -12.0);
    }

    #[test]
    fn drag_moves_one_step_per_two_pixels() {
        assert_eq!(drag_adjuster(10.0, -20.0), 20.0);
        assert_eq!(drag_adjuster(10.0, 6.0), 7.0);
        assert_eq!(drag_adjuster(95.0, -40.0), ADJUSTER_MAX);
    }

    #[test]
    fn drag_ignores_partial_steps() {
        assert_eq!(drag_adjuster(10.0, -3.0), 11.0);
        assert_eq!(drag_adjuster(10.0, 3.0), 9.0);
        assert_eq!(drag_adjuster(10.0, -1.0), 10.0);
        assert_eq!(drag_adjuster(10.0, 1.0), 10.0);
    }

    #[test]
    fn from_values_rejects_non_finite() {
        let err =
            ParametricCurve::from_values(&[2.0, 0.25, f64::NAN, 0.75, 0.0, 0.0, 0.0, 0.0])
                .unwrap_err();
        assert_eq!(
            err,
            CurveFormatError::NonFiniteValue {
                kind: CurveKind::Parametric,
                index: 2
            }
        );
    }

    #[test]
    fn nan_inputs_are_neutralised() {
        let mut curve = ParametricCurve::default();
        curve.set_adjuster(ToneBand::Darks, f64::NAN);
        curve.set_splits(f64::NAN, 0.5, 0.75);
        assert_eq!(curve.darks, 0.0);
        assert_eq!(curve.splits(), [0.0, 0.5, 0.75]);
    }

    #[test]
    fn pipette_average_ignores_sentinel_channels() {
        assert_relative_eq!(
            pipette_tonal_value([0.2, -1.0, 0.4]).unwrap(),
            0.3,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            pipette_tonal_value([0.7, -1.0, -1.0]).unwrap(),
            0.7,
            epsilon = 1e-6
        );
        assert_eq!(pipette_tonal_value([-1.0; 3]), None);
    }
}
