//! Writer für Kurvendateien.

use crate::core::{CurveKind, CurveRecord};

/// Schreibt eine Kurve im zeilenorientierten Textformat.
///
/// - Kopfzeile: Typname
/// - Parametric: ein Wert pro Zeile (7 Zeilen)
/// - Spline/NURBS: ein `x y`-Paar pro Zeile
/// - Linear/Unchanged: nur die Kopfzeile
pub fn encode_curve(record: &CurveRecord) -> String {
    let mut output = String::new();
    output.push_str(record.kind().file_header());
    output.push('\n');

    let payload = &record.values()[1..];
    match record.kind() {
        CurveKind::Parametric => {
            for value in payload {
                output.push_str(&format_value(*value));
                output.push('\n');
            }
        }
        CurveKind::Spline | CurveKind::Nurbs => {
            for pair in payload.chunks_exact(2) {
                output.push_str(&format!(
                    "{} {}\n",
                    format_value(pair[0]),
                    format_value(pair[1])
                ));
            }
        }
        CurveKind::Linear | CurveKind::Unchanged => {}
    }

    output
}

/// Kürzeste Darstellung, die beim Einlesen denselben `f64` ergibt.
fn format_value(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ParametricCurve;
    use glam::DVec2;

    #[test]
    fn test_spline_writes_one_pair_per_line() {
        let record = CurveRecord::from_points(
            CurveKind::Spline,
            &[DVec2::new(0.0, 0.0), DVec2::new(1.0, 1.0)],
        )
        .unwrap();

        assert_eq!(encode_curve(&record), "Spline\n0 0\n1 1\n");
    }

    #[test]
    fn test_parametric_writes_seven_value_lines() {
        let curve = ParametricCurve {
            shadow_split: 0.25,
            dark_split: 0.5,
            light_split: 0.75,
            highlights: 10.0,
            lights: -10.0,
            darks: 5.0,
            shadows: -5.0,
        };
        let text = encode_curve(&CurveRecord::parametric(&curve));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec!["Parametric", "0.25", "0.5", "0.75", "10", "-10", "5", "-5"]
        );
    }

    #[test]
    fn test_nurbs_header_is_uppercase() {
        let record = CurveRecord::from_points(CurveKind::Nurbs, &[DVec2::new(0.1, 0.2)]).unwrap();
        assert_eq!(encode_curve(&record), "NURBS\n0.1 0.2\n");
    }

    #[test]
    fn test_linear_writes_header_only() {
        assert_eq!(encode_curve(&CurveRecord::linear()), "Linear\n");
    }

    #[test]
    fn test_format_value_is_shortest_roundtrip() {
        assert_eq!(format_value(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_value(-0.0), "-0");
        assert_eq!(format_value(1e-7), "0.0000001");
    }
}
