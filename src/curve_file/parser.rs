//! Parser für Kurvendateien.

use crate::core::parametric::PARAMETRIC_LEN;
use crate::core::{CurveFormatError, CurveKind, CurveRecord};

/// Parsed eine Kurve aus dem zeilenorientierten Textformat.
///
/// Tolerant gegenüber Handbearbeitung: Zeilenumbrüche sind beliebiger
/// Whitespace, und das Einlesen der Zahlen endet beim ersten nicht
/// lesbaren Token (der gelesene Anfang wird übernommen).
pub fn decode_curve(text: &str) -> Result<CurveRecord, CurveFormatError> {
    let mut tokens = text.split_whitespace();

    let header = tokens.next().unwrap_or_default();
    let kind = CurveKind::from_file_header(header)
        .ok_or_else(|| CurveFormatError::UnknownKind(header.to_string()))?;

    let numbers = read_numbers(tokens);

    let mut values = Vec::with_capacity(1 + numbers.len());
    values.push(kind.to_f64());

    match kind {
        CurveKind::Parametric => {
            let expected = PARAMETRIC_LEN - 1;
            if numbers.len() < expected {
                return Err(CurveFormatError::Truncated {
                    kind,
                    expected: PARAMETRIC_LEN,
                    found: numbers.len() + 1,
                });
            }
            values.extend_from_slice(&numbers[..expected]);
        }
        CurveKind::Spline | CurveKind::Nurbs => {
            let paired = numbers.len() - numbers.len() % 2;
            if paired != numbers.len() {
                log::warn!(
                    "{}: ungepaarte Koordinate {} am Dateiende verworfen",
                    kind,
                    numbers[paired]
                );
            }
            values.extend_from_slice(&numbers[..paired]);
        }
        CurveKind::Linear | CurveKind::Unchanged => {}
    }

    CurveRecord::from_values(values)
}

/// Liest Zahlen bis zum ersten ungültigen Token.
///
/// Beginnt ein Token mit einer Zahl und enthält danach Fremdzeichen
/// (`0.5,`), wird der Zahlanfang übernommen und das Lesen endet dort.
pub(crate) fn read_numbers<'a>(tokens: impl Iterator<Item = &'a str>) -> Vec<f64> {
    let mut numbers = Vec::new();
    for token in tokens {
        let Some((value, rest)) = leading_number(token) else {
            break;
        };
        if !value.is_finite() {
            break;
        }
        numbers.push(value);
        if !rest.is_empty() {
            break;
        }
    }
    numbers
}

/// Längster Token-Anfang, der sich als Zahl lesen lässt, plus Rest.
fn leading_number(token: &str) -> Option<(f64, &str)> {
    (1..=token.len())
        .rev()
        .filter(|&end| token.is_char_boundary(end))
        .find_map(|end| {
            token[..end]
                .parse::<f64>()
                .ok()
                .map(|value| (value, &token[end..]))
        })
}
