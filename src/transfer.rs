//! Kurven-Transfer: Speichern, Laden, Kopieren und Einfügen.
//!
//! Zustandslose Operationen. Welcher Kurventyp aktiv ist, bestimmt der
//! Aufrufer (siehe `app::state::CurveEditorState`).

use crate::core::{CurveClipboard, CurveFileError, CurveKind, CurveRecord};
use crate::curve_file::{decode_curve, encode_curve};
use std::path::{Path, PathBuf};

/// Speichert eine Kurve unter `path`.
///
/// Leerer Pfad (Dialog abgebrochen) ist ein No-op. Geschrieben wird erst in
/// eine temporäre Nachbardatei, die danach umbenannt wird; schlägt etwas
/// fehl, bleibt keine halbe Datei zurück.
pub fn save_curve_file(record: &CurveRecord, path: &str) -> Result<(), CurveFileError> {
    if path.is_empty() {
        log::debug!("Speichern abgebrochen: kein Pfad");
        return Ok(());
    }

    let target = PathBuf::from(path);
    let tmp = tmp_path_for(&target);
    let content = encode_curve(record);

    let result = std::fs::write(&tmp, content).and_then(|_| std::fs::rename(&tmp, &target));
    if let Err(source) = result {
        let _ = std::fs::remove_file(&tmp);
        return Err(CurveFileError::Io {
            path: target,
            source,
        });
    }

    log::info!(
        "{}-Kurve gespeichert nach: {}",
        record.kind(),
        target.display()
    );
    Ok(())
}

/// Liest eine Kurve aus einer Datei, ohne Fehler zu verschlucken.
pub fn read_curve_file(path: &Path) -> Result<CurveRecord, CurveFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| CurveFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_curve(&content).map_err(|source| CurveFileError::Format {
        path: path.to_path_buf(),
        source,
    })
}

/// Lädt eine Kurve aus `path`.
///
/// Leerer Pfad, nicht lesbare Datei oder unbekanntes Format ergeben `None`;
/// der Zustand des Aufrufers bleibt dann unverändert.
pub fn load_curve_file(path: &str) -> Option<CurveRecord> {
    if path.is_empty() {
        log::debug!("Laden abgebrochen: kein Pfad");
        return None;
    }

    match read_curve_file(Path::new(path)) {
        Ok(record) => {
            log::info!(
                "{}-Kurve geladen aus: {} ({} Werte)",
                record.kind(),
                path,
                record.values().len()
            );
            Some(record)
        }
        Err(e) => {
            log::warn!("Kurve nicht geladen: {}", e);
            None
        }
    }
}

/// Kopiert die Werte der aktiven Kurve in die Zwischenablage.
///
/// Linear/Unchanged haben nichts Kopierbares: Rückgabe `false`, die
/// Zwischenablage bleibt unangetastet.
pub fn copy_curve(clipboard: &mut impl CurveClipboard, kind: CurveKind, values: &[f64]) -> bool {
    if !kind.is_editable() {
        log::debug!("Kopieren: {} hat keine Kurvendaten", kind);
        return false;
    }
    clipboard.set_diagonal_curve_data(values.to_vec(), kind);
    log::info!("{}-Kurve in Zwischenablage kopiert", kind);
    true
}

/// Holt eine Kurve aus der Zwischenablage, wenn deren Typ zu `kind` passt.
///
/// Typ-Mismatch ist kein Fehler, sondern ein stilles `None`.
pub fn paste_curve(clipboard: &impl CurveClipboard, kind: CurveKind) -> Option<CurveRecord> {
    match clipboard.has_diagonal_curve_data() {
        Some(stored) if stored == kind => {}
        Some(stored) => {
            log::debug!("Einfügen: Zwischenablage enthält {}, aktiv ist {}", stored, kind);
            return None;
        }
        None => {
            log::debug!("Einfügen: Zwischenablage leer");
            return None;
        }
    }

    match CurveRecord::from_values(clipboard.diagonal_curve_data()) {
        Ok(record) if record.kind() == kind => Some(record),
        Ok(record) => {
            log::warn!(
                "Zwischenablage als {} markiert, Daten sind aber {}",
                kind,
                record.kind()
            );
            None
        }
        Err(e) => {
            log::warn!("Zwischenablage enthält ungültige Kurvendaten: {}", e);
            None
        }
    }
}

fn tmp_path_for(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    target.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ClipboardSlot, ParametricCurve};
    use glam::DVec2;

    fn spline() -> CurveRecord {
        CurveRecord::from_points(
            CurveKind::Spline,
            &[DVec2::new(0.0, 0.0), DVec2::new(0.4, 0.6), DVec2::new(1.0, 1.0)],
        )
        .unwrap()
    }

    #[test]
    fn copy_linear_leaves_clipboard_untouched() {
        let mut clipboard = ClipboardSlot::new();
        clipboard.set_diagonal_curve_data(spline().into_values(), CurveKind::Spline);

        assert!(!copy_curve(&mut clipboard, CurveKind::Linear, &[0.0]));
        assert!(!copy_curve(&mut clipboard, CurveKind::Unchanged, &[5.0]));

        assert_eq!(clipboard.has_diagonal_curve_data(), Some(CurveKind::Spline));
        assert_eq!(clipboard.diagonal_curve_data(), spline().into_values());
    }

    #[test]
    fn copy_then_paste_same_kind_returns_record() {
        let mut clipboard = ClipboardSlot::new();
        let record = spline();

        assert!(copy_curve(&mut clipboard, record.kind(), record.values()));
        assert_eq!(paste_curve(&clipboard, CurveKind::Spline), Some(record));
    }

    #[test]
    fn paste_with_mismatched_kind_returns_none() {
        let mut clipboard = ClipboardSlot::new();
        let record = CurveRecord::parametric(&ParametricCurve::default());
        copy_curve(&mut clipboard, record.kind(), record.values());

        assert_eq!(paste_curve(&clipboard, CurveKind::Spline), None);
        assert_eq!(paste_curve(&clipboard, CurveKind::Nurbs), None);
        assert!(paste_curve(&clipboard, CurveKind::Parametric).is_some());
    }

    #[test]
    fn paste_from_empty_clipboard_returns_none() {
        assert_eq!(paste_curve(&ClipboardSlot::new(), CurveKind::Spline), None);
    }

    #[test]
    fn paste_rejects_malformed_slot_content() {
        let mut clipboard = ClipboardSlot::new();
        clipboard.set_diagonal_curve_data(vec![2.0, 0.25], CurveKind::Parametric);
        assert_eq!(paste_curve(&clipboard, CurveKind::Parametric), None);
    }

    #[test]
    fn save_with_empty_path_is_noop() {
        assert!(save_curve_file(&spline(), "").is_ok());
    }

    #[test]
    fn load_with_empty_path_returns_none() {
        assert_eq!(load_curve_file(""), None);
    }

    #[test]
    fn tmp_path_is_sibling_of_target() {
        let tmp = tmp_path_for(Path::new("/curves/tone.rtc"));
        assert_eq!(tmp, PathBuf::from("/curves/tone.rtc.tmp"));
    }
}
