//! Zentrale Konfiguration für den Kurven-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::parametric::DEFAULT_MILESTONES;
use crate::core::{CurveKind, CurveRecord};
use serde::{Deserialize, Serialize};

// ── Reset-Kurven ────────────────────────────────────────────────────

/// Reset-Kurve des Spline-Editors: Diagonale (0,0) → (1,1).
pub const SPLINE_RESET_CURVE: [f64; 5] = [1.0, 0.0, 0.0, 1.0, 1.0];
/// Reset-Kurve des NURBS-Editors: Diagonale (0,0) → (1,1).
pub const NURBS_RESET_CURVE: [f64; 5] = [3.0, 0.0, 0.0, 1.0, 1.0];

// ── Command-Log ─────────────────────────────────────────────────────

/// Maximale Anzahl geloggter Commands.
pub const COMMAND_LOG_CAPACITY: usize = 1000;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `tone_curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    /// Zuletzt benutztes Verzeichnis für Kurvendateien (leer = unbekannt)
    #[serde(default)]
    pub curve_dir: String,
    /// Standard-Split-Positionen der parametrischen Kurve
    pub default_milestones: [f64; 3],
    /// Reset-Kurve für Spline (Wertevektor inkl. Typ-Tag)
    pub spline_reset_curve: Vec<f64>,
    /// Reset-Kurve für NURBS (Wertevektor inkl. Typ-Tag)
    pub nurbs_reset_curve: Vec<f64>,
    /// Kapazität des Command-Logs
    #[serde(default = "default_command_log_capacity")]
    pub command_log_capacity: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            curve_dir: String::new(),
            default_milestones: DEFAULT_MILESTONES,
            spline_reset_curve: SPLINE_RESET_CURVE.to_vec(),
            nurbs_reset_curve: NURBS_RESET_CURVE.to_vec(),
            command_log_capacity: COMMAND_LOG_CAPACITY,
        }
    }
}

/// Serde-Default für `command_log_capacity` (Abwärtskompatibilität).
fn default_command_log_capacity() -> usize {
    COMMAND_LOG_CAPACITY
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("tone_curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("tone_curve_editor.toml")
    }

    /// Reset-Kurve für einen Kontrollpunkt-Typ.
    ///
    /// Ungültige Werte aus der Konfiguration fallen auf die eingebaute
    /// Diagonale zurück.
    pub fn reset_curve(&self, kind: CurveKind) -> Option<CurveRecord> {
        let (configured, builtin): (&[f64], &[f64]) = match kind {
            CurveKind::Spline => (self.spline_reset_curve.as_slice(), &SPLINE_RESET_CURVE[..]),
            CurveKind::Nurbs => (self.nurbs_reset_curve.as_slice(), &NURBS_RESET_CURVE[..]),
            _ => return None,
        };

        match CurveRecord::from_values(configured.to_vec()) {
            Ok(record) if record.kind() == kind => Some(record),
            _ => {
                log::warn!("Reset-Kurve für {} ungültig, verwende Diagonale", kind);
                CurveRecord::from_values(builtin.to_vec()).ok()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reset_curves_are_diagonals() {
        let options = EditorOptions::default();
        let spline = options.reset_curve(CurveKind::Spline).unwrap();
        let nurbs = options.reset_curve(CurveKind::Nurbs).unwrap();

        assert_eq!(spline.values(), &SPLINE_RESET_CURVE);
        assert_eq!(nurbs.kind(), CurveKind::Nurbs);
        assert_eq!(options.reset_curve(CurveKind::Parametric), None);
    }

    #[test]
    fn invalid_reset_curve_falls_back_to_builtin() {
        let options = EditorOptions {
            spline_reset_curve: vec![3.0, 0.0, 0.0, 1.0, 1.0],
            ..EditorOptions::default()
        };
        let spline = options.reset_curve(CurveKind::Spline).unwrap();
        assert_eq!(spline.kind(), CurveKind::Spline);
    }

    #[test]
    fn toml_roundtrip_preserves_options() {
        let options = EditorOptions {
            curve_dir: "/home/user/curves".to_string(),
            default_milestones: [0.2, 0.45, 0.8],
            ..EditorOptions::default()
        };
        let text = toml::to_string_pretty(&options).unwrap();
        let parsed: EditorOptions = toml::from_str(&text).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("tone_curve_editor_missing_options.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }

    #[test]
    fn broken_file_yields_defaults() {
        let path = std::env::temp_dir().join("tone_curve_editor_broken_options.toml");
        std::fs::write(&path, "default_milestones = \"kaputt\"").unwrap();
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
        let _ = std::fs::remove_file(&path);
    }
}
