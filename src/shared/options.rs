//! Zentrale Konfiguration für den Node-Link-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Snapping ────────────────────────────────────────────────────────

/// Snap-In-Distanz (Graph-Einheiten): ab dieser Nähe wird ein
/// Interim-Link zum Kandidaten-Node vorgeschlagen.
pub const SNAP_IN_DISTANCE: f32 = 15.0;
/// Snap-Out-Distanz (Graph-Einheiten): ab dieser Entfernung wird der
/// Interim-Link wieder verworfen. Bewusst größer als die Snap-In-Distanz
/// (Hysterese gegen Flackern an der Grenze).
pub const SNAP_OUT_DISTANCE: f32 = 25.0;

// ── Curvature ───────────────────────────────────────────────────────

/// Spannweite der Krümmungsverteilung in Parallel-Gruppen.
pub const CURVATURE_MIN_MAX: f32 = 0.5;

// ── Node-Rendering ──────────────────────────────────────────────────

/// Standard-Nodefarbe (RGBA).
pub const NODE_COLOR_DEFAULT: [f32; 4] = [0.0, 0.8, 1.0, 1.0];

// ── Link-Rendering ──────────────────────────────────────────────────

/// Pfeil-Länge am Link-Ende (Render-Einheiten).
pub const ARROW_LENGTH: f32 = 6.0;
/// Relative Pfeil-Position entlang des Links (1.0 = am Ziel).
pub const ARROW_REL_POS: f32 = 1.0;
/// Standard-Linkfarbe (RGBA: Hellgrau, entspricht `#bbbbbb`).
pub const LINK_COLOR_DEFAULT: [f32; 4] = [0.733, 0.733, 0.733, 1.0];
/// Hervorhebungsfarbe für Drag-Quelle, Interim-Link und dessen Endpunkte
/// (RGBA: Orange).
pub const HIGHLIGHT_COLOR: [f32; 4] = [1.0, 0.647, 0.0, 1.0];
/// Strichelung des Interim-Links (Segment-/Lückenlänge).
pub const INTERIM_DASH: [f32; 2] = [2.0, 2.0];

// ── Laufzeit-Optionen (serialisierbar) ──────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `node_link_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Snapping ────────────────────────────────────────────────
    /// Snap-In-Distanz für Interim-Link-Erzeugung
    pub snap_in_distance: f32,
    /// Snap-Out-Distanz für Interim-Link-Verwerfung
    pub snap_out_distance: f32,

    // ── Curvature ───────────────────────────────────────────────
    /// Curvature-Pass beim Resync ausführen
    pub assign_curvatures: bool,
    /// Spannweite der Krümmungsverteilung
    pub curvature_min_max: f32,

    // ── Rendering ───────────────────────────────────────────────
    /// Standard-Nodefarbe (RGBA)
    pub node_color_default: [f32; 4],
    /// Pfeil-Länge am Link-Ende
    pub arrow_length: f32,
    /// Relative Pfeil-Position (1.0 = am Ziel)
    pub arrow_rel_pos: f32,
    /// Standard-Linkfarbe (RGBA)
    pub link_color_default: [f32; 4],
    /// Hervorhebungsfarbe für Drag-Quelle und Interim-Link (RGBA)
    pub highlight_color: [f32; 4],
    /// Strichelung des Interim-Links
    pub interim_dash: [f32; 2],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            snap_in_distance: SNAP_IN_DISTANCE,
            snap_out_distance: SNAP_OUT_DISTANCE,

            assign_curvatures: true,
            curvature_min_max: CURVATURE_MIN_MAX,

            node_color_default: NODE_COLOR_DEFAULT,
            arrow_length: ARROW_LENGTH,
            arrow_rel_pos: ARROW_REL_POS,
            link_color_default: LINK_COLOR_DEFAULT,
            highlight_color: HIGHLIGHT_COLOR,
            interim_dash: INTERIM_DASH,
        }
    }
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
            .unwrap_or_else(|_| std::path::PathBuf::from("node_link_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("node_link_editor.toml")
    }
}
