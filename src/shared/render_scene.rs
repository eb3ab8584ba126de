//! Read-only Snapshot des Graphen für den Visualisierungs-Kollaborateur.

use glam::Vec2;

/// Darstellung eines Nodes inklusive Styling-Hooks.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeVisual {
    /// Node-ID
    pub id: u64,
    /// Position in Graph-Koordinaten
    pub position: Vec2,
    /// Anzeigename
    pub name: String,
    /// Farbe (RGBA); Drag-Quelle und Interim-Endpunkte sind hervorgehoben
    pub color: [f32; 4],
}

/// Darstellung eines Links inklusive Styling-Hooks.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkVisual {
    /// Link-ID
    pub id: u64,
    /// Quell-Node-ID
    pub source_id: u64,
    /// Ziel-Node-ID
    pub target_id: u64,
    /// Anzeigename
    pub name: String,
    /// Farbe (RGBA); der Interim-Link ist hervorgehoben
    pub color: [f32; 4],
    /// Strichelung; `Some` nur für den Interim-Link
    pub dash: Option<[f32; 2]>,
    /// Kosmetische Krümmung
    pub curvature: Option<f32>,
}

/// Vollständige Render-Szene.
///
/// Bei jedem Resync werden die kompletten Collections neu übergeben,
/// nie ein inkrementelles Diff.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Alle Nodes in Store-Reihenfolge
    pub nodes: Vec<NodeVisual>,
    /// Alle Links in Store-Reihenfolge
    pub links: Vec<LinkVisual>,
    /// Pfeil-Länge am Link-Ende
    pub arrow_length: f32,
    /// Relative Pfeil-Position entlang des Links
    pub arrow_rel_pos: f32,
}
