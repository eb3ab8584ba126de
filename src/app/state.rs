//! Zentraler Editor-Zustand.

use super::DragSnapState;
use crate::core::Graph;
use crate::shared::EditorOptions;

/// Hauptzustand des Editors: Graph-Store, Drag-Zustand, Optionen.
///
/// Die Collections gehören exklusiv diesem Zustand; der
/// Visualisierungs-Kollaborateur erhält pro Resync nur read-only
/// Snapshots.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Der autoritative Graph
    pub graph: Graph,
    /// Transienter Drag-/Snapping-Zustand
    pub drag: DragSnapState,
    /// Laufzeit-Optionen (Snap-Distanzen, Styling, Curvature)
    pub options: EditorOptions,
}

impl EditorState {
    /// Erstellt einen leeren Editor-Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Editor-Zustand mit vorgegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Erstellt einen Editor-Zustand mit vorhandenem Graphen.
    pub fn with_graph(graph: Graph) -> Self {
        Self {
            graph,
            ..Self::default()
        }
    }
}
