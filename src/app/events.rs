//! Editor-Intent und Editor-Command Events.
//! Intents sind Gesten aus dem Visualisierungs-Kollaborateur ohne direkte
//! Mutationslogik; Commands sind die ausführbaren Mutationen.

use glam::Vec2;

/// Gesten-Events des Visualisierungs-Kollaborateurs.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorIntent {
    /// Klick auf leeren Canvas (bereits in Graph-Koordinaten transformiert)
    BackgroundClicked { pos: Vec2 },
    /// Primärklick auf einen Node (Rename-Prompt)
    NodeClicked { node_id: u64 },
    /// Sekundärklick auf einen Node (Löschen inkl. Link-Kaskade)
    NodeRightClicked { node_id: u64 },
    /// Primärklick auf einen Link (Rename-Prompt)
    LinkClicked { link_id: u64 },
    /// Sekundärklick auf einen Link (Löschen)
    LinkRightClicked { link_id: u64 },
    /// Drag-Positionsupdate eines Nodes (wiederholt während der Geste)
    NodeDragged { node_id: u64, pos: Vec2 },
    /// Drag-Geste losgelassen
    NodeDragEnded,
}

/// Mutierende Commands auf dem Editor-Zustand.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    /// Node an Graph-Position anlegen
    AddNodeAtPosition { pos: Vec2 },
    /// Node per Prompt umbenennen
    RenameNode { node_id: u64 },
    /// Node löschen (kaskadiert auf berührende Links)
    RemoveNode { node_id: u64 },
    /// Link per Prompt umbenennen
    RenameLink { link_id: u64 },
    /// Link löschen
    RemoveLink { link_id: u64 },
    /// Drag-Update in die Snapping-Zustandsmaschine einspeisen
    UpdateDrag { node_id: u64, pos: Vec2 },
    /// Drag beenden (überlebender Interim-Link wird übernommen)
    EndDrag,
}
