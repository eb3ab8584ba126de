//! Repräsentiert einen einzelnen Wegpunkt im Graphen.

use glam::Vec2;

/// Ein Node im Graphen.
///
/// Die ID ist nach Erzeugung unveränderlich; die Position wird vom
/// Layout-Kollaborateur während der Simulation und per Drag mutiert.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    /// Eindeutige, monoton vergebene ID
    pub id: u64,
    /// Position in Graph-Koordinaten
    pub position: Vec2,
    /// Anzeigename (Standard: `node_<id>`)
    pub name: String,
}

impl GraphNode {
    /// Erstellt einen neuen Node mit generiertem Standardnamen.
    pub fn new(id: u64, position: Vec2) -> Self {
        Self {
            id,
            position,
            name: format!("node_{id}"),
        }
    }

    /// Euklidische Distanz zu einem anderen Node.
    pub fn distance_to(&self, other: &GraphNode) -> f32 {
        self.position.distance(other.position)
    }
}
