//! Repräsentiert eine gerichtete Verbindung zwischen zwei Nodes.

/// Ein gerichteter Link zwischen zwei Nodes.
///
/// Endpunkte werden über IDs referenziert, nie über Referenzen —
/// Identitätsvergleiche laufen immer über die ID (keine Aliasing-Probleme
/// über Container-Grenzen hinweg). Invariante: ein Link referenziert nie
/// eine Node-ID, die nicht in der Node-Collection liegt.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// Eindeutige, monoton vergebene ID
    pub id: u64,
    /// Node-ID des Quell-Endpunkts
    pub source_id: u64,
    /// Node-ID des Ziel-Endpunkts
    pub target_id: u64,
    /// Anzeigename (Standard: `link_<id>`)
    pub name: String,
    /// Kosmetische Krümmung; `None` = gerade Linie.
    /// Wird vom Curvature-Pass vergeben, nie von der Snapping-Logik gelesen.
    pub curvature: Option<f32>,
}

impl Link {
    /// Erstellt einen neuen Link mit generiertem Standardnamen.
    pub fn new(id: u64, source_id: u64, target_id: u64) -> Self {
        Self {
            id,
            source_id,
            target_id,
            name: format!("link_{id}"),
            curvature: None,
        }
    }

    /// Prüft ob der Link den gegebenen Node als Quelle oder Ziel berührt.
    pub fn touches(&self, node_id: u64) -> bool {
        self.source_id == node_id || self.target_id == node_id
    }

    /// Prüft ob der Link eine Selbst-Schleife ist.
    pub fn is_self_loop(&self) -> bool {
        self.source_id == self.target_id
    }
}
