//! Der zentrale Graph-Store mit Nodes, Links und ID-Vergabe.

use super::{EntityKind, GraphError, GraphNode, Link};
use glam::Vec2;
use indexmap::IndexMap;

/// Container für den gesamten Graphen.
///
/// Nodes und Links liegen in `IndexMap`s: die Einfügereihenfolge ist
/// beobachtbares Verhalten (die Snapping-Zustandsmaschine scannt Kandidaten
/// in Store-Reihenfolge), daher entfernen alle Operationen per
/// `shift_remove` und nie per `swap_remove`.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: IndexMap<u64, GraphNode>,
    links: IndexMap<u64, Link>,
    next_node_id: u64,
    next_link_id: u64,
}

impl Graph {
    /// Erstellt einen neuen leeren Graphen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt den Demo-Graphen: 5 Nodes, 10 Links mit Parallel-Links
    /// und Selbst-Schleifen (übt den Curvature-Pass vollständig aus).
    /// Positionen vergibt der Layout-Kollaborateur.
    pub fn with_demo_data() -> Self {
        let mut graph = Self::new();
        for _ in 0..5 {
            graph.add_node(Vec2::ZERO);
        }
        let demo_links = [
            (0, 1),
            (0, 1),
            (1, 0),
            (1, 2),
            (2, 2),
            (2, 2),
            (2, 2),
            (2, 3),
            (3, 4),
            (4, 3),
        ];
        for (source_id, target_id) in demo_links {
            graph
                .add_link(source_id, target_id)
                .expect("demo endpoints were just inserted");
        }
        graph
    }

    /// Fügt einen Node an der gegebenen Position hinzu und gibt ihn zurück.
    pub fn add_node(&mut self, position: Vec2) -> &GraphNode {
        let id = self.next_node_id;
        self.next_node_id += 1;
        self.nodes.insert(id, GraphNode::new(id, position));
        &self.nodes[&id]
    }

    /// Fügt einen Link zwischen zwei existierenden Nodes hinzu.
    ///
    /// Defensive Prüfung: beide Endpunkte müssen Mitglieder der
    /// Node-Collection sein, sonst `GraphError::InvalidReference`.
    pub fn add_link(&mut self, source_id: u64, target_id: u64) -> Result<&Link, GraphError> {
        for endpoint in [source_id, target_id] {
            if !self.nodes.contains_key(&endpoint) {
                return Err(GraphError::InvalidReference { node_id: endpoint });
            }
        }
        let id = self.next_link_id;
        self.next_link_id += 1;
        self.links.insert(id, Link::new(id, source_id, target_id));
        Ok(&self.links[&id])
    }

    /// Entfernt einen Link per ID.
    ///
    /// Entfernen ist nicht idempotent: ein bereits entfernter Link liefert
    /// `GraphError::NotFound`.
    pub fn remove_link(&mut self, link_id: u64) -> Result<Link, GraphError> {
        self.links
            .shift_remove(&link_id)
            .ok_or(GraphError::NotFound {
                kind: EntityKind::Link,
                id: link_id,
            })
    }

    /// Entfernt einen Node inklusive aller Links, die ihn berühren.
    ///
    /// Die Kaskade läuft vollständig vor der Node-Entfernung; danach bleibt
    /// kein Link zurück, dessen Quelle oder Ziel der Node war.
    pub fn remove_node(&mut self, node_id: u64) -> Result<GraphNode, GraphError> {
        if !self.nodes.contains_key(&node_id) {
            return Err(GraphError::NotFound {
                kind: EntityKind::Node,
                id: node_id,
            });
        }
        let touching: Vec<u64> = self
            .links
            .values()
            .filter(|link| link.touches(node_id))
            .map(|link| link.id)
            .collect();
        for link_id in touching {
            self.links.shift_remove(&link_id);
        }
        self.nodes
            .shift_remove(&node_id)
            .ok_or(GraphError::NotFound {
                kind: EntityKind::Node,
                id: node_id,
            })
    }

    /// Benennt einen Node um.
    ///
    /// Ein nach Trimming leerer Name modelliert einen abgebrochenen
    /// Rename-Prompt und ist ein stilles No-op (`Ok(false)`), kein Fehler.
    pub fn rename_node(&mut self, node_id: u64, new_name: &str) -> Result<bool, GraphError> {
        let node = self.nodes.get_mut(&node_id).ok_or(GraphError::NotFound {
            kind: EntityKind::Node,
            id: node_id,
        })?;
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }
        node.name = trimmed.to_string();
        Ok(true)
    }

    /// Benennt einen Link um (gleiche No-op-Semantik wie [`Self::rename_node`]).
    pub fn rename_link(&mut self, link_id: u64, new_name: &str) -> Result<bool, GraphError> {
        let link = self.links.get_mut(&link_id).ok_or(GraphError::NotFound {
            kind: EntityKind::Link,
            id: link_id,
        })?;
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }
        link.name = trimmed.to_string();
        Ok(true)
    }

    /// Aktualisiert die Position eines Nodes (Layout-Simulation oder Drag).
    pub fn set_node_position(&mut self, node_id: u64, position: Vec2) -> bool {
        match self.nodes.get_mut(&node_id) {
            Some(node) => {
                node.position = position;
                true
            }
            None => false,
        }
    }

    /// Liefert einen Node per ID.
    pub fn node(&self, node_id: u64) -> Option<&GraphNode> {
        self.nodes.get(&node_id)
    }

    /// Liefert einen Link per ID.
    pub fn link(&self, link_id: u64) -> Option<&Link> {
        self.links.get(&link_id)
    }

    /// Mutabler Link-Zugriff für den Curvature-Pass.
    pub(crate) fn link_mut(&mut self, link_id: u64) -> Option<&mut Link> {
        self.links.get_mut(&link_id)
    }

    /// Iterator über alle Nodes in Einfügereihenfolge.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    /// Iterator über alle Links in Einfügereihenfolge.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    /// Gibt die Anzahl der Nodes zurück.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt die Anzahl der Links zurück.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_assigns_monotonic_ids() {
        let mut graph = Graph::new();
        let a = graph.add_node(Vec2::new(1.0, 2.0)).id;
        let b = graph.add_node(Vec2::new(3.0, 4.0)).id;
        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(graph.node(a).unwrap().name, "node_0");
        assert_eq!(graph.node(a).unwrap().position, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_add_link_rejects_unknown_endpoint() {
        let mut graph = Graph::new();
        let a = graph.add_node(Vec2::ZERO).id;
        assert_eq!(
            graph.add_link(a, 99),
            Err(GraphError::InvalidReference { node_id: 99 })
        );
        assert_eq!(
            graph.add_link(99, a),
            Err(GraphError::InvalidReference { node_id: 99 })
        );
        assert_eq!(graph.link_count(), 0);
    }

    #[test]
    fn test_link_ids_not_reused_after_removal() {
        let mut graph = Graph::new();
        let a = graph.add_node(Vec2::ZERO).id;
        let b = graph.add_node(Vec2::new(10.0, 0.0)).id;
        let first = graph.add_link(a, b).unwrap().id;
        graph.remove_link(first).unwrap();
        let second = graph.add_link(a, b).unwrap().id;
        assert_ne!(first, second);
    }

    #[test]
    fn test_remove_link_is_not_idempotent() {
        let mut graph = Graph::new();
        let a = graph.add_node(Vec2::ZERO).id;
        let b = graph.add_node(Vec2::ZERO).id;
        let link_id = graph.add_link(a, b).unwrap().id;
        assert!(graph.remove_link(link_id).is_ok());
        assert_eq!(
            graph.remove_link(link_id),
            Err(GraphError::NotFound {
                kind: EntityKind::Link,
                id: link_id
            })
        );
    }

    #[test]
    fn test_remove_node_cascades_to_touching_links() {
        let mut graph = Graph::new();
        let a = graph.add_node(Vec2::ZERO).id;
        let b = graph.add_node(Vec2::ZERO).id;
        let c = graph.add_node(Vec2::ZERO).id;
        graph.add_link(a, b).unwrap();
        graph.add_link(b, a).unwrap();
        graph.add_link(b, b).unwrap();
        let survivor = graph.add_link(a, c).unwrap().id;

        graph.remove_node(b).unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.link_count(), 1);
        assert!(graph.link(survivor).is_some());
        // Keine hängenden Links: alle Endpunkte existieren noch
        for link in graph.links() {
            assert!(graph.node(link.source_id).is_some());
            assert!(graph.node(link.target_id).is_some());
        }
    }

    #[test]
    fn test_remove_missing_node_fails() {
        let mut graph = Graph::new();
        assert_eq!(
            graph.remove_node(5),
            Err(GraphError::NotFound {
                kind: EntityKind::Node,
                id: 5
            })
        );
    }

    #[test]
    fn test_rename_trims_and_ignores_empty() {
        let mut graph = Graph::new();
        let a = graph.add_node(Vec2::ZERO).id;
        assert_eq!(graph.rename_node(a, "  depot  "), Ok(true));
        assert_eq!(graph.node(a).unwrap().name, "depot");

        // Abgebrochener Prompt: stilles No-op
        assert_eq!(graph.rename_node(a, "   "), Ok(false));
        assert_eq!(graph.node(a).unwrap().name, "depot");

        assert_eq!(
            graph.rename_link(0, "x"),
            Err(GraphError::NotFound {
                kind: EntityKind::Link,
                id: 0
            })
        );
    }

    #[test]
    fn test_iteration_order_preserved_after_removal() {
        let mut graph = Graph::new();
        let ids: Vec<u64> = (0..4).map(|_| graph.add_node(Vec2::ZERO).id).collect();
        graph.remove_node(ids[1]).unwrap();
        let remaining: Vec<u64> = graph.nodes().map(|n| n.id).collect();
        // shift_remove erhält die Einfügereihenfolge
        assert_eq!(remaining, vec![ids[0], ids[2], ids[3]]);
    }

    #[test]
    fn test_demo_data_shape() {
        let graph = Graph::with_demo_data();
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.link_count(), 10);
        assert_eq!(graph.links().filter(|l| l.is_self_loop()).count(), 3);
    }
}
