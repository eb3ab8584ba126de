//! Snapping-Zustandsmaschine für die Interim-Link-Erzeugung während eines Drags.
//!
//! Pro Drag-Positionsupdate entscheidet die Maschine, ob ein Interim-Link
//! erzeugt, umgezielt oder verworfen wird. Zwei Distanzen mit Hysterese:
//! Einrasten verlangt größere Nähe (Snap-In) als das Ausrasten (Snap-Out),
//! damit der Link an der Grenze nicht flackert.

use crate::core::{Graph, GraphError};

/// Transienter Drag-Zustand des Editors.
///
/// Der Interim-Link wird ausschließlich über diesen Ein-Slot-Handle
/// identifiziert (per ID, nie per Flag auf dem Link selbst). Invariante:
/// ist der Slot belegt, liegt der Link auch in der Link-Collection;
/// Verwerfen entfernt ihn aus dem Store und leert den Slot in einem Schritt.
#[derive(Debug, Clone, Default)]
pub struct DragSnapState {
    /// Node, der gerade gezogen wird; `None` = kein Drag aktiv
    pub drag_source: Option<u64>,
    /// Aktuell vorgeschlagener, unbestätigter Link
    pub interim_link: Option<u64>,
}

impl DragSnapState {
    /// Erstellt einen leeren Drag-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt zurück, ob gerade ein Drag läuft.
    pub fn is_dragging(&self) -> bool {
        self.drag_source.is_some()
    }

    /// Verarbeitet ein Drag-Positionsupdate für den Node `drag_id`.
    ///
    /// Übergangsregeln, ausgewertet über alle anderen Nodes in
    /// Store-Reihenfolge (der gezogene Node selbst wird übersprungen):
    /// 1a. Kein Interim-Link und Distanz < `snap_in` → Link erzeugen.
    /// 1b. Interim-Link vorhanden, Kandidat ist nicht dessen Ziel und
    ///     Distanz < `snap_in` → Link verwerfen und neu auf den Kandidaten
    ///     zielen. Kann mehrfach pro Update greifen; es gewinnt der
    ///     *letzte* Kandidat in Reihenfolge, nicht der nächstgelegene.
    /// 2.  Nach dem Scan: Ziel weiter als `snap_out` entfernt → Link
    ///     komplett verwerfen.
    ///
    /// Fehler aus dem Store sind Invariantenverletzungen und werden
    /// propagiert.
    pub fn on_drag_update(
        &mut self,
        graph: &mut Graph,
        drag_id: u64,
        snap_in: f32,
        snap_out: f32,
    ) -> Result<(), GraphError> {
        self.drag_source = Some(drag_id);

        let Some(drag_pos) = graph.node(drag_id).map(|n| n.position) else {
            log::warn!("Drag-Update für unbekannten Node {drag_id} ignoriert");
            return Ok(());
        };

        // Kandidaten vor der Mutation einsammeln (Borrow-Konflikt vermeiden);
        // die Store-Reihenfolge bleibt dabei erhalten.
        let candidates: Vec<(u64, glam::Vec2)> = graph
            .nodes()
            .filter(|n| n.id != drag_id)
            .map(|n| (n.id, n.position))
            .collect();

        for (node_id, position) in candidates {
            match self.interim_link {
                // Nah genug: auf den Node als Ziel des Link-Vorschlags einrasten
                None => {
                    if drag_pos.distance(position) < snap_in {
                        let link = graph.add_link(drag_id, node_id)?;
                        log::debug!("Interim-Link {} → Node {node_id} erzeugt", link.id);
                        self.interim_link = Some(link.id);
                    }
                }
                // Nah genug an anderem Node: Vorschlag auf diesen umzielen
                Some(link_id) => {
                    let current_target = graph.link(link_id).map(|l| l.target_id);
                    if current_target != Some(node_id) && drag_pos.distance(position) < snap_in {
                        graph.remove_link(link_id)?;
                        let link = graph.add_link(drag_id, node_id)?;
                        log::debug!("Interim-Link umgezielt auf Node {node_id} (Link {})", link.id);
                        self.interim_link = Some(link.id);
                    }
                }
            }
        }

        // Weit genug weg: vom aktuellen Ziel-Node ausrasten
        if let Some(link_id) = self.interim_link {
            let target_pos = graph
                .link(link_id)
                .and_then(|l| graph.node(l.target_id))
                .map(|n| n.position);
            if let Some(target_pos) = target_pos {
                if drag_pos.distance(target_pos) > snap_out {
                    graph.remove_link(link_id)?;
                    self.interim_link = None;
                    log::debug!("Interim-Link {link_id} verworfen (Snap-Out)");
                }
            }
        }

        Ok(())
    }

    /// Beendet die Geste: beide Slots werden geleert, der Link bleibt im
    /// Store — ein überlebender Interim-Link ist damit bestätigt.
    /// Gibt die ID des übernommenen Links zurück, falls einer existierte.
    pub fn on_drag_end(&mut self) -> Option<u64> {
        self.drag_source = None;
        self.interim_link.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const SNAP_IN: f32 = 15.0;
    const SNAP_OUT: f32 = 25.0;

    fn update(state: &mut DragSnapState, graph: &mut Graph, drag_id: u64, pos: Vec2) {
        graph.set_node_position(drag_id, pos);
        state
            .on_drag_update(graph, drag_id, SNAP_IN, SNAP_OUT)
            .expect("snap update");
    }

    fn two_node_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_node(Vec2::new(0.0, 0.0));
        graph.add_node(Vec2::new(100.0, 100.0));
        graph
    }

    #[test]
    fn test_snap_in_creates_single_interim_link() {
        let mut graph = two_node_graph();
        let mut state = DragSnapState::new();

        update(&mut state, &mut graph, 0, Vec2::new(95.0, 100.0));

        let link_id = state.interim_link.expect("interim link created");
        let link = graph.link(link_id).unwrap();
        assert_eq!((link.source_id, link.target_id), (0, 1));
        assert_eq!(graph.link_count(), 1);

        // Weitere Updates in Reichweite erzeugen keinen zweiten Link
        update(&mut state, &mut graph, 0, Vec2::new(96.0, 100.0));
        assert_eq!(graph.link_count(), 1);
        assert_eq!(state.interim_link, Some(link_id));
    }

    #[test]
    fn test_no_link_without_other_nodes() {
        let mut graph = Graph::new();
        graph.add_node(Vec2::ZERO);
        let mut state = DragSnapState::new();

        update(&mut state, &mut graph, 0, Vec2::new(1.0, 1.0));

        // Selbst-Distanz wird übersprungen, kein Kandidat vorhanden
        assert_eq!(state.interim_link, None);
        assert_eq!(graph.link_count(), 0);
    }

    #[test]
    fn test_snap_out_discards_link() {
        let mut graph = two_node_graph();
        let mut state = DragSnapState::new();

        update(&mut state, &mut graph, 0, Vec2::new(95.0, 100.0));
        assert!(state.interim_link.is_some());

        // Distanz zu Node 1 ≈ 56.6 > 25 → verwerfen
        update(&mut state, &mut graph, 0, Vec2::new(60.0, 60.0));
        assert_eq!(state.interim_link, None);
        assert_eq!(graph.link_count(), 0);
    }

    #[test]
    fn test_hysteresis_no_churn_between_thresholds() {
        let mut graph = two_node_graph();
        let mut state = DragSnapState::new();

        update(&mut state, &mut graph, 0, Vec2::new(95.0, 100.0));
        let link_id = state.interim_link.unwrap();

        // Pendeln zwischen Distanz 16 und 20: weder Snap-In noch Snap-Out
        for offset in [16.0_f32, 20.0, 16.0, 20.0, 18.0] {
            update(&mut state, &mut graph, 0, Vec2::new(100.0 - offset, 100.0));
            assert_eq!(state.interim_link, Some(link_id));
        }
        assert_eq!(graph.link_count(), 1);
    }

    #[test]
    fn test_drag_end_commits_surviving_link() {
        let mut graph = two_node_graph();
        let mut state = DragSnapState::new();

        update(&mut state, &mut graph, 0, Vec2::new(95.0, 100.0));
        let link_id = state.interim_link.unwrap();

        let committed = state.on_drag_end();
        assert_eq!(committed, Some(link_id));
        assert_eq!(state.drag_source, None);
        assert_eq!(state.interim_link, None);
        // Der Link bleibt im Store — bestätigt
        assert!(graph.link(link_id).is_some());
    }

    #[test]
    fn test_drag_end_without_interim_commits_nothing() {
        let mut graph = two_node_graph();
        let mut state = DragSnapState::new();

        update(&mut state, &mut graph, 0, Vec2::new(50.0, 50.0));
        assert_eq!(state.on_drag_end(), None);
        assert_eq!(graph.link_count(), 0);
    }

    #[test]
    fn test_retarget_last_in_range_wins() {
        // A(0) wird gezogen; B(1) und C(2) liegen beide in Snap-In-Reichweite.
        // Es gewinnt der zuletzt gescannte Node in Store-Reihenfolge (C),
        // nicht der nächstgelegene (B).
        let mut graph = Graph::new();
        graph.add_node(Vec2::new(0.0, 0.0)); // A
        graph.add_node(Vec2::new(100.0, 100.0)); // B
        graph.add_node(Vec2::new(110.0, 100.0)); // C
        let mut state = DragSnapState::new();

        // Distanz zu B = 2, zu C = 8 — beide < 15
        update(&mut state, &mut graph, 0, Vec2::new(102.0, 100.0));

        let link = graph.link(state.interim_link.unwrap()).unwrap();
        assert_eq!(link.target_id, 2);
        assert_eq!(graph.link_count(), 1);
    }

    #[test]
    fn test_retarget_between_updates() {
        let mut graph = Graph::new();
        graph.add_node(Vec2::new(0.0, 0.0)); // A
        graph.add_node(Vec2::new(100.0, 100.0)); // B
        graph.add_node(Vec2::new(200.0, 200.0)); // C
        let mut state = DragSnapState::new();

        update(&mut state, &mut graph, 0, Vec2::new(95.0, 100.0));
        let first = state.interim_link.unwrap();
        assert_eq!(graph.link(first).unwrap().target_id, 1);

        // Nahe C: altes Ziel außer Snap-Out-Reichweite, neues in Snap-In
        update(&mut state, &mut graph, 0, Vec2::new(195.0, 200.0));
        let second = state.interim_link.unwrap();
        assert_ne!(first, second);
        assert_eq!(graph.link(second).unwrap().target_id, 2);
        assert_eq!(graph.link_count(), 1);
    }

    #[test]
    fn test_worked_example_from_two_node_session() {
        // Nodes [A(0,0), B(100,100)]; A nach (95,100) ziehen (Distanz 5 < 15)
        // → Interim-Link A→B. Weiter nach (60,60) (Distanz ≈ 56 > 25)
        // → Link entfernt. Drag-Ende → kein Link zwischen A und B.
        let mut graph = two_node_graph();
        let mut state = DragSnapState::new();

        update(&mut state, &mut graph, 0, Vec2::new(95.0, 100.0));
        assert!(state.interim_link.is_some());

        update(&mut state, &mut graph, 0, Vec2::new(60.0, 60.0));
        assert_eq!(state.interim_link, None);

        assert_eq!(state.on_drag_end(), None);
        assert_eq!(graph.link_count(), 0);
    }
}
