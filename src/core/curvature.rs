//! Kosmetischer Curvature-Pass für Parallel-Links und Selbst-Schleifen.
//!
//! Links zwischen demselben Node-Paar (richtungsunabhängig) würden beim
//! Rendern deckungsgleich übereinanderliegen. Der Pass verteilt
//! Krümmungswerte innerhalb jeder Gruppe, damit alle Links sichtbar bleiben.
//! Reine Kosmetik — die Snapping-Logik liest diese Werte nie.

use super::Graph;
use indexmap::IndexMap;

/// Richtungsunabhängiger Schlüssel eines Node-Paars:
/// `(min(source, target), max(source, target))`.
pub type NodePairId = (u64, u64);

/// Berechnet die Node-Pair-ID eines Endpunkt-Paars.
pub fn node_pair_id(source_id: u64, target_id: u64) -> NodePairId {
    if source_id <= target_id {
        (source_id, target_id)
    } else {
        (target_id, source_id)
    }
}

/// Vergibt Krümmungswerte an alle Parallel- und Selbst-Schleifen-Gruppen.
///
/// - Selbst-Schleifen: der letzte Link der Gruppe erhält Krümmung `1.0`,
///   frühere Links steigen linear ab `curvature_min_max`.
/// - Parallel-Gruppen mit mehr als einem Link: der letzte Link erhält
///   `curvature_min_max`, frühere Links werden im Bereich
///   `[-curvature_min_max, +curvature_min_max)` verteilt; Links mit
///   abweichender Quellrichtung werden gespiegelt, sonst überlappen sie.
/// - Einzelne Nicht-Schleifen-Links behalten `curvature: None`.
pub fn assign_link_curvatures(graph: &mut Graph, curvature_min_max: f32) {
    // Vorherige Werte zurücksetzen: eine auf einen Link geschrumpfte
    // Gruppe darf keine alte Krümmung behalten.
    let link_ids: Vec<u64> = graph.links().map(|l| l.id).collect();
    for link_id in link_ids {
        if let Some(link) = graph.link_mut(link_id) {
            link.curvature = None;
        }
    }

    let mut self_loop_groups: IndexMap<NodePairId, Vec<u64>> = IndexMap::new();
    let mut same_nodes_groups: IndexMap<NodePairId, Vec<u64>> = IndexMap::new();

    for link in graph.links() {
        let pair = node_pair_id(link.source_id, link.target_id);
        let groups = if link.is_self_loop() {
            &mut self_loop_groups
        } else {
            &mut same_nodes_groups
        };
        groups.entry(pair).or_default().push(link.id);
    }

    for ids in self_loop_groups.values() {
        let last_index = ids.len() - 1;
        if let Some(link) = graph.link_mut(ids[last_index]) {
            link.curvature = Some(1.0);
        }
        if last_index == 0 {
            continue;
        }
        let delta = (1.0 - curvature_min_max) / last_index as f32;
        for (i, &link_id) in ids[..last_index].iter().enumerate() {
            if let Some(link) = graph.link_mut(link_id) {
                link.curvature = Some(curvature_min_max + i as f32 * delta);
            }
        }
    }

    for ids in same_nodes_groups.values().filter(|ids| ids.len() > 1) {
        let last_index = ids.len() - 1;
        let Some(last_source) = graph.link(ids[last_index]).map(|l| l.source_id) else {
            continue;
        };
        if let Some(link) = graph.link_mut(ids[last_index]) {
            link.curvature = Some(curvature_min_max);
        }
        let delta = (2.0 * curvature_min_max) / last_index as f32;
        for (i, &link_id) in ids[..last_index].iter().enumerate() {
            let mut curvature = -curvature_min_max + i as f32 * delta;
            if let Some(link) = graph.link_mut(link_id) {
                if link.source_id != last_source {
                    // Gegenrichtung spiegeln, sonst überlappt sie
                    curvature = -curvature;
                }
                link.curvature = Some(curvature);
            }
        }
    }
}
