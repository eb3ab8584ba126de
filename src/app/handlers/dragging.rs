//! Handler für die Drag-Geste: Position nachführen und Snapping füttern.

use crate::app::EditorState;
use glam::Vec2;

/// Verarbeitet ein Drag-Positionsupdate.
///
/// Schreibt zuerst die neue Position in den Store (während der Geste
/// besitzt die Drag-Position Vorrang vor der Layout-Simulation) und
/// wertet danach die Snapping-Übergänge aus.
pub fn drag_update(state: &mut EditorState, node_id: u64, pos: Vec2) -> anyhow::Result<()> {
    if !state.graph.set_node_position(node_id, pos) {
        log::warn!("Drag-Update für unbekannten Node {node_id} ignoriert");
        return Ok(());
    }
    state.drag.on_drag_update(
        &mut state.graph,
        node_id,
        state.options.snap_in_distance,
        state.options.snap_out_distance,
    )?;
    Ok(())
}

/// Beendet die Drag-Geste; ein überlebender Interim-Link ist übernommen.
pub fn drag_end(state: &mut EditorState) {
    if let Some(link_id) = state.drag.on_drag_end() {
        log::info!("Interim-Link {link_id} übernommen");
    }
}
