//! Builder für Render-Szenen aus dem Editor-Zustand.

use crate::app::EditorState;
use crate::shared::{LinkVisual, NodeVisual, RenderScene};

/// Baut eine RenderScene aus dem aktuellen Editor-Zustand.
///
/// Drag-Quelle und die Endpunkte des Interim-Links werden hervorgehoben;
/// der Interim-Link selbst wird gestrichelt und in Hervorhebungsfarbe
/// dargestellt. Alles weitere sind die unveränderten Store-Collections.
pub fn build(state: &EditorState) -> RenderScene {
    let options = &state.options;
    let interim = state
        .drag
        .interim_link
        .and_then(|id| state.graph.link(id));
    let interim_source = interim.map(|l| l.source_id);
    let interim_target = interim.map(|l| l.target_id);
    let interim_id = interim.map(|l| l.id);

    let nodes = state
        .graph
        .nodes()
        .map(|node| {
            let highlighted = state.drag.drag_source == Some(node.id)
                || interim_source == Some(node.id)
                || interim_target == Some(node.id);
            NodeVisual {
                id: node.id,
                position: node.position,
                name: node.name.clone(),
                color: if highlighted {
                    options.highlight_color
                } else {
                    options.node_color_default
                },
            }
        })
        .collect();

    let links = state
        .graph
        .links()
        .map(|link| {
            let is_interim = interim_id == Some(link.id);
            LinkVisual {
                id: link.id,
                source_id: link.source_id,
                target_id: link.target_id,
                name: link.name.clone(),
                color: if is_interim {
                    options.highlight_color
                } else {
                    options.link_color_default
                },
                dash: is_interim.then_some(options.interim_dash),
                curvature: link.curvature,
            }
        })
        .collect();

    RenderScene {
        nodes,
        links,
        arrow_length: options.arrow_length,
        arrow_rel_pos: options.arrow_rel_pos,
    }
}
