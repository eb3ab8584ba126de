//! Handler für Node/Link-Editing: Anlegen, Umbenennen, Löschen.

use crate::app::EditorState;
use crate::core::EntityKind;
use crate::view::NamePrompt;
use glam::Vec2;

/// Fügt einen neuen Node an der übergebenen Graph-Position hinzu.
pub fn add_node(state: &mut EditorState, pos: Vec2) {
    let node = state.graph.add_node(pos);
    log::info!(
        "Node {} an Position ({:.1}, {:.1}) hinzugefügt",
        node.id,
        pos.x,
        pos.y
    );
}

/// Benennt einen Node über den injizierten Prompt um.
///
/// Gibt zurück, ob tatsächlich umbenannt wurde — nur dann ist ein Resync
/// nötig. Abbruch oder leere Eingabe sind ein stilles No-op.
pub fn rename_node(
    state: &mut EditorState,
    prompt: &mut dyn NamePrompt,
    node_id: u64,
) -> anyhow::Result<bool> {
    let Some(current) = state.graph.node(node_id).map(|n| n.name.clone()) else {
        log::warn!("Rename für unbekannten Node {node_id} ignoriert");
        return Ok(false);
    };
    let Some(value) = prompt.request_name(EntityKind::Node, &current) else {
        return Ok(false);
    };
    let renamed = state.graph.rename_node(node_id, &value)?;
    if renamed {
        log::info!("Node {node_id} umbenannt in {:?}", value.trim());
    }
    Ok(renamed)
}

/// Benennt einen Link über den injizierten Prompt um.
pub fn rename_link(
    state: &mut EditorState,
    prompt: &mut dyn NamePrompt,
    link_id: u64,
) -> anyhow::Result<bool> {
    let Some(current) = state.graph.link(link_id).map(|l| l.name.clone()) else {
        log::warn!("Rename für unbekannten Link {link_id} ignoriert");
        return Ok(false);
    };
    let Some(value) = prompt.request_name(EntityKind::Link, &current) else {
        return Ok(false);
    };
    let renamed = state.graph.rename_link(link_id, &value)?;
    if renamed {
        log::info!("Link {link_id} umbenannt in {:?}", value.trim());
    }
    Ok(renamed)
}

/// Löscht einen Node inklusive aller berührenden Links.
pub fn remove_node(state: &mut EditorState, node_id: u64) -> anyhow::Result<()> {
    let links_before = state.graph.link_count();
    state.graph.remove_node(node_id)?;
    log::info!(
        "Node {node_id} gelöscht ({} Links kaskadiert)",
        links_before - state.graph.link_count()
    );
    Ok(())
}

/// Löscht einen einzelnen Link.
pub fn remove_link(state: &mut EditorState, link_id: u64) -> anyhow::Result<()> {
    state.graph.remove_link(link_id)?;
    log::info!("Link {link_id} gelöscht");
    Ok(())
}
