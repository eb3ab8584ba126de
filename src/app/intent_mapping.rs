//! Mapping von Gesten-Intents auf mutierende Editor-Commands.

use super::{EditorCommand, EditorIntent, EditorState};

/// Übersetzt einen `EditorIntent` in eine Sequenz ausführbarer
/// `EditorCommand`s.
///
/// Node-Löschung ist während eines aktiven Drags gesperrt: der gezogene
/// Node ist impliziter Quell-Endpunkt des Interim-Links und darf nicht
/// unter der Geste wegbrechen.
pub fn map_intent_to_commands(state: &EditorState, intent: EditorIntent) -> Vec<EditorCommand> {
    match intent {
        EditorIntent::BackgroundClicked { pos } => {
            vec![EditorCommand::AddNodeAtPosition { pos }]
        }
        EditorIntent::NodeClicked { node_id } => vec![EditorCommand::RenameNode { node_id }],
        EditorIntent::NodeRightClicked { node_id } => {
            if state.drag.is_dragging() {
                log::warn!("Node-Löschung während aktivem Drag gesperrt (Node {node_id})");
                return vec![];
            }
            vec![EditorCommand::RemoveNode { node_id }]
        }
        EditorIntent::LinkClicked { link_id } => vec![EditorCommand::RenameLink { link_id }],
        EditorIntent::LinkRightClicked { link_id } => vec![EditorCommand::RemoveLink { link_id }],
        EditorIntent::NodeDragged { node_id, pos } => {
            vec![EditorCommand::UpdateDrag { node_id, pos }]
        }
        EditorIntent::NodeDragEnded => vec![EditorCommand::EndDrag],
    }
}
