//! Editor-Controller für zentrale Event-Verarbeitung.

use super::{handlers, intent_mapping, render_scene};
use super::{EditorCommand, EditorIntent, EditorState};
use crate::core::assign_link_curvatures;
use crate::view::{GraphView, NamePrompt};

/// Orchestriert Gesten-Intents und Handler auf dem Editor-Zustand.
///
/// Besitzt die beiden injizierten Kollaborateure: die Render-Senke und
/// den Rename-Prompt. Nach jedem mutierenden Command werden die
/// kompletten Collections per [`GraphView::submit`] neu übergeben.
pub struct EditorController {
    view: Box<dyn GraphView>,
    prompt: Box<dyn NamePrompt>,
}

impl EditorController {
    /// Erstellt einen neuen Controller mit Render-Senke und Rename-Prompt.
    pub fn new(view: Box<dyn GraphView>, prompt: Box<dyn NamePrompt>) -> Self {
        Self { view, prompt }
    }

    /// Verarbeitet einen Intent über Intent→Command Mapping.
    /// Läuft pro Event vollständig durch — es gibt genau einen logischen
    /// Mutator, keine Nebenläufigkeit.
    pub fn handle_intent(
        &mut self,
        state: &mut EditorState,
        intent: EditorIntent,
    ) -> anyhow::Result<()> {
        let commands = intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            if self.handle_command(state, command)? {
                self.resync(state);
            }
        }
        Ok(())
    }

    /// Führt einen mutierenden Command aus.
    /// Gibt zurück, ob der Store mutiert wurde und ein Resync fällig ist.
    pub fn handle_command(
        &mut self,
        state: &mut EditorState,
        command: EditorCommand,
    ) -> anyhow::Result<bool> {
        let mutated = match command {
            EditorCommand::AddNodeAtPosition { pos } => {
                handlers::editing::add_node(state, pos);
                true
            }
            EditorCommand::RenameNode { node_id } => {
                handlers::editing::rename_node(state, self.prompt.as_mut(), node_id)?
            }
            EditorCommand::RenameLink { link_id } => {
                handlers::editing::rename_link(state, self.prompt.as_mut(), link_id)?
            }
            EditorCommand::RemoveNode { node_id } => {
                handlers::editing::remove_node(state, node_id)?;
                true
            }
            EditorCommand::RemoveLink { link_id } => {
                handlers::editing::remove_link(state, link_id)?;
                true
            }
            EditorCommand::UpdateDrag { node_id, pos } => {
                handlers::dragging::drag_update(state, node_id, pos)?;
                true
            }
            EditorCommand::EndDrag => {
                handlers::dragging::drag_end(state);
                true
            }
        };
        Ok(mutated)
    }

    /// Übergibt die kompletten Collections an die Render-Senke.
    ///
    /// Vorher läuft (falls aktiviert) der kosmetische Curvature-Pass über
    /// alle Parallel- und Selbst-Schleifen-Gruppen.
    pub fn resync(&mut self, state: &mut EditorState) {
        if state.options.assign_curvatures {
            assign_link_curvatures(&mut state.graph, state.options.curvature_min_max);
        }
        let scene = render_scene::build(state);
        self.view.submit(&scene);
    }
}
