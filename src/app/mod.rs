//! Application-Layer: Controller, State, Events, Handler und Snapping.

pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
pub mod snap;
pub mod state;

pub use controller::EditorController;
pub use events::{EditorCommand, EditorIntent};
pub use intent_mapping::map_intent_to_commands;
pub use render_scene::build as build_render_scene;
pub use snap::DragSnapState;
pub use state::EditorState;
