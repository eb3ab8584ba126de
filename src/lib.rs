//! Node-Link-Graph-Editor Library.
//! Editor-Kern (Graph-Store, Snapping-Zustandsmaschine, Dispatcher) als
//! Library exportiert; Rendering, Hit-Testing und Force-Layout liefert ein
//! externer Visualisierungs-Kollaborateur über die Traits in [`view`].

pub mod app;
pub mod core;
pub mod shared;
pub mod view;

pub use app::{DragSnapState, EditorCommand, EditorController, EditorIntent, EditorState};
pub use core::{
    assign_link_curvatures, node_pair_id, EntityKind, Graph, GraphError, GraphNode, Link,
    NodePairId,
};
pub use shared::{EditorOptions, LinkVisual, NodeVisual, RenderScene};
pub use view::{GraphView, NamePrompt};
