//! Core-Domänentypen: Nodes, Links, Graph-Store, Curvature-Pass.

pub mod curvature;
pub mod error;
pub mod graph;
pub mod link;
pub mod node;

pub use curvature::{assign_link_curvatures, node_pair_id, NodePairId};
pub use error::{EntityKind, GraphError};
pub use graph::Graph;
pub use link::Link;
pub use node::GraphNode;
