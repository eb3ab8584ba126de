//! Fehlertypen des Graph-Stores.

/// Art einer Graph-Entität (für Fehlermeldungen und Rename-Prompts).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Ein Wegpunkt im Graphen
    Node,
    /// Eine gerichtete Verbindung zwischen zwei Nodes
    Link,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Node => write!(f, "node"),
            EntityKind::Link => write!(f, "link"),
        }
    }
}

/// Fehler des Graph-Stores.
///
/// Beide Varianten sind Invariantenverletzungen: die spezifizierten
/// Dispatcher-Abläufe lösen sie nie aus. Sie werden propagiert statt
/// still verschluckt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Link-Endpunkt referenziert keinen vorhandenen Node
    #[error("link endpoint {node_id} is not a member of the node collection")]
    InvalidReference {
        /// Die unbekannte Node-ID
        node_id: u64,
    },
    /// Entität (Node oder Link) nicht vorhanden
    #[error("{kind} {id} not found")]
    NotFound {
        /// Art der fehlenden Entität
        kind: EntityKind,
        /// ID der fehlenden Entität
        id: u64,
    },
}
