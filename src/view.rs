//! Trait-Nahtstellen zum externen Visualisierungs-Kollaborateur.
//!
//! Rendering, Hit-Testing und Force-Layout liegen außerhalb dieses Kerns.
//! Der Kollaborateur konsumiert [`RenderScene`]-Snapshots und liefert
//! Gesten als [`EditorIntent`](crate::app::EditorIntent)s zurück; die
//! Screen-zu-Graph-Koordinatentransformation von Background-Klicks ist
//! seine Aufgabe.

use crate::core::EntityKind;
use crate::shared::RenderScene;

/// Senke für vollständige Graph-Resyncs.
pub trait GraphView {
    /// Übergibt die kompletten Node-/Link-Collections zur Darstellung
    /// und Simulation. Wird nach jeder mutierenden Operation aufgerufen.
    fn submit(&mut self, scene: &RenderScene);
}

/// Injizierter Rename-Dialog.
///
/// Abstrahiert den blockierenden Prompt der Umgebung; Test-Doubles
/// liefern vorbereitete Werte statt echter UI.
pub trait NamePrompt {
    /// Fragt einen neuen Namen ab. `None` oder ein leerer Wert
    /// modellieren einen abgebrochenen Dialog.
    fn request_name(&mut self, kind: EntityKind, current: &str) -> Option<String>;
}
