//! Feature-Handler für die Command-Verarbeitung.

pub mod dragging;
pub mod editing;
