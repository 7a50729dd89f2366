//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod fields;
pub mod frame;
pub mod history;
pub mod location;
pub mod saved_maps;
pub mod vertex;
pub mod view;
