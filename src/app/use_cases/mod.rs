//! Use-Cases der Application-Layer-Orchestrierung.

pub mod curve_io;
pub mod editing;
pub mod pipette;
