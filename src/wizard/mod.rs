//! Wizard core: step state machine and selection-card model

pub mod machine;
pub mod selection;

pub use machine::{DetailKind, Step, WizardMachine};
pub use selection::{CardGroup, SelectionCard, SelectionMode};
