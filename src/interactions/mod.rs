//! Herb-drug interaction checking
//!
//! An [`InteractionRegistry`] holds substances under their canonical names and
//! aliases plus the known interactions between pairs of them. Raw names are
//! resolved through the alias index; every registered interaction whose two
//! endpoints are both present is reported, most severe first.

pub mod data;
pub mod registry;
pub mod report;
pub mod types;

pub use registry::{InteractionRegistry, RegistryTables};
pub use report::InteractionReport;
pub use types::{Interaction, Severity, Substance, SubstanceCategory};
