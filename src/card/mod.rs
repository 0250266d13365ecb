pub mod catalog;
pub mod types;

pub use catalog::{CardCatalog, CatalogError};
pub use types::{CardDefinition, CardType, LIGHT_UP_THE_STAGE, RUNAWAY_STEAM_KIN};
