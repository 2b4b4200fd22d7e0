mod catalog;
mod economy;
mod tier;

pub use catalog::{Catalog, CatalogItem, CelebrityProfile, CelebrityStats};
pub use economy::PlayerEconomyState;
pub use tier::{TierDefinition, TierTable};
