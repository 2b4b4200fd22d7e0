pub mod core;
pub mod data;
pub mod model;

pub use crate::core::{
    ItemStatus, PurchaseError, SalonSession, SessionError, SessionSnapshot, TierStatus,
    UpgradeError, count_owned, current_tier, is_affordable, is_owned, is_unlockable, item_status,
    next_tier, owned_items, progress_to_next, purchase, tier_status, upgrade,
};
pub use data::{
    SalonDataFile, load_salon_data, load_salon_data_from_path, parse_salon_data, salon_data_path,
};
pub use model::{
    Catalog, CatalogItem, CelebrityProfile, CelebrityStats, PlayerEconomyState, TierDefinition,
    TierTable,
};
