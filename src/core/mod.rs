mod acquisition;
mod progression;
mod session;

pub use acquisition::{
    ItemStatus, PurchaseError, count_owned, is_affordable, is_owned, item_status, owned_items,
    purchase,
};
pub use progression::{
    TierStatus, UpgradeError, current_tier, is_unlockable, next_tier, progress_to_next,
    tier_status, upgrade,
};
pub use session::{SalonSession, SessionError, SessionSnapshot};
