use std::fmt;

use crate::model::{Catalog, CatalogItem, PlayerEconomyState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    AlreadyOwned(String),
    InsufficientFunds { id: String, price: u64, capital: u64 },
}

impl fmt::Display for PurchaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyOwned(id) => write!(f, "celebrity {id} is already owned"),
            Self::InsufficientFunds { id, price, capital } => write!(
                f,
                "celebrity {id} costs {price} but only {capital} is available"
            ),
        }
    }
}

impl std::error::Error for PurchaseError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Owned,
    Affordable,
    TooExpensive,
}

pub fn is_owned(item_id: &str, state: &PlayerEconomyState) -> bool {
    state.owned_item_ids.contains(item_id)
}

pub fn is_affordable(item: &CatalogItem, state: &PlayerEconomyState) -> bool {
    state.capital >= item.price
}

/// Buys `item`, debiting its price and recording ownership in one step.
pub fn purchase(
    item: &CatalogItem,
    state: &PlayerEconomyState,
) -> Result<PlayerEconomyState, PurchaseError> {
    if is_owned(&item.id, state) {
        return Err(PurchaseError::AlreadyOwned(item.id.clone()));
    }

    let capital = state
        .capital
        .checked_sub(item.price)
        .ok_or_else(|| PurchaseError::InsufficientFunds {
            id: item.id.clone(),
            price: item.price,
            capital: state.capital,
        })?;

    let mut owned_item_ids = state.owned_item_ids.clone();
    owned_item_ids.insert(item.id.clone());

    Ok(PlayerEconomyState {
        capital,
        current_tier: state.current_tier,
        owned_item_ids,
    })
}

pub fn count_owned(catalog: &Catalog, state: &PlayerEconomyState) -> usize {
    owned_items(catalog, state).count()
}

pub fn owned_items<'a>(
    catalog: &'a Catalog,
    state: &'a PlayerEconomyState,
) -> impl Iterator<Item = &'a CatalogItem> {
    catalog.iter().filter(|item| is_owned(&item.id, state))
}

pub fn item_status(item: &CatalogItem, state: &PlayerEconomyState) -> ItemStatus {
    if is_owned(&item.id, state) {
        ItemStatus::Owned
    } else if is_affordable(item, state) {
        ItemStatus::Affordable
    } else {
        ItemStatus::TooExpensive
    }
}
