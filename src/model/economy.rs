use std::collections::BTreeSet;

/// A player's salon economy: capital, current tier and owned celebrities.
///
/// Fields are only writable inside the crate; the progression and acquisition
/// transitions are the only way to derive a new state from an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerEconomyState {
    pub(crate) capital: u64,
    pub(crate) current_tier: u32,
    pub(crate) owned_item_ids: BTreeSet<String>,
}

impl Default for PlayerEconomyState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl PlayerEconomyState {
    pub fn new(starting_capital: u64) -> Self {
        Self {
            capital: starting_capital,
            current_tier: 1,
            owned_item_ids: BTreeSet::new(),
        }
    }

    /// Rebuilds a state from values held by an outside store. Tier is clamped to 1.
    pub fn from_parts<I, S>(capital: u64, current_tier: u32, owned_item_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            capital,
            current_tier: current_tier.max(1),
            owned_item_ids: owned_item_ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn capital(&self) -> u64 {
        self.capital
    }

    pub fn current_tier(&self) -> u32 {
        self.current_tier
    }

    pub fn owned_item_ids(&self) -> &BTreeSet<String> {
        &self.owned_item_ids
    }
}
