use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierDefinition {
    pub level: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub capacity: u32,
    pub cost: u64,
    #[serde(default)]
    pub prerequisite_level: u32,
}

impl TierDefinition {
    pub fn has_prerequisite(&self) -> bool {
        self.prerequisite_level != 0
    }
}

/// Salon tiers ordered by level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierTable {
    tiers: Vec<TierDefinition>,
}

impl TierTable {
    pub fn new(mut tiers: Vec<TierDefinition>) -> Self {
        tiers.sort_by_key(|tier| tier.level);
        Self { tiers }
    }

    pub fn get(&self, level: u32) -> Option<&TierDefinition> {
        self.tiers
            .binary_search_by_key(&level, |tier| tier.level)
            .ok()
            .map(|index| &self.tiers[index])
    }

    pub fn first(&self) -> Option<&TierDefinition> {
        self.tiers.first()
    }

    pub fn top(&self) -> Option<&TierDefinition> {
        self.tiers.last()
    }

    pub fn next_after(&self, level: u32) -> Option<&TierDefinition> {
        self.tiers.iter().find(|tier| tier.level > level)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TierDefinition> {
        self.tiers.iter()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}
