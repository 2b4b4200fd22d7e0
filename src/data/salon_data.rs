use std::collections::HashSet;

use anyhow::{Result, bail, ensure};
use serde::{Deserialize, Serialize};

use crate::model::{Catalog, CatalogItem, TierDefinition, TierTable};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalonDataFile {
    #[serde(rename = "_source", default)]
    pub source: String,
    #[serde(default)]
    pub tiers: Vec<TierDefinition>,
    #[serde(default)]
    pub celebrities: Vec<CatalogItem>,
}

impl SalonDataFile {
    /// Checks the invariants the engine assumes of its content: tiers form
    /// 1..N in order, tier 1 is free with no prerequisite, every later tier
    /// requires the one directly below it, and celebrity ids are unique.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.tiers.is_empty(), "salon data defines no tiers");

        for (index, tier) in self.tiers.iter().enumerate() {
            let expected_level = index as u32 + 1;
            ensure!(
                tier.level == expected_level,
                "tier at position {index} has level {}, expected {expected_level}",
                tier.level
            );
            ensure!(tier.capacity > 0, "tier {} has zero capacity", tier.level);

            if tier.level == 1 {
                ensure!(
                    tier.cost == 0 && !tier.has_prerequisite(),
                    "tier 1 must be free and have no prerequisite"
                );
            } else if tier.prerequisite_level != tier.level - 1 {
                bail!(
                    "tier {} requires tier {}, expected {}",
                    tier.level,
                    tier.prerequisite_level,
                    tier.level - 1
                );
            }
        }

        let mut seen = HashSet::new();
        for item in &self.celebrities {
            ensure!(!item.id.trim().is_empty(), "celebrity with empty id");
            ensure!(
                seen.insert(item.id.as_str()),
                "duplicate celebrity id: {}",
                item.id
            );
        }

        Ok(())
    }

    pub fn tier_table(&self) -> TierTable {
        TierTable::new(self.tiers.clone())
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.celebrities.clone())
    }
}
