use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CelebrityStats {
    pub intelligence: u8,
    pub force: u8,
    pub agility: u8,
}

/// Display-only payload carried by a catalog item. Never read by the ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CelebrityProfile {
    pub name: String,
    pub category: String,
    pub stars: u8,
    pub stats: CelebrityStats,
    pub wins: Option<u32>,
    pub nationality: String,
    pub biography: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub price: u64,
    #[serde(default)]
    pub attributes: CelebrityProfile,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
