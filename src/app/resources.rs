use std::path::PathBuf;

use bevy::prelude::*;
use vip_salon::{Catalog, SalonSession, TierTable, salon_data_path};

use super::state::SalonTab;

#[derive(Resource, Debug, Clone)]
pub struct RuntimeConfig {
    pub start_money: u64,
    pub data_path: PathBuf,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            start_money: 20_000_000,
            data_path: salon_data_path(),
        }
    }
}

/// The one writer of the player's economy. Transactions reach it only
/// through `SalonAction` events, applied in order by a single system.
#[derive(Resource, Debug)]
pub struct SessionState {
    pub session: SalonSession,
    pub tiers: TierTable,
    pub catalog: Catalog,
    pub last_result: Option<String>,
}

impl SessionState {
    pub fn row_count(&self, tab: SalonTab) -> usize {
        match tab {
            SalonTab::Salon => self.tiers.len(),
            SalonTab::Celebrities => self.catalog.len(),
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct SelectionState {
    pub index: usize,
}

impl SelectionState {
    pub fn step(&mut self, delta: isize, rows: usize) {
        if rows == 0 {
            self.index = 0;
            return;
        }
        self.index = self.index.saturating_add_signed(delta).min(rows - 1);
    }
}

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub enum SalonAction {
    Upgrade(u32),
    Purchase(String),
    NewGame,
}

#[derive(Component)]
pub struct HudText;
