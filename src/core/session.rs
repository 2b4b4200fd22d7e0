use std::fmt;

use crate::model::{CatalogItem, PlayerEconomyState, TierTable};

use super::acquisition::{PurchaseError, purchase};
use super::progression::{UpgradeError, upgrade};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    StaleSnapshot { expected: u64, actual: u64 },
    Upgrade(UpgradeError),
    Purchase(PurchaseError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleSnapshot { expected, actual } => write!(
                f,
                "snapshot version {expected} is stale, session is at version {actual}"
            ),
            Self::Upgrade(err) => write!(f, "{err}"),
            Self::Purchase(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Upgrade(err) => Some(err),
            Self::Purchase(err) => Some(err),
            Self::StaleSnapshot { .. } => None,
        }
    }
}

impl From<UpgradeError> for SessionError {
    fn from(err: UpgradeError) -> Self {
        Self::Upgrade(err)
    }
}

impl From<PurchaseError> for SessionError {
    fn from(err: PurchaseError) -> Self {
        Self::Purchase(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub version: u64,
    pub state: PlayerEconomyState,
}

/// Single writer for one player's economy state.
///
/// Every committed transition bumps `version`. The `commit_*` entry points
/// take the version a caller read its snapshot at and refuse to run once
/// anything else has committed, so two transactions decided on the same
/// pre-transaction state cannot both land. Transitions are always
/// recomputed against the session's own state; there is no way to install
/// an arbitrary state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalonSession {
    version: u64,
    state: PlayerEconomyState,
}

impl Default for SalonSession {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SalonSession {
    pub fn new(starting_capital: u64) -> Self {
        Self {
            version: 0,
            state: PlayerEconomyState::new(starting_capital),
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn state(&self) -> &PlayerEconomyState {
        &self.state
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            version: self.version,
            state: self.state.clone(),
        }
    }

    pub fn upgrade(
        &mut self,
        tier_level: u32,
        table: &TierTable,
    ) -> Result<&PlayerEconomyState, SessionError> {
        self.commit_upgrade(self.version, tier_level, table)
    }

    pub fn purchase(&mut self, item: &CatalogItem) -> Result<&PlayerEconomyState, SessionError> {
        self.commit_purchase(self.version, item)
    }

    /// Compare-and-swap upgrade: runs only if nothing committed since
    /// `expected_version`.
    pub fn commit_upgrade(
        &mut self,
        expected_version: u64,
        tier_level: u32,
        table: &TierTable,
    ) -> Result<&PlayerEconomyState, SessionError> {
        self.check_version(expected_version)?;
        let next = upgrade(tier_level, table, &self.state)?;
        Ok(self.install(next))
    }

    /// Compare-and-swap purchase: runs only if nothing committed since
    /// `expected_version`.
    pub fn commit_purchase(
        &mut self,
        expected_version: u64,
        item: &CatalogItem,
    ) -> Result<&PlayerEconomyState, SessionError> {
        self.check_version(expected_version)?;
        let next = purchase(item, &self.state)?;
        Ok(self.install(next))
    }

    /// Starts a new game. The version keeps counting so snapshots taken
    /// before the reset stay stale.
    pub fn reset(&mut self, starting_capital: u64) {
        self.state = PlayerEconomyState::new(starting_capital);
        self.version += 1;
    }

    fn check_version(&self, expected_version: u64) -> Result<(), SessionError> {
        if expected_version != self.version {
            return Err(SessionError::StaleSnapshot {
                expected: expected_version,
                actual: self.version,
            });
        }
        Ok(())
    }

    fn install(&mut self, next: PlayerEconomyState) -> &PlayerEconomyState {
        self.state = next;
        self.version += 1;
        &self.state
    }
}
