use std::fmt;

use crate::model::{PlayerEconomyState, TierDefinition, TierTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeError {
    UnknownTier(u32),
    NotUnlockable(u32),
    NoOpUpgrade { requested: u32, current: u32 },
}

impl fmt::Display for UpgradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTier(level) => write!(f, "salon tier {level} does not exist"),
            Self::NotUnlockable(level) => {
                write!(f, "salon tier {level} is locked (capital or prerequisite missing)")
            }
            Self::NoOpUpgrade { requested, current } => write!(
                f,
                "salon tier {requested} is not above the current tier {current}"
            ),
        }
    }
}

impl std::error::Error for UpgradeError {}

/// How a tier should be presented relative to the player's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierStatus {
    Current,
    Owned,
    Available,
    Locked,
}

pub fn is_unlockable(tier: &TierDefinition, state: &PlayerEconomyState) -> bool {
    state.capital >= tier.cost
        && (!tier.has_prerequisite() || state.current_tier >= tier.prerequisite_level)
}

/// Moves the player to `tier_level`, debiting its cost.
///
/// The input state is never touched; on error the caller keeps what it had.
pub fn upgrade(
    tier_level: u32,
    table: &TierTable,
    state: &PlayerEconomyState,
) -> Result<PlayerEconomyState, UpgradeError> {
    let tier = table
        .get(tier_level)
        .ok_or(UpgradeError::UnknownTier(tier_level))?;

    if !is_unlockable(tier, state) {
        return Err(UpgradeError::NotUnlockable(tier_level));
    }

    if tier_level <= state.current_tier {
        return Err(UpgradeError::NoOpUpgrade {
            requested: tier_level,
            current: state.current_tier,
        });
    }

    let capital = state
        .capital
        .checked_sub(tier.cost)
        .ok_or(UpgradeError::NotUnlockable(tier_level))?;

    Ok(PlayerEconomyState {
        capital,
        current_tier: tier_level,
        owned_item_ids: state.owned_item_ids.clone(),
    })
}

pub fn current_tier<'a>(
    table: &'a TierTable,
    state: &PlayerEconomyState,
) -> Option<&'a TierDefinition> {
    table.get(state.current_tier)
}

pub fn next_tier<'a>(
    table: &'a TierTable,
    state: &PlayerEconomyState,
) -> Option<&'a TierDefinition> {
    table.next_after(state.current_tier)
}

/// Percentage of the next tier's cost already covered by capital, capped at 100.
/// `None` once the top of the ladder is reached.
pub fn progress_to_next(table: &TierTable, state: &PlayerEconomyState) -> Option<u8> {
    let next = next_tier(table, state)?;
    if next.cost == 0 {
        return Some(100);
    }
    let percent = (u128::from(state.capital) * 100 / u128::from(next.cost)).min(100);
    Some(percent as u8)
}

pub fn tier_status(tier: &TierDefinition, state: &PlayerEconomyState) -> TierStatus {
    if tier.level == state.current_tier {
        TierStatus::Current
    } else if tier.level < state.current_tier {
        TierStatus::Owned
    } else if is_unlockable(tier, state) {
        TierStatus::Available
    } else {
        TierStatus::Locked
    }
}

#[cfg(test)]
mod tests {
    use super::{
        TierStatus, UpgradeError, current_tier, is_unlockable, next_tier, progress_to_next,
        tier_status, upgrade,
    };
    use crate::model::{PlayerEconomyState, TierDefinition, TierTable};

    fn salon_ladder() -> TierTable {
        let tiers = [(1, 3, 0), (2, 5, 15_000_000), (3, 8, 35_000_000), (4, 12, 75_000_000)]
            .into_iter()
            .map(|(level, capacity, cost)| TierDefinition {
                level,
                name: format!("Salon {level}"),
                description: String::new(),
                capacity,
                cost,
                prerequisite_level: level - 1,
            })
            .collect();
        TierTable::new(tiers)
    }

    #[test]
    fn unlockable_requires_capital_and_prerequisite() {
        let table = salon_ladder();
        let tier_3 = table.get(3).expect("tier 3 exists");

        let rich_but_tier_1 = PlayerEconomyState::new(100_000_000);
        assert!(!is_unlockable(tier_3, &rich_but_tier_1));

        let tier_2_but_poor = PlayerEconomyState::from_parts(1_000, 2, Vec::<String>::new());
        assert!(!is_unlockable(tier_3, &tier_2_but_poor));

        let tier_2_and_rich = PlayerEconomyState::from_parts(35_000_000, 2, Vec::<String>::new());
        assert!(is_unlockable(tier_3, &tier_2_and_rich));

        let first = table.get(1).expect("tier 1 exists");
        assert!(is_unlockable(first, &PlayerEconomyState::new(0)));
    }

    #[test]
    fn upgrade_debits_cost_and_moves_tier() {
        let table = salon_ladder();
        let state = PlayerEconomyState::new(20_000_000);

        let next = upgrade(2, &table, &state).expect("tier 2 should be unlockable");

        assert_eq!(next.capital(), 5_000_000);
        assert_eq!(next.current_tier(), 2);
        assert_eq!(state.capital(), 20_000_000);
        assert_eq!(state.current_tier(), 1);
    }

    #[test]
    fn upgrade_rejects_skipping_a_tier() {
        let table = salon_ladder();
        let state = PlayerEconomyState::new(20_000_000);

        assert_eq!(
            upgrade(3, &table, &state),
            Err(UpgradeError::NotUnlockable(3))
        );

        let rich = PlayerEconomyState::new(500_000_000);
        assert_eq!(upgrade(3, &table, &rich), Err(UpgradeError::NotUnlockable(3)));
    }

    #[test]
    fn upgrade_rejects_unknown_current_and_lower_tiers() {
        let table = salon_ladder();
        let state = PlayerEconomyState::from_parts(80_000_000, 3, Vec::<String>::new());

        assert_eq!(upgrade(9, &table, &state), Err(UpgradeError::UnknownTier(9)));
        assert_eq!(
            upgrade(3, &table, &state),
            Err(UpgradeError::NoOpUpgrade {
                requested: 3,
                current: 3
            })
        );
        assert_eq!(
            upgrade(2, &table, &state),
            Err(UpgradeError::NoOpUpgrade {
                requested: 2,
                current: 3
            })
        );
        assert_eq!(
            upgrade(1, &table, &PlayerEconomyState::new(0)),
            Err(UpgradeError::NoOpUpgrade {
                requested: 1,
                current: 1
            })
        );
    }

    #[test]
    fn full_ladder_climb_spends_exact_total() {
        let table = salon_ladder();
        let mut state = PlayerEconomyState::new(125_000_000);

        for level in 2..=4 {
            state = upgrade(level, &table, &state).expect("each step should succeed");
        }

        assert_eq!(state.current_tier(), 4);
        assert_eq!(state.capital(), 0);
        assert!(next_tier(&table, &state).is_none());
        assert_eq!(progress_to_next(&table, &state), None);
    }

    #[test]
    fn progress_and_lookup_follow_current_tier() {
        let table = salon_ladder();
        let state = PlayerEconomyState::new(7_500_000);

        assert_eq!(current_tier(&table, &state).map(|tier| tier.capacity), Some(3));
        assert_eq!(next_tier(&table, &state).map(|tier| tier.level), Some(2));
        assert_eq!(progress_to_next(&table, &state), Some(50));

        let flush = PlayerEconomyState::new(u64::MAX);
        assert_eq!(progress_to_next(&table, &flush), Some(100));
    }

    #[test]
    fn tier_status_classifies_each_rung() {
        let table = salon_ladder();
        let state = PlayerEconomyState::from_parts(40_000_000, 2, Vec::<String>::new());

        let statuses = table
            .iter()
            .map(|tier| tier_status(tier, &state))
            .collect::<Vec<_>>();

        assert_eq!(
            statuses,
            vec![
                TierStatus::Owned,
                TierStatus::Current,
                TierStatus::Available,
                TierStatus::Locked
            ]
        );
    }
}
