use bevy::prelude::*;

use super::resources::{RuntimeConfig, SalonAction, SessionState};

pub fn apply_salon_actions(
    mut actions: EventReader<SalonAction>,
    mut session: ResMut<SessionState>,
    config: Res<RuntimeConfig>,
) {
    let state = &mut *session;

    for action in actions.read() {
        let outcome = match action {
            SalonAction::Upgrade(level) => state
                .session
                .upgrade(*level, &state.tiers)
                .map(|economy| {
                    format!(
                        "salon upgraded to tier {level}, capital {}",
                        economy.capital()
                    )
                }),
            SalonAction::Purchase(id) => {
                let Some(item) = state.catalog.get(id) else {
                    warn!("purchase requested for unknown celebrity {id}");
                    continue;
                };
                state.session.purchase(item).map(|economy| {
                    format!(
                        "{} joined the salon, capital {}",
                        item.attributes.name,
                        economy.capital()
                    )
                })
            }
            SalonAction::NewGame => {
                state.session.reset(config.start_money);
                Ok(format!("new game started with capital {}", config.start_money))
            }
        };

        let message = match outcome {
            Ok(message) => {
                info!("{message}");
                message
            }
            Err(err) => {
                warn!("salon transaction rejected: {err}");
                format!("Rejected: {err}")
            }
        };
        state.last_result = Some(message);
    }
}
