use bevy::prelude::*;
use vip_salon::{SalonSession, load_salon_data_from_path};

use super::resources::{RuntimeConfig, SessionState};
use super::state::AppPhase;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("PrimaryCamera"), Camera2d));
}

pub fn bootstrap_session(
    mut commands: Commands,
    config: Res<RuntimeConfig>,
    mut next_phase: ResMut<NextState<AppPhase>>,
    mut exit: EventWriter<AppExit>,
) {
    let data = match load_salon_data_from_path(&config.data_path) {
        Ok(data) => data,
        Err(err) => {
            error!("cannot start salon: {err:#}");
            exit.send(AppExit::error());
            return;
        }
    };

    info!(
        "salon data loaded: {} tiers, {} celebrities, starting capital {}",
        data.tiers.len(),
        data.celebrities.len(),
        config.start_money
    );

    commands.insert_resource(SessionState {
        session: SalonSession::new(config.start_money),
        tiers: data.tier_table(),
        catalog: data.catalog(),
        last_result: None,
    });

    next_phase.set(AppPhase::InGame);
}
