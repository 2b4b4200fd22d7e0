mod input;
mod resources;
mod setup;
mod state;
mod transactions;
mod view;

use bevy::prelude::*;

use resources::{RuntimeConfig, SalonAction, SelectionState};
use state::{AppPhase, SalonTab};

pub struct SalonAppPlugin;

impl Plugin for SalonAppPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppPhase>()
            .init_state::<SalonTab>()
            .init_resource::<RuntimeConfig>()
            .init_resource::<SelectionState>()
            .add_event::<SalonAction>()
            .add_systems(Startup, setup::spawn_camera)
            .add_systems(OnEnter(AppPhase::Boot), setup::bootstrap_session)
            .add_systems(OnEnter(AppPhase::InGame), view::spawn_hud)
            .add_systems(
                Update,
                (
                    input::handle_keyboard_controls,
                    transactions::apply_salon_actions,
                    view::refresh_hud,
                )
                    .chain()
                    .run_if(in_state(AppPhase::InGame)),
            );
    }
}
