use bevy::prelude::*;

use super::resources::{SalonAction, SelectionState, SessionState};
use super::state::SalonTab;

pub fn handle_keyboard_controls(
    keys: Res<ButtonInput<KeyCode>>,
    session: Res<SessionState>,
    tab: Res<State<SalonTab>>,
    mut next_tab: ResMut<NextState<SalonTab>>,
    mut selection: ResMut<SelectionState>,
    mut actions: EventWriter<SalonAction>,
) {
    let tab = *tab.get();

    if keys.just_pressed(KeyCode::Tab) {
        next_tab.set(tab.toggled());
        selection.index = 0;
        return;
    }

    let rows = session.row_count(tab);
    if keys.just_pressed(KeyCode::ArrowUp) {
        selection.step(-1, rows);
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        selection.step(1, rows);
    }

    if keys.just_pressed(KeyCode::Enter) {
        let action = match tab {
            SalonTab::Salon => session
                .tiers
                .iter()
                .nth(selection.index)
                .map(|tier| SalonAction::Upgrade(tier.level)),
            SalonTab::Celebrities => session
                .catalog
                .at(selection.index)
                .map(|item| SalonAction::Purchase(item.id.clone())),
        };
        if let Some(action) = action {
            actions.send(action);
        }
    }

    if keys.just_pressed(KeyCode::KeyN) {
        actions.send(SalonAction::NewGame);
    }
}
