mod app;

use bevy::prelude::*;
use bevy::window::{PresentMode, Window};

fn main() {
    App::new()
        .insert_resource(ClearColor(Color::srgb(0.06, 0.02, 0.03)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "VIP Salon".to_string(),
                resolution: (1280.0, 720.0).into(),
                present_mode: PresentMode::AutoVsync,
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(app::SalonAppPlugin)
        .run();
}
