//! VEGA Windowed Client
//!
//! Opens the 800x690 window and drives the simulation once per Bevy frame.
//! Bevy owns the event loop; the engine only sees key-downs and draw lists.

mod game;

use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use bevy::window::{PresentMode, WindowMode};

use game::GamePlugin;

/// Entities that stand for the presentation resources (window camera).
/// Released and reacquired on every restart.
#[derive(Component)]
pub struct Presentation;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: vega::WINDOW_TITLE.into(),
                resolution: (vega::SCREEN_WIDTH as f32, vega::SCREEN_HEIGHT as f32).into(),
                mode: WindowMode::Windowed,
                resizable: false,
                present_mode: PresentMode::AutoNoVsync,
                ..default()
            }),
            // Close requests go through the simulation as a Quit intent
            close_when_requested: false,
            ..default()
        }))
        .insert_resource(ClearColor(game::draw::to_color(vega::Color::SKY)))
        .add_plugins(GamePlugin)
        .add_systems(Startup, setup_2d_camera)
        .run();
}

fn setup_2d_camera(mut commands: Commands) {
    spawn_camera(&mut commands);
    info!("{} v{} initialized", vega::WINDOW_TITLE, vega::VERSION);
}

/// Spawn the camera that maps the fixed screen onto the window.
pub fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scaling_mode: ScalingMode::Fixed {
                width: vega::SCREEN_WIDTH as f32,
                height: vega::SCREEN_HEIGHT as f32,
            },
            ..OrthographicProjection::default_2d()
        },
        Presentation,
    ));
}
