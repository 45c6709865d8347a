//! Draw-list presentation
//!
//! Rectangles and text become short-lived entities; circles and lines are
//! drawn with gizmos. Engine coordinates (origin top-left, y down) are mapped
//! onto the centred, y-up camera space.

use bevy::math::Isometry2d;
use bevy::prelude::*;
use bevy::sprite::Anchor;

use vega::render::compose;
use vega::{DrawCommand, Point, Rect, SCREEN_HEIGHT, SCREEN_WIDTH};

use super::Simulation;

const TEXT_SIZE: f32 = 28.0;

/// Entities spawned for a single frame.
#[derive(Component)]
pub struct FrameEntity;

/// Compose the world and present the draw list.
pub fn draw_scene(
    mut commands: Commands,
    sim: Res<Simulation>,
    previous: Query<Entity, With<FrameEntity>>,
    mut clear: ResMut<ClearColor>,
    mut gizmos: Gizmos,
) {
    for entity in previous.iter() {
        commands.entity(entity).despawn();
    }

    let frame = compose(&sim.world);

    // Painter's order via z
    for (z, command) in frame.commands.iter().enumerate() {
        let z = z as f32 * 0.01;

        match command {
            DrawCommand::Clear(color) => clear.0 = to_color(*color),
            DrawCommand::FillRect { rect, color } => {
                commands.spawn((
                    Sprite {
                        color: to_color(*color),
                        custom_size: Some(Vec2::new(rect.w as f32, rect.h as f32)),
                        ..default()
                    },
                    Transform::from_translation(rect_center(rect).extend(z)),
                    FrameEntity,
                ));
            }
            DrawCommand::Circle { center, radius, color } => {
                gizmos.circle_2d(
                    Isometry2d::from_translation(to_world(*center)),
                    *radius as f32,
                    to_color(*color),
                );
            }
            DrawCommand::Line { from, to, color } => {
                gizmos.line_2d(to_world(*from), to_world(*to), to_color(*color));
            }
            DrawCommand::Text { text, y, color } => {
                commands.spawn((
                    Text2d::new(text.clone()),
                    TextFont {
                        font_size: TEXT_SIZE,
                        ..default()
                    },
                    TextColor(to_color(*color)),
                    Anchor::TopCenter,
                    Transform::from_translation(Vec3::new(0.0, to_world_y(*y as f32), z)),
                    FrameEntity,
                ));
            }
        }
    }
}

/// Engine colour -> Bevy colour.
pub fn to_color(color: vega::Color) -> Color {
    Color::srgba_u8(color.r, color.g, color.b, color.a)
}

fn to_world_y(y: f32) -> f32 {
    SCREEN_HEIGHT as f32 / 2.0 - y
}

/// Screen point -> camera space.
pub fn to_world(point: Point) -> Vec2 {
    Vec2::new(
        point.x as f32 - SCREEN_WIDTH as f32 / 2.0,
        to_world_y(point.y as f32),
    )
}

/// Centre of a screen rectangle in camera space.
pub fn rect_center(rect: &Rect) -> Vec2 {
    Vec2::new(
        rect.x as f32 + rect.w as f32 / 2.0 - SCREEN_WIDTH as f32 / 2.0,
        to_world_y(rect.y as f32 + rect.h as f32 / 2.0),
    )
}
