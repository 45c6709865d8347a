//! Scene composition: world state to a back-to-front draw list.

use crate::core::rect::{Point, Rect};
use crate::game::map::LeafTier;
use crate::game::state::World;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Overlay shown while crushed.
pub const CRUSHED_MESSAGE: &str = "YOU WERE CRUSHED!";

/// Restart hint shown while crushed.
pub const RESTART_MESSAGE: &str = "Press ENTER to Restart";

/// Height of the ground band at the bottom of the screen.
const GROUND_BAND_HEIGHT: i32 = 50;

// Stick figure proportions
const HEAD_RADIUS: i32 = 15;
const TORSO_LENGTH: i32 = 40;
const LEG_SPREAD: i32 = 15;
const LEG_DROP: i32 = 20;

/// RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Color {
    /// Opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Sky background.
    pub const SKY: Color = Color::rgb(135, 206, 235);
    /// Ground band.
    pub const GRASS: Color = Color::rgb(65, 153, 10);
    /// Tree trunks.
    pub const BARK: Color = Color::rgb(139, 69, 19);
    /// Leaf tiers.
    pub const LEAVES: Color = Color::rgb(0, 128, 0);
    /// Stick figure.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Overlay text.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

/// One drawing primitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    /// Fill the whole screen
    Clear(Color),
    /// Filled rectangle
    FillRect {
        /// Area
        rect: Rect,
        /// Fill colour
        color: Color,
    },
    /// Circle outline
    Circle {
        /// Centre
        center: Point,
        /// Radius in pixels
        radius: i32,
        /// Stroke colour
        color: Color,
    },
    /// Line segment
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Stroke colour
        color: Color,
    },
    /// Text line, centred horizontally
    Text {
        /// Message
        text: String,
        /// Top edge of the text
        y: i32,
        /// Text colour
        color: Color,
    },
}

/// Draw list for one frame, back to front.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    /// Commands in painter's order
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if nothing is drawn.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text lines in this frame.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    fn fill(&mut self, rect: Rect, color: Color) {
        self.push(DrawCommand::FillRect { rect, color });
    }

    fn line(&mut self, from: Point, to: Point, color: Color) {
        self.push(DrawCommand::Line { from, to, color });
    }
}

/// Compose the draw list for the current world.
///
/// Order: sky, ground band, trees (trunk then leaves bottom to top), stick
/// figure, crushed overlay.
pub fn compose(world: &World) -> Frame {
    let mut frame = Frame {
        commands: Vec::with_capacity(24),
    };

    frame.push(DrawCommand::Clear(Color::SKY));
    frame.fill(
        Rect::new(0, SCREEN_HEIGHT - GROUND_BAND_HEIGHT, SCREEN_WIDTH, GROUND_BAND_HEIGHT),
        Color::GRASS,
    );

    for tree in world.trees() {
        frame.fill(tree.trunk(), Color::BARK);
        for tier in LeafTier::ALL {
            frame.fill(tree.leaf(tier), Color::LEAVES);
        }
    }

    // Stick figure hangs below the head, anchored to the collision box top
    let player = &world.player;
    let head = Point::new(player.x + player.width / 2, player.y + HEAD_RADIUS);
    let neck = head.offset(0, HEAD_RADIUS);
    let hip = neck.offset(0, TORSO_LENGTH);

    frame.push(DrawCommand::Circle {
        center: head,
        radius: HEAD_RADIUS,
        color: Color::BLACK,
    });
    frame.line(neck, hip, Color::BLACK);
    frame.line(hip, hip.offset(-LEG_SPREAD, LEG_DROP), Color::BLACK);
    frame.line(hip, hip.offset(LEG_SPREAD, LEG_DROP), Color::BLACK);

    if player.crushed {
        frame.push(DrawCommand::Text {
            text: CRUSHED_MESSAGE.to_string(),
            y: SCREEN_HEIGHT / 2 - 40,
            color: Color::WHITE,
        });
        frame.push(DrawCommand::Text {
            text: RESTART_MESSAGE.to_string(),
            y: SCREEN_HEIGHT / 2 + 40,
            color: Color::WHITE,
        });
    }

    frame
}
