//! Collaborator interfaces.
//!
//! The game never draws, plays sound, or shows an overlay itself. It asks a
//! [`Renderer`] to place primitive shapes and answer hit tests, an [`Audio`]
//! service to speak lines, and a [`Presenter`] to show dialogue, letters, and
//! puzzles. Each presenter call returns once the player has dismissed it.

use std::fmt;

use ff_core::{AreaId, Direction, GroundPoint, PuzzleKind};
use ff_daynight::Lighting;

use crate::dialogue::Line;
use crate::npc::NpcId;

/// Primitive shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Unit cube.
    Box,
    /// Unit-diameter sphere.
    Sphere,
    /// Unit cone.
    Cone,
    /// Unit cylinder.
    Cylinder,
    /// Half torus, used for arches and crowns.
    Torus,
    /// Octahedron, used for gems.
    Octahedron,
    /// Flat disc ring lying on the ground.
    Ring,
    /// Flat plane, used for wings.
    Plane,
}

/// One colored shape, positioned relative to its placement origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    /// Shape kind.
    pub shape: Shape,
    /// `0xRRGGBB` color.
    pub color: u32,
    /// Offset from the placement origin.
    pub offset: [f32; 3],
    /// Per-axis scale.
    pub scale: [f32; 3],
    /// Euler rotation in radians.
    pub rotation: [f32; 3],
}

impl Primitive {
    /// A primitive with no rotation.
    pub const fn new(shape: Shape, color: u32, offset: [f32; 3], scale: [f32; 3]) -> Self {
        Self {
            shape,
            color,
            offset,
            scale,
            rotation: [0.0; 3],
        }
    }

    /// The same primitive, rotated.
    pub const fn rotated(mut self, rotation: [f32; 3]) -> Self {
        self.rotation = rotation;
        self
    }
}

/// Something the player can tap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    /// A character.
    Npc(NpcId),
    /// A spawned quest item, by spawn key.
    Item(String),
    /// A named, interactive prop such as the mailbox.
    Prop(&'static str),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Npc(npc) => write!(f, "{}", npc.def().name),
            Self::Item(key) => f.write_str(key),
            Self::Prop(name) => f.write_str(name),
        }
    }
}

/// A group of primitives placed in the current area.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// What tapping the group does, if it is interactive.
    pub target: Option<Target>,
    /// Human-readable label, if the group has one.
    pub label: Option<String>,
    /// World position of the group's origin.
    pub origin: [f32; 3],
    /// The shapes making up the group.
    pub parts: Vec<Primitive>,
}

/// A button leading to a neighbouring area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavAffordance {
    /// The edge it leads off.
    pub direction: Direction,
    /// The area it leads to.
    pub target: AreaId,
    /// Arrow glyph followed by the target's name.
    pub label: String,
}

/// A point on the screen, in the renderer's own coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl ScreenPoint {
    /// Create a screen point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// How a puzzle overlay ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleOutcome {
    /// The player solved it.
    Solved,
    /// The player closed it without solving.
    Abandoned,
}

/// Draws the scene.
pub trait Renderer {
    /// Remove every area object. The player is kept.
    fn clear_area(&mut self);

    /// Lay down the square ground plane.
    fn set_ground(&mut self, size: f32, color: u32);

    /// Add a group of primitives.
    fn place(&mut self, placement: Placement);

    /// Remove the placed group belonging to `target`.
    fn remove(&mut self, target: &Target);

    /// Show or hide the floating quest marker above an NPC.
    fn set_indicator(&mut self, npc: NpcId, visible: bool);

    /// Move the player model.
    fn set_player_position(&mut self, at: GroundPoint);

    /// Move an NPC model.
    fn set_npc_position(&mut self, npc: NpcId, at: GroundPoint);

    /// Apply sky color and light levels.
    fn set_lighting(&mut self, lighting: Lighting);

    /// Show the area name and its navigation buttons.
    fn show_area(&mut self, name: &str, navigation: &[NavAffordance]);

    /// Cover or uncover the screen during an area transition.
    fn set_fade(&mut self, covered: bool);

    /// The topmost interactive object under a screen point.
    fn hit_test(&self, point: ScreenPoint) -> Option<Target>;

    /// The ground position under a screen point.
    fn ground_at(&self, point: ScreenPoint) -> Option<GroundPoint>;
}

/// Plays narration.
pub trait Audio {
    /// Speak `text`, using the recorded clip for `audio_key` when there is
    /// one and a synthesized voice otherwise.
    fn speak(&mut self, text: &str, audio_key: Option<&str>);

    /// Whether narration is still playing.
    fn is_speaking(&self) -> bool;

    /// Stop narration immediately.
    fn stop(&mut self);
}

/// Shows overlays and waits for the player.
pub trait Presenter {
    /// Show one dialogue line; returns when the player advances.
    fn show_line(&mut self, line: &Line);

    /// Show a mail letter; returns when the player closes it.
    fn show_letter(&mut self, text: &str);

    /// Run a puzzle; returns when it is solved or closed.
    fn open_puzzle(&mut self, kind: PuzzleKind) -> PuzzleOutcome;
}
