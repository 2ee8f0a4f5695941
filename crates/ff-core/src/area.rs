use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Identifier of an explorable area node.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum AreaId {
    /// Outside Lisa's house, with the mailbox and the front door.
    House,
    /// Inside Lisa's house: bed, stove, and sink.
    HouseInside,
    /// Fairy Glade.
    Glade,
    /// Mushroom Meadow.
    Meadow,
    /// Unicorn Glen.
    Glen,
    /// Old Oak Hollow.
    Hollow,
    /// Sparkle Cave.
    Cave,
    /// Crystal Creek.
    Creek,
    /// Berry Bush Meadow.
    Bushes,
}

impl AreaId {
    /// Every area, in graph-table order.
    pub const ALL: [AreaId; 9] = [
        Self::House,
        Self::HouseInside,
        Self::Glade,
        Self::Meadow,
        Self::Glen,
        Self::Hollow,
        Self::Cave,
        Self::Creek,
        Self::Bushes,
    ];

    /// The stable string id used in save records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::House => "house",
            Self::HouseInside => "houseInside",
            Self::Glade => "glade",
            Self::Meadow => "meadow",
            Self::Glen => "glen",
            Self::Hollow => "hollow",
            Self::Cave => "cave",
            Self::Creek => "creek",
            Self::Bushes => "bushes",
        }
    }

    /// The static node describing this area.
    pub fn node(self) -> &'static AreaNode {
        &AREAS[self as usize]
    }

    /// Resolve a walk out of this area through `exit`.
    ///
    /// Returns `None` when no connection is defined in that direction.
    pub fn travel(self, exit: Direction) -> Option<Arrival> {
        self.node().neighbor(exit).map(|area| Arrival {
            area,
            entry: exit.opposite(),
        })
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AreaId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().to_lowercase() == lower || a.node().name.to_lowercase() == lower)
            .ok_or_else(|| CoreError::UnknownArea(s.to_string()))
    }
}

/// Screen-relative edge of an area.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Negative x edge.
    Left,
    /// Positive x edge.
    Right,
    /// Negative z edge (away from the camera).
    Top,
    /// Positive z edge (towards the camera).
    Bottom,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Parse a direction, accepting compass and arrow synonyms.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" | "west" | "w" | "←" => Some(Self::Left),
            "right" | "r" | "east" | "e" | "→" => Some(Self::Right),
            "top" | "t" | "up" | "u" | "north" | "n" | "↑" => Some(Self::Top),
            "bottom" | "b" | "down" | "d" | "south" | "s" | "↓" => Some(Self::Bottom),
            _ => None,
        }
    }

    /// The edge on the other side.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }

    /// Lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    /// Arrow glyph shown on navigation affordances.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Left => "←",
            Self::Right => "→",
            Self::Top => "↑",
            Self::Bottom => "↓",
        }
    }

    /// Where the player stands after entering an area through this edge.
    pub fn entry_point(self) -> GroundPoint {
        match self {
            Self::Left => GroundPoint::new(-7.0, 0.0),
            Self::Right => GroundPoint::new(7.0, 0.0),
            Self::Top => GroundPoint::new(0.0, -5.0),
            Self::Bottom => GroundPoint::new(0.0, 5.0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CoreError::UnknownDirection(s.to_string()))
    }
}

/// Outcome of walking off an edge: the new area and the edge the player enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrival {
    /// The destination area.
    pub area: AreaId,
    /// The destination edge the player appears at.
    pub entry: Direction,
}

/// A point on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GroundPoint {
    /// Horizontal axis, left to right.
    pub x: f32,
    /// Depth axis, top to bottom.
    pub z: f32,
}

impl GroundPoint {
    /// Create a ground point.
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// Euclidean distance on the ground plane.
    pub fn distance_to(self, other: GroundPoint) -> f32 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Move towards `target` by at most `step`, never overshooting.
    pub fn step_towards(self, target: GroundPoint, step: f32) -> GroundPoint {
        let dist = self.distance_to(target);
        if dist <= step || dist == 0.0 {
            return target;
        }
        GroundPoint::new(
            self.x + (target.x - self.x) / dist * step,
            self.z + (target.z - self.z) / dist * step,
        )
    }
}

/// Surface tag of an area's ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroundType {
    /// Green grass.
    Grass,
    /// Packed dirt.
    Dirt,
    /// Wooden floorboards.
    Wood,
}

impl GroundType {
    /// RGB colour of the ground plane.
    pub fn color(self) -> u32 {
        match self {
            Self::Grass => 0x7ec850,
            Self::Dirt => 0xb8915a,
            Self::Wood => 0xc4956a,
        }
    }
}

/// A static node in the area graph.
#[derive(Debug)]
pub struct AreaNode {
    /// The node's id.
    pub id: AreaId,
    /// Display name.
    pub name: &'static str,
    /// Ground surface.
    pub ground: GroundType,
    /// Outgoing connections, one per direction at most.
    pub connections: &'static [(Direction, AreaId)],
    /// Whether the area is an interior reached by explicit transitions only.
    pub interior: bool,
}

impl AreaNode {
    /// The neighbouring area in the given direction, if any.
    pub fn neighbor(&self, dir: Direction) -> Option<AreaId> {
        self.connections
            .iter()
            .find(|(d, _)| *d == dir)
            .map(|(_, area)| *area)
    }

    /// Player position after building this area.
    ///
    /// With an entry edge the player stands at that edge; without one
    /// (explicit transitions, boot) a fixed default is used.
    pub fn entry_point(&self, entry: Option<Direction>) -> GroundPoint {
        match entry {
            Some(dir) => dir.entry_point(),
            None if self.interior => GroundPoint::new(0.0, 2.0),
            None => GroundPoint::new(0.0, 3.0),
        }
    }

    /// Side length of the square ground plane.
    pub fn ground_size(&self) -> f32 {
        if self.interior { 12.0 } else { 20.0 }
    }
}

/// The area graph, indexed by `AreaId as usize`.
static AREAS: [AreaNode; 9] = [
    AreaNode {
        id: AreaId::House,
        name: "Lisa's House",
        ground: GroundType::Grass,
        connections: &[(Direction::Right, AreaId::Glade)],
        interior: false,
    },
    AreaNode {
        id: AreaId::HouseInside,
        name: "Lisa's House",
        ground: GroundType::Wood,
        connections: &[],
        interior: true,
    },
    AreaNode {
        id: AreaId::Glade,
        name: "Fairy Glade",
        ground: GroundType::Grass,
        connections: &[
            (Direction::Left, AreaId::House),
            (Direction::Right, AreaId::Meadow),
            (Direction::Bottom, AreaId::Creek),
        ],
        interior: false,
    },
    AreaNode {
        id: AreaId::Meadow,
        name: "Mushroom Meadow",
        ground: GroundType::Grass,
        connections: &[
            (Direction::Left, AreaId::Glade),
            (Direction::Right, AreaId::Hollow),
            (Direction::Top, AreaId::Glen),
        ],
        interior: false,
    },
    AreaNode {
        id: AreaId::Glen,
        name: "Unicorn Glen",
        ground: GroundType::Grass,
        connections: &[(Direction::Bottom, AreaId::Meadow)],
        interior: false,
    },
    AreaNode {
        id: AreaId::Hollow,
        name: "Old Oak Hollow",
        ground: GroundType::Dirt,
        connections: &[
            (Direction::Left, AreaId::Meadow),
            (Direction::Right, AreaId::Cave),
        ],
        interior: false,
    },
    AreaNode {
        id: AreaId::Cave,
        name: "Sparkle Cave",
        ground: GroundType::Dirt,
        connections: &[
            (Direction::Left, AreaId::Hollow),
            (Direction::Bottom, AreaId::Bushes),
        ],
        interior: false,
    },
    AreaNode {
        id: AreaId::Creek,
        name: "Crystal Creek",
        ground: GroundType::Grass,
        connections: &[
            (Direction::Top, AreaId::Glade),
            (Direction::Right, AreaId::Bushes),
        ],
        interior: false,
    },
    AreaNode {
        id: AreaId::Bushes,
        name: "Berry Bush Meadow",
        ground: GroundType::Grass,
        connections: &[
            (Direction::Left, AreaId::Creek),
            (Direction::Top, AreaId::Cave),
        ],
        interior: false,
    },
];
