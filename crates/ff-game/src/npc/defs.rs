use std::fmt;
use std::str::FromStr;

use ff_core::{AreaId, GroundPoint, QuestId};

use crate::error::GameError;
use crate::ports::{Primitive, Shape};

/// Identifier of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NpcId {
    /// Lost her carrot.
    Bunny,
    /// Lost his horn gem.
    Unicorn,
    /// Needs twigs for a nest.
    Bird,
    /// A frog prince without a crown.
    Frog,
    /// A lost fox cub.
    Fox,
    /// The fox cub's mother.
    FoxMom,
    /// A baby deer looking for its mother.
    Deer,
    /// The baby deer's mother.
    DeerMom,
    /// Spark, the roaming helper dragon.
    Dragon,
}

impl NpcId {
    /// Every character.
    pub const ALL: [NpcId; 9] = [
        Self::Bunny,
        Self::Unicorn,
        Self::Bird,
        Self::Frog,
        Self::Fox,
        Self::FoxMom,
        Self::Deer,
        Self::DeerMom,
        Self::Dragon,
    ];

    /// Stable lowercase id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bunny => "bunny",
            Self::Unicorn => "unicorn",
            Self::Bird => "bird",
            Self::Frog => "frog",
            Self::Fox => "fox",
            Self::FoxMom => "foxMom",
            Self::Deer => "deer",
            Self::DeerMom => "deerMom",
            Self::Dragon => "dragon",
        }
    }

    /// The character's static definition.
    pub fn def(self) -> &'static NpcDef {
        &NPCS[self as usize]
    }
}

impl fmt::Display for NpcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NpcId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|n| n.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GameError::UnknownTarget(s.to_string()))
    }
}

/// How a character is built from primitives.
#[derive(Debug)]
pub struct Look {
    /// Body sphere color.
    pub body_color: u32,
    /// Head sphere color.
    pub head_color: u32,
    /// Body sphere scale.
    pub body_scale: [f32; 3],
    /// Head sphere scale.
    pub head_scale: [f32; 3],
    /// Head centre, relative to the feet.
    pub head_at: [f32; 3],
    /// Eye scale, for big-eyed characters.
    pub eye_scale: f32,
    /// Left eye position; the right eye mirrors it.
    pub eye_at: [f32; 3],
    /// Ears, horns, tails, wings.
    pub extras: &'static [Primitive],
}

const STANDARD_EYES: [f32; 3] = [-0.1, 1.15, 0.25];

impl Look {
    const fn plain(body_color: u32, head_color: u32) -> Self {
        Self {
            body_color,
            head_color,
            body_scale: [1.0, 0.8, 0.7],
            head_scale: [1.0, 1.0, 1.0],
            head_at: [0.0, 1.1, 0.0],
            eye_scale: 1.0,
            eye_at: STANDARD_EYES,
            extras: &[],
        }
    }

    /// The primitives making up the character, relative to its feet.
    pub fn parts(&self) -> Vec<Primitive> {
        let [ex, ey, ez] = self.eye_at;
        let eye = [0.1 * self.eye_scale; 3];
        let mut parts = vec![
            Primitive::new(Shape::Sphere, self.body_color, [0.0, 0.5, 0.0], self.body_scale),
            Primitive::new(
                Shape::Sphere,
                self.head_color,
                self.head_at,
                [
                    0.6 * self.head_scale[0],
                    0.6 * self.head_scale[1],
                    0.6 * self.head_scale[2],
                ],
            ),
            Primitive::new(Shape::Sphere, 0x000000, [ex, ey, ez], eye),
            Primitive::new(Shape::Sphere, 0x000000, [-ex, ey, ez], eye),
        ];
        parts.extend_from_slice(self.extras);
        parts
    }
}

/// Static definition of a character.
#[derive(Debug)]
pub struct NpcDef {
    /// The character's id.
    pub id: NpcId,
    /// Display name, also used as the speaker label.
    pub name: &'static str,
    /// The area the character lives in. `None` for roaming characters.
    pub home: Option<AreaId>,
    /// Where the character stands in its home area.
    pub position: GroundPoint,
    /// The quest the character gives.
    pub quest: Option<QuestId>,
    /// Hidden until this quest is complete.
    pub visible_after: Option<QuestId>,
    /// How to draw the character.
    pub look: Look,
}

const fn p(shape: Shape, color: u32, offset: [f32; 3], scale: [f32; 3]) -> Primitive {
    Primitive::new(shape, color, offset, scale)
}

const HALF_PI: f32 = std::f32::consts::FRAC_PI_2;

static NPCS: [NpcDef; 9] = [
    NpcDef {
        id: NpcId::Bunny,
        name: "Bunny 🐰",
        home: Some(AreaId::Meadow),
        position: GroundPoint::new(3.0, -1.0),
        quest: Some(QuestId::LostCarrot),
        visible_after: None,
        look: Look {
            extras: &[
                p(Shape::Cylinder, 0xffc0cb, [-0.12, 1.55, 0.0], [0.14, 0.5, 0.14])
                    .rotated([0.0, 0.0, 0.15]),
                p(Shape::Cylinder, 0xffc0cb, [0.12, 1.55, 0.0], [0.14, 0.5, 0.14])
                    .rotated([0.0, 0.0, -0.15]),
            ],
            ..Look::plain(0xf5f5f5, 0xffffff)
        },
    },
    NpcDef {
        id: NpcId::Unicorn,
        name: "Unicorn 🦄",
        home: Some(AreaId::Glen),
        position: GroundPoint::new(2.0, 1.0),
        quest: Some(QuestId::HornGem),
        visible_after: None,
        look: Look {
            body_scale: [1.3, 1.0, 1.5],
            head_at: [0.0, 1.3, 0.5],
            eye_at: [-0.1, 1.35, 0.75],
            extras: &[p(Shape::Cone, 0xffd700, [0.0, 1.55, 0.1], [0.12, 0.5, 0.12])],
            ..Look::plain(0xf0e6ff, 0xffffff)
        },
    },
    NpcDef {
        id: NpcId::Bird,
        name: "Bird 🐦",
        home: Some(AreaId::Glade),
        position: GroundPoint::new(4.0, 2.0),
        quest: Some(QuestId::BuildNest),
        visible_after: None,
        look: Look {
            body_scale: [0.6, 0.6, 0.5],
            head_scale: [0.8, 0.8, 0.8],
            head_at: [0.0, 0.9, 0.0],
            eye_at: [-0.1, 0.95, 0.2],
            extras: &[
                p(Shape::Plane, 0x4169e1, [-0.45, 0.6, 0.0], [0.4, 0.3, 1.0])
                    .rotated([0.0, 0.3, 0.0]),
                p(Shape::Plane, 0x4169e1, [0.45, 0.6, 0.0], [0.4, 0.3, 1.0])
                    .rotated([0.0, -0.3, 0.0]),
                p(Shape::Cone, 0xffa500, [0.0, 1.1, 0.35], [0.1, 0.15, 0.1])
                    .rotated([HALF_PI, 0.0, 0.0]),
            ],
            ..Look::plain(0x6495ed, 0x4169e1)
        },
    },
    NpcDef {
        id: NpcId::Frog,
        name: "Frog 🐸",
        home: Some(AreaId::Creek),
        position: GroundPoint::new(-4.0, 2.0),
        quest: Some(QuestId::FrogCrown),
        visible_after: None,
        look: Look {
            body_scale: [1.1, 0.6, 0.8],
            head_at: [0.0, 0.9, 0.0],
            eye_scale: 1.5,
            eye_at: [-0.15, 1.25, 0.2],
            ..Look::plain(0x32cd32, 0x228b22)
        },
    },
    NpcDef {
        id: NpcId::Fox,
        name: "Fox Cub 🦊",
        home: Some(AreaId::Hollow),
        position: GroundPoint::new(-3.0, 1.0),
        quest: Some(QuestId::FoxHome),
        visible_after: None,
        look: Look {
            extras: &[
                p(Shape::Cone, 0xff6600, [0.0, 0.4, -0.5], [0.3, 0.6, 0.3])
                    .rotated([-0.5, 0.0, 0.0]),
                p(Shape::Sphere, 0xffffff, [0.0, 0.15, -0.7], [0.16, 0.16, 0.16]),
            ],
            ..Look::plain(0xff6600, 0xff8c00)
        },
    },
    NpcDef {
        id: NpcId::FoxMom,
        name: "Mama Fox 🦊",
        home: Some(AreaId::Glade),
        position: GroundPoint::new(-4.0, -2.0),
        quest: None,
        visible_after: Some(QuestId::FoxHome),
        look: Look {
            body_scale: [1.2, 1.0, 0.9],
            head_at: [0.0, 1.2, 0.0],
            eye_at: [-0.1, 1.25, 0.25],
            extras: &[
                p(Shape::Cone, 0xcc5500, [0.0, 0.4, -0.6], [0.36, 0.7, 0.36])
                    .rotated([-0.5, 0.0, 0.0]),
                p(Shape::Sphere, 0xffffff, [0.0, 0.12, -0.85], [0.2, 0.2, 0.2]),
            ],
            ..Look::plain(0xcc5500, 0xff6600)
        },
    },
    NpcDef {
        id: NpcId::Deer,
        name: "Baby Deer 🦌",
        home: Some(AreaId::Bushes),
        position: GroundPoint::new(1.0, 2.0),
        quest: Some(QuestId::FindMom),
        visible_after: None,
        look: Look::plain(0xcd853f, 0xd2691e),
    },
    NpcDef {
        id: NpcId::DeerMom,
        name: "Mama Deer 🦌",
        home: Some(AreaId::Glen),
        position: GroundPoint::new(-2.0, 1.0),
        quest: None,
        visible_after: Some(QuestId::FindMom),
        look: Look {
            body_scale: [1.3, 1.1, 1.2],
            head_at: [0.0, 1.3, 0.0],
            eye_at: [-0.1, 1.35, 0.25],
            extras: &[
                p(Shape::Cylinder, 0x8b4513, [-0.15, 1.6, 0.0], [0.08, 0.4, 0.08])
                    .rotated([0.0, 0.0, 0.3]),
                p(Shape::Cylinder, 0x8b4513, [0.15, 1.6, 0.0], [0.08, 0.4, 0.08])
                    .rotated([0.0, 0.0, -0.3]),
            ],
            ..Look::plain(0xa0522d, 0xb8860b)
        },
    },
    NpcDef {
        id: NpcId::Dragon,
        name: "Spark 🐉",
        home: None,
        position: GroundPoint::new(0.0, 0.0),
        quest: None,
        visible_after: None,
        look: Look {
            extras: &[
                p(Shape::Plane, 0x9370db, [-0.6, 0.8, -0.1], [0.8, 0.6, 1.0])
                    .rotated([0.0, -0.3, 0.2]),
                p(Shape::Plane, 0x9370db, [0.6, 0.8, -0.1], [0.8, 0.6, 1.0])
                    .rotated([0.0, 0.3, -0.2]),
                p(Shape::Cone, 0x8a2be2, [0.0, 1.1, 0.35], [0.16, 0.2, 0.16])
                    .rotated([HALF_PI, 0.0, 0.0]),
            ],
            ..Look::plain(0x8a2be2, 0x9370db)
        },
    },
];

/// The characters that call `area` home.
pub fn residents(area: AreaId) -> impl Iterator<Item = &'static NpcDef> {
    NPCS.iter().filter(move |def| def.home == Some(area))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_id() {
        for npc in NpcId::ALL {
            assert_eq!(npc.def().id, npc);
        }
    }

    #[test]
    fn quest_givers_match_their_quests() {
        assert_eq!(NpcId::Bunny.def().quest, Some(QuestId::LostCarrot));
        assert_eq!(NpcId::Deer.def().quest, Some(QuestId::FindMom));
        assert_eq!(NpcId::FoxMom.def().visible_after, Some(QuestId::FoxHome));
        assert!(NpcId::Dragon.def().home.is_none());
    }

    #[test]
    fn glen_has_unicorn_and_mama_deer() {
        let ids: Vec<NpcId> = residents(AreaId::Glen).map(|d| d.id).collect();
        assert_eq!(ids, vec![NpcId::Unicorn, NpcId::DeerMom]);
    }

    #[test]
    fn looks_are_data_driven() {
        let plain = NpcId::Deer.def().look.parts();
        assert_eq!(plain.len(), 4);
        let bunny = NpcId::Bunny.def().look.parts();
        assert_eq!(bunny.len(), 6);
        assert!(bunny.iter().any(|p| p.color == 0xffc0cb));
    }

    #[test]
    fn parse_ids() {
        assert_eq!("foxmom".parse::<NpcId>().unwrap(), NpcId::FoxMom);
        assert!("owl".parse::<NpcId>().is_err());
    }
}
