//! Static props of every area.

use std::f32::consts::{FRAC_PI_2, PI};

use ff_core::AreaId;

use crate::ports::{Primitive, Shape};

/// One static prop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prop {
    /// Its shape, positioned in world space.
    pub primitive: Primitive,
    /// Name, for props that have one.
    pub name: Option<&'static str>,
    /// Whether tapping it does something.
    pub interactive: bool,
}

impl Prop {
    const fn new(shape: Shape, color: u32, at: [f32; 3], scale: [f32; 3]) -> Self {
        Self {
            primitive: Primitive::new(shape, color, at, scale),
            name: None,
            interactive: false,
        }
    }

    const fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    const fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    const fn rotated(mut self, rotation: [f32; 3]) -> Self {
        self.primitive = self.primitive.rotated(rotation);
        self
    }

    /// The prop's world position.
    pub fn position(&self) -> [f32; 3] {
        self.primitive.offset
    }

    /// The interaction name, if tapping it does something.
    pub fn target_name(&self) -> Option<&'static str> {
        if self.interactive { self.name } else { None }
    }
}

const fn cube(color: u32, at: [f32; 3], scale: [f32; 3]) -> Prop {
    Prop::new(Shape::Box, color, at, scale)
}

const fn ball(color: u32, at: [f32; 3], scale: [f32; 3]) -> Prop {
    Prop::new(Shape::Sphere, color, at, scale)
}

const fn cone(color: u32, at: [f32; 3], scale: [f32; 3]) -> Prop {
    Prop::new(Shape::Cone, color, at, scale)
}

const fn post(color: u32, at: [f32; 3], scale: [f32; 3]) -> Prop {
    Prop::new(Shape::Cylinder, color, at, scale)
}

const fn arch(color: u32, at: [f32; 3], scale: [f32; 3]) -> Prop {
    Prop::new(Shape::Torus, color, at, scale)
}

/// The props of `area`. An area without a layout is a bare ground plane.
pub fn props(area: AreaId) -> &'static [Prop] {
    match area {
        AreaId::House => HOUSE,
        AreaId::HouseInside => HOUSE_INSIDE,
        AreaId::Glade => GLADE,
        AreaId::Meadow => MEADOW,
        AreaId::Glen => GLEN,
        AreaId::Hollow => HOLLOW,
        AreaId::Cave => CAVE,
        AreaId::Creek => CREEK,
        AreaId::Bushes => BUSHES,
    }
}

/// The interactive, named props of `area`.
pub fn interactive_props(area: AreaId) -> impl Iterator<Item = &'static Prop> {
    props(area).iter().filter(|p| p.target_name().is_some())
}

static HOUSE: &[Prop] = &[
    cube(0xd4a574, [0.0, 1.5, -2.0], [3.0, 3.0, 3.0]).named("cottage"),
    cone(0xc0392b, [0.0, 3.5, -2.0], [2.5, 1.5, 2.5]).named("roof"),
    cube(0x5d4e37, [3.0, 0.6, 0.0], [0.4, 1.2, 0.3]).named("mailbox").interactive(),
    cube(0xe74c3c, [3.3, 1.0, 0.0], [0.3, 0.15, 0.05]).named("mailbox-flag"),
    cube(0x8b5e3c, [0.0, 0.9, -0.45], [0.8, 1.8, 0.1]).named("door").interactive(),
    cone(0x2d8a4e, [-5.0, 2.0, -4.0], [1.5, 4.0, 1.5]),
    post(0x8b5e3c, [-5.0, 0.5, -4.0], [0.3, 1.0, 0.3]),
    cone(0x2d8a4e, [6.0, 2.5, -3.0], [1.8, 5.0, 1.8]),
    post(0x8b5e3c, [6.0, 0.5, -3.0], [0.3, 1.0, 0.3]),
    ball(0xff69b4, [-2.0, 0.3, 2.0], [0.3, 0.3, 0.3]),
    ball(0xffd700, [-1.5, 0.3, 2.3], [0.25, 0.25, 0.25]),
    ball(0xff69b4, [4.0, 0.3, 2.0], [0.3, 0.3, 0.3]),
];

static HOUSE_INSIDE: &[Prop] = &[
    cube(0xdda0dd, [-4.0, 0.5, -3.0], [2.0, 1.0, 1.5]).named("bed").interactive(),
    cube(0xfff0f5, [-4.5, 0.85, -3.0], [0.6, 0.3, 0.5]),
    cube(0x888888, [4.0, 0.7, -3.0], [1.5, 1.4, 1.0]).named("stove").interactive(),
    post(0x333333, [3.6, 1.45, -3.0], [0.3, 0.05, 0.3]),
    post(0x333333, [4.4, 1.45, -3.0], [0.3, 0.05, 0.3]),
    cube(0xdeb887, [0.0, 0.5, 0.0], [2.0, 1.0, 1.2]).named("table"),
    cube(0xb0c4de, [4.0, 0.6, 2.0], [1.0, 1.2, 0.8]).named("toothbrush").interactive(),
    post(0x00bfff, [4.3, 1.3, 2.0], [0.05, 0.4, 0.05]),
    cube(0x8b5e3c, [0.0, 0.9, 4.5], [1.0, 1.8, 0.1]).named("door-exit").interactive(),
    cube(0xfff8dc, [0.0, 1.5, -4.5], [12.0, 3.0, 0.2]),
    cube(0xfff8dc, [-6.0, 1.5, 0.0], [0.2, 3.0, 9.0]),
    cube(0xfff8dc, [6.0, 1.5, 0.0], [0.2, 3.0, 9.0]),
    cube(0xda70d6, [0.0, 0.02, 0.0], [4.0, 0.04, 3.0]),
];

static GLADE: &[Prop] = &[
    cone(0x228b22, [0.0, 3.0, -3.0], [3.0, 6.0, 3.0]),
    post(0x8b4513, [0.0, 0.8, -3.0], [0.5, 1.6, 0.5]),
    cone(0x2d8a4e, [-6.0, 2.0, 2.0], [1.5, 4.0, 1.5]),
    post(0x8b5e3c, [-6.0, 0.5, 2.0], [0.3, 1.0, 0.3]),
    cone(0x3cb371, [5.0, 2.5, -1.0], [2.0, 5.0, 2.0]),
    post(0x8b5e3c, [5.0, 0.5, -1.0], [0.35, 1.0, 0.35]),
    ball(0xff69b4, [-3.0, 0.25, 1.0], [0.3, 0.3, 0.3]),
    ball(0xffd700, [-2.0, 0.25, 0.5], [0.25, 0.25, 0.25]),
    ball(0xff6347, [3.0, 0.25, 3.0], [0.3, 0.3, 0.3]),
    ball(0x9370db, [2.0, 0.25, 2.0], [0.28, 0.28, 0.28]),
    ball(0xff4444, [-1.0, 0.3, 3.0], [0.4, 0.25, 0.4]),
    post(0xfaf0e6, [-1.0, 0.15, 3.0], [0.15, 0.3, 0.15]),
    ball(0x808080, [6.0, 0.3, 4.0], [0.6, 0.4, 0.5]),
];

static MEADOW: &[Prop] = &[
    ball(0xff4444, [0.0, 1.8, 0.0], [1.8, 1.0, 1.8]),
    post(0xfaf0e6, [0.0, 0.7, 0.0], [0.5, 1.4, 0.5]),
    ball(0xff6600, [-4.0, 1.2, 2.0], [1.2, 0.7, 1.2]),
    post(0xfaf0e6, [-4.0, 0.4, 2.0], [0.35, 0.8, 0.35]),
    ball(0xff4444, [5.0, 0.9, -2.0], [0.9, 0.5, 0.9]),
    post(0xfaf0e6, [5.0, 0.35, -2.0], [0.25, 0.7, 0.25]),
    cone(0x2d8a4e, [-7.0, 2.5, -4.0], [2.0, 5.0, 2.0]),
    post(0x8b5e3c, [-7.0, 0.5, -4.0], [0.35, 1.0, 0.35]),
    ball(0xffd700, [2.0, 0.2, 3.0], [0.25, 0.25, 0.25]),
    ball(0xff69b4, [3.0, 0.2, 2.0], [0.3, 0.3, 0.3]),
    ball(0x9370db, [-2.0, 0.2, -1.0], [0.25, 0.25, 0.25]),
];

static GLEN: &[Prop] = &[
    cone(0xe0b0ff, [-3.0, 1.0, -2.0], [0.5, 2.0, 0.5]),
    cone(0xdda0dd, [-2.5, 0.8, -1.5], [0.4, 1.6, 0.4]),
    cone(0xee82ee, [4.0, 1.2, -3.0], [0.6, 2.4, 0.6]),
    ball(0xffc0cb, [1.0, 0.2, 2.0], [0.3, 0.3, 0.3]),
    ball(0xffc0cb, [2.0, 0.2, 1.0], [0.25, 0.25, 0.25]),
    ball(0xffc0cb, [-1.0, 0.2, 3.0], [0.3, 0.3, 0.3]),
    ball(0xffd700, [0.0, 0.2, 1.0], [0.28, 0.28, 0.28]),
    cone(0x98fb98, [-6.0, 3.0, 0.0], [2.0, 6.0, 2.0]),
    post(0xdeb887, [-6.0, 0.6, 0.0], [0.4, 1.2, 0.4]),
    arch(0xff0000, [0.0, 3.0, -5.0], [3.0, 3.0, 0.2]),
];

static HOLLOW: &[Prop] = &[
    post(0x654321, [0.0, 2.5, -2.0], [2.0, 5.0, 2.0]),
    ball(0x2e8b57, [0.0, 5.5, -2.0], [4.0, 3.0, 4.0]),
    ball(0x1a1a2e, [0.0, 1.0, -0.5], [0.8, 1.0, 0.5]),
    post(0x8b4513, [4.0, 0.3, 2.0], [0.4, 3.0, 0.4]).rotated([0.0, 0.0, FRAC_PI_2]),
    ball(0xffa500, [-3.0, 0.25, 1.0], [0.35, 0.2, 0.35]),
    post(0xfaf0e6, [-3.0, 0.1, 1.0], [0.12, 0.2, 0.12]),
    ball(0x696969, [5.0, 0.4, -3.0], [0.8, 0.5, 0.7]),
    ball(0x778899, [-5.0, 0.3, -1.0], [0.5, 0.35, 0.45]),
];

static CAVE: &[Prop] = &[
    cube(0x4a4a5a, [0.0, 2.0, -4.5], [12.0, 4.0, 1.0]),
    cube(0x4a4a5a, [-6.0, 2.0, 0.0], [1.0, 4.0, 9.0]),
    cube(0x4a4a5a, [6.0, 2.0, 0.0], [1.0, 4.0, 9.0]),
    cone(0x00ffff, [-4.0, 1.5, -3.0], [0.4, 3.0, 0.4]),
    cone(0x7fffd4, [3.0, 1.0, -2.0], [0.3, 2.0, 0.3]),
    cone(0x40e0d0, [4.5, 0.8, -1.0], [0.35, 1.6, 0.35]),
    ball(0x00ffff, [-2.0, 0.3, 1.0], [0.3, 0.3, 0.3]),
    ball(0x7fffd4, [1.0, 0.3, 2.0], [0.25, 0.25, 0.25]),
    cone(0x5a5a6a, [-3.0, 3.5, -3.0], [0.3, 1.0, 0.3]).rotated([PI, 0.0, 0.0]),
    cone(0x5a5a6a, [2.0, 3.8, -2.0], [0.25, 0.8, 0.25]).rotated([PI, 0.0, 0.0]),
];

static CREEK: &[Prop] = &[
    cube(0x4fc3f7, [0.0, 0.05, 0.0], [2.0, 0.1, 12.0]),
    post(0x808080, [-0.2, 0.15, -2.0], [0.5, 0.1, 0.5]),
    post(0x808080, [0.3, 0.15, 0.0], [0.5, 0.1, 0.5]),
    post(0x808080, [-0.1, 0.15, 2.0], [0.5, 0.1, 0.5]),
    cone(0x228b22, [-5.0, 2.0, -3.0], [1.5, 4.0, 1.5]),
    post(0x8b4513, [-5.0, 0.5, -3.0], [0.3, 1.0, 0.3]),
    cone(0x228b22, [4.0, 2.5, 1.0], [1.8, 5.0, 1.8]),
    post(0x8b4513, [4.0, 0.5, 1.0], [0.35, 1.0, 0.35]),
    post(0x2e8b57, [1.5, 0.6, 3.0], [0.05, 1.2, 0.05]),
    ball(0x8b4513, [1.5, 1.2, 3.0], [0.1, 0.2, 0.1]),
    ball(0x696969, [-2.0, 0.25, 1.0], [0.5, 0.3, 0.4]),
    ball(0x708090, [2.5, 0.2, -1.0], [0.4, 0.25, 0.35]),
];

static BUSHES: &[Prop] = &[
    ball(0x228b22, [-3.0, 0.8, -2.0], [1.5, 1.2, 1.5]),
    ball(0xff0000, [-2.5, 1.2, -2.2], [0.15, 0.15, 0.15]),
    ball(0xff0000, [-3.3, 1.0, -1.8], [0.12, 0.12, 0.12]),
    ball(0x4169e1, [-3.1, 0.9, -2.5], [0.13, 0.13, 0.13]),
    ball(0x228b22, [3.0, 0.9, 1.0], [1.8, 1.3, 1.8]),
    ball(0x4169e1, [3.5, 1.3, 0.8], [0.15, 0.15, 0.15]),
    ball(0x4169e1, [2.7, 1.1, 1.3], [0.12, 0.12, 0.12]),
    ball(0xff0000, [3.2, 1.0, 1.5], [0.13, 0.13, 0.13]),
    ball(0x2e8b57, [0.0, 0.7, -4.0], [1.2, 1.0, 1.2]),
    cone(0x2d8a4e, [-6.0, 2.5, 3.0], [2.0, 5.0, 2.0]),
    post(0x8b5e3c, [-6.0, 0.5, 3.0], [0.35, 1.0, 0.35]),
    ball(0xffd700, [1.0, 0.2, 3.0], [0.25, 0.25, 0.25]),
    ball(0xff69b4, [-1.0, 0.2, 4.0], [0.3, 0.3, 0.3]),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn names(area: AreaId) -> Vec<&'static str> {
        interactive_props(area).filter_map(Prop::target_name).collect()
    }

    #[test]
    fn house_props_are_tappable() {
        assert_eq!(names(AreaId::House), vec!["mailbox", "door"]);
        assert_eq!(
            names(AreaId::HouseInside),
            vec!["bed", "stove", "toothbrush", "door-exit"]
        );
    }

    #[test]
    fn outdoor_areas_have_no_tappable_props() {
        for area in [AreaId::Glade, AreaId::Cave, AreaId::Bushes] {
            assert!(names(area).is_empty());
            assert!(!props(area).is_empty());
        }
    }

    #[test]
    fn decorative_names_are_not_targets() {
        let flag = props(AreaId::House)
            .iter()
            .find(|p| p.name == Some("mailbox-flag"))
            .unwrap();
        assert_eq!(flag.target_name(), None);
    }

    #[test]
    fn fallen_log_lies_down() {
        let log = props(AreaId::Hollow)
            .iter()
            .find(|p| p.primitive.rotation[2] != 0.0)
            .unwrap();
        assert_eq!(log.primitive.rotation, [0.0, 0.0, FRAC_PI_2]);
    }
}
