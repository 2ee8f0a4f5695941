use std::collections::BTreeSet;

use colored::Colorize;
use ff_core::GroundPoint;
use ff_daynight::Lighting;
use ff_game::{NavAffordance, NpcId, Placement, Renderer, ScreenPoint, Target};

/// How far from an object's origin a tap still hits it.
const HIT_RADIUS: f32 = 0.8;

/// Keeps what is placed so taps can be hit-tested, and prints the area
/// header when an area is shown.
#[derive(Debug, Default)]
pub struct TextRenderer {
    placements: Vec<Placement>,
    marked: BTreeSet<NpcId>,
}

impl TextRenderer {
    /// Whether `npc` shows a quest marker.
    pub fn has_marker(&self, npc: NpcId) -> bool {
        self.marked.contains(&npc)
    }
}

impl Renderer for TextRenderer {
    fn clear_area(&mut self) {
        self.placements.clear();
        self.marked.clear();
    }

    fn set_ground(&mut self, _size: f32, _color: u32) {}

    fn place(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    fn remove(&mut self, target: &Target) {
        self.placements
            .retain(|placement| placement.target.as_ref() != Some(target));
    }

    fn set_indicator(&mut self, npc: NpcId, visible: bool) {
        if visible {
            self.marked.insert(npc);
        } else {
            self.marked.remove(&npc);
        }
    }

    fn set_player_position(&mut self, _at: GroundPoint) {}

    fn set_npc_position(&mut self, npc: NpcId, at: GroundPoint) {
        let target = Target::Npc(npc);
        for placement in &mut self.placements {
            if placement.target.as_ref() == Some(&target) {
                placement.origin[0] = at.x;
                placement.origin[2] = at.z;
            }
        }
    }

    fn set_lighting(&mut self, _lighting: Lighting) {}

    fn show_area(&mut self, name: &str, navigation: &[NavAffordance]) {
        println!();
        println!("  {}", format!("~ {name} ~").bold());
        if !navigation.is_empty() {
            let paths: Vec<&str> = navigation.iter().map(|nav| nav.label.as_str()).collect();
            println!("  {} {}", "Paths:".dimmed(), paths.join("   "));
        }
    }

    fn set_fade(&mut self, covered: bool) {
        if covered {
            println!("  {}", "...".dimmed());
        }
    }

    fn hit_test(&self, point: ScreenPoint) -> Option<Target> {
        let at = GroundPoint::new(point.x, point.y);
        self.placements
            .iter()
            .filter_map(|placement| {
                let target = placement.target.as_ref()?;
                let origin = GroundPoint::new(placement.origin[0], placement.origin[2]);
                let distance = origin.distance_to(at);
                (distance <= HIT_RADIUS).then_some((target, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(target, _)| target.clone())
    }

    fn ground_at(&self, point: ScreenPoint) -> Option<GroundPoint> {
        Some(GroundPoint::new(point.x, point.y))
    }
}
