use std::collections::BTreeMap;

use ff_core::{AreaId, Direction, GroundPoint, ItemKind, QuestId};

use crate::npc::NpcId;
use crate::ports::{NavAffordance, Target};

/// A quest item lying in the current area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnedItem {
    /// The quest it belongs to.
    pub quest: QuestId,
    /// What it is.
    pub kind: ItemKind,
    /// Where it lies.
    pub position: GroundPoint,
}

/// An area transition waiting for its fade to finish.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PendingTransition {
    pub(crate) target: AreaId,
    pub(crate) entry: Option<Direction>,
    pub(crate) remaining: f32,
}

/// Everything placed in the current area.
///
/// Rebuilt from scratch each time an area is built. While a transition is
/// pending, the scene is locked and no further navigation starts.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    area: Option<AreaId>,
    props: BTreeMap<&'static str, GroundPoint>,
    npcs: BTreeMap<NpcId, GroundPoint>,
    items: BTreeMap<String, SpawnedItem>,
    navigation: Vec<NavAffordance>,
    pub(crate) transition: Option<PendingTransition>,
}

impl Scene {
    /// An empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// The area on show, once one has been built.
    pub fn area(&self) -> Option<AreaId> {
        self.area
    }

    /// Whether an area transition is under way.
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// The area a pending transition leads to.
    pub fn transition_target(&self) -> Option<AreaId> {
        self.transition.map(|t| t.target)
    }

    /// Tappable props and where they stand.
    pub fn props(&self) -> impl Iterator<Item = (&'static str, GroundPoint)> + '_ {
        self.props.iter().map(|(name, at)| (*name, *at))
    }

    /// Characters on show and where they stand.
    pub fn npcs(&self) -> impl Iterator<Item = (NpcId, GroundPoint)> + '_ {
        self.npcs.iter().map(|(npc, at)| (*npc, *at))
    }

    /// Where a character stands, if it is here.
    pub fn npc_position(&self, npc: NpcId) -> Option<GroundPoint> {
        self.npcs.get(&npc).copied()
    }

    /// Quest items lying here, by spawn key.
    pub fn items(&self) -> impl Iterator<Item = (&str, &SpawnedItem)> + '_ {
        self.items.iter().map(|(key, item)| (key.as_str(), item))
    }

    /// A spawned item by key.
    pub fn item(&self, key: &str) -> Option<&SpawnedItem> {
        self.items.get(key)
    }

    /// Navigation buttons of the area.
    pub fn navigation(&self) -> &[NavAffordance] {
        &self.navigation
    }

    /// Where a tap target stands, if it is in this scene.
    pub fn position_of(&self, target: &Target) -> Option<GroundPoint> {
        match target {
            Target::Npc(npc) => self.npc_position(*npc),
            Target::Item(key) => self.item(key).map(|item| item.position),
            Target::Prop(name) => self.props.get(name).copied(),
        }
    }

    /// Whether a tap target is in this scene.
    pub fn contains(&self, target: &Target) -> bool {
        self.position_of(target).is_some()
    }

    /// Every tap target with its position.
    pub fn targets(&self) -> Vec<(Target, GroundPoint)> {
        let npcs = self.npcs().map(|(npc, at)| (Target::Npc(npc), at));
        let items = self
            .items
            .iter()
            .map(|(key, item)| (Target::Item(key.clone()), item.position));
        let props = self.props().map(|(name, at)| (Target::Prop(name), at));
        npcs.chain(items).chain(props).collect()
    }

    pub(crate) fn clear(&mut self, area: AreaId) {
        self.area = Some(area);
        self.props.clear();
        self.npcs.clear();
        self.items.clear();
        self.navigation.clear();
    }

    pub(crate) fn add_prop(&mut self, name: &'static str, at: GroundPoint) {
        self.props.insert(name, at);
    }

    pub(crate) fn add_npc(&mut self, npc: NpcId, at: GroundPoint) {
        self.npcs.insert(npc, at);
    }

    pub(crate) fn move_npc(&mut self, npc: NpcId, at: GroundPoint) {
        if let Some(pos) = self.npcs.get_mut(&npc) {
            *pos = at;
        }
    }

    pub(crate) fn add_item(&mut self, key: String, item: SpawnedItem) {
        self.items.insert(key, item);
    }

    pub(crate) fn remove_item(&mut self, key: &str) -> Option<SpawnedItem> {
        self.items.remove(key)
    }

    pub(crate) fn set_navigation(&mut self, navigation: Vec<NavAffordance>) {
        self.navigation = navigation;
    }
}
