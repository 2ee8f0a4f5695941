use ff_core::{AreaId, Direction, GroundPoint};

use crate::area::layout;
use crate::area::scene::PendingTransition;
use crate::context::GameContext;
use crate::error::GameResult;
use crate::npc::{NpcId, dragon_appears, dragon_origin, shows_indicator, visible_in};
use crate::ports::{NavAffordance, Placement, Primitive, Target};
use crate::quest::{check_escort_arrival, spawn_quest_items};

/// Navigation buttons for every outgoing connection of `area`.
pub fn navigation_for(area: AreaId) -> Vec<NavAffordance> {
    area.node()
        .connections
        .iter()
        .map(|(direction, target)| NavAffordance {
            direction: *direction,
            target: *target,
            label: format!("{} {}", direction.arrow(), target.node().name),
        })
        .collect()
}

/// Tear down the current area and build `area`.
///
/// The player stands at the `entry` edge, or at the area's default spot when
/// there is none. Characters, Spark, and quest items are placed for the
/// current quest state; a follower reaching its destination here resolves its
/// escort. The area is recorded as visited and the game is saved.
pub fn build_area(ctx: &mut GameContext<'_>, area: AreaId, entry: Option<Direction>) -> GameResult<()> {
    let node = area.node();
    ctx.renderer.clear_area();
    ctx.scene.clear(area);
    ctx.renderer.set_ground(node.ground_size(), node.ground.color());

    for prop in layout::props(area) {
        ctx.renderer.place(Placement {
            target: prop.target_name().map(Target::Prop),
            label: prop.name.map(str::to_string),
            origin: prop.position(),
            parts: vec![Primitive {
                offset: [0.0; 3],
                ..prop.primitive
            }],
        });
        if let Some(name) = prop.target_name() {
            let [x, _, z] = prop.position();
            ctx.scene.add_prop(name, GroundPoint::new(x, z));
        }
    }

    let start = node.entry_point(entry);
    ctx.player.teleport(start);
    ctx.renderer.set_player_position(start);

    place_characters(ctx, area);
    spawn_quest_items(ctx, area);
    if check_escort_arrival(ctx, area)? {
        place_characters(ctx, area);
    }

    let navigation = navigation_for(area);
    ctx.renderer.show_area(node.name, &navigation);
    ctx.scene.set_navigation(navigation);

    let first_visit = ctx.state.visit(area);
    ctx.state.current_area = area;
    ctx.save();
    tracing::info!(%area, ?entry, first_visit, "area built");
    Ok(())
}

/// Place every visible character not yet in the scene, and Spark if due.
fn place_characters(ctx: &mut GameContext<'_>, area: AreaId) {
    for npc in visible_in(area, ctx.state, ctx.escort) {
        if ctx.scene.npc_position(npc).is_some() {
            continue;
        }
        let at = if ctx.escort.is_following(npc) {
            let player = ctx.player.position();
            GroundPoint::new(player.x, player.z + ctx.config.follow_gap)
        } else {
            npc.def().position
        };
        place_npc(ctx, npc, [at.x, 0.0, at.z]);
        let indicator = shows_indicator(npc, ctx.state);
        ctx.renderer.set_indicator(npc, indicator);
    }

    if dragon_appears(area, ctx.state) && ctx.scene.npc_position(NpcId::Dragon).is_none() {
        place_npc(ctx, NpcId::Dragon, dragon_origin(area));
    }
}

fn place_npc(ctx: &mut GameContext<'_>, npc: NpcId, origin: [f32; 3]) {
    let def = npc.def();
    ctx.renderer.place(Placement {
        target: Some(Target::Npc(npc)),
        label: Some(def.name.to_string()),
        origin,
        parts: def.look.parts(),
    });
    ctx.scene.add_npc(npc, GroundPoint::new(origin[0], origin[2]));
}

/// Walk off the current area through `dir`.
///
/// A no-op returning false while a transition is under way or when nothing
/// lies in that direction. Otherwise the screen fades and the neighbour is
/// built once the fade is over, with the player at the opposite edge.
pub fn navigate(ctx: &mut GameContext<'_>, dir: Direction) -> bool {
    if ctx.scene.is_transitioning() {
        tracing::debug!(%dir, "navigation ignored during a transition");
        return false;
    }
    let Some(arrival) = ctx.scene.area().and_then(|area| area.travel(dir)) else {
        return false;
    };
    begin(ctx, arrival.area, Some(arrival.entry));
    true
}

/// Go straight to `area` without an entry edge, as through a door.
pub fn enter(ctx: &mut GameContext<'_>, area: AreaId) -> bool {
    if ctx.scene.is_transitioning() {
        return false;
    }
    begin(ctx, area, None);
    true
}

fn begin(ctx: &mut GameContext<'_>, target: AreaId, entry: Option<Direction>) {
    tracing::debug!(%target, ?entry, "area transition started");
    ctx.scene.transition = Some(PendingTransition {
        target,
        entry,
        remaining: ctx.config.fade_secs,
    });
    ctx.renderer.set_fade(true);
}

/// Start a transition when the player has walked past an edge that leads
/// somewhere. Returns whether one started.
pub fn check_edges(ctx: &mut GameContext<'_>) -> bool {
    if ctx.scene.is_transitioning() {
        return false;
    }
    let Some(area) = ctx.scene.area() else {
        return false;
    };
    let node = area.node();
    let pos = ctx.player.position();
    let limit = ctx.config.edge_threshold;

    let crossed = [
        (Direction::Left, pos.x < -limit),
        (Direction::Right, pos.x > limit),
        (Direction::Top, pos.z < -limit),
        (Direction::Bottom, pos.z > limit),
    ];
    // Bottom beats top beats right beats left.
    let exit = crossed
        .into_iter()
        .rev()
        .find(|(dir, past)| *past && node.neighbor(*dir).is_some())
        .map(|(dir, _)| dir);

    match exit {
        Some(dir) => navigate(ctx, dir),
        None => false,
    }
}

/// Let the transition fade run for `dt` seconds. Builds the target area and
/// lifts the lock once the fade is over. Returns whether an area was built.
pub fn tick_transition(ctx: &mut GameContext<'_>, dt: f32) -> GameResult<bool> {
    let Some(mut pending) = ctx.scene.transition else {
        return Ok(false);
    };
    pending.remaining -= dt;
    if pending.remaining > 0.0 {
        ctx.scene.transition = Some(pending);
        return Ok(false);
    }

    let built = build_area(ctx, pending.target, pending.entry);
    ctx.scene.transition = None;
    ctx.renderer.set_fade(false);
    built.map(|()| true)
}
