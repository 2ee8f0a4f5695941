use std::f32::consts::FRAC_PI_2;

use ff_core::{AreaId, DayState, GameState, GroundPoint, ItemKind, QuestId, QuestState};

use crate::area::SpawnedItem;
use crate::config::{GameConfig, ItemRespawn};
use crate::context::GameContext;
use crate::dialogue::{EVENING, FINALE, LISA, Line};
use crate::error::{GameError, GameResult};
use crate::npc::{NpcId, dragon_lines};
use crate::ports::{Placement, Primitive, Shape, Target};
use crate::puzzle::run_gate;
use crate::quest::defs::{QuestDef, QuestKind, quest_def};

/// What a mailbox check did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailOutcome {
    /// No letter was waiting.
    NoMail,
    /// Every quest has been delivered; the flag is now off for good.
    AllDone,
    /// A letter was read and its quest started.
    Delivered(QuestId),
}

/// Check the mailbox.
///
/// Reads the next letter in quest order and starts its quest, or says there
/// is nothing new.
pub fn handle_mailbox(ctx: &mut GameContext<'_>) -> GameResult<MailOutcome> {
    if !ctx.state.has_mail_flag {
        ctx.say_one(Line::new("No new mail! 📭", LISA));
        return Ok(MailOutcome::NoMail);
    }

    let Some(quest) = ctx.state.next_mail_quest() else {
        ctx.state.has_mail_flag = false;
        ctx.save();
        ctx.say_one(Line::new("No more mail! All done! 🎉", LISA));
        return Ok(MailOutcome::AllDone);
    };

    activate_quest(ctx.state, ctx.config, quest)?;
    ctx.state.has_mail_flag = false;
    ctx.save();

    let def = quest_def(quest);
    ctx.audio.speak(def.letter, Some(def.letter_audio));
    ctx.presenter.show_letter(def.letter);
    if ctx.audio.is_speaking() {
        ctx.audio.stop();
    }
    ctx.say_one(Line::new("I will help! Let's go! 💜", LISA));
    Ok(MailOutcome::Delivered(quest))
}

/// Move a quest from not started to active.
///
/// Unless the config allows concurrent quests, fails while another quest is
/// still active.
pub fn activate_quest(state: &mut GameState, config: &GameConfig, quest: QuestId) -> GameResult<()> {
    let blocking = if config.allow_concurrent_quests {
        None
    } else {
        state.active_quests().find(|q| *q != quest)
    };
    if let Some(active) = blocking {
        return Err(GameError::QuestAlreadyActive {
            requested: quest,
            active,
        });
    }
    state.advance_quest(quest, QuestState::Active)?;
    tracing::info!(%quest, "quest started");
    Ok(())
}

/// Handle a tap on a character.
pub fn handle_npc_interaction(ctx: &mut GameContext<'_>, npc: NpcId) -> GameResult<()> {
    if npc == NpcId::Dragon {
        let lines = dragon_lines(ctx.state);
        ctx.say(&lines);
        return Ok(());
    }
    let Some(quest) = npc.def().quest else {
        return Ok(());
    };
    let def = quest_def(quest);

    match ctx.state.quest_state(quest) {
        QuestState::NotStarted => ctx.say(def.intro),
        QuestState::Complete => ctx.say(def.done),
        QuestState::Active => match def.kind {
            QuestKind::Fetch { item } => deliver(ctx, def, item)?,
            QuestKind::MultiFetch { item, required } => deliver_one_of(ctx, def, item, required)?,
            QuestKind::Escort { .. } => start_escort(ctx, def),
        },
    }
    Ok(())
}

fn speaker(def: &QuestDef) -> &'static str {
    def.npc.def().name
}

fn passes_gate(ctx: &mut GameContext<'_>, def: &QuestDef) -> bool {
    def.puzzle.is_none_or(|kind| run_gate(ctx, kind))
}

fn deliver(ctx: &mut GameContext<'_>, def: &QuestDef, item: ItemKind) -> GameResult<()> {
    if !ctx.state.inventory.contains(item) {
        ctx.say_one(Line::formatted(
            format!("Can you find my {item}? {}", item.emoji()),
            speaker(def),
        ));
        return Ok(());
    }
    if !passes_gate(ctx, def) {
        return Ok(());
    }
    ctx.state.inventory.remove_one(item);
    ctx.save();
    complete_quest(ctx, def.id, def.completed)
}

fn deliver_one_of(
    ctx: &mut GameContext<'_>,
    def: &QuestDef,
    item: ItemKind,
    required: u32,
) -> GameResult<()> {
    if !ctx.state.inventory.contains(item) {
        let remaining = required.saturating_sub(ctx.state.progress(def.id));
        ctx.say_one(Line::formatted(
            format!("I still need {remaining} {item}s! {}", item.emoji()),
            speaker(def),
        ));
        return Ok(());
    }
    if !passes_gate(ctx, def) {
        return Ok(());
    }

    ctx.state.inventory.remove_one(item);
    let delivered = ctx.state.add_progress(def.id);
    ctx.save();
    tracing::debug!(quest = %def.id, delivered, required, "item delivered");

    if delivered >= required {
        return complete_quest(ctx, def.id, def.completed);
    }
    ctx.say(def.received);
    ctx.say_one(Line::formatted(
        format!("I need {} more! {}", required - delivered, item.emoji()),
        speaker(def),
    ));
    Ok(())
}

fn start_escort(ctx: &mut GameContext<'_>, def: &QuestDef) {
    if ctx.escort.is_following(def.npc) {
        ctx.say_one(Line::new("Let's keep going! 🏃", speaker(def)));
        return;
    }
    if !passes_gate(ctx, def) {
        return;
    }
    ctx.escort.follow(def.npc);
    ctx.say(def.following);
}

/// Resolve an active quest: mark it complete, say its closing lines, and
/// move the mail cursor on.
///
/// Re-arms the mail flag while letters remain, plays the finale after the
/// last quest, and starts the evening once enough quests are done today.
pub fn complete_quest(ctx: &mut GameContext<'_>, quest: QuestId, lines: &[Line]) -> GameResult<()> {
    ctx.state.advance_quest(quest, QuestState::Complete)?;
    ctx.say(lines);
    ctx.state.advance_quest_cursor();
    ctx.state.quests_completed_today += 1;
    ctx.state.has_mail_flag = !ctx.state.all_quests_delivered();
    ctx.save();
    tracing::info!(
        %quest,
        completed_today = ctx.state.quests_completed_today,
        "quest complete"
    );

    ctx.renderer.set_indicator(quest_def(quest).npc, false);

    if ctx.state.all_quests_delivered() {
        ctx.say(&FINALE);
    }
    if ctx.cycle.evening_due(ctx.state) && ctx.cycle.request(DayState::Evening) {
        ctx.say(&EVENING);
    }
    Ok(())
}

/// The shapes of a quest item lying on the ground: the item and a glow ring.
pub fn item_parts(kind: ItemKind) -> Vec<Primitive> {
    let item = match kind {
        ItemKind::Carrot => Primitive::new(Shape::Cone, 0xff6600, [0.0; 3], [0.24, 0.5, 0.24]),
        ItemKind::Gem => Primitive::new(Shape::Octahedron, 0x00bfff, [0.0; 3], [0.4; 3]),
        ItemKind::Twig => Primitive::new(Shape::Cylinder, 0x8b4513, [0.0; 3], [0.06, 0.5, 0.06]),
        ItemKind::Crown => Primitive::new(Shape::Torus, 0xffd700, [0.0; 3], [0.3; 3]),
        ItemKind::Cake => Primitive::new(Shape::Sphere, 0xff69b4, [0.0; 3], [0.3; 3]),
    };
    let ring = Primitive::new(Shape::Ring, 0xffd700, [0.0, -0.1, 0.0], [0.7, 0.7, 0.7])
        .rotated([-FRAC_PI_2, 0.0, 0.0]);
    vec![item, ring]
}

/// Place the items of every active quest that lie in `area`.
///
/// Under [`ItemRespawn::UntilCollected`] items already picked up stay gone.
pub fn spawn_quest_items(ctx: &mut GameContext<'_>, area: AreaId) {
    let active: Vec<QuestId> = ctx.state.active_quests().collect();
    for quest in active {
        for loc in quest_def(quest).item_locations {
            if loc.area != area {
                continue;
            }
            let key = loc.spawn_key(quest);
            let collected = ctx.state.collected_items.contains(&key);
            if collected && ctx.config.item_respawn == ItemRespawn::UntilCollected {
                continue;
            }
            if ctx.scene.item(&key).is_some() {
                continue;
            }

            let [x, _, z] = loc.position;
            ctx.renderer.place(Placement {
                target: Some(Target::Item(key.clone())),
                label: Some(loc.item.name().to_string()),
                origin: loc.position,
                parts: item_parts(loc.item),
            });
            ctx.scene.add_item(
                key,
                SpawnedItem {
                    quest,
                    kind: loc.item,
                    position: GroundPoint::new(x, z),
                },
            );
        }
    }
}

/// Pick up the spawned item `key`.
///
/// Returns false, leaving the item where it lies, when it is not in the
/// scene or the inventory is full.
pub fn pickup(ctx: &mut GameContext<'_>, key: &str) -> bool {
    let Some(item) = ctx.scene.item(key).copied() else {
        return false;
    };
    if ctx.state.inventory.add(item.kind).is_none() {
        tracing::debug!(item = %item.kind, "inventory full");
        ctx.say_one(Line::new("My bag is full! 🎒", LISA));
        return false;
    }

    ctx.scene.remove_item(key);
    ctx.renderer.remove(&Target::Item(key.to_string()));
    ctx.state.collected_items.insert(key.to_string());
    ctx.save();
    tracing::info!(item = %item.kind, quest = %item.quest, "item picked up");

    ctx.say_one(Line::formatted(format!("Got it! {}", item.kind.emoji()), LISA));
    true
}

/// Resolve escorts whose destination is `area`.
///
/// Every follower heading here stops following and its quest completes with
/// the arrival lines. Returns whether any escort arrived.
pub fn check_escort_arrival(ctx: &mut GameContext<'_>, area: AreaId) -> GameResult<bool> {
    let arrived: Vec<NpcId> = ctx
        .escort
        .following()
        .filter(|npc| {
            npc.def()
                .quest
                .and_then(|quest| quest_def(quest).destination())
                == Some(area)
        })
        .collect();

    let mut any = false;
    for npc in arrived {
        ctx.escort.release(npc);
        let Some(quest) = npc.def().quest else {
            continue;
        };
        if ctx.state.quest_state(quest) != QuestState::Active {
            continue;
        }
        tracing::info!(%npc, %area, "escort arrived");
        complete_quest(ctx, quest, quest_def(quest).completed)?;
        any = true;
    }
    Ok(any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::PuzzleOutcome;
    use crate::testing::Harness;
    use ff_core::{INVENTORY_SLOTS, PuzzleKind, QUEST_ORDER};
    use proptest::prelude::*;

    fn active(h: &mut Harness, quest: QuestId) {
        h.state.quests.insert(quest, QuestState::Active);
        h.state.has_mail_flag = false;
    }

    #[test]
    fn fresh_game_mail_then_carrot() {
        let mut h = Harness::new();
        assert_eq!(
            h.state.quest_state(QuestId::LostCarrot),
            QuestState::NotStarted
        );
        assert!(h.state.has_mail_flag);

        let outcome = handle_mailbox(&mut h.ctx()).unwrap();
        assert_eq!(outcome, MailOutcome::Delivered(QuestId::LostCarrot));
        assert_eq!(h.state.quest_state(QuestId::LostCarrot), QuestState::Active);
        assert!(!h.state.has_mail_flag);
        assert_eq!(h.presenter.letters.len(), 1);
        assert!(h.presenter.letters[0].contains("I lost my carrot!"));
        assert_eq!(
            h.audio.spoken[0].1.as_deref(),
            Some("mail-bunny")
        );
        assert_eq!(h.presenter.texts(), vec!["I will help! Let's go! 💜"]);

        h.state.inventory.add(ItemKind::Carrot);
        handle_npc_interaction(&mut h.ctx(), NpcId::Bunny).unwrap();
        assert_eq!(h.state.quest_state(QuestId::LostCarrot), QuestState::Complete);
        assert_eq!(h.state.current_quest_index, 1);
        assert_eq!(h.state.quests_completed_today, 1);
        assert!(h.state.has_mail_flag);
        assert!(!h.state.inventory.contains(ItemKind::Carrot));
        assert_eq!(h.renderer.indicators.get(&NpcId::Bunny), Some(&false));

        let saved = h.saved_state();
        assert_eq!(saved.current_quest_index, 1);
        assert_eq!(saved.quest_state(QuestId::LostCarrot), QuestState::Complete);
    }

    #[test]
    fn no_mail_is_a_flavor_line() {
        let mut h = Harness::new();
        h.state.has_mail_flag = false;
        let outcome = handle_mailbox(&mut h.ctx()).unwrap();
        assert_eq!(outcome, MailOutcome::NoMail);
        assert_eq!(h.presenter.texts(), vec!["No new mail! 📭"]);
        assert!(h.presenter.letters.is_empty());
    }

    #[test]
    fn mail_past_the_last_quest_clears_the_flag() {
        let mut h = Harness::new();
        h.state.current_quest_index = QUEST_ORDER.len();
        let outcome = handle_mailbox(&mut h.ctx()).unwrap();
        assert_eq!(outcome, MailOutcome::AllDone);
        assert!(!h.state.has_mail_flag);
        assert!(!h.saved_state().has_mail_flag);
    }

    #[test]
    fn second_active_quest_is_rejected() {
        let mut h = Harness::new();
        active(&mut h, QuestId::LostCarrot);
        h.state.current_quest_index = 1;
        h.state.has_mail_flag = true;

        let err = handle_mailbox(&mut h.ctx()).unwrap_err();
        assert!(matches!(
            err,
            GameError::QuestAlreadyActive {
                requested: QuestId::HornGem,
                active: QuestId::LostCarrot
            }
        ));
        assert_eq!(h.state.quest_state(QuestId::HornGem), QuestState::NotStarted);
        assert!(h.state.has_mail_flag);
        assert!(h.presenter.letters.is_empty());
    }

    #[test]
    fn concurrent_quests_can_be_allowed() {
        let mut h = Harness::with_config(GameConfig::instant().with_concurrent_quests(true));
        active(&mut h, QuestId::LostCarrot);
        h.state.current_quest_index = 1;
        h.state.has_mail_flag = true;
        let outcome = handle_mailbox(&mut h.ctx()).unwrap();
        assert_eq!(outcome, MailOutcome::Delivered(QuestId::HornGem));
        assert_eq!(h.state.active_quests().count(), 2);
    }

    #[test]
    fn intro_and_done_lines_change_nothing() {
        let mut h = Harness::new();
        handle_npc_interaction(&mut h.ctx(), NpcId::Bunny).unwrap();
        assert_eq!(h.presenter.lines.len(), 3);
        assert_eq!(h.presenter.lines[0].audio_key, Some("bunny-01"));
        assert_eq!(h.state.quest_state(QuestId::LostCarrot), QuestState::NotStarted);

        h.state.quests.insert(QuestId::LostCarrot, QuestState::Complete);
        handle_npc_interaction(&mut h.ctx(), NpcId::Bunny).unwrap();
        assert_eq!(h.presenter.texts().last(), Some(&"I love my carrot! 🥕💚"));
        assert_eq!(h.state.current_quest_index, 0);
    }

    #[test]
    fn fetch_without_the_item_reminds() {
        let mut h = Harness::new();
        active(&mut h, QuestId::LostCarrot);
        handle_npc_interaction(&mut h.ctx(), NpcId::Bunny).unwrap();
        assert_eq!(h.presenter.texts(), vec!["Can you find my carrot? 🥕"]);
        assert_eq!(h.presenter.lines[0].speaker, "Bunny 🐰");
        assert_eq!(h.state.quest_state(QuestId::LostCarrot), QuestState::Active);
    }

    #[test]
    fn puzzle_gate_runs_before_delivery() {
        let mut h = Harness::new();
        active(&mut h, QuestId::HornGem);
        h.state.current_quest_index = 1;
        h.state.inventory.add(ItemKind::Gem);
        h.presenter.puzzles.push_back(PuzzleOutcome::Abandoned);

        handle_npc_interaction(&mut h.ctx(), NpcId::Unicorn).unwrap();
        assert_eq!(h.presenter.opened, vec![PuzzleKind::Connections]);
        assert_eq!(h.state.quest_state(QuestId::HornGem), QuestState::Active);
        assert!(h.state.inventory.contains(ItemKind::Gem));

        h.presenter.puzzles.push_back(PuzzleOutcome::Solved);
        handle_npc_interaction(&mut h.ctx(), NpcId::Unicorn).unwrap();
        assert_eq!(h.state.quest_state(QuestId::HornGem), QuestState::Complete);
        assert!(h.state.is_puzzle_solved(PuzzleKind::Connections));
    }

    #[test]
    fn nest_counts_twigs_one_by_one() {
        let mut h = Harness::new();
        active(&mut h, QuestId::BuildNest);
        h.state.current_quest_index = 2;
        h.state.inventory.add(ItemKind::Twig);
        h.state.inventory.add(ItemKind::Twig);

        handle_npc_interaction(&mut h.ctx(), NpcId::Bird).unwrap();
        assert_eq!(h.state.progress(QuestId::BuildNest), 1);
        assert_eq!(h.state.inventory.count(ItemKind::Twig), 1);
        assert_eq!(
            h.presenter.texts(),
            vec!["A twig! Thank you! 🌿", "I need 2 more! 🌿"]
        );

        handle_npc_interaction(&mut h.ctx(), NpcId::Bird).unwrap();
        handle_npc_interaction(&mut h.ctx(), NpcId::Bird).unwrap();
        assert_eq!(h.presenter.texts().last(), Some(&"I still need 1 twigs! 🌿"));
        assert_eq!(h.state.quest_state(QuestId::BuildNest), QuestState::Active);

        h.state.inventory.add(ItemKind::Twig);
        handle_npc_interaction(&mut h.ctx(), NpcId::Bird).unwrap();
        assert_eq!(h.state.quest_state(QuestId::BuildNest), QuestState::Complete);
        assert_eq!(h.state.progress(QuestId::BuildNest), 3);
        assert_eq!(h.state.current_quest_index, 3);
    }

    #[test]
    fn escort_starts_after_the_gate_and_keeps_going() {
        let mut h = Harness::new();
        active(&mut h, QuestId::FoxHome);
        h.presenter.puzzles.push_back(PuzzleOutcome::Solved);

        handle_npc_interaction(&mut h.ctx(), NpcId::Fox).unwrap();
        assert!(h.escort.is_following(NpcId::Fox));
        assert_eq!(h.presenter.texts(), vec!["I will go with you! Let's go! 🦊"]);

        handle_npc_interaction(&mut h.ctx(), NpcId::Fox).unwrap();
        assert_eq!(h.presenter.texts().last(), Some(&"Let's keep going! 🏃"));
        assert_eq!(h.presenter.opened.len(), 1);
    }

    #[test]
    fn escort_completes_only_at_the_destination() {
        let mut h = Harness::new();
        active(&mut h, QuestId::FoxHome);
        h.state.current_quest_index = 4;
        h.escort.follow(NpcId::Fox);

        assert!(!check_escort_arrival(&mut h.ctx(), AreaId::Meadow).unwrap());
        assert!(h.escort.is_following(NpcId::Fox));

        assert!(check_escort_arrival(&mut h.ctx(), AreaId::Glade).unwrap());
        assert!(!h.escort.is_following(NpcId::Fox));
        assert_eq!(h.state.quest_state(QuestId::FoxHome), QuestState::Complete);
        assert_eq!(h.presenter.texts()[0], "This is it! I am home! 🎉");
    }

    #[test]
    fn last_quest_plays_the_finale_and_clears_mail() {
        let mut h = Harness::new();
        for quest in &QUEST_ORDER[..5] {
            h.state.quests.insert(*quest, QuestState::Complete);
        }
        active(&mut h, QuestId::FindMom);
        h.state.current_quest_index = 5;
        h.escort.follow(NpcId::Deer);

        check_escort_arrival(&mut h.ctx(), AreaId::Glen).unwrap();
        assert!(!h.state.has_mail_flag);
        assert!(h.state.all_quests_delivered());
        assert!(h.presenter.texts().contains(&"You did it! All quests done! 🎉🎉🎉"));
    }

    #[test]
    fn completing_an_inactive_quest_says_nothing() {
        let mut h = Harness::new();
        let lines = [Line::new("Thank you so much!", "Bunny")];
        let result = complete_quest(&mut h.ctx(), QuestId::LostCarrot, &lines);
        assert!(result.is_err());
        assert!(h.presenter.lines.is_empty());
        assert!(h.audio.spoken.is_empty());
        assert_eq!(h.state.quest_state(QuestId::LostCarrot), QuestState::NotStarted);
        assert_eq!(h.state.current_quest_index, 0);
    }

    #[test]
    fn second_quest_of_the_day_brings_evening() {
        let mut h = Harness::new();
        h.state.day_state = DayState::Day;
        h.cycle.apply_immediately(DayState::Day);
        h.state.quests_completed_today = 1;
        h.state.quests.insert(QuestId::LostCarrot, QuestState::Complete);
        h.state.current_quest_index = 1;
        active(&mut h, QuestId::HornGem);
        h.state.mark_puzzle_solved(PuzzleKind::Connections);
        h.state.inventory.add(ItemKind::Gem);

        handle_npc_interaction(&mut h.ctx(), NpcId::Unicorn).unwrap();
        assert_eq!(h.state.quests_completed_today, 2);
        assert_eq!(h.cycle.transition_target(), Some(DayState::Evening));
        assert!(h.presenter.texts().contains(&"It is getting late! 🌅"));
    }

    #[test]
    fn items_spawn_only_for_active_quests() {
        let mut h = Harness::new();
        spawn_quest_items(&mut h.ctx(), AreaId::Creek);
        assert!(h.scene.items().next().is_none());

        active(&mut h, QuestId::LostCarrot);
        spawn_quest_items(&mut h.ctx(), AreaId::Creek);
        spawn_quest_items(&mut h.ctx(), AreaId::Creek);
        let keys: Vec<_> = h.scene.items().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["lost-carrot-carrot-3,0.3,-2".to_string()]);
        assert_eq!(h.renderer.placed.len(), 1);
        assert_eq!(h.renderer.placed[0].parts.len(), 2);
    }

    #[test]
    fn picked_up_items_stay_gone_by_default() {
        let mut h = Harness::new();
        active(&mut h, QuestId::LostCarrot);
        spawn_quest_items(&mut h.ctx(), AreaId::Creek);
        let key = "lost-carrot-carrot-3,0.3,-2";

        assert!(pickup(&mut h.ctx(), key));
        assert!(h.state.inventory.contains(ItemKind::Carrot));
        assert_eq!(h.presenter.texts(), vec!["Got it! 🥕"]);
        assert_eq!(h.renderer.removed, vec![Target::Item(key.to_string())]);

        h.scene.clear(AreaId::Creek);
        spawn_quest_items(&mut h.ctx(), AreaId::Creek);
        assert!(h.scene.item(key).is_none());
    }

    #[test]
    fn respawn_policy_always_brings_items_back() {
        let mut h = Harness::with_config(GameConfig::instant().with_item_respawn(ItemRespawn::Always));
        active(&mut h, QuestId::LostCarrot);
        spawn_quest_items(&mut h.ctx(), AreaId::Creek);
        let key = "lost-carrot-carrot-3,0.3,-2";
        assert!(pickup(&mut h.ctx(), key));

        h.scene.clear(AreaId::Creek);
        spawn_quest_items(&mut h.ctx(), AreaId::Creek);
        assert!(h.scene.item(key).is_some());
    }

    #[test]
    fn full_inventory_leaves_the_item() {
        let mut h = Harness::new();
        active(&mut h, QuestId::LostCarrot);
        for _ in 0..INVENTORY_SLOTS {
            h.state.inventory.add(ItemKind::Cake);
        }
        spawn_quest_items(&mut h.ctx(), AreaId::Creek);
        let key = "lost-carrot-carrot-3,0.3,-2";
        let before = h.state.inventory;

        assert!(!pickup(&mut h.ctx(), key));
        assert_eq!(h.state.inventory, before);
        assert!(h.scene.item(key).is_some());
        assert!(h.renderer.removed.is_empty());
    }

    #[test]
    fn dragon_hints_at_the_active_quest() {
        let mut h = Harness::new();
        active(&mut h, QuestId::FrogCrown);
        handle_npc_interaction(&mut h.ctx(), NpcId::Dragon).unwrap();
        assert_eq!(h.presenter.texts(), vec!["The crown is deep in the cave! 👑"]);
    }

    proptest! {
        #[test]
        fn cursor_only_climbs_one_step_at_a_time(order in proptest::collection::vec(0usize..6, 1..20)) {
            let mut h = Harness::with_config(GameConfig::instant().with_concurrent_quests(true));
            for idx in order {
                let quest = QUEST_ORDER[idx];
                let before = h.state.current_quest_index;
                if h.state.quest_state(quest) == QuestState::NotStarted {
                    activate_quest(&mut h.state, &h.config, quest).unwrap();
                }
                let result = complete_quest(&mut h.ctx(), quest, &[]);
                let after = h.state.current_quest_index;
                if result.is_ok() {
                    prop_assert_eq!(after, before + 1);
                } else {
                    prop_assert_eq!(after, before);
                }
                prop_assert!(after <= QUEST_ORDER.len());
                prop_assert_eq!(h.state.has_mail_flag, after < QUEST_ORDER.len());
            }
        }

        #[test]
        fn nest_completes_exactly_at_three(deliveries in 1u32..8) {
            let mut h = Harness::new();
            h.state.quests.insert(QuestId::BuildNest, QuestState::Active);
            for n in 1..=deliveries {
                h.state.inventory.add(ItemKind::Twig);
                handle_npc_interaction(&mut h.ctx(), NpcId::Bird).unwrap();
                let complete = h.state.quest_state(QuestId::BuildNest) == QuestState::Complete;
                prop_assert_eq!(complete, n >= 3);
            }
            prop_assert_eq!(h.state.progress(QuestId::BuildNest), deliveries.min(3));
        }
    }
}
