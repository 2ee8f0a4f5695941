use ff_core::{AreaId, QuestId, QuestState};

use crate::area::enter;
use crate::context::GameContext;
use crate::dialogue::{LISA, Line};
use crate::error::GameResult;
use crate::quest::handle_mailbox;

/// Handle a tap on a named prop in or around the house.
///
/// Returns false when the prop does nothing.
pub fn handle_prop(ctx: &mut GameContext<'_>, name: &str) -> GameResult<bool> {
    match name {
        "door" => {
            enter(ctx, AreaId::HouseInside);
        }
        "door-exit" => {
            enter(ctx, AreaId::House);
        }
        "mailbox" => {
            handle_mailbox(ctx)?;
        }
        "bed" => go_to_bed(ctx),
        "stove" => use_stove(ctx),
        "toothbrush" => brush_teeth(ctx),
        _ => return Ok(false),
    }
    Ok(true)
}

fn go_to_bed(ctx: &mut GameContext<'_>) {
    if !ctx.state.day_state.is_bedtime() {
        ctx.say_one(Line::new("It is not time to sleep yet! ☀️", LISA));
        return;
    }
    if !ctx.state.has_brushed_teeth {
        ctx.say_one(Line::voiced(
            "I need to brush my teeth first! 🪥",
            LISA,
            "house-brush-first",
        ));
        return;
    }
    if !ctx.cycle.start_night() {
        ctx.say_one(Line::new("Zzz... 💤", ""));
        return;
    }
    tracing::info!("going to sleep");
    ctx.say(&[
        Line::voiced("Time to sleep! Good night! 🌙", LISA, "house-goodnight"),
        Line::voiced("Zzz... 💤", "", "house-zzz"),
    ]);
}

fn use_stove(ctx: &mut GameContext<'_>) {
    let line = if ctx.state.quest_state(QuestId::FrogCrown) == QuestState::Active {
        Line::voiced("Time to cook! Yum! It is done! 🎉", LISA, "house-cook-done")
    } else {
        Line::voiced("My stove! I can cook here. 🍳", LISA, "house-stove-idle")
    };
    ctx.say_one(line);
}

fn brush_teeth(ctx: &mut GameContext<'_>) {
    if ctx.state.has_brushed_teeth {
        ctx.say_one(Line::voiced("My teeth are all clean! ✨", LISA, "house-brush-done"));
        return;
    }
    ctx.say_one(Line::voiced(
        "Brush, brush, brush! So clean! ✨",
        LISA,
        "house-brush-do",
    ));
    ctx.state.has_brushed_teeth = true;
    ctx.save();
}
