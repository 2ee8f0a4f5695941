/// Static quest definitions and their dialogue.
pub mod defs;
/// Mailbox delivery, NPC resolution, item spawns, and escort arrival.
pub mod engine;

pub use defs::{ItemLocation, QuestDef, QuestKind, quest_def, quest_defs};
pub use engine::{
    MailOutcome, activate_quest, check_escort_arrival, complete_quest, handle_mailbox,
    handle_npc_interaction, item_parts, pickup, spawn_quest_items,
};
