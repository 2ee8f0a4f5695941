use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use ff_core::{QUEST_ORDER, QuestState};
use ff_game::quest::quest_def;

pub fn run(save_dir: &Path) -> Result<(), String> {
    let store = super::open_store(save_dir);
    let Some(state) = store
        .try_load()
        .map_err(|e| format!("cannot read the save in {}: {e}", save_dir.display()))?
    else {
        println!("  No saved game yet. Start one with 'fairyfun play'.");
        return Ok(());
    };

    let saved_at = state
        .saved_at
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "never".to_string());
    let next_letter = state
        .next_mail_quest()
        .map(|quest| quest.to_string())
        .unwrap_or_else(|| "none".to_string());

    println!("  {}", "Saved Game".bold());
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["Area", state.current_area.node().name]);
    table.add_row(vec!["Time of day", state.day_state.name()]);
    table.add_row(vec![
        "Quests done".to_string(),
        format!("{}/{}", state.completed_count(), QUEST_ORDER.len()),
    ]);
    table.add_row(vec![
        "Done today".to_string(),
        state.quests_completed_today.to_string(),
    ]);
    table.add_row(vec![
        "Mail waiting".to_string(),
        if state.has_mail_flag { "yes" } else { "no" }.to_string(),
    ]);
    table.add_row(vec!["Next letter".to_string(), next_letter]);
    table.add_row(vec!["Bag".to_string(), state.inventory.to_string()]);
    table.add_row(vec!["Saved at".to_string(), saved_at]);
    println!("{table}");
    println!();

    println!("  {}", "Quests".bold());
    let mut quests = Table::new();
    quests.set_content_arrangement(ContentArrangement::Dynamic);
    quests.set_header(vec!["Quest", "Friend", "State"]);
    for quest in QUEST_ORDER {
        let state_label = match state.quest_state(quest) {
            QuestState::NotStarted => "not started".dimmed().to_string(),
            QuestState::Active => "active".yellow().to_string(),
            QuestState::Complete => "complete".green().to_string(),
        };
        quests.add_row(vec![
            quest.to_string(),
            quest_def(quest).npc.def().name.to_string(),
            state_label,
        ]);
    }
    println!("{quests}");

    Ok(())
}
