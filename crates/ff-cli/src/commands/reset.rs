use std::path::Path;

pub fn run(save_dir: &Path) -> Result<(), String> {
    let mut store = super::open_store(save_dir);
    if !store.exists() {
        println!("  Nothing to reset.");
        return Ok(());
    }
    store
        .reset()
        .map_err(|e| format!("cannot delete the save in {}: {e}", save_dir.display()))?;
    println!("  Save deleted. The next game starts fresh.");
    Ok(())
}
