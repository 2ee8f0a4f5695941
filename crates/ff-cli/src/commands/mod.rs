pub mod areas;
pub mod play;
pub mod reset;
pub mod status;

use std::path::Path;

use ff_core::{FileStore, SaveStore};

/// The save store kept in `dir`.
fn open_store(dir: &Path) -> SaveStore<FileStore> {
    SaveStore::new(FileStore::new(dir))
}
