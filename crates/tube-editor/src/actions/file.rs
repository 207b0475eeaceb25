//! Export and import delivery

use std::path::{Path, PathBuf};

use tube_core::{export_file_name, export_json, import_json};

use crate::state::AppState;

use super::ActionError;

/// Write the current assembly to `dir` under a timestamped file name
pub fn export_to_dir(state: &mut AppState, dir: &Path) -> Result<PathBuf, ActionError> {
    let json = export_json(state.store.assembly())?;

    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(chrono::Utc::now().timestamp_millis()));
    std::fs::write(&path, json)?;

    state.modified = false;
    tracing::info!(
        "Exported {} segments to {:?}",
        state.store.assembly().len(),
        path
    );
    Ok(path)
}

/// Replace the assembly with the contents of an export file
pub fn import_from_path(state: &mut AppState, path: &Path) -> Result<(), ActionError> {
    let json = std::fs::read_to_string(path)?;
    let assembly = import_json(&json)?;

    state.drag = None;
    state.store.load(assembly, "Import");
    tracing::info!(
        "Imported {} segments from {:?}",
        state.store.assembly().len(),
        path
    );
    Ok(())
}
