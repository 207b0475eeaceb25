//! Headless replay of action scripts
//!
//! A script is a RON list of [`AppAction`]s, for example:
//!
//! ```ron
//! [
//!     SetParams((width: 40.0, height: 40.0, thickness: 2.0, length: 200.0, angle_degrees: 0.0, snap: false)),
//!     AddSegment,
//!     SetParams((width: 40.0, height: 40.0, thickness: 2.0, length: 150.0, angle_degrees: 88.0, snap: true)),
//!     AddSegment,
//! ]
//! ```

use std::path::Path;

use thiserror::Error;

use crate::actions::{ActionContext, AppAction, dispatch};

/// Script loading errors
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid script: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Summary of a replayed script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Actions that took effect
    pub applied: usize,
    /// Actions that reported no effect
    pub skipped: usize,
}

/// Parse a script from RON text
pub fn parse_script(text: &str) -> Result<Vec<AppAction>, ScriptError> {
    Ok(ron::from_str(text)?)
}

/// Read and parse a script file
pub fn load_script(path: &Path) -> Result<Vec<AppAction>, ScriptError> {
    let text = std::fs::read_to_string(path)?;
    parse_script(&text)
}

/// Dispatch every action in order, logging the ones without effect
pub fn run_script(ctx: &ActionContext, actions: Vec<AppAction>) -> RunSummary {
    let mut summary = RunSummary::default();
    for (index, action) in actions.into_iter().enumerate() {
        let description = action.description();
        match dispatch(ctx, action) {
            Ok(()) => summary.applied += 1,
            Err(e) => {
                tracing::warn!("Step {} ({}) had no effect: {}", index, description, e);
                summary.skipped += 1;
            }
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    #[test]
    fn test_parse_script() {
        let actions = parse_script(
            "[AddSegment, Select(Some(Index(0))), PointerMove(ndc: (0.5, -0.5)), Undo]",
        )
        .unwrap();
        assert_eq!(actions.len(), 4);
        assert_eq!(actions[0], AppAction::AddSegment);
        assert_eq!(
            actions[2],
            AppAction::PointerMove { ndc: [0.5, -0.5] }
        );
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            parse_script("[NotAnAction]"),
            Err(ScriptError::Parse(_))
        ));
    }

    #[test]
    fn test_run_counts_outcomes() {
        let ctx = ActionContext::new(AppState::default().into_shared());
        let summary = run_script(
            &ctx,
            vec![
                AppAction::AddSegment,
                AppAction::AddSegment,
                AppAction::RemoveSelected,
                AppAction::Redo,
            ],
        );
        assert_eq!(summary, RunSummary { applied: 2, skipped: 2 });
        assert_eq!(ctx.app_state.lock().store.assembly().len(), 2);
    }
}
