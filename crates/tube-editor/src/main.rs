//! Tube Assembly headless runner
//!
//! Usage: `tube-assembly <script.ron> [output-dir]`

use std::path::PathBuf;
use std::process::ExitCode;

use tube_core::NullObserver;
use tube_editor::actions::export_to_dir;
use tube_editor::config::create_shared_config;
use tube_editor::runner::{load_script, run_script};
use tube_editor::{ActionContext, AppState};

fn main() -> ExitCode {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tube_editor=debug,tube_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args_os().skip(1);
    let Some(script_path) = args.next().map(PathBuf::from) else {
        eprintln!("usage: tube-assembly <script.ron> [output-dir]");
        return ExitCode::from(2);
    };
    let output_dir = args.next().map(PathBuf::from);

    tracing::info!("Starting Tube Assembly runner");

    let config = create_shared_config(None);
    let editor_config = config.read().config().editor.clone();
    let state = AppState::new(&editor_config, Box::new(NullObserver)).into_shared();
    let ctx = ActionContext::new(state);

    let actions = match load_script(&script_path) {
        Ok(actions) => actions,
        Err(e) => {
            tracing::error!("Failed to load {:?}: {}", script_path, e);
            return ExitCode::FAILURE;
        }
    };

    let summary = run_script(&ctx, actions);
    tracing::info!(
        "Replayed script: {} applied, {} without effect",
        summary.applied,
        summary.skipped
    );

    let mut state = ctx.app_state.lock();
    let explicit_dir = output_dir.is_some();
    let dir = output_dir.unwrap_or_else(|| state.export_dir.clone());
    match export_to_dir(&mut state, &dir) {
        Ok(path) => {
            if explicit_dir {
                let mut manager = config.write();
                manager.remember_export_dir(&dir);
                if let Err(e) = manager.save() {
                    tracing::warn!(
                        "Could not save config to {:?}: {}",
                        manager.config_file_path(),
                        e
                    );
                }
            }
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Export failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
