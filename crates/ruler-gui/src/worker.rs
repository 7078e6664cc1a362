use ruler_async_runtime::{RulerCommand, RulerSpec, RulerUpdate};
use tokio::sync::mpsc;

use crate::handlers;

/// Async worker task that processes ruler commands and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<RulerCommand>,
    update_tx: mpsc::UnboundedSender<RulerUpdate>,
) {
    while let Some(cmd) = command_rx.recv().await {
        match cmd {
            RulerCommand::BuildRuler { spec } => {
                let (spec, deferred) = coalesce_builds(spec, &mut command_rx);

                // Other commands were queued before the newest build, run them first
                for cmd in deferred {
                    process_command(cmd, &update_tx).await;
                }

                handlers::ruler::handle_build(spec, &update_tx).await;
            }
            other => process_command(other, &update_tx).await,
        }
    }

    log::info!("Ruler worker stopped");
}

/// Drain queued commands, keeping only the most recent build request.
fn coalesce_builds(
    mut spec: RulerSpec,
    command_rx: &mut mpsc::UnboundedReceiver<RulerCommand>,
) -> (RulerSpec, Vec<RulerCommand>) {
    let mut deferred = Vec::new();

    while let Ok(next_cmd) = command_rx.try_recv() {
        if let RulerCommand::BuildRuler { spec: newer } = next_cmd {
            log::debug!("Discarding queued ruler build, using newer request");
            spec = newer;
        } else {
            deferred.push(next_cmd);
        }
    }

    (spec, deferred)
}

async fn process_command(cmd: RulerCommand, update_tx: &mpsc::UnboundedSender<RulerUpdate>) {
    match cmd {
        RulerCommand::BuildRuler { spec } => {
            handlers::ruler::handle_build(spec, update_tx).await;
        }
        RulerCommand::LoadConfig { path } => {
            handlers::config::handle_load_config(path, update_tx).await;
        }
        RulerCommand::SaveConfig { spec, path } => {
            handlers::config::handle_save_config(spec, path, update_tx).await;
        }
    }
}
