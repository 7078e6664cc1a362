use ruler_async_runtime::{RulerSpec, RulerUpdate};
use std::path::PathBuf;
use tokio::sync::mpsc;

pub async fn handle_load_config(path: PathBuf, update_tx: &mpsc::UnboundedSender<RulerUpdate>) {
    match RulerSpec::load(&path).await {
        Ok(spec) => {
            log::info!("Loaded ruler settings from {}", path.display());
            let _ = update_tx.send(RulerUpdate::ConfigLoaded { spec });
        }
        Err(e) => {
            let _ = update_tx.send(RulerUpdate::Error {
                message: format!("Failed to load configuration: {}", e),
            });
        }
    }
}

pub async fn handle_save_config(
    spec: RulerSpec,
    path: PathBuf,
    update_tx: &mpsc::UnboundedSender<RulerUpdate>,
) {
    match spec.save(&path).await {
        Ok(()) => {
            log::info!("Saved ruler settings to {}", path.display());
            let _ = update_tx.send(RulerUpdate::ConfigSaved { path });
        }
        Err(e) => {
            let _ = update_tx.send(RulerUpdate::Error {
                message: format!("Failed to save configuration: {}", e),
            });
        }
    }
}
