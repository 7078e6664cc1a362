use ruler_async_runtime::{RulerSpec, RulerUpdate};
use ruler_core::RulerError;
use tokio::sync::mpsc;

pub async fn handle_build(spec: RulerSpec, update_tx: &mpsc::UnboundedSender<RulerUpdate>) {
    let _ = update_tx.send(RulerUpdate::Building { spec });
    log::info!(
        "Building ruler: 0 to {} cm, {} px/mm, fives {}",
        spec.max_cm,
        spec.pixel_scale,
        if spec.show_fives { "on" } else { "off" }
    );

    // Layout is CPU-bound, keep it off the async threads
    let result = tokio::task::spawn_blocking(move || spec.build())
        .await
        .map_err(RulerError::from)
        .and_then(|built| built);

    match result {
        Ok(layout) => {
            log::info!(
                "Ruler ready: {} stripes, {} labels, {:.0} px tall",
                layout.stripes.len(),
                layout.labels.len(),
                layout.height
            );
            let _ = update_tx.send(RulerUpdate::RulerBuilt { spec, layout });
        }
        Err(e) => {
            log::error!("Failed to build ruler: {e}");
            let _ = update_tx.send(RulerUpdate::BuildFailed {
                spec,
                message: format!("Failed to build ruler: {e}"),
            });
        }
    }
}
