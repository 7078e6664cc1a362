use eframe::egui;
use ruler_async_runtime::{RulerCommand, RulerSpec, RulerUpdate};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::logger::AppLogger;
use crate::state::{ShellEffect, ShellState};
use crate::views::{show_input_dialog, show_log_panel, show_ruler};

pub struct RulerApp {
    state: ShellState,
    show_log: bool,
    logger: AppLogger,

    // Async infrastructure
    command_tx: mpsc::UnboundedSender<RulerCommand>,
    update_rx: mpsc::UnboundedReceiver<RulerUpdate>,

    // Keeps the worker's runtime reachable for the lifetime of the app
    _tokio_handle: tokio::runtime::Handle,
}

impl RulerApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // Spawn worker task
        tokio_handle.spawn(crate::worker::worker_task(command_rx, update_tx));

        Self {
            state: ShellState::new(RulerSpec::default()),
            show_log: false,
            logger,
            command_tx,
            update_rx,
            _tokio_handle: tokio_handle,
        }
    }

    fn apply(&mut self, ctx: &egui::Context, effect: Option<ShellEffect>) {
        match effect {
            None => {}
            Some(ShellEffect::SetTitle(title)) => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
            }
            Some(ShellEffect::Send(command)) => {
                if self.command_tx.send(command).is_err() {
                    log::error!("Ruler worker is not running");
                    self.state.worker_stopped();
                }
            }
            Some(ShellEffect::CloseWindow) => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }
}

impl eframe::App for RulerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process all pending updates from worker
        while let Ok(update) = self.update_rx.try_recv() {
            let effect = self.state.apply_update(update);
            self.apply(ctx, effect);
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(5.0);
            let redo = ui.add_enabled(
                self.state.dialog.is_none(),
                egui::Button::new("Create new ruler").min_size(egui::vec2(ui.available_width(), 0.0)),
            );
            if redo.clicked() {
                self.state.open_dialog();
            }
            ui.add_space(5.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.pending {
                    ui.spinner();
                }
                if let Some(ruler) = &self.state.ruler {
                    ui.label(format!(
                        "0–{} cm @ {} px/mm",
                        ruler.spec.max_cm, ruler.spec.pixel_scale
                    ));
                    ui.separator();
                }
                if self.state.status.is_empty() {
                    ui.weak(self.logger.latest_message().unwrap_or_default());
                } else {
                    ui.label(&self.state.status);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.toggle_value(&mut self.show_log, "Log");
                });
            });
            if self.show_log {
                ui.separator();
                show_log_panel(ui, &self.logger);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            show_ruler(
                ui,
                self.state.ruler.as_ref().map(|r| &r.layout),
                self.state.pending,
            );
        });

        if let Some(dialog) = &mut self.state.dialog {
            let action = show_input_dialog(ctx, dialog);
            let effect = self.state.apply_dialog_action(action);
            self.apply(ctx, effect);
        }

        // Poll for the worker's result while a build is in flight
        if self.state.pending {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
