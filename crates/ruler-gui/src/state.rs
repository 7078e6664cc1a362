use ruler_async_runtime::{RulerCommand, RulerLayout, RulerSpec, RulerUpdate};

use crate::views::{DialogAction, InputDialog};

/// Ruler currently on screen, together with the inputs that produced it
pub struct DisplayedRuler {
    pub spec: RulerSpec,
    pub layout: RulerLayout,
}

/// Side effect the window has to carry out after a state transition
#[derive(Debug, PartialEq)]
pub enum ShellEffect {
    SetTitle(String),
    Send(RulerCommand),
    CloseWindow,
}

/// Everything the shell shows, independent of the egui context
pub struct ShellState {
    /// Open input dialog, if any
    pub dialog: Option<InputDialog>,
    /// Most recently submitted input, used to prefill the next dialog
    pub last_spec: RulerSpec,
    pub ruler: Option<DisplayedRuler>,
    /// A build has been requested and its outcome has not arrived yet
    pub pending: bool,
    pub status: String,
}

impl ShellState {
    /// Start with the startup dialog open
    pub fn new(spec: RulerSpec) -> Self {
        Self {
            dialog: Some(InputDialog::new(&spec, true)),
            last_spec: spec,
            ruler: None,
            pending: false,
            status: String::new(),
        }
    }

    pub fn open_dialog(&mut self) {
        self.dialog = Some(InputDialog::new(&self.last_spec, false));
    }

    /// The worker queue is gone, nothing will ever answer
    pub fn worker_stopped(&mut self) {
        self.status = "Error: background worker stopped".to_string();
        self.pending = false;
    }

    pub fn apply_update(&mut self, update: RulerUpdate) -> Option<ShellEffect> {
        match update {
            RulerUpdate::Building { .. } => {
                self.ruler = None;
                self.status = "Building ruler...".to_string();
                Some(ShellEffect::SetTitle("Waiting...".to_string()))
            }
            RulerUpdate::RulerBuilt { spec, layout } => {
                // The status bar falls back to the worker's log line
                self.status.clear();
                self.ruler = Some(DisplayedRuler { spec, layout });
                self.pending = false;
                Some(ShellEffect::SetTitle(spec.title()))
            }
            RulerUpdate::BuildFailed { message, .. } => {
                self.status = format!("Error: {message}");
                self.pending = false;
                Some(ShellEffect::SetTitle("Vertical Ruler".to_string()))
            }
            RulerUpdate::ConfigLoaded { spec } => {
                if let Some(dialog) = &mut self.dialog {
                    dialog.fill(&spec);
                }
                self.last_spec = spec;
                self.status = "Settings loaded".to_string();
                None
            }
            RulerUpdate::ConfigSaved { path } => {
                self.status = format!("Settings saved → {}", path.display());
                None
            }
            RulerUpdate::Error { message } => {
                self.status = format!("Error: {message}");
                None
            }
        }
    }

    pub fn apply_dialog_action(&mut self, action: DialogAction) -> Option<ShellEffect> {
        match action {
            DialogAction::None => None,
            DialogAction::Submit(spec) => {
                self.dialog = None;
                self.last_spec = spec;
                self.pending = true;
                Some(ShellEffect::Send(RulerCommand::BuildRuler { spec }))
            }
            DialogAction::Cancel => {
                let is_startup = self.dialog.take().is_some_and(|d| d.is_startup);
                if is_startup {
                    log::info!("Startup dialog cancelled, closing");
                    Some(ShellEffect::CloseWindow)
                } else {
                    None
                }
            }
            DialogAction::LoadSettings { path } => {
                Some(ShellEffect::Send(RulerCommand::LoadConfig { path }))
            }
            DialogAction::SaveSettings { spec, path } => {
                self.last_spec = spec;
                Some(ShellEffect::Send(RulerCommand::SaveConfig { spec, path }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn built(spec: RulerSpec) -> RulerUpdate {
        RulerUpdate::RulerBuilt {
            spec,
            layout: spec.build().unwrap(),
        }
    }

    /// State with a finished ruler on screen and no dialog
    fn showing(spec: RulerSpec) -> ShellState {
        let mut state = ShellState::new(RulerSpec::default());
        state.apply_dialog_action(DialogAction::Submit(spec));
        state.apply_update(built(spec));
        state
    }

    #[test]
    fn test_starts_with_startup_dialog() {
        let state = ShellState::new(RulerSpec::default());
        assert!(state.dialog.as_ref().unwrap().is_startup);
        assert!(state.ruler.is_none());
        assert!(!state.pending);
    }

    #[test]
    fn test_submit_requests_build() {
        let mut state = ShellState::new(RulerSpec::default());
        let spec = RulerSpec::new(5, 2, true);

        let effect = state.apply_dialog_action(DialogAction::Submit(spec));
        assert_eq!(
            effect,
            Some(ShellEffect::Send(RulerCommand::BuildRuler { spec }))
        );
        assert!(state.dialog.is_none());
        assert!(state.pending);
        assert_eq!(state.last_spec, spec);
    }

    #[test]
    fn test_building_clears_ruler_and_waits() {
        let spec = RulerSpec::new(2, 5, false);
        let mut state = showing(spec);
        assert!(state.ruler.is_some());

        let effect = state.apply_update(RulerUpdate::Building { spec });
        assert_eq!(effect, Some(ShellEffect::SetTitle("Waiting...".to_string())));
        assert!(state.ruler.is_none());
    }

    #[test]
    fn test_built_ruler_is_displayed() {
        let spec = RulerSpec::new(2, 5, false);
        let mut state = ShellState::new(RulerSpec::default());
        state.apply_dialog_action(DialogAction::Submit(spec));
        state.apply_update(RulerUpdate::Building { spec });

        let effect = state.apply_update(built(spec));
        assert_eq!(
            effect,
            Some(ShellEffect::SetTitle(
                "Ruler from 0 to 2 cm with scale 5".to_string()
            ))
        );
        assert!(!state.pending);
        assert!(state.status.is_empty());
        assert_eq!(state.ruler.as_ref().unwrap().layout.stripes.len(), 21);
    }

    #[test]
    fn test_cancel_startup_dialog_closes_window() {
        let mut state = ShellState::new(RulerSpec::default());
        let effect = state.apply_dialog_action(DialogAction::Cancel);
        assert_eq!(effect, Some(ShellEffect::CloseWindow));
        assert!(state.dialog.is_none());
    }

    #[test]
    fn test_cancel_redo_dialog_keeps_ruler() {
        let spec = RulerSpec::new(3, 1, true);
        let mut state = showing(spec);
        state.open_dialog();
        assert!(!state.dialog.as_ref().unwrap().is_startup);
        assert_eq!(state.dialog.as_ref().unwrap().max_cm, "3");

        let effect = state.apply_dialog_action(DialogAction::Cancel);
        assert_eq!(effect, None);
        assert!(state.dialog.is_none());
        assert_eq!(state.ruler.as_ref().unwrap().spec, spec);
    }

    #[test]
    fn test_config_error_keeps_build_pending() {
        let spec = RulerSpec::new(4, 2, false);
        let mut state = ShellState::new(RulerSpec::default());
        state.apply_dialog_action(DialogAction::Submit(spec));
        state.open_dialog();
        state.apply_dialog_action(DialogAction::LoadSettings {
            path: PathBuf::from("broken.json"),
        });

        state.apply_update(RulerUpdate::Error {
            message: "Failed to load configuration: bad json".to_string(),
        });
        assert!(state.pending);
        assert!(state.status.starts_with("Error:"));

        state.apply_update(built(spec));
        assert!(!state.pending);
        assert!(state.ruler.is_some());
    }

    #[test]
    fn test_build_failure_clears_pending() {
        let spec = RulerSpec::new(4, 2, false);
        let mut state = ShellState::new(RulerSpec::default());
        state.apply_dialog_action(DialogAction::Submit(spec));

        state.apply_update(RulerUpdate::BuildFailed {
            spec,
            message: "Failed to build ruler: boom".to_string(),
        });
        assert!(!state.pending);
        assert_eq!(state.status, "Error: Failed to build ruler: boom");
    }

    #[test]
    fn test_config_loaded_fills_open_dialog() {
        let mut state = ShellState::new(RulerSpec::default());
        let spec = RulerSpec::new(11, 7, false);

        assert_eq!(state.apply_update(RulerUpdate::ConfigLoaded { spec }), None);
        let dialog = state.dialog.as_ref().unwrap();
        assert_eq!(dialog.max_cm, "11");
        assert_eq!(dialog.pixel_scale, "7");
        assert_eq!(state.last_spec, spec);
    }

    #[test]
    fn test_save_settings_sends_command() {
        let mut state = ShellState::new(RulerSpec::default());
        let spec = RulerSpec::new(9, 3, true);
        let path = PathBuf::from("ruler.json");

        let effect = state.apply_dialog_action(DialogAction::SaveSettings {
            spec,
            path: path.clone(),
        });
        assert_eq!(
            effect,
            Some(ShellEffect::Send(RulerCommand::SaveConfig { spec, path }))
        );
        assert!(state.dialog.is_some());
    }
}
