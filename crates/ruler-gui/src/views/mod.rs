pub mod input_dialog;
pub mod log_panel;
pub mod ruler_view;

pub use input_dialog::{DialogAction, InputDialog, show_input_dialog};
pub use log_panel::show_log_panel;
pub use ruler_view::show_ruler;
