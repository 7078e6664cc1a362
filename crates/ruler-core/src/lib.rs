pub mod constants;
mod geometry;
mod layout;
mod options;
mod types;

pub use geometry::{build_geometry, tick_emphasis, validate_dimensions};
pub use layout::{LabelBlock, RulerLayout, Stripe, assemble, build_ruler_widget, label_column_width};
pub use options::*;
pub use types::*;
