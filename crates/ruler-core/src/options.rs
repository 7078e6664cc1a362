use crate::geometry::{build_geometry, validate_dimensions};
use crate::layout::build_ruler_widget;
use crate::types::*;
use crate::RulerLayout;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters of a single ruler build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RulerSpec {
    /// Upper limit of the ruler in centimeters
    pub max_cm: i64,
    /// Vertical pixels per millimeter
    pub pixel_scale: i64,
    /// Highlight every fifth millimeter with a three-quarter cap
    pub show_fives: bool,
}

impl Default for RulerSpec {
    fn default() -> Self {
        Self {
            max_cm: 30,
            pixel_scale: 4,
            show_fives: true,
        }
    }
}

impl RulerSpec {
    pub fn new(max_cm: i64, pixel_scale: i64, show_fives: bool) -> Self {
        Self {
            max_cm,
            pixel_scale,
            show_fives,
        }
    }

    /// Parse the text fields of the input dialog.
    ///
    /// Surrounding whitespace is ignored. Non-numeric and out-of-range values
    /// are reported as [`RulerError::InvalidArgument`].
    pub fn from_input(max_cm: &str, pixel_scale: &str, show_fives: bool) -> Result<Self> {
        let max_cm = parse_field("Upper limit", max_cm)?;
        let pixel_scale = parse_field("Scale", pixel_scale)?;

        let spec = Self::new(max_cm, pixel_scale, show_fives);
        spec.validate()?;
        Ok(spec)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        validate_dimensions(self.max_cm, self.pixel_scale).map(|_| ())
    }

    pub fn geometry(&self) -> Result<RulerGeometry> {
        build_geometry(self.max_cm, self.pixel_scale, self.show_fives)
    }

    pub fn build(&self) -> Result<RulerLayout> {
        build_ruler_widget(self.max_cm, self.pixel_scale, self.show_fives)
    }

    /// Window title describing a finished ruler
    pub fn title(&self) -> String {
        format!(
            "Ruler from 0 to {} cm with scale {}",
            self.max_cm, self.pixel_scale
        )
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let spec: Self = serde_json::from_slice(&bytes)
            .map_err(|e| RulerError::Config(format!("Failed to parse config: {}", e)))?;
        spec.validate()?;
        Ok(spec)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| RulerError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

fn parse_field(name: &str, text: &str) -> Result<i64> {
    text.trim().parse().map_err(|_| {
        RulerError::InvalidArgument(format!("{name} must be a whole number (got {text:?})"))
    })
}
