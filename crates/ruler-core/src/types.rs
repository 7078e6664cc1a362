use thiserror::Error;

#[derive(Error, Debug)]
pub enum RulerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, RulerError>;

/// Visual weight of a tick's cap line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    /// Decimeter boundary: cap spans the whole stripe
    Full,
    /// Five-millimeter mark when fives are highlighted
    ThreeQuarter,
    /// Plain millimeter
    Half,
    /// Closing end of the ruler: full cap, no side line
    Terminal,
}

impl Emphasis {
    /// Fraction of the stripe width covered by the cap line
    pub fn cap_fraction(self) -> f32 {
        match self {
            Emphasis::Full | Emphasis::Terminal => 1.0,
            Emphasis::ThreeQuarter => 0.75,
            Emphasis::Half => 0.5,
        }
    }

    /// Whether the stripe carries a full-height line on its left edge
    pub fn has_side_line(self) -> bool {
        !matches!(self, Emphasis::Terminal)
    }
}

/// One millimeter graduation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickMark {
    pub position_mm: u32,
    pub emphasis: Emphasis,
}

/// Numeral printed at a centimeter boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimeterLabel {
    pub value: u32,
    /// Block width derived from the digit count of the ruler's upper limit
    pub width_hint: u32,
    /// Set only on the closing label at the ruler's upper limit
    pub terminal: bool,
}

/// Ticks and labels of a ruler, in top-to-bottom order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RulerGeometry {
    pub ticks: Vec<TickMark>,
    pub labels: Vec<DecimeterLabel>,
}

impl RulerGeometry {
    /// Ticks excluding the terminal one
    pub fn interior_ticks(&self) -> &[TickMark] {
        match self.ticks.split_last() {
            Some((last, rest)) if last.emphasis == Emphasis::Terminal => rest,
            _ => &self.ticks,
        }
    }
}

/// Axis-aligned rectangle in layout units, origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}
