use serde::{Deserialize, Serialize};

use crate::core::PlotStyle;
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// The four kinds of line geometry drawn behind a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineClass {
    Axes,
    GridLines,
    TicMajor,
    TicMinor,
}

impl LineClass {
    pub const ALL: [Self; 4] = [Self::Axes, Self::GridLines, Self::TicMajor, Self::TicMinor];
}

/// Drawing parameters for one [`LineClass`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePropertySet {
    /// Stroke width in pixels.
    pub weight: f64,
    /// Lines per graph unit. Ignored for axes.
    pub spacing: f64,
    /// Segment length in pixels; `None` spans the whole rectangle.
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default = "default_true")]
    pub draw: bool,
    pub color: Color,
}

impl LinePropertySet {
    #[must_use]
    pub const fn new(weight: f64, spacing: f64, length: Option<f64>, color: Color) -> Self {
        Self {
            weight,
            spacing,
            length,
            draw: true,
            color,
        }
    }

    /// Default properties for `class`.
    #[must_use]
    pub fn defaults_for(class: LineClass) -> Self {
        match class {
            LineClass::Axes => Self::new(2.0, 1.0, None, Color::BLACK),
            LineClass::GridLines => Self::new(1.0, 2.0, None, Color::from_rgb_hex(0xCB_CB_CB)),
            LineClass::TicMajor => Self::new(5.0, 2.0, Some(16.0), Color::BLACK),
            LineClass::TicMinor => Self::new(2.0, 10.0, Some(6.0), Color::BLACK),
        }
    }

    fn validate(self, class: LineClass) -> PlotResult<()> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(PlotError::InvalidData(format!(
                "{class:?} weight must be finite and > 0"
            )));
        }
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(PlotError::InvalidData(format!(
                "{class:?} spacing must be finite and > 0"
            )));
        }
        if self
            .length
            .is_some_and(|length| !length.is_finite() || length <= 0.0)
        {
            return Err(PlotError::InvalidData(format!(
                "{class:?} length must be finite and > 0"
            )));
        }
        self.color.validate()
    }
}

/// Tic label text settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelProperties {
    #[serde(default = "default_true")]
    pub draw: bool,
    #[serde(default = "default_label_font_size")]
    pub font_size_px: f64,
    #[serde(default = "default_label_color")]
    pub color: Color,
    /// Digits after the decimal point when no equation supplies one.
    #[serde(default = "default_label_precision")]
    pub precision: u32,
}

impl Default for LabelProperties {
    fn default() -> Self {
        Self {
            draw: true,
            font_size_px: default_label_font_size(),
            color: default_label_color(),
            precision: default_label_precision(),
        }
    }
}

/// How the equation curve is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveProperties {
    #[serde(default)]
    pub style: PlotStyle,
    #[serde(default = "default_curve_color")]
    pub color: Color,
    #[serde(default = "default_curve_weight")]
    pub weight: f64,
    /// Radius of point markers and of isolated path points.
    #[serde(default = "default_point_radius")]
    pub point_radius: f64,
}

impl Default for CurveProperties {
    fn default() -> Self {
        Self {
            style: PlotStyle::Path,
            color: default_curve_color(),
            weight: default_curve_weight(),
            point_radius: default_point_radius(),
        }
    }
}

/// Explicit display configuration handed to the graph manager.
///
/// Serializable so a host can persist and reload a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphProperties {
    /// Pixels per graph unit.
    #[serde(default = "default_grid_unit_px")]
    pub grid_unit_px: f64,
    #[serde(default = "default_background")]
    pub background: Color,
    #[serde(default)]
    pub labels: LabelProperties,
    #[serde(default)]
    pub curve: CurveProperties,
    #[serde(default = "default_axes")]
    pub axes: LinePropertySet,
    #[serde(default = "default_grid_lines")]
    pub grid_lines: LinePropertySet,
    #[serde(default = "default_tic_major")]
    pub tic_major: LinePropertySet,
    #[serde(default = "default_tic_minor")]
    pub tic_minor: LinePropertySet,
}

impl Default for GraphProperties {
    fn default() -> Self {
        Self {
            grid_unit_px: default_grid_unit_px(),
            background: default_background(),
            labels: LabelProperties::default(),
            curve: CurveProperties::default(),
            axes: default_axes(),
            grid_lines: default_grid_lines(),
            tic_major: default_tic_major(),
            tic_minor: default_tic_minor(),
        }
    }
}

impl GraphProperties {
    #[must_use]
    pub fn with_grid_unit(mut self, grid_unit_px: f64) -> Self {
        self.grid_unit_px = grid_unit_px;
        self
    }

    #[must_use]
    pub fn line(&self, class: LineClass) -> &LinePropertySet {
        match class {
            LineClass::Axes => &self.axes,
            LineClass::GridLines => &self.grid_lines,
            LineClass::TicMajor => &self.tic_major,
            LineClass::TicMinor => &self.tic_minor,
        }
    }

    pub fn line_mut(&mut self, class: LineClass) -> &mut LinePropertySet {
        match class {
            LineClass::Axes => &mut self.axes,
            LineClass::GridLines => &mut self.grid_lines,
            LineClass::TicMajor => &mut self.tic_major,
            LineClass::TicMinor => &mut self.tic_minor,
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.grid_unit_px.is_finite() || self.grid_unit_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "grid unit must be finite and > 0".to_owned(),
            ));
        }
        self.background.validate()?;

        if !self.labels.font_size_px.is_finite() || self.labels.font_size_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        self.labels.color.validate()?;

        let curve = self.curve;
        if !curve.weight.is_finite() || curve.weight <= 0.0 {
            return Err(PlotError::InvalidData(
                "curve weight must be finite and > 0".to_owned(),
            ));
        }
        if !curve.point_radius.is_finite() || curve.point_radius <= 0.0 {
            return Err(PlotError::InvalidData(
                "curve point radius must be finite and > 0".to_owned(),
            ));
        }
        curve.color.validate()?;

        for class in LineClass::ALL {
            self.line(class).validate(class)?;
        }
        Ok(())
    }

    /// Serializes properties to pretty JSON.
    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize properties: {e}")))
    }

    /// Deserializes and validates properties from JSON.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let properties: Self = serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse properties: {e}")))?;
        properties.validate()?;
        Ok(properties)
    }
}

fn default_true() -> bool {
    true
}

fn default_grid_unit_px() -> f64 {
    65.0
}

fn default_background() -> Color {
    Color::from_rgb_hex(0xE6_E6_E6)
}

fn default_label_font_size() -> f64 {
    8.0
}

fn default_label_color() -> Color {
    Color::BLACK
}

fn default_label_precision() -> u32 {
    2
}

fn default_curve_color() -> Color {
    Color::from_rgb_hex(0x00_00_CC)
}

fn default_curve_weight() -> f64 {
    2.0
}

fn default_point_radius() -> f64 {
    2.0
}

fn default_axes() -> LinePropertySet {
    LinePropertySet::defaults_for(LineClass::Axes)
}

fn default_grid_lines() -> LinePropertySet {
    LinePropertySet::defaults_for(LineClass::GridLines)
}

fn default_tic_major() -> LinePropertySet {
    LinePropertySet::defaults_for(LineClass::TicMajor)
}

fn default_tic_minor() -> LinePropertySet {
    LinePropertySet::defaults_for(LineClass::TicMinor)
}
