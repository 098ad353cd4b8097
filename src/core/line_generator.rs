use serde::{Deserialize, Serialize};

use crate::core::types::{BoundingRect, PixelPoint};
use crate::error::{PlotError, PlotResult};

/// Slack, in units of line spacing, for lines that land exactly on the edge.
const BOUNDARY_EPSILON: f64 = 1e-9;

/// Closest spacing, in pixels, that still yields distinct lines.
pub const MIN_SPACING_PX: f64 = 0.01;

/// Most lines a generator will place on one side of the center.
pub const MAX_LINES_PER_SIDE: usize = 1_000_000;

/// Which coordinate is held fixed along a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Fixed y, spans x.
    Horizontal,
    /// Fixed x, spans y.
    Vertical,
}

/// Line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: PixelPoint,
    pub end: PixelPoint,
    pub orientation: Orientation,
}

impl LineSegment {
    #[must_use]
    pub fn length(self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }

    /// The coordinate held fixed along the segment (y for horizontal lines).
    #[must_use]
    pub fn fixed_coordinate(self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.start.y,
            Orientation::Vertical => self.start.x,
        }
    }
}

/// Evenly spaced grid lines or tic marks around the center of a rectangle.
///
/// Lines are `grid_unit_px / lines_per_unit` pixels apart. The center line
/// comes first, then one ring at a time moving outward: the line on the
/// negative pixel side followed by its positive mirror. A line exactly on
/// the rectangle edge is included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineGenerator {
    rect: BoundingRect,
    spacing_px: f64,
    length_px: Option<f64>,
    include_center: bool,
}

impl LineGenerator {
    pub fn new(rect: BoundingRect, grid_unit_px: f64, lines_per_unit: f64) -> PlotResult<Self> {
        rect.ensure_drawable()?;
        if !grid_unit_px.is_finite() || grid_unit_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "grid unit must be finite and > 0".to_owned(),
            ));
        }
        if !lines_per_unit.is_finite() || lines_per_unit <= 0.0 {
            return Err(PlotError::InvalidData(
                "lines per unit must be finite and > 0".to_owned(),
            ));
        }

        let spacing_px = grid_unit_px / lines_per_unit;
        if spacing_px < MIN_SPACING_PX {
            return Err(PlotError::InvalidData(format!(
                "line spacing of {spacing_px} px is below the minimum of {MIN_SPACING_PX} px"
            )));
        }

        let generator = Self {
            rect,
            spacing_px,
            length_px: None,
            include_center: true,
        };
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let rings = generator.rings(orientation);
            if !rings.is_finite() || rings > MAX_LINES_PER_SIDE as f64 {
                return Err(PlotError::InvalidData(format!(
                    "{rings} lines per side exceeds the limit of {MAX_LINES_PER_SIDE}"
                )));
            }
        }
        Ok(generator)
    }

    /// Limits every segment to `length_px`, centered on the matching axis.
    pub fn with_length(mut self, length_px: f64) -> PlotResult<Self> {
        if !length_px.is_finite() || length_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "line length must be finite and > 0".to_owned(),
            ));
        }
        self.length_px = Some(length_px);
        Ok(self)
    }

    /// Skips the line through the center, which coincides with an axis.
    #[must_use]
    pub fn without_center(mut self) -> Self {
        self.include_center = false;
        self
    }

    #[must_use]
    pub fn spacing_px(self) -> f64 {
        self.spacing_px
    }

    #[must_use]
    pub fn rect(self) -> BoundingRect {
        self.rect
    }

    /// Number of segments [`Self::lines`] yields for `orientation`.
    #[must_use]
    pub fn line_count(self, orientation: Orientation) -> usize {
        self.lines_per_side(orientation)
            .saturating_mul(2)
            .saturating_add(usize::from(self.include_center))
    }

    pub fn lines(self, orientation: Orientation) -> Lines {
        Lines {
            generator: self,
            orientation,
            index: 0,
            len: self.line_count(orientation),
        }
    }

    /// All horizontal lines followed by all vertical lines.
    pub fn all_lines(self) -> impl Iterator<Item = LineSegment> {
        self.lines(Orientation::Horizontal)
            .chain(self.lines(Orientation::Vertical))
    }

    /// The two axes through the center of the rectangle.
    #[must_use]
    pub fn axes(self) -> [LineSegment; 2] {
        axis_pair(self.rect)
    }

    fn rings(self, orientation: Orientation) -> f64 {
        let half_span = match orientation {
            Orientation::Horizontal => self.rect.height,
            Orientation::Vertical => self.rect.width,
        } / 2.0;
        (half_span / self.spacing_px + BOUNDARY_EPSILON).floor()
    }

    fn lines_per_side(self, orientation: Orientation) -> usize {
        // bounded by MAX_LINES_PER_SIDE in `new`
        self.rings(orientation) as usize
    }

    fn segment_at(self, orientation: Orientation, offset: f64) -> LineSegment {
        let center = self.rect.center();
        match orientation {
            Orientation::Horizontal => {
                let y = center.y + offset;
                let (x1, x2) = match self.length_px {
                    Some(length) => (center.x - length / 2.0, center.x + length / 2.0),
                    None => (self.rect.min_x(), self.rect.max_x()),
                };
                LineSegment {
                    start: PixelPoint::new(x1, y),
                    end: PixelPoint::new(x2, y),
                    orientation,
                }
            }
            Orientation::Vertical => {
                let x = center.x + offset;
                let (y1, y2) = match self.length_px {
                    Some(length) => (center.y - length / 2.0, center.y + length / 2.0),
                    None => (self.rect.min_y(), self.rect.max_y()),
                };
                LineSegment {
                    start: PixelPoint::new(x, y1),
                    end: PixelPoint::new(x, y2),
                    orientation,
                }
            }
        }
    }
}

/// Iterator returned by [`LineGenerator::lines`].
#[derive(Debug, Clone)]
pub struct Lines {
    generator: LineGenerator,
    orientation: Orientation,
    index: usize,
    len: usize,
}

impl Iterator for Lines {
    type Item = LineSegment;

    fn next(&mut self) -> Option<LineSegment> {
        if self.index >= self.len {
            return None;
        }
        let index = self.index;
        self.index += 1;

        let ring_index = if self.generator.include_center {
            if index == 0 {
                return Some(self.generator.segment_at(self.orientation, 0.0));
            }
            index - 1
        } else {
            index
        };

        let ring = (ring_index / 2 + 1) as f64;
        let sign = if ring_index % 2 == 0 { -1.0 } else { 1.0 };
        let offset = sign * ring * self.generator.spacing_px;
        Some(self.generator.segment_at(self.orientation, offset))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Lines {}

/// Evenly spaced lines for one orientation; see [`LineGenerator`].
pub fn generate(
    rect: BoundingRect,
    grid_unit_px: f64,
    lines_per_unit: f64,
    orientation: Orientation,
) -> PlotResult<Lines> {
    Ok(LineGenerator::new(rect, grid_unit_px, lines_per_unit)?.lines(orientation))
}

/// Exactly two segments: a full-width horizontal axis and a full-height
/// vertical axis, both through the center of `rect`.
pub fn axes(rect: BoundingRect) -> PlotResult<[LineSegment; 2]> {
    rect.ensure_drawable()?;
    Ok(axis_pair(rect))
}

fn axis_pair(rect: BoundingRect) -> [LineSegment; 2] {
    let center = rect.center();
    [
        LineSegment {
            start: PixelPoint::new(rect.min_x(), center.y),
            end: PixelPoint::new(rect.max_x(), center.y),
            orientation: Orientation::Horizontal,
        },
        LineSegment {
            start: PixelPoint::new(center.x, rect.min_y()),
            end: PixelPoint::new(center.x, rect.max_y()),
            orientation: Orientation::Vertical,
        },
    ]
}
