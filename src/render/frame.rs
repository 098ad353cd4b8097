use serde::{Deserialize, Serialize};

use crate::core::BoundingRect;
use crate::error::PlotResult;
use crate::render::{LinePrimitive, PointPrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one graph draw pass.
///
/// Primitives are drawn in field order: rects, then lines, then points,
/// then texts. Within each list, insertion order is draw order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub bounds: BoundingRect,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub points: Vec<PointPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(bounds: BoundingRect) -> Self {
        Self {
            bounds,
            rects: Vec::new(),
            lines: Vec::new(),
            points: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_point(mut self, point: PointPrimitive) -> Self {
        self.points.push(point);
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        self.bounds.ensure_drawable()?;

        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for point in &self.points {
            point.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.lines.is_empty()
            && self.points.is_empty()
            && self.texts.is_empty()
    }
}
