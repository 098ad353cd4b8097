use crate::core::types::{BoundingRect, GraphPoint, PixelPoint};
use crate::error::{PlotError, PlotResult};

/// Pixel-space y grows downward while graph-space y grows upward.
pub const VERTICAL_AXIS_SIGN: f64 = -1.0;

/// Maps a graph point to pixel space.
///
/// `origin` is the pixel location of graph coordinate (0, 0) and
/// `grid_unit_px` the number of pixels per graph unit.
#[must_use]
pub fn to_pixel(point: GraphPoint, origin: PixelPoint, grid_unit_px: f64) -> PixelPoint {
    PixelPoint::new(
        origin.x + point.x * grid_unit_px,
        origin.y + VERTICAL_AXIS_SIGN * point.y * grid_unit_px,
    )
}

/// Inverse of [`to_pixel`].
#[must_use]
pub fn to_graph(pixel: PixelPoint, origin: PixelPoint, grid_unit_px: f64) -> GraphPoint {
    GraphPoint::new(
        (pixel.x - origin.x) / grid_unit_px,
        VERTICAL_AXIS_SIGN * (pixel.y - origin.y) / grid_unit_px,
    )
}

/// Validated pairing of origin and grid unit.
///
/// Stateless apart from its two parameters; every call is independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    origin: PixelPoint,
    grid_unit_px: f64,
}

impl CoordinateMapper {
    pub fn new(origin: PixelPoint, grid_unit_px: f64) -> PlotResult<Self> {
        if !origin.x.is_finite() || !origin.y.is_finite() {
            return Err(PlotError::InvalidData(
                "mapper origin must be finite".to_owned(),
            ));
        }
        if !grid_unit_px.is_finite() || grid_unit_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "grid unit must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            origin,
            grid_unit_px,
        })
    }

    /// Mapper whose origin sits at the center of `rect`.
    pub fn centered_in(rect: BoundingRect, grid_unit_px: f64) -> PlotResult<Self> {
        Self::new(rect.center(), grid_unit_px)
    }

    #[must_use]
    pub fn origin(self) -> PixelPoint {
        self.origin
    }

    #[must_use]
    pub fn grid_unit_px(self) -> f64 {
        self.grid_unit_px
    }

    #[must_use]
    pub fn to_pixel(self, point: GraphPoint) -> PixelPoint {
        to_pixel(point, self.origin, self.grid_unit_px)
    }

    #[must_use]
    pub fn to_graph(self, pixel: PixelPoint) -> GraphPoint {
        to_graph(pixel, self.origin, self.grid_unit_px)
    }
}
