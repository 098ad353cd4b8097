use tracing::debug;

use crate::core::{
    BoundingRect, CoordinateMapper, Equation, LineGenerator, Orientation, PixelPoint,
    PlotCommand, axes, plot_with,
};
use crate::error::PlotResult;
use crate::render::{
    LinePrimitive, PointPrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::graph_properties::{GraphProperties, LinePropertySet};
use super::label_format::format_tic_label;

const HORIZONTAL_LABEL_PADDING_PX: f64 = 5.0;
const VERTICAL_LABEL_PADDING_PX: f64 = 3.0;

/// Turns an equation and display properties into render frames.
///
/// Draw order matches a paper graph: background, grid lines, axes, minor
/// tics, major tics, labels, then the curve on top.
pub struct GraphManager<R: Renderer> {
    renderer: R,
    properties: GraphProperties,
}

impl<R: Renderer> GraphManager<R> {
    pub fn new(renderer: R, properties: GraphProperties) -> PlotResult<Self> {
        properties.validate()?;
        Ok(Self {
            renderer,
            properties,
        })
    }

    #[must_use]
    pub fn properties(&self) -> &GraphProperties {
        &self.properties
    }

    pub fn set_properties(&mut self, properties: GraphProperties) -> PlotResult<()> {
        properties.validate()?;
        self.properties = properties;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn render(&mut self, rect: BoundingRect, equation: Option<&Equation>) -> PlotResult<()> {
        let frame = self.build_render_frame(rect, equation)?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Materializes one frame for `rect`, with graph origin at its center.
    pub fn build_render_frame(
        &self,
        rect: BoundingRect,
        equation: Option<&Equation>,
    ) -> PlotResult<RenderFrame> {
        rect.ensure_drawable()?;
        let properties = &self.properties;

        let mut frame = RenderFrame::new(rect).with_rect(RectPrimitive::new(
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            properties.background,
        ));

        self.push_lines(&mut frame, rect, &properties.grid_lines)?;
        if properties.axes.draw {
            for segment in axes(rect)? {
                frame.lines.push(LinePrimitive::from_segment(
                    segment,
                    properties.axes.weight,
                    properties.axes.color,
                ));
            }
        }
        self.push_lines(&mut frame, rect, &properties.tic_minor)?;
        self.push_lines(&mut frame, rect, &properties.tic_major)?;

        if properties.labels.draw {
            let precision = equation.map_or(properties.labels.precision, Equation::precision);
            self.push_labels(&mut frame, rect, precision)?;
        }
        if let Some(equation) = equation {
            self.push_curve(&mut frame, rect, equation)?;
        }

        debug!(
            width = rect.width,
            height = rect.height,
            lines = frame.lines.len(),
            points = frame.points.len(),
            texts = frame.texts.len(),
            "built render frame"
        );
        Ok(frame)
    }

    fn generator(&self, rect: BoundingRect, set: &LinePropertySet) -> PlotResult<LineGenerator> {
        let generator =
            LineGenerator::new(rect, self.properties.grid_unit_px, set.spacing)?.without_center();
        match set.length {
            Some(length) => generator.with_length(length),
            None => Ok(generator),
        }
    }

    fn push_lines(
        &self,
        frame: &mut RenderFrame,
        rect: BoundingRect,
        set: &LinePropertySet,
    ) -> PlotResult<()> {
        if !set.draw {
            return Ok(());
        }
        let generator = self.generator(rect, set)?;
        frame.lines.extend(
            generator
                .all_lines()
                .map(|segment| LinePrimitive::from_segment(segment, set.weight, set.color)),
        );
        Ok(())
    }

    /// One label per major tic: values to the right of the vertical axis
    /// and centered below the horizontal axis.
    fn push_labels(
        &self,
        frame: &mut RenderFrame,
        rect: BoundingRect,
        precision: u32,
    ) -> PlotResult<()> {
        let properties = &self.properties;
        let labels = properties.labels;
        let grid_unit = properties.grid_unit_px;
        let center = rect.center();
        let half_tic = properties.tic_major.length.unwrap_or(0.0) / 2.0;
        let generator = self.generator(rect, &properties.tic_major)?;

        for segment in generator.lines(Orientation::Horizontal) {
            let y = segment.fixed_coordinate();
            let value = (center.y - y) / grid_unit;
            frame.texts.push(TextPrimitive::new(
                format_tic_label(value, precision),
                center.x + half_tic + HORIZONTAL_LABEL_PADDING_PX,
                y + labels.font_size_px / 2.0,
                labels.font_size_px,
                labels.color,
                TextHAlign::Left,
            ));
        }
        for segment in generator.lines(Orientation::Vertical) {
            let x = segment.fixed_coordinate();
            let value = (x - center.x) / grid_unit;
            frame.texts.push(TextPrimitive::new(
                format_tic_label(value, precision),
                x,
                center.y + half_tic + labels.font_size_px + VERTICAL_LABEL_PADDING_PX,
                labels.font_size_px,
                labels.color,
                TextHAlign::Center,
            ));
        }
        Ok(())
    }

    fn push_curve(
        &self,
        frame: &mut RenderFrame,
        rect: BoundingRect,
        equation: &Equation,
    ) -> PlotResult<()> {
        let curve = self.properties.curve;
        let mapper = CoordinateMapper::centered_in(rect, self.properties.grid_unit_px)?;
        let marker = |pixel: PixelPoint| PointPrimitive::new(pixel, curve.point_radius, curve.color);

        let mut last = None;
        let mut isolated = None;
        for command in plot_with(equation, equation.kind(), curve.style)? {
            let pixel = mapper.to_pixel(command.point());
            match command {
                PlotCommand::PlotPoint(_) => frame.points.push(marker(pixel)),
                PlotCommand::MoveTo(_) => {
                    if let Some(previous) = isolated.replace(pixel) {
                        frame.points.push(marker(previous));
                    }
                }
                PlotCommand::LineTo(_) => {
                    isolated = None;
                    if let Some(from) = last {
                        frame
                            .lines
                            .push(LinePrimitive::between(from, pixel, curve.weight, curve.color));
                    }
                }
            }
            last = Some(pixel);
        }
        if let Some(previous) = isolated {
            frame.points.push(marker(previous));
        }
        Ok(())
    }
}
