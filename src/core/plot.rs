use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::equation::{Equation, PlotKind, PlotMode};
use crate::core::sweep::SweepValues;
use crate::core::types::GraphPoint;
use crate::core::variables::VariableTable;
use crate::error::PlotResult;

/// Drawing command in graph-coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum PlotCommand {
    /// Isolated point (point-stream style).
    PlotPoint(GraphPoint),
    /// Starts a new sub-path (path style).
    MoveTo(GraphPoint),
    /// Extends the current sub-path (path style).
    LineTo(GraphPoint),
}

impl PlotCommand {
    #[must_use]
    pub fn point(self) -> GraphPoint {
        match self {
            Self::PlotPoint(point) | Self::MoveTo(point) | Self::LineTo(point) => point,
        }
    }
}

/// How a sweep is rendered into commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotStyle {
    /// One `PlotPoint` per evaluated step.
    #[default]
    Points,
    /// `MoveTo` after the start or any skipped step, `LineTo` otherwise.
    Path,
}

/// Plots `equation` in its current mode as a point stream.
pub fn plot(equation: &Equation) -> PlotResult<PlotCommands> {
    plot_with(equation, equation.kind(), PlotStyle::Points)
}

/// Plots `equation` in mode `kind` with the given style.
///
/// Range errors and references to undefined variables are reported here,
/// before any command is produced. Steps whose point is not finite are
/// skipped by the returned iterator.
pub fn plot_with(equation: &Equation, kind: PlotKind, style: PlotStyle) -> PlotResult<PlotCommands> {
    let range = equation.sweep_range()?;
    let mode = equation.mode(kind);
    let alias = equation.sweep_variable(kind).to_owned();

    let mut variables = equation.variables().clone();
    variables.insert_unchecked(&alias, range.start());
    for expression in mode.expressions() {
        expression.check_variables(&variables)?;
    }

    debug!(
        ?kind,
        ?style,
        start = range.start(),
        end = range.end(),
        step = range.step(),
        count = range.len(),
        "start sweep"
    );

    Ok(PlotCommands {
        mode,
        variables,
        alias,
        values: range.values(),
        style,
        pen_down: false,
        skipped: 0,
    })
}

/// Lazy, finite stream of [`PlotCommand`]s for one sweep.
///
/// Works on a private copy of the equation's variable table, so re-plotting
/// an unchanged equation reproduces the same stream.
#[derive(Debug, Clone)]
pub struct PlotCommands {
    mode: PlotMode,
    variables: VariableTable,
    alias: String,
    values: SweepValues,
    style: PlotStyle,
    pen_down: bool,
    skipped: usize,
}

impl PlotCommands {
    /// Number of steps skipped so far because of domain errors.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    #[must_use]
    pub fn kind(&self) -> PlotKind {
        self.mode.kind()
    }
}

impl Iterator for PlotCommands {
    type Item = PlotCommand;

    fn next(&mut self) -> Option<PlotCommand> {
        loop {
            let swept = self.values.next()?;
            self.variables.insert_unchecked(&self.alias, swept);

            let point = match self.mode.point_at(swept, &self.variables) {
                Ok(point) if point.is_finite() => point,
                Ok(point) => {
                    trace!(swept, x = point.x, y = point.y, "skip non-finite step");
                    self.break_path();
                    continue;
                }
                Err(err) => {
                    warn!(swept, error = %err, "skip step that failed to evaluate");
                    self.break_path();
                    continue;
                }
            };

            let command = match self.style {
                PlotStyle::Points => PlotCommand::PlotPoint(point),
                PlotStyle::Path if self.pen_down => PlotCommand::LineTo(point),
                PlotStyle::Path => PlotCommand::MoveTo(point),
            };
            self.pen_down = true;
            return Some(command);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.values.size_hint().1)
    }
}

impl PlotCommands {
    fn break_path(&mut self) {
        self.pen_down = false;
        self.skipped += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_style_restarts_after_a_gap() {
        let mut equation = Equation::new();
        equation.set_y_expression("1/x").expect("y");
        equation.set_range_start("-1").expect("start");
        equation.set_range_end("1").expect("end");
        equation.set_range_step("1").expect("step");

        let commands: Vec<PlotCommand> =
            plot_with(&equation, PlotKind::Rectangular, PlotStyle::Path)
                .expect("plot")
                .collect();
        assert_eq!(
            commands,
            vec![
                PlotCommand::MoveTo(GraphPoint::new(-1.0, -1.0)),
                PlotCommand::MoveTo(GraphPoint::new(1.0, 1.0)),
            ]
        );
    }

    #[test]
    fn skipped_counter_tracks_domain_errors() {
        let mut equation = Equation::new();
        equation.set_y_expression("sqrt(x)").expect("y");
        equation.set_range_start("-2").expect("start");
        equation.set_range_end("2").expect("end");
        equation.set_range_step("1").expect("step");

        let mut commands = plot(&equation).expect("plot");
        let emitted = commands.by_ref().count();
        assert_eq!(emitted, 3);
        assert_eq!(commands.skipped(), 2);
    }
}
