use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::sweep::{SweepRange, SweepValues};
use crate::core::types::GraphPoint;
use crate::core::variables::{VariableTable, is_valid_name};
use crate::error::{EvalError, PlotError, PlotResult};
use crate::expr::Expression;

/// Sweep variable of rectangular plots.
pub const RECTANGULAR_SWEEP_NAME: &str = "x";

const DEFAULT_NAME: &str = "New Equation";
const DEFAULT_EXPRESSION: (&str, f64) = ("1", 1.0);
const DEFAULT_RANGE_START: (&str, f64) = ("-1", -1.0);
const DEFAULT_RANGE_END: (&str, f64) = ("1", 1.0);
const DEFAULT_RANGE_STEP: (&str, f64) = (".05", 0.05);
const DEFAULT_PRECISION: u32 = 3;
const DEFAULT_PARAM_NAME: &str = "t";
const DEFAULT_THETA_NAME: &str = "t";
const DEFAULT_RADIUS_NAME: &str = "r";

/// Selects which plotting mode an equation sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotKind {
    /// `y = f(x)`
    #[default]
    Rectangular,
    /// `(x, y) = (f(t), g(t))`
    Parametric,
    /// `r = f(θ)`
    Polar,
    /// `θ = f(r)`
    PolarRadius,
}

/// A plotting mode carrying only the expressions it evaluates.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotMode {
    Rectangular { y_of_x: Expression },
    Parametric { x_of_t: Expression, y_of_t: Expression },
    Polar { r_of_theta: Expression },
    PolarRadius { theta_of_r: Expression },
}

impl PlotMode {
    #[must_use]
    pub fn kind(&self) -> PlotKind {
        match self {
            Self::Rectangular { .. } => PlotKind::Rectangular,
            Self::Parametric { .. } => PlotKind::Parametric,
            Self::Polar { .. } => PlotKind::Polar,
            Self::PolarRadius { .. } => PlotKind::PolarRadius,
        }
    }

    #[must_use]
    pub fn expressions(&self) -> Vec<&Expression> {
        match self {
            Self::Rectangular { y_of_x } => vec![y_of_x],
            Self::Parametric { x_of_t, y_of_t } => vec![x_of_t, y_of_t],
            Self::Polar { r_of_theta } => vec![r_of_theta],
            Self::PolarRadius { theta_of_r } => vec![theta_of_r],
        }
    }

    /// Maps one swept value to a graph point.
    ///
    /// `variables` must already hold the swept value under the sweep alias.
    pub fn point_at(&self, swept: f64, variables: &VariableTable) -> Result<GraphPoint, EvalError> {
        Ok(match self {
            Self::Rectangular { y_of_x } => GraphPoint::new(swept, y_of_x.eval(variables)?),
            Self::Parametric { x_of_t, y_of_t } => {
                GraphPoint::new(x_of_t.eval(variables)?, y_of_t.eval(variables)?)
            }
            Self::Polar { r_of_theta } => GraphPoint::from_polar(r_of_theta.eval(variables)?, swept),
            Self::PolarRadius { theta_of_r } => {
                GraphPoint::from_polar(swept, theta_of_r.eval(variables)?)
            }
        })
    }
}

/// One plottable document: variables, mode expressions, range and display settings.
///
/// Each open document owns its own `Equation`; nothing is shared between
/// instances.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    name: String,
    variables: VariableTable,
    x_expression: Expression,
    y_expression: Expression,
    r_expression: Expression,
    t_expression: Expression,
    range_start: Expression,
    range_end: Expression,
    range_step: Expression,
    precision: u32,
    param_name: String,
    theta_name: String,
    radius_name: String,
    kind: PlotKind,
}

impl Default for Equation {
    fn default() -> Self {
        Self::with_variables(VariableTable::with_defaults())
    }
}

impl Equation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an equation over a caller-supplied variable table.
    #[must_use]
    pub fn with_variables(variables: VariableTable) -> Self {
        let literal = |(source, value): (&str, f64)| Expression::literal(source, value);
        let constant = literal(DEFAULT_EXPRESSION);
        Self {
            name: DEFAULT_NAME.to_owned(),
            variables,
            x_expression: constant.clone(),
            y_expression: constant.clone(),
            r_expression: constant.clone(),
            t_expression: constant,
            range_start: literal(DEFAULT_RANGE_START),
            range_end: literal(DEFAULT_RANGE_END),
            range_step: literal(DEFAULT_RANGE_STEP),
            precision: DEFAULT_PRECISION,
            param_name: DEFAULT_PARAM_NAME.to_owned(),
            theta_name: DEFAULT_THETA_NAME.to_owned(),
            radius_name: DEFAULT_RADIUS_NAME.to_owned(),
            kind: PlotKind::default(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    /// Owned copy of the current variable table.
    #[must_use]
    pub fn vars(&self) -> VariableTable {
        self.variables.clone()
    }

    pub fn set_var(&mut self, name: &str, value: f64) -> PlotResult<()> {
        self.variables.set(name, value)
    }

    #[must_use]
    pub fn var(&self, name: &str) -> Option<f64> {
        self.variables.get(name)
    }

    pub fn remove_var(&mut self, name: &str) -> Option<f64> {
        self.variables.remove(name)
    }

    #[must_use]
    pub fn x_expression(&self) -> &str {
        self.x_expression.source()
    }

    #[must_use]
    pub fn y_expression(&self) -> &str {
        self.y_expression.source()
    }

    #[must_use]
    pub fn r_expression(&self) -> &str {
        self.r_expression.source()
    }

    #[must_use]
    pub fn t_expression(&self) -> &str {
        self.t_expression.source()
    }

    /// Parses and stores x(t). On error the previous expression is kept.
    pub fn set_x_expression(&mut self, source: &str) -> PlotResult<()> {
        self.x_expression = parse_logged("x", source)?;
        Ok(())
    }

    pub fn set_y_expression(&mut self, source: &str) -> PlotResult<()> {
        self.y_expression = parse_logged("y", source)?;
        Ok(())
    }

    pub fn set_r_expression(&mut self, source: &str) -> PlotResult<()> {
        self.r_expression = parse_logged("r", source)?;
        Ok(())
    }

    pub fn set_t_expression(&mut self, source: &str) -> PlotResult<()> {
        self.t_expression = parse_logged("t", source)?;
        Ok(())
    }

    #[must_use]
    pub fn range_start_expr(&self) -> &str {
        self.range_start.source()
    }

    #[must_use]
    pub fn range_end_expr(&self) -> &str {
        self.range_end.source()
    }

    #[must_use]
    pub fn range_step_expr(&self) -> &str {
        self.range_step.source()
    }

    /// Stores the range start; the expression must evaluate against the current table.
    pub fn set_range_start(&mut self, source: &str) -> PlotResult<()> {
        self.range_start = self.parse_range_bound(source)?;
        Ok(())
    }

    pub fn set_range_end(&mut self, source: &str) -> PlotResult<()> {
        self.range_end = self.parse_range_bound(source)?;
        Ok(())
    }

    pub fn set_range_step(&mut self, source: &str) -> PlotResult<()> {
        self.range_step = self.parse_range_bound(source)?;
        Ok(())
    }

    pub fn range_start(&self) -> PlotResult<f64> {
        Ok(self.range_start.eval(&self.variables)?)
    }

    pub fn range_end(&self) -> PlotResult<f64> {
        Ok(self.range_end.eval(&self.variables)?)
    }

    pub fn range_step(&self) -> PlotResult<f64> {
        Ok(self.range_step.eval(&self.variables)?)
    }

    fn parse_range_bound(&self, source: &str) -> PlotResult<Expression> {
        let expression = Expression::parse(source)?;
        expression.eval(&self.variables)?;
        Ok(expression)
    }

    /// Evaluates the range expressions (start, end, step) and validates them.
    pub fn sweep_range(&self) -> PlotResult<SweepRange> {
        SweepRange::from_expressions(
            &self.range_start,
            &self.range_end,
            &self.range_step,
            &self.variables,
        )
    }

    /// Restartable sequence of swept values for the current table.
    pub fn sweep_values(&self) -> PlotResult<SweepValues> {
        Ok(self.sweep_range()?.values())
    }

    #[must_use]
    pub fn param_name(&self) -> &str {
        &self.param_name
    }

    pub fn set_param_name(&mut self, name: &str) -> PlotResult<()> {
        self.param_name = validated_name(name)?;
        Ok(())
    }

    #[must_use]
    pub fn theta_name(&self) -> &str {
        &self.theta_name
    }

    pub fn set_theta_name(&mut self, name: &str) -> PlotResult<()> {
        self.theta_name = validated_name(name)?;
        Ok(())
    }

    #[must_use]
    pub fn radius_name(&self) -> &str {
        &self.radius_name
    }

    pub fn set_radius_name(&mut self, name: &str) -> PlotResult<()> {
        self.radius_name = validated_name(name)?;
        Ok(())
    }

    /// Name under which the swept value is published for `kind`.
    #[must_use]
    pub fn sweep_variable(&self, kind: PlotKind) -> &str {
        match kind {
            PlotKind::Rectangular => RECTANGULAR_SWEEP_NAME,
            PlotKind::Parametric => &self.param_name,
            PlotKind::Polar => &self.theta_name,
            PlotKind::PolarRadius => &self.radius_name,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PlotKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: PlotKind) {
        self.kind = kind;
    }

    /// The tagged mode for `kind`, holding only the expressions it needs.
    #[must_use]
    pub fn mode(&self, kind: PlotKind) -> PlotMode {
        match kind {
            PlotKind::Rectangular => PlotMode::Rectangular {
                y_of_x: self.y_expression.clone(),
            },
            PlotKind::Parametric => PlotMode::Parametric {
                x_of_t: self.x_expression.clone(),
                y_of_t: self.y_expression.clone(),
            },
            PlotKind::Polar => PlotMode::Polar {
                r_of_theta: self.r_expression.clone(),
            },
            PlotKind::PolarRadius => PlotMode::PolarRadius {
                theta_of_r: self.t_expression.clone(),
            },
        }
    }

    #[must_use]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn set_precision(&mut self, precision: u32) {
        self.precision = precision;
    }

    /// Evaluates an arbitrary expression against the current table.
    pub fn evaluate(&self, source: &str) -> PlotResult<f64> {
        Ok(crate::expr::evaluate(source, &self.variables)?)
    }

    /// True when `source` parses and references only known variables.
    #[must_use]
    pub fn is_valid_expression(&self, source: &str) -> bool {
        Expression::parse(source)
            .and_then(|expression| expression.check_variables(&self.variables))
            .is_ok()
    }

    /// True when `source` evaluates to a number against the current table.
    #[must_use]
    pub fn is_valid_value(&self, source: &str) -> bool {
        self.evaluate(source).is_ok()
    }

    #[must_use]
    pub fn is_valid_name(name: &str) -> bool {
        is_valid_name(name)
    }
}

fn parse_logged(role: &str, source: &str) -> PlotResult<Expression> {
    let expression = Expression::parse(source)?;
    debug!(role, expression = expression.source(), "set mode expression");
    Ok(expression)
}

fn validated_name(name: &str) -> PlotResult<String> {
    let name = name.trim();
    if !is_valid_name(name) {
        return Err(PlotError::InvalidName(name.to_owned()));
    }
    Ok(name.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_document() {
        let equation = Equation::new();
        assert_eq!(equation.name(), "New Equation");
        assert_eq!(equation.precision(), 3);
        assert_eq!(equation.param_name(), "t");
        assert_eq!(equation.theta_name(), "t");
        assert_eq!(equation.radius_name(), "r");
        assert_eq!(equation.kind(), PlotKind::Rectangular);
        assert_eq!(equation.sweep_range().expect("range").len(), 41);
    }

    #[test]
    fn invalid_expression_keeps_previous_one() {
        let mut equation = Equation::new();
        equation.set_y_expression("x^2").expect("valid");
        assert!(equation.set_y_expression("x^").is_err());
        assert_eq!(equation.y_expression(), "x^2");
    }

    #[test]
    fn range_bound_must_evaluate_now() {
        let mut equation = Equation::new();
        assert!(matches!(
            equation.set_range_end("undefinedName"),
            Err(PlotError::Eval(EvalError::UndefinedVariable(_)))
        ));
        assert_eq!(equation.range_end_expr(), "1");
    }

    #[test]
    fn range_bounds_track_variable_changes() {
        let mut equation = Equation::new();
        equation.set_var("a", 5.0).expect("var");
        equation.set_range_end("2a").expect("end");
        assert_eq!(equation.range_end().expect("eval"), 10.0);
        equation.set_var("a", 1.0).expect("var");
        assert_eq!(equation.range_end().expect("eval"), 2.0);
    }

    #[test]
    fn mode_carries_only_its_expressions() {
        let mut equation = Equation::new();
        equation.set_x_expression("cos(t)").expect("x");
        equation.set_y_expression("sin(t)").expect("y");
        let mode = equation.mode(PlotKind::Parametric);
        let sources: Vec<&str> = mode.expressions().iter().map(|e| e.source()).collect();
        assert_eq!(sources, vec!["cos(t)", "sin(t)"]);
        assert_eq!(equation.mode(PlotKind::Polar).expressions().len(), 1);
    }

    #[test]
    fn alias_names_are_validated() {
        let mut equation = Equation::new();
        assert!(equation.set_param_name("2t").is_err());
        equation.set_param_name("s").expect("valid");
        assert_eq!(equation.sweep_variable(PlotKind::Parametric), "s");
        assert_eq!(equation.sweep_variable(PlotKind::Rectangular), "x");
    }
}
