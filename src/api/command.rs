//! Line-oriented command language for building and plotting equations.
//!
//! One command per line: a keyword followed by its argument text, e.g.
//! `start -pi`, `set a=2,b`, `yplot`. The shortcuts `x=`, `y=`, `r=` and
//! `t=` assign the matching expression. A command with no argument shows
//! the current value instead of changing it. Blank lines and lines starting
//! with `#` are ignored.

use std::fmt::Write as _;

use serde::Serialize;
use tracing::debug;

use crate::core::{Equation, PlotCommand, PlotKind, PlotStyle, plot_with};
use crate::error::{PlotError, PlotResult};

/// Every keyword the session understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    Equation,
    XEquals,
    YEquals,
    REquals,
    TEquals,
    Set,
    Start,
    End,
    Step,
    Param,
    Theta,
    Radius,
    Precision,
    YPlot,
    XyPlot,
    RPlot,
    TPlot,
    Exit,
}

impl CommandKind {
    pub const ALL: [Self; 18] = [
        Self::Equation,
        Self::XEquals,
        Self::YEquals,
        Self::REquals,
        Self::TEquals,
        Self::Set,
        Self::Start,
        Self::End,
        Self::Step,
        Self::Param,
        Self::Theta,
        Self::Radius,
        Self::Precision,
        Self::YPlot,
        Self::XyPlot,
        Self::RPlot,
        Self::TPlot,
        Self::Exit,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Equation => "equation",
            Self::XEquals => "xequals",
            Self::YEquals => "yequals",
            Self::REquals => "requals",
            Self::TEquals => "tequals",
            Self::Set => "set",
            Self::Start => "start",
            Self::End => "end",
            Self::Step => "step",
            Self::Param => "param",
            Self::Theta => "theta",
            Self::Radius => "radius",
            Self::Precision => "precision",
            Self::YPlot => "yplot",
            Self::XyPlot => "xyplot",
            Self::RPlot => "rplot",
            Self::TPlot => "tplot",
            Self::Exit => "exit",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Equation => "start a new equation, optionally named",
            Self::XEquals => "expression for x in the pair (x,y)",
            Self::YEquals => "expression for y in the pair (x,y)",
            Self::REquals => "expression for the radius in the polar equation r=f(t)",
            Self::TEquals => "expression for the angle in the polar equation t=f(r)",
            Self::Set => "comma-separated variables of the form name[=expression]",
            Self::Start => "expression for the first value of the range",
            Self::End => "expression for the last value of the range",
            Self::Step => "expression for the range increment",
            Self::Param => "name of the parameter in a parametric equation",
            Self::Theta => "name of the angle variable in a polar equation",
            Self::Radius => "name of the radius variable in a polar equation",
            Self::Precision => "digits after the decimal point in labels",
            Self::YPlot => "plot (x,y) = (x, f(x))",
            Self::XyPlot => "plot (x,y) = (f(t), g(t))",
            Self::RPlot => "plot the polar equation r = f(t)",
            Self::TPlot => "plot the polar equation t = f(r)",
            Self::Exit => "stop processing commands",
        }
    }

    /// Case-insensitive keyword lookup.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

const SHORTCUTS: [(char, CommandKind); 4] = [
    ('x', CommandKind::XEquals),
    ('y', CommandKind::YEquals),
    ('r', CommandKind::REquals),
    ('t', CommandKind::TEquals),
];

/// Listing of valid commands, sorted by keyword.
#[must_use]
pub fn usage() -> String {
    let mut kinds = CommandKind::ALL;
    kinds.sort_by_key(|kind| kind.name());

    let mut text = String::from("Valid commands:\n");
    for kind in kinds {
        let _ = writeln!(text, "    {}: {}", kind.name(), kind.description());
    }
    text
}

/// Splits one line into keyword and trimmed argument text.
///
/// Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> PlotResult<Option<(CommandKind, &str)>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut chars = line.chars();
    if let (Some(first), Some('=')) = (chars.next(), chars.next()) {
        if let Some((_, kind)) = SHORTCUTS
            .iter()
            .find(|(short, _)| first.eq_ignore_ascii_case(short))
        {
            return Ok(Some((*kind, line[2..].trim())));
        }
    }

    let (keyword, args) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(keyword, args)| (keyword, args.trim()));
    match CommandKind::from_name(keyword) {
        Some(kind) => Ok(Some((kind, args))),
        None => Err(PlotError::UnknownCommand {
            command: keyword.to_owned(),
            usage: usage(),
        }),
    }
}

/// Result of executing one line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommandOutcome {
    /// Blank or comment line.
    Noop,
    /// The equation changed.
    Updated,
    /// Current value of a setting, for commands given without arguments.
    Show { text: String },
    /// Command stream for one plot request.
    Plot {
        name: String,
        kind: PlotKind,
        commands: Vec<PlotCommand>,
    },
    Exit,
}

/// Stateful interpreter holding the equation being edited.
#[derive(Debug, Clone, Default)]
pub struct CommandSession {
    equation: Equation,
    style: PlotStyle,
}

impl CommandSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn equation(&self) -> &Equation {
        &self.equation
    }

    /// Executes one line. A failed command leaves the equation as it was,
    /// except that `set` keeps the assignments made before the failing one.
    pub fn execute(&mut self, line: &str) -> PlotResult<CommandOutcome> {
        let Some((kind, args)) = parse_line(line)? else {
            return Ok(CommandOutcome::Noop);
        };
        debug!(command = kind.name(), args, "execute command");

        let equation = &mut self.equation;
        match kind {
            CommandKind::Equation => {
                let mut fresh = Equation::new();
                if !args.is_empty() {
                    fresh.set_name(args);
                }
                *equation = fresh;
                Ok(CommandOutcome::Updated)
            }
            CommandKind::XEquals => show_or(args, equation.x_expression().to_owned(), |args| {
                equation.set_x_expression(args)
            }),
            CommandKind::YEquals => show_or(args, equation.y_expression().to_owned(), |args| {
                equation.set_y_expression(args)
            }),
            CommandKind::REquals => show_or(args, equation.r_expression().to_owned(), |args| {
                equation.set_r_expression(args)
            }),
            CommandKind::TEquals => show_or(args, equation.t_expression().to_owned(), |args| {
                equation.set_t_expression(args)
            }),
            CommandKind::Start => show_or(args, equation.range_start_expr().to_owned(), |args| {
                equation.set_range_start(args)
            }),
            CommandKind::End => show_or(args, equation.range_end_expr().to_owned(), |args| {
                equation.set_range_end(args)
            }),
            CommandKind::Step => show_or(args, equation.range_step_expr().to_owned(), |args| {
                equation.set_range_step(args)
            }),
            CommandKind::Param => show_or(args, equation.param_name().to_owned(), |args| {
                equation.set_param_name(args)
            }),
            CommandKind::Theta => show_or(args, equation.theta_name().to_owned(), |args| {
                equation.set_theta_name(args)
            }),
            CommandKind::Radius => show_or(args, equation.radius_name().to_owned(), |args| {
                equation.set_radius_name(args)
            }),
            CommandKind::Precision => {
                show_or(args, equation.precision().to_string(), |args| {
                    let precision = args.parse::<u32>().map_err(|_| {
                        PlotError::InvalidData(format!("`{args}` is not a valid precision"))
                    })?;
                    equation.set_precision(precision);
                    Ok(())
                })
            }
            CommandKind::Set if args.is_empty() => Ok(CommandOutcome::Show {
                text: format_variables(equation),
            }),
            CommandKind::Set => {
                for pair in args.split(',') {
                    assign_pair(equation, pair)?;
                }
                Ok(CommandOutcome::Updated)
            }
            CommandKind::YPlot => self.plot(PlotKind::Rectangular),
            CommandKind::XyPlot => self.plot(PlotKind::Parametric),
            CommandKind::RPlot => self.plot(PlotKind::Polar),
            CommandKind::TPlot => self.plot(PlotKind::PolarRadius),
            CommandKind::Exit => Ok(CommandOutcome::Exit),
        }
    }

    fn plot(&mut self, kind: PlotKind) -> PlotResult<CommandOutcome> {
        let commands = plot_with(&self.equation, kind, self.style)?.collect();
        self.equation.set_kind(kind);
        Ok(CommandOutcome::Plot {
            name: self.equation.name().to_owned(),
            kind,
            commands,
        })
    }
}

fn show_or(
    args: &str,
    current: String,
    apply: impl FnOnce(&str) -> PlotResult<()>,
) -> PlotResult<CommandOutcome> {
    if args.is_empty() {
        return Ok(CommandOutcome::Show { text: current });
    }
    apply(args)?;
    Ok(CommandOutcome::Updated)
}

/// `name` or `name=expression`; a bare name is set to zero.
fn assign_pair(equation: &mut Equation, pair: &str) -> PlotResult<()> {
    let mut parts = pair.split('=');
    let name = parts.next().unwrap_or_default().trim();
    let value_source = parts.next().map_or("0", str::trim);
    if parts.next().is_some() {
        return Err(PlotError::InvalidData(format!(
            "`{}` is not a valid variable specification",
            pair.trim()
        )));
    }
    if !Equation::is_valid_name(name) {
        return Err(PlotError::InvalidName(name.to_owned()));
    }

    let value = equation.evaluate(value_source)?;
    equation.set_var(name, value)
}

fn format_variables(equation: &Equation) -> String {
    let mut text = String::new();
    for (name, value) in equation.variables().iter() {
        let _ = writeln!(text, "{name}={value:.6}");
    }
    text
}
