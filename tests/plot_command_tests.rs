use approx::assert_abs_diff_eq;
use cartesian_plane::core::{
    Equation, GraphPoint, PlotCommand, PlotKind, PlotStyle, plot, plot_with,
};
use cartesian_plane::{EvalError, PlotError, RangeError};

fn rectangular(expression: &str, start: &str, end: &str, step: &str) -> Equation {
    let mut equation = Equation::new();
    equation.set_y_expression(expression).expect("y");
    equation.set_range_start(start).expect("start");
    equation.set_range_end(end).expect("end");
    equation.set_range_step(step).expect("step");
    equation
}

fn points(equation: &Equation) -> Vec<GraphPoint> {
    plot(equation)
        .expect("plot")
        .map(PlotCommand::point)
        .collect()
}

#[test]
fn square_over_integer_range() {
    let equation = rectangular("x^2", "-2", "2", "1");
    let commands: Vec<PlotCommand> = plot(&equation).expect("plot").collect();
    let expected = [(-2.0, 4.0), (-1.0, 1.0), (0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]
        .map(|(x, y)| PlotCommand::PlotPoint(GraphPoint::new(x, y)));
    assert_eq!(commands, expected);
}

#[test]
fn reciprocal_skips_only_the_pole() {
    let equation = rectangular("1/x", "-2", "2", "1");
    let xs: Vec<f64> = points(&equation).into_iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![-2.0, -1.0, 1.0, 2.0]);
}

#[test]
fn two_plots_of_the_same_equation_are_identical() {
    let mut equation = rectangular("a*sin(x) + b", "-3", "3", ".25");
    equation.set_var("a", 2.0).expect("a");
    equation.set_var("b", 0.5).expect("b");

    let first: Vec<PlotCommand> = plot(&equation).expect("plot").collect();
    let second: Vec<PlotCommand> = plot(&equation).expect("plot").collect();
    assert_eq!(first.len(), 25);
    assert_eq!(first, second);
}

#[test]
fn sweep_does_not_leak_into_equation_variables() {
    let equation = rectangular("x + 1", "5", "7", "1");
    let _ = points(&equation);
    assert_eq!(equation.var("x"), Some(0.0));
}

#[test]
fn range_errors_surface_before_any_command() {
    let equation = rectangular("x", "0", "1", "0");
    assert_eq!(
        plot(&equation).err(),
        Some(PlotError::Range(RangeError::ZeroStep))
    );

    let equation = rectangular("x", "1", "0", "1");
    assert!(matches!(
        plot(&equation),
        Err(PlotError::Range(RangeError::Unreachable { .. }))
    ));
}

#[test]
fn undefined_variable_fails_the_whole_plot() {
    let mut equation = rectangular("x", "0", "1", "1");
    equation.set_y_expression("x + k").expect("parses");
    assert_eq!(
        plot(&equation).err(),
        Some(PlotError::Eval(EvalError::UndefinedVariable("k".to_owned())))
    );
}

#[test]
fn parametric_circle_uses_param_alias() {
    let mut equation = Equation::new();
    equation.set_param_name("s").expect("alias");
    equation.set_x_expression("cos(s)").expect("x");
    equation.set_y_expression("sin(s)").expect("y");
    equation.set_range_start("0").expect("start");
    equation.set_range_end("2pi").expect("end");
    equation.set_range_step("pi/2").expect("step");

    let commands: Vec<PlotCommand> =
        plot_with(&equation, PlotKind::Parametric, PlotStyle::Points)
            .expect("plot")
            .collect();
    assert_eq!(commands.len(), 5);
    let expected = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0), (1.0, 0.0)];
    for (command, (x, y)) in commands.iter().zip(expected) {
        let point = command.point();
        assert_abs_diff_eq!(point.x, x, epsilon = 1e-12);
        assert_abs_diff_eq!(point.y, y, epsilon = 1e-12);
    }
}

#[test]
fn polar_constant_radius_traces_a_circle() {
    let mut equation = Equation::new();
    equation.set_r_expression("2").expect("r");
    equation.set_range_start("0").expect("start");
    equation.set_range_end("pi").expect("end");
    equation.set_range_step("pi/2").expect("step");

    let commands: Vec<PlotCommand> = plot_with(&equation, PlotKind::Polar, PlotStyle::Points)
        .expect("plot")
        .collect();
    assert_eq!(commands.len(), 3);
    for command in &commands {
        let point = command.point();
        assert_abs_diff_eq!(point.x.hypot(point.y), 2.0, epsilon = 1e-12);
    }
    assert_abs_diff_eq!(commands[1].point().x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(commands[1].point().y, 2.0, epsilon = 1e-12);
}

#[test]
fn polar_radius_mode_sweeps_the_radius() {
    let mut equation = Equation::new();
    equation.set_t_expression("pi/2").expect("t");
    equation.set_range_start("1").expect("start");
    equation.set_range_end("3").expect("end");
    equation.set_range_step("1").expect("step");

    let commands: Vec<PlotCommand> =
        plot_with(&equation, PlotKind::PolarRadius, PlotStyle::Points)
            .expect("plot")
            .collect();
    let ys: Vec<f64> = commands.iter().map(|c| c.point().y).collect();
    assert_eq!(commands.len(), 3);
    for (y, expected) in ys.into_iter().zip([1.0, 2.0, 3.0]) {
        assert_abs_diff_eq!(y, expected, epsilon = 1e-12);
    }
}

#[test]
fn path_style_breaks_the_curve_at_domain_errors() {
    let equation = rectangular("sqrt(1 - x^2)", "-2", "2", "0.5");
    let commands: Vec<PlotCommand> =
        plot_with(&equation, PlotKind::Rectangular, PlotStyle::Path)
            .expect("plot")
            .collect();

    let tags: Vec<&str> = commands
        .iter()
        .map(|command| match command {
            PlotCommand::MoveTo(_) => "move",
            PlotCommand::LineTo(_) => "line",
            PlotCommand::PlotPoint(_) => "point",
        })
        .collect();
    // x = -1, -0.5, 0, 0.5, 1 are inside the unit circle
    assert_eq!(tags, vec!["move", "line", "line", "line", "line"]);
    assert_eq!(commands[0].point(), GraphPoint::new(-1.0, 0.0));
}

#[test]
fn plot_uses_the_equation_kind() {
    let mut equation = Equation::new();
    equation.set_r_expression("1").expect("r");
    equation.set_kind(PlotKind::Polar);
    let commands = plot(&equation).expect("plot");
    assert_eq!(commands.kind(), PlotKind::Polar);
}

#[test]
fn commands_serialize_with_a_tag() {
    let command = PlotCommand::LineTo(GraphPoint::new(1.0, -2.0));
    let json = serde_json::to_string(&command).expect("serialize");
    assert_eq!(json, r#"{"command":"line_to","x":1.0,"y":-2.0}"#);
}
