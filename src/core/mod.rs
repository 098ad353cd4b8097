pub mod coordinate;
pub mod equation;
pub mod line_generator;
pub mod plot;
pub mod sweep;
pub mod types;
pub mod variables;

pub use coordinate::{CoordinateMapper, VERTICAL_AXIS_SIGN, to_graph, to_pixel};
pub use equation::{Equation, PlotKind, PlotMode, RECTANGULAR_SWEEP_NAME};
pub use line_generator::{
    LineGenerator, LineSegment, Lines, MAX_LINES_PER_SIDE, MIN_SPACING_PX, Orientation, axes,
    generate,
};
pub use plot::{PlotCommand, PlotCommands, PlotStyle, plot, plot_with};
pub use sweep::{MAX_SWEEP_STEPS, SweepRange, SweepValues};
pub use types::{BoundingRect, GraphPoint, PixelPoint};
pub use variables::{E_NAME, PI_NAME, VariableTable, is_valid_name};
