mod command;
mod graph_manager;
mod graph_properties;
mod label_format;

pub use command::{CommandKind, CommandOutcome, CommandSession, parse_line, usage};
pub use graph_manager::GraphManager;
pub use graph_properties::{
    CurveProperties, GraphProperties, LabelProperties, LineClass, LinePropertySet,
};
pub use label_format::format_tic_label;
