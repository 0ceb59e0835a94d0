pub mod chart;
pub mod data;
pub mod diagram;
pub mod pipeline;
pub mod render;


pub use data::MeasurementSeries;
pub use pipeline::{RunReport, run};
pub use render::{ChartRenderer, RenderError, RenderOutcome};
