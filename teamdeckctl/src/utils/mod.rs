pub mod formatting;
pub mod parsers;
pub mod tracing_layer;
pub mod ui;
