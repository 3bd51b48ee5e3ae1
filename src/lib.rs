pub mod error;
pub mod graph;
pub mod math;
pub mod operations;

pub use error::{PanelisError, Result};
