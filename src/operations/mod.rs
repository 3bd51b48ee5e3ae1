mod adjacency;
mod bounding_box;
mod build_shapes;
mod detect_cycle;
mod enumerate_cycles;
mod filter_contained;
mod find_path;
mod rebuild_shape;
mod sample_cycle;

pub use bounding_box::{Aabb, BoundingBox};
pub use build_shapes::BuildShapes;
pub use detect_cycle::DetectCycle;
pub use enumerate_cycles::EnumerateCycles;
pub use filter_contained::{filter_contained, ShapeCandidate};
pub use find_path::FindPath;
pub use rebuild_shape::RebuildShape;
pub use sample_cycle::SampleCycle;
