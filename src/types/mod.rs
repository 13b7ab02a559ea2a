pub mod point;
pub mod gesture;
pub mod dataset;

pub use point::Point;
pub use gesture::GestureRecord;
pub use dataset::{ClassSummary, Dataset, DatasetSummary};
