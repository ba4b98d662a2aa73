pub mod batch;
pub mod mgrs;
pub mod utm;

pub use batch::ToGridCoordinates;
pub use mgrs::{MgrsCoordinate, infer_precision};
pub use utm::UtmCoordinate;
