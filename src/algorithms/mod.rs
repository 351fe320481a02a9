//! Position computation algorithms

pub mod centroid;
pub mod outlier;
pub mod weight;

pub use centroid::triangulate;
pub use outlier::find_closest_stations;
pub use weight::distance_weight;
