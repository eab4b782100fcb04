//! Domain model types for single-vehicle tours.
//!
//! Named locations, closed tours over matrix indices, and the solve result
//! together with its persistable record.

mod location;
mod result;
mod tour;

pub use location::{Location, EARTH_RADIUS_MILES};
pub use result::{RouteRecord, RouteResult};
pub use tour::Tour;
