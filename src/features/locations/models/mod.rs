mod location;

pub use location::{CreateLocation, Location};
