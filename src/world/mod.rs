// world/ - Geometry queries
//
// Pure functions over screen-space boxes.
// No state, no allocation - just math.

mod bounds;

pub use bounds::*;
