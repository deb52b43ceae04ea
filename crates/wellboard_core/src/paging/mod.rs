//! Pure pagination helpers: marker strips and window slicing.

pub mod range;
pub mod slice;
