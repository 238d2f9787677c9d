//! Progress driving: the host progress primitive, the loop-policy driver, and the shared
//! controller used to keep several effects in lockstep.

pub(crate) mod driver;
pub(crate) mod shared;
pub(crate) mod ticker;
