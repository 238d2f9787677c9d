//! Paint model: configuration colors and the sweep gradient.

pub(crate) mod color;
pub(crate) mod gradient;
