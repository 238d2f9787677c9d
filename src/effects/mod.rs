pub(crate) mod composite;
pub(crate) mod shimmer;
pub(crate) mod sweep;
