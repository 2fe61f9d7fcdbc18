pub(crate) mod png;
pub(crate) mod ppm;
pub(crate) mod sink;
