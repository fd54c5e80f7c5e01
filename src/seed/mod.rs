pub(crate) mod date;
pub(crate) mod rng;
