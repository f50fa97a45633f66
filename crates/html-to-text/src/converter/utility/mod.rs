//! Helpers shared by the converter.

pub(crate) mod preprocessing;
pub(crate) mod siblings;
