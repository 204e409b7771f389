/// Module with the built-in link and phone number detectors.
pub(crate) mod detectors;

/// Module that provides the gap computations.
pub(crate) mod gaps;
