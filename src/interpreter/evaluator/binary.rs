/// Dispatch of binary operations to the handlers below.
pub mod core;

/// Arithmetic in the integer, float and double contexts.
pub mod scalar;

/// Relational and equality operators.
///
/// Integers compare exactly; floats and doubles compare with a tolerance of
/// one machine epsilon.
pub mod comparison;

/// Logical AND and OR.
pub mod logic;
