/// Dispatch from operator to implementation.
pub mod core;

/// Floored remainder for integers and reals.
pub mod modulo;

/// Exponentiation with exact integer powers where possible.
pub mod power;

/// Addition, subtraction, multiplication and division.
pub mod scalar;
