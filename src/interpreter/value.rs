/// Magnitude from which reals are printed in scientific notation.
const SCIENTIFIC_ABOVE: f64 = 1e16;
/// Magnitude below which non-zero reals are printed in scientific notation.
const SCIENTIFIC_BELOW: f64 = 1e-4;

/// Represents a numeric value produced by evaluation.
///
/// Integers stay integers as long as every operation on them is exact;
/// division, fractional literals and overflowing integer operations produce
/// reals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Number {
    /// Converts the number to an `f64`.
    ///
    /// Integers beyond `2^53` lose precision, exactly as a float promotion
    /// would in any mixed operation.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::value::Number;
    ///
    /// assert_eq!(Number::Integer(10).as_real(), 10.0);
    /// assert_eq!(Number::Real(2.5).as_real(), 2.5);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Real(r) => r,
        }
    }

    /// Returns `true` for an integer or real zero (including `-0.0`).
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }

    /// Returns `true` when the value is an integer or a finite real.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        match self {
            Self::Integer(_) => true,
            Self::Real(r) => r.is_finite(),
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) if !r.is_finite() => write!(f, "{r}"),
            Self::Real(r) => {
                let magnitude = r.abs();
                if magnitude >= SCIENTIFIC_ABOVE || (magnitude != 0.0 && magnitude < SCIENTIFIC_BELOW)
                {
                    write!(f, "{r:e}")
                } else if r.fract() == 0.0 {
                    write!(f, "{r:.1}")
                } else {
                    write!(f, "{r}")
                }
            },
        }
    }
}
