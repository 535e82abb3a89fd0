use crate::util::num::truncate_to_i32;

/// The three numeric evaluation contexts, ordered by width.
///
/// Booleans and characters evaluate in the `Int` context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NumKind {
    /// 32-bit signed integer arithmetic. Also covers booleans and chars.
    Int,
    /// Single precision.
    Float,
    /// Double precision.
    Double,
}

impl NumKind {
    /// Returns the wider of two kinds.
    ///
    /// ## Example
    /// ```
    /// use brainrot::interpreter::value::number::NumKind;
    ///
    /// assert_eq!(NumKind::Int.widen(NumKind::Float), NumKind::Float);
    /// assert_eq!(NumKind::Double.widen(NumKind::Float), NumKind::Double);
    /// ```
    #[must_use]
    pub fn widen(self, other: Self) -> Self {
        self.max(other)
    }
}

impl std::fmt::Display for NumKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::Double => write!(f, "double"),
        }
    }
}

/// A number computed in one of the evaluation contexts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Integer context result.
    Int(i32),
    /// Float context result.
    Float(f32),
    /// Double context result.
    Double(f64),
}

impl Number {
    /// The zero of a context, used as the substitute value after a reported
    /// error.
    #[must_use]
    pub const fn zero(kind: NumKind) -> Self {
        match kind {
            NumKind::Int => Self::Int(0),
            NumKind::Float => Self::Float(0.0),
            NumKind::Double => Self::Double(0.0),
        }
    }

    /// `1` or `0` in the requested context.
    #[must_use]
    pub const fn from_bool(value: bool, kind: NumKind) -> Self {
        match (kind, value) {
            (NumKind::Int, v) => Self::Int(v as i32),
            (NumKind::Float, true) => Self::Float(1.0),
            (NumKind::Float, false) => Self::Float(0.0),
            (NumKind::Double, true) => Self::Double(1.0),
            (NumKind::Double, false) => Self::Double(0.0),
        }
    }

    /// The context this number was computed in.
    #[must_use]
    pub const fn kind(self) -> NumKind {
        match self {
            Self::Int(_) => NumKind::Int,
            Self::Float(_) => NumKind::Float,
            Self::Double(_) => NumKind::Double,
        }
    }

    /// Widens (or narrows) to double precision.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => f64::from(v),
            Self::Float(v) => f64::from(v),
            Self::Double(v) => v,
        }
    }

    /// Converts to single precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub const fn as_f32(self) -> f32 {
        match self {
            Self::Int(v) => v as f32,
            Self::Float(v) => v,
            Self::Double(v) => v as f32,
        }
    }

    /// Truncates to an integer the way a C `(int)` cast would.
    ///
    /// ## Example
    /// ```
    /// use brainrot::interpreter::value::number::Number;
    ///
    /// assert_eq!(Number::Double(-2.9).truncate(), -2);
    /// assert_eq!(Number::Float(f32::NAN).truncate(), 0);
    /// ```
    #[must_use]
    pub fn truncate(self) -> i32 {
        match self {
            Self::Int(v) => v,
            other => truncate_to_i32(other.as_f64()),
        }
    }

    /// Non-zero test. NaN counts as truthy.
    #[must_use]
    pub fn is_truthy(self) -> bool {
        match self {
            Self::Int(v) => v != 0,
            Self::Float(v) => v != 0.0,
            Self::Double(v) => v != 0.0,
        }
    }

    /// Converts into another context.
    #[must_use]
    pub fn convert(self, kind: NumKind) -> Self {
        match kind {
            NumKind::Int => Self::Int(self.truncate()),
            NumKind::Float => Self::Float(self.as_f32()),
            NumKind::Double => Self::Double(self.as_f64()),
        }
    }

    /// Adds a small integer step, used by increment and decrement.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn step(self, delta: i32) -> Self {
        match self {
            Self::Int(v) => Self::Int(v.wrapping_add(delta)),
            Self::Float(v) => Self::Float(v + delta as f32),
            Self::Double(v) => Self::Double(v + f64::from(delta)),
        }
    }

    /// Arithmetic negation within the same context.
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::Int(v) => Self::Int(v.wrapping_neg()),
            Self::Float(v) => Self::Float(-v),
            Self::Double(v) => Self::Double(-v),
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
        }
    }
}
