use crate::{
    ast::VarKind,
    interpreter::value::number::{NumKind, Number},
};

/// The current value of a variable.
///
/// The variant always matches the variable's declared kind: `int` and `char`
/// variables hold `Int`, `float` holds `Float`, `double` holds `Double` and
/// `bool` holds `Bool`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Value of an `int` or `char` variable.
    Int(i32),
    /// Value of a `float` variable.
    Float(f32),
    /// Value of a `double` variable.
    Double(f64),
    /// Value of a `bool` variable.
    Bool(bool),
}

impl Value {
    /// Reads the value as an evaluation-time number in its natural context.
    ///
    /// Booleans read as `1` or `0` in the integer context.
    ///
    /// ## Example
    /// ```
    /// use brainrot::interpreter::value::{core::Value, number::Number};
    ///
    /// assert_eq!(Value::Bool(true).as_number(), Number::Int(1));
    /// assert_eq!(Value::Float(1.5).as_number(), Number::Float(1.5));
    /// ```
    #[must_use]
    pub const fn as_number(self) -> Number {
        match self {
            Self::Int(v) => Number::Int(v),
            Self::Float(v) => Number::Float(v),
            Self::Double(v) => Number::Double(v),
            Self::Bool(v) => Number::Int(v as i32),
        }
    }

    /// Stores a number as a value of the given kind.
    ///
    /// Floating-point numbers stored into `int` or `char` are truncated; any
    /// number stored into `bool` becomes its truthiness. Range checks for
    /// narrowing happen before this is called.
    #[must_use]
    pub fn from_number(number: Number, kind: VarKind) -> Self {
        match kind {
            VarKind::Int | VarKind::Char => Self::Int(number.truncate()),
            VarKind::Float => Self::Float(number.as_f32()),
            VarKind::Double => Self::Double(number.as_f64()),
            VarKind::Bool => Self::Bool(number.is_truthy()),
        }
    }
}

/// Returns the evaluation context a variable of this kind reads in.
#[must_use]
pub const fn context_of(kind: VarKind) -> NumKind {
    match kind {
        VarKind::Int | VarKind::Bool | VarKind::Char => NumKind::Int,
        VarKind::Float => NumKind::Float,
        VarKind::Double => NumKind::Double,
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
        }
    }
}
