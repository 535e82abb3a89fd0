use std::sync::atomic::{AtomicUsize, Ordering};

/// Identity of an identifier node.
///
/// Every `Expr::Identifier` receives a fresh id when it is built. The
/// interpreter keys its resolution cache by this id, so the tree itself never
/// has to be mutated after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

static NEXT_NODE_ID: AtomicUsize = AtomicUsize::new(0);

impl NodeId {
    /// Allocates a process-unique node id.
    #[must_use]
    pub fn fresh() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// The declared kind of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    /// `int`, a 32-bit signed integer.
    Int,
    /// `float`, single precision.
    Float,
    /// `double`, double precision.
    Double,
    /// `bool`.
    Bool,
    /// `char`, stored as an integer.
    Char,
}

impl std::fmt::Display for VarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Double => "double",
            Self::Bool => "bool",
            Self::Char => "char",
        };
        write!(f, "{name}")
    }
}

/// Qualifier flags attached to a declaration.
///
/// `reserved` mirrors a fourth flag of the language's declaration state. It is
/// initialized to `false` and nothing reads it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Qualifiers {
    /// `volatile`
    pub is_volatile: bool,
    /// `signed`
    pub is_signed:   bool,
    /// `unsigned`
    pub is_unsigned: bool,
    /// Initialized, never consumed.
    pub reserved:    bool,
}

impl Qualifiers {
    /// The empty qualifier set.
    pub const NONE: Self = Self { is_volatile: false,
                                  is_signed:   false,
                                  is_unsigned: false,
                                  reserved:    false, };
}

/// An expression node.
///
/// Expressions are evaluated in one of three numeric contexts chosen by kind
/// inference. Every variant carries the source line it was parsed from.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An `int` literal.
    IntLiteral {
        /// The literal value.
        value: i32,
        /// Line number in the source code.
        line:  usize,
    },
    /// A `float` literal such as `1.5f`.
    FloatLiteral {
        /// The literal value.
        value: f32,
        /// Line number in the source code.
        line:  usize,
    },
    /// A `double` literal such as `1.5`.
    DoubleLiteral {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A character literal such as `'a'`.
    CharLiteral {
        /// The byte value of the character.
        value: u8,
        /// Line number in the source code.
        line:  usize,
    },
    /// `true` or `false`.
    BoolLiteral {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal. Only meaningful as a format argument or print
    /// operand.
    StringLiteral {
        /// The unescaped text.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Identity used by the resolution cache.
        id:   NodeId,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation.
    BinaryOp {
        /// The operator.
        op:         BinaryOperator,
        /// Left operand.
        left:       Box<Self>,
        /// Right operand.
        right:      Box<Self>,
        /// Qualifiers of the declaration this operation appeared in.
        qualifiers: Qualifiers,
        /// Line number in the source code.
        line:       usize,
    },
    /// A unary operation.
    UnaryOp {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A call to a built-in such as `yapping("%d\n", x)`.
    Call {
        /// Name of the called built-in.
        name:      String,
        /// Ordered argument list.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `sizeof(name)`.
    Sizeof {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
}

impl Expr {
    /// Builds an identifier node with a fresh [`NodeId`].
    ///
    /// ## Example
    /// ```
    /// use brainrot::ast::Expr;
    ///
    /// let a = Expr::identifier("x", 1);
    /// let b = Expr::identifier("x", 1);
    /// assert_ne!(a, b);
    /// ```
    #[must_use]
    pub fn identifier(name: impl Into<String>, line: usize) -> Self {
        Self::Identifier { name: name.into(),
                           id: NodeId::fresh(),
                           line }
    }

    /// Builds a binary operation without qualifiers.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self, line: usize) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right),
                         qualifiers: Qualifiers::NONE,
                         line }
    }

    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::IntLiteral { line, .. }
            | Self::FloatLiteral { line, .. }
            | Self::DoubleLiteral { line, .. }
            | Self::CharLiteral { line, .. }
            | Self::BoolLiteral { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::Identifier { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::Call { line, .. }
            | Self::Sizeof { line, .. } => *line,
        }
    }

    /// Applies declaration qualifiers to every binary operation in the tree.
    ///
    /// Used by the parser while the tree is still being built, so that an
    /// initializer like `unsigned int r = a % b;` performs unsigned modulo.
    #[must_use]
    pub fn with_qualifiers(self, qualifiers: Qualifiers) -> Self {
        match self {
            Self::BinaryOp { op, left, right, line, .. } => {
                Self::BinaryOp { op,
                                 left: Box::new(left.with_qualifiers(qualifiers)),
                                 right: Box::new(right.with_qualifiers(qualifiers)),
                                 qualifiers,
                                 line }
            },
            Self::UnaryOp { op, operand, line } => {
                Self::UnaryOp { op,
                                operand: Box::new(operand.with_qualifiers(qualifiers)),
                                line }
            },
            other => other,
        }
    }
}

/// One branch of a `switch` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    /// The match value; `None` marks the `default` branch.
    pub value: Option<Expr>,
    /// The statements of the branch.
    pub body:  Statement,
}

/// A statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A declaration or assignment.
    Assignment {
        /// The assigned variable.
        name:       String,
        /// The right-hand side.
        value:      Expr,
        /// The declared kind, present for declarations such as `int x = 1;`.
        declared:   Option<VarKind>,
        /// The declared qualifiers. Ignored for plain assignments, which keep
        /// the variable's existing qualifiers.
        qualifiers: Qualifiers,
        /// Line number in the source code.
        line:       usize,
    },
    /// An expression evaluated for its side effects, or a built-in call.
    Expression {
        /// The expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A C-style `for` loop. Every header part is optional.
    For {
        /// Executed once before the loop.
        init:      Option<Box<Self>>,
        /// Evaluated before every iteration; absent means loop forever.
        condition: Option<Expr>,
        /// Executed after every iteration.
        increment: Option<Box<Self>>,
        /// The loop body.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A `while` loop.
    While {
        /// Evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// An `if` statement with an optional `else` branch.
    If {
        /// The condition.
        condition:   Expr,
        /// Executed when the condition is truthy.
        then_branch: Box<Self>,
        /// Executed otherwise.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// Multi-branch dispatch with fallthrough.
    Switch {
        /// Evaluated once to an integer.
        selector: Expr,
        /// Branches in declaration order.
        cases:    Vec<Case>,
        /// Line number in the source code.
        line:     usize,
    },
    /// `break;`
    Break {
        /// Line number in the source code.
        line: usize,
    },
    /// Statements executed in order.
    Sequence(Vec<Self>),
    /// `print(expr);`
    Print {
        /// The printed expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `eprint(expr);`
    ErrorPrint {
        /// The printed expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// `++x`
    PreIncrement,
    /// `--x`
    PreDecrement,
    /// `x++`
    PostIncrement,
    /// `x--`
    PostDecrement,
}

impl UnaryOperator {
    /// Returns `true` for the operators that write back to a variable.
    #[must_use]
    pub const fn mutates(self) -> bool {
        !matches!(self, Self::Negate)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::PreIncrement | Self::PostIncrement => "++",
            Self::PreDecrement | Self::PostDecrement => "--",
        };
        write!(f, "{operator}")
    }
}
