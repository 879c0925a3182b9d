use crate::interpreter::value::Number;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// The variant set is closed: a tree is made of numeric literals, unary signs
/// and the six binary arithmetic operators, nothing else. Every node records
/// the byte offset of the token that produced it so that evaluation errors can
/// point back into the source text.
///
/// A tree owns its children exclusively; there is no sharing and no cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric constant appearing directly in the source.
    Literal {
        /// The constant value.
        value:    Number,
        /// Byte offset of the literal in the source text.
        position: usize,
    },
    /// A sign applied to an operand (e.g. `-x`).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Byte offset of the sign in the source text.
        position: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator in the source text.
        position: usize,
    },
}

impl Expr {
    /// Builds a literal node.
    ///
    /// ## Example
    /// ```
    /// use safecalc::{ast::Expr, interpreter::value::Number};
    ///
    /// let expr = Expr::literal(Number::Integer(4), 0);
    /// assert_eq!(expr.position(), 0);
    /// ```
    #[must_use]
    pub fn literal(value: impl Into<Number>, position: usize) -> Self {
        Self::Literal { value: value.into(),
                        position }
    }

    /// Builds a unary node.
    #[must_use]
    pub fn unary(op: UnaryOperator, expr: Self, position: usize) -> Self {
        Self::UnaryOp { op,
                        expr: Box::new(expr),
                        position }
    }

    /// Builds a binary node.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self, position: usize) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         position }
    }

    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use safecalc::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(Expr::literal(1, 0), BinaryOperator::Add, Expr::literal(2, 2), 1);
    ///
    /// assert_eq!(expr.position(), 1);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. } => *position,
        }
    }

    /// Returns the height of the tree; a lone literal has depth 1.
    ///
    /// The walk uses an explicit stack, so arbitrarily tall trees are fine.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1_usize)];
        while let Some((expr, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            match expr {
                Self::Literal { .. } => {},
                Self::UnaryOp { expr, .. } => pending.push((expr.as_ref(), depth + 1)),
                Self::BinaryOp { left, right, .. } => {
                    pending.push((left.as_ref(), depth + 1));
                    pending.push((right.as_ref(), depth + 1));
                },
            }
        }
        deepest
    }

    /// Moves the children of `self` onto `stack`, leaving placeholder leaves
    /// behind.
    fn take_children(&mut self, stack: &mut Vec<Self>) {
        let mut take = |child: &mut Box<Self>| {
            stack.push(std::mem::replace(child.as_mut(), Self::literal(0, 0)));
        };
        match self {
            Self::Literal { .. } => {},
            Self::UnaryOp { expr, .. } => take(expr),
            Self::BinaryOp { left, right, .. } => {
                take(left);
                take(right);
            },
        }
    }
}

/// Long chains such as `1 + 1 + ... + 1` nest thousands of levels to the
/// left; the default recursive drop would follow them down the stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.take_children(&mut stack);
        while let Some(mut expr) = stack.pop() {
            expr.take_children(&mut stack);
        }
    }
}

/// Represents a binary arithmetic operator.
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
    /// Exponentiation (`**`)
    Pow,
}

/// Represents a unary sign.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Minus,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "**",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}

/// Renders the tree fully parenthesized, which makes grouping visible.
///
/// ```
/// use safecalc::parse;
///
/// let expr = parse("2 ** 3 ** 2").unwrap();
/// assert_eq!(expr.to_string(), "(2 ** (3 ** 2))");
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pending = vec![Piece::Node(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Close => f.write_str(")")?,
                Piece::Operator(op) => write!(f, " {op} ")?,
                Piece::Node(Self::Literal { value, .. }) => write!(f, "{value}")?,
                Piece::Node(Self::UnaryOp { op, expr, .. }) => {
                    write!(f, "{op}")?;
                    pending.push(Piece::Node(expr.as_ref()));
                },
                Piece::Node(Self::BinaryOp { left, op, right, .. }) => {
                    f.write_str("(")?;
                    pending.extend([Piece::Close,
                                    Piece::Node(right.as_ref()),
                                    Piece::Operator(*op),
                                    Piece::Node(left.as_ref())]);
                },
            }
        }
        Ok(())
    }
}

/// What remains to be written while rendering an [`Expr`], innermost last.
enum Piece<'a> {
    Node(&'a Expr),
    Operator(BinaryOperator),
    Close,
}
