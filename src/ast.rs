use std::fmt;

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Control flow and I/O are expressions too: every node evaluates to a
/// value, which is what lets a block, a loop or an assignment appear as an
/// operand. Nodes are immutable once built; evaluation only mutates the
/// environment.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The constant value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A boolean literal.
    Bool {
        /// The constant value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal; evaluating it writes the text to the console.
    Str {
        /// The text between the quotes.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a scalar variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Array element read (e.g., `a[2]`).
    ArrayIndex {
        /// Name of the array.
        name:  String,
        /// The index to access.
        index: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Arithmetic negation (`-x`).
    Negate {
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Conditional (`если ... иначе ...`).
    IfExpr {
        /// The condition expression.
        condition:   Box<Self>,
        /// Expression evaluated if the condition is true.
        then_branch: Box<Self>,
        /// Expression evaluated if the condition is false.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// Loop (`нц_пока (...) { ... }`).
    WhileExpr {
        /// Checked before every iteration.
        condition: Box<Self>,
        /// The loop body.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A braced block of zero or several statements.
    ///
    /// A block holding exactly one expression statement is parsed as that
    /// expression directly.
    Block {
        /// Statements inside the block.
        statements: Vec<Statement>,
        /// Line number in the source code.
        line:       usize,
    },
    /// Scalar assignment (`x = ...`).
    Assignment {
        /// Name of the variable.
        name:  String,
        /// The new value.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Array element assignment (`a[i] = ...`).
    IndexAssignment {
        /// Name of the array.
        name:  String,
        /// The index to write.
        index: Box<Self>,
        /// The new value.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `вывод <expr>`: writes the value without a line break.
    Print {
        /// The expression to print.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// `конецстр`: writes a line break.
    Newline {
        /// Line number in the source code.
        line: usize,
    },
    /// `ввод <name>`: reads a number from the console into a variable.
    Input {
        /// Name of the target variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use kirlang::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Bool { line, .. }
            | Self::Str { line, .. }
            | Self::Variable { line, .. }
            | Self::ArrayIndex { line, .. }
            | Self::Negate { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::IfExpr { line, .. }
            | Self::WhileExpr { line, .. }
            | Self::Block { line, .. }
            | Self::Assignment { line, .. }
            | Self::IndexAssignment { line, .. }
            | Self::Print { line, .. }
            | Self::Newline { line }
            | Self::Input { line, .. } => *line,
        }
    }
}

/// A single statement: a declaration or an expression evaluated for its
/// value and effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `цел x = ...`, `вещ x = ...` or `бул x = ...`.
    ///
    /// The keyword does not constrain the stored value.
    ScalarDeclaration {
        /// Name of the variable.
        name:  String,
        /// The initializer.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `цел a[n]`: a zero-filled array of `n` numbers.
    ArrayDeclaration {
        /// Name of the array.
        name: String,
        /// Number of elements.
        size: usize,
        /// Line number in the source code.
        line: usize,
    },
    /// Any other statement.
    Expression(Expr),
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::ScalarDeclaration { line, .. } | Self::ArrayDeclaration { line, .. } => *line,
            Self::Expression(expr) => expr.line_number(),
        }
    }

    /// Whether the statement's syntax ends with a closing brace, which is
    /// the case for conditionals and loops.
    #[must_use]
    pub const fn ends_with_block(&self) -> bool {
        matches!(self,
                 Self::Expression(Expr::IfExpr { .. } | Expr::WhileExpr { .. }))
    }
}

/// Binary operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `&&`
    And,
    /// `||`
    Or,
}

impl BinaryOperator {
    /// Binding strength used by precedence climbing; higher binds tighter.
    ///
    /// Ordering comparisons bind tighter than `+` and `-`, while equality
    /// binds looser than both, so `1 + 2 < 3` groups as `1 + (2 < 3)`.
    ///
    /// ## Example
    /// ```
    /// use kirlang::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert!(BinaryOperator::Or.precedence() < BinaryOperator::And.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> i32 {
        match self {
            Self::Or => 1,
            Self::And => 3,
            Self::Equal | Self::NotEqual => 5,
            Self::Add | Self::Sub => 10,
            Self::Less | Self::LessEqual | Self::Greater | Self::GreaterEqual => 15,
            Self::Mul | Self::Div => 20,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::And => "&&",
            Self::Or => "||",
        };
        f.write_str(symbol)
    }
}
