use std::{fmt, mem, rc::Rc};

use crate::util::stack::ensure_sufficient_stack;

/// The root of a parsed source text: an ordered list of statements.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A statement.
#[derive(Debug, PartialEq, Eq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        /// The bound name.
        name:  Identifier,
        /// The expression whose value is bound.
        value: Expression,
    },
    /// `return <value>;`
    Return {
        /// The returned expression.
        value: Expression,
    },
    /// An expression evaluated for its value, e.g. `add(1, 2);`.
    Expression(Expression),
}

/// A brace-delimited sequence of statements, as used by `if` branches and
/// function bodies.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BlockStatement {
    /// Statements inside the braces.
    pub statements: Vec<Statement>,
}

/// A name, either referenced in an expression or bound by `let` or a
/// parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// The identifier text.
    pub name: String,
}

impl Identifier {
    /// Creates an identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A function literal: `fn(<parameters>) { <body> }`.
#[derive(Debug, PartialEq, Eq)]
pub struct FunctionLiteral {
    /// Parameter names in declaration order.
    pub parameters: Vec<Identifier>,
    /// The function body, shared with every closure created from this
    /// literal.
    pub body:       Rc<BlockStatement>,
}

/// Operators in prefix position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixOperator {
    /// `!`
    Bang,
    /// `-`
    Minus,
}

/// Operators in infix position. Function application is not listed here; it
/// has its own expression variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfixOperator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `^`
    Caret,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Children are owned by value or through a `Box`; only function bodies are
/// shared, with the closures evaluated from them. The tree is acyclic and
/// immutable once the parser hands it over.
///
/// Dropping, comparing and printing never recurse on the native stack without
/// a guard, so arbitrarily deep trees such as `- - - ... 1` are safe.
#[derive(Debug, Eq)]
pub enum Expression {
    /// Reference to a binding by name.
    Identifier(Identifier),
    /// A 64-bit signed integer literal.
    IntegerLiteral(i64),
    /// `true` or `false`.
    BooleanLiteral(bool),
    /// A string literal, without quotes.
    StringLiteral(String),
    /// A prefix operation such as `-x` or `!ok`.
    Prefix {
        /// The operator.
        operator: PrefixOperator,
        /// The operand.
        right:    Box<Self>,
    },
    /// A binary operation such as `a + b`.
    Infix {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right:    Box<Self>,
    },
    /// `if (<condition>) { ... } else { ... }`
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Evaluated otherwise, if present.
        alternative: Option<BlockStatement>,
    },
    /// A function literal.
    Function(FunctionLiteral),
    /// Function application: `<function>(<arguments>)`.
    Call {
        /// The callee expression.
        function:  Box<Self>,
        /// Arguments in source order.
        arguments: Vec<Self>,
    },
}

fn write_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>,
                                    items: &[T],
                                    separator: &str)
                                    -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_separated(f, &self.statements, "")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression(expr) => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return f.write_str("{ }");
        }
        f.write_str("{ ")?;
        write_separated(f, &self.statements, " ")?;
        f.write_str(" }")
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        write_separated(f, &self.parameters, ", ")?;
        write!(f, ") {}", self.body)
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Bang => "!",
                        Self::Minus => "-",
                    })
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Plus => "+",
                        Self::Minus => "-",
                        Self::Asterisk => "*",
                        Self::Slash => "/",
                        Self::Caret => "^",
                        Self::Eq => "==",
                        Self::NotEq => "!=",
                        Self::Lt => "<",
                        Self::Gt => ">",
                        Self::LtEq => "<=",
                        Self::GtEq => ">=",
                    })
    }
}

/// Renders the fully parenthesised form, so that the grouping chosen by the
/// parser is visible.
///
/// # Example
/// ```
/// use waixg::parse;
///
/// let (program, errors) = parse("1 + 2 * 3");
///
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "(1 + (2 * 3))");
/// ```
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Self::Identifier(ident) => write!(f, "{ident}"),
            Self::IntegerLiteral(value) => write!(f, "{value}"),
            Self::BooleanLiteral(value) => write!(f, "{value}"),
            Self::StringLiteral(value) => write!(f, "\"{value}\""),
            Self::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Self::Infix { left,
                          operator,
                          right, } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if {condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::Function(literal) => write!(f, "{literal}"),
            Self::Call { function, arguments } => {
                write!(f, "{function}(")?;
                write_separated(f, arguments, ", ")?;
                f.write_str(")")
            },
        })
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Self::Identifier(a), Self::Identifier(b)) => a == b,
            (Self::IntegerLiteral(a), Self::IntegerLiteral(b)) => a == b,
            (Self::BooleanLiteral(a), Self::BooleanLiteral(b)) => a == b,
            (Self::StringLiteral(a), Self::StringLiteral(b)) => a == b,
            (Self::Prefix { operator: op_a,
                            right: right_a, },
             Self::Prefix { operator: op_b,
                            right: right_b, }) => op_a == op_b && right_a == right_b,
            (Self::Infix { left: left_a,
                           operator: op_a,
                           right: right_a, },
             Self::Infix { left: left_b,
                           operator: op_b,
                           right: right_b, }) => op_a == op_b && left_a == left_b && right_a == right_b,
            (Self::If { condition: cond_a,
                        consequence: cons_a,
                        alternative: alt_a, },
             Self::If { condition: cond_b,
                        consequence: cons_b,
                        alternative: alt_b, }) => cond_a == cond_b && cons_a == cons_b && alt_a == alt_b,
            (Self::Function(a), Self::Function(b)) => a == b,
            (Self::Call { function: fn_a,
                          arguments: args_a, },
             Self::Call { function: fn_b,
                          arguments: args_b, }) => fn_a == fn_b && args_a == args_b,
            _ => false,
        })
    }
}

impl Expression {
    /// Moves every directly nested expression into `pending`, leaving leaves
    /// in their place. Blocks are emptied the same way, and function bodies
    /// are emptied when this literal holds the last reference to them.
    fn take_children(&mut self, pending: &mut Vec<Self>) {
        match self {
            Self::Identifier(_)
            | Self::IntegerLiteral(_)
            | Self::BooleanLiteral(_)
            | Self::StringLiteral(_) => {},
            Self::Prefix { right, .. } => pending.push(take_boxed(right)),
            Self::Infix { left, right, .. } => {
                pending.push(take_boxed(left));
                pending.push(take_boxed(right));
            },
            Self::If { condition,
                       consequence,
                       alternative, } => {
                pending.push(take_boxed(condition));
                take_block(consequence, pending);
                if let Some(alternative) = alternative {
                    take_block(alternative, pending);
                }
            },
            Self::Function(literal) => {
                if let Ok(mut body) = Rc::try_unwrap(mem::take(&mut literal.body)) {
                    take_block(&mut body, pending);
                }
            },
            Self::Call { function, arguments } => {
                pending.push(take_boxed(function));
                pending.append(arguments);
            },
        }
    }
}

fn take_boxed(expression: &mut Expression) -> Expression {
    mem::replace(expression, Expression::BooleanLiteral(false))
}

fn take_block(block: &mut BlockStatement, pending: &mut Vec<Expression>) {
    for statement in mem::take(&mut block.statements) {
        pending.push(match statement {
                         Statement::Let { value, .. } | Statement::Return { value } => value,
                         Statement::Expression(expression) => expression,
                     });
    }
}

// Children are detached onto a heap worklist so that the tree is freed
// iteratively; the derived glue would recurse once per nesting level.
impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);

        while let Some(mut expression) = pending.pop() {
            expression.take_children(&mut pending);
        }
    }
}
