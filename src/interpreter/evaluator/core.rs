use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{BlockStatement, Expression, Identifier, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::function::builtin::STANDARD_BUILTINS,
        value::{
            core::{Builtin, BuiltinFn, Function, NULL, Value},
            environment::Environment,
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Default maximum number of nested function calls.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Returns early with `$value` if it is an interrupt (`Return` or `Error`),
/// otherwise yields it.
///
/// Every evaluation result that feeds into further computation goes through
/// this check.
macro_rules! propagate {
    ($value:expr) => {{
        let value = $value;
        if value.is_interrupt() {
            return value;
        }
        value
    }};
}
pub(crate) use propagate;

/// Evaluator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum number of nested function calls before evaluation fails with
    /// `RuntimeError::StackDepthExceeded`.
    pub max_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

/// Walks the AST and computes values.
///
/// ## Usage
///
/// An `Evaluator` holds no program state of its own; bindings live in the
/// [`Environment`] passed to each call. Evaluating several programs against
/// the same environment keeps their `let` bindings visible to later ones,
/// which is what a REPL does.
///
/// Errors are values: every method returns a [`Value`], and failures come
/// back as `Value::Error`.
///
/// # Example
/// ```
/// use waixg::{
///     interpreter::{
///         evaluator::core::Evaluator,
///         value::{core::Value, environment::Environment},
///     },
///     parse,
/// };
///
/// let (program, errors) = parse("let add = fn(a, b) { a + b }; add(2, 3) * 4");
/// assert!(errors.is_empty());
///
/// let mut evaluator = Evaluator::default();
/// let env = Environment::new();
///
/// assert_eq!(evaluator.eval_program(&program, &env), Value::Integer(20));
/// ```
pub struct Evaluator {
    /// Settings this evaluator was created with.
    pub config: EvalConfig,
    /// Number of function calls currently being evaluated.
    pub(in crate::interpreter::evaluator) depth: usize,
    builtins: HashMap<&'static str, Builtin>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(EvalConfig::default())
    }
}

impl Evaluator {
    /// Creates an evaluator with the standard builtins registered.
    #[must_use]
    pub fn new(config: EvalConfig) -> Self {
        Self { config,
               depth: 0,
               builtins: STANDARD_BUILTINS.iter()
                                          .map(|builtin| (builtin.name, *builtin))
                                          .collect() }
    }

    /// Registers a native function under `name`, replacing any builtin of
    /// that name. Environment bindings still take precedence over it.
    pub fn register_builtin(&mut self, name: &'static str, func: BuiltinFn) {
        self.builtins.insert(name, Builtin { name, func });
    }

    /// Evaluates a whole program.
    ///
    /// Statements run in order. The first `return` or error stops the
    /// program; a returned value is unwrapped here, so callers never see a
    /// `Value::Return`. Otherwise the result is the value of the last
    /// statement, or `null` for an empty program.
    pub fn eval_program(&mut self, program: &Program, env: &Rc<Environment>) -> Value {
        let mut result = NULL;

        for statement in &program.statements {
            result = self.eval_statement(statement, env);
            if result.is_interrupt() {
                return result.unwrap_return();
            }
        }

        result
    }

    /// Evaluates the statements of a block in order.
    ///
    /// A `Return` or `Error` stops the block and is passed on *still
    /// wrapped*; only function application unwraps a `Return`. This is what
    /// lets a `return` inside a nested `if` leave the whole function.
    pub fn eval_block(&mut self, block: &BlockStatement, env: &Rc<Environment>) -> Value {
        let mut result = NULL;

        for statement in &block.statements {
            result = self.eval_statement(statement, env);
            if result.is_interrupt() {
                return result;
            }
        }

        result
    }

    /// Evaluates a single statement.
    ///
    /// - `let` binds in `env` itself (never an enclosing scope) and yields
    ///   the bound value.
    /// - `return` wraps its value in `Value::Return`.
    /// - An expression statement yields the expression's value.
    pub fn eval_statement(&mut self, statement: &Statement, env: &Rc<Environment>) -> Value {
        match statement {
            Statement::Let { name, value } => {
                let value = propagate!(self.eval_expression(value, env));
                env.set(name.name.clone(), value)
            },
            Statement::Return { value } => {
                let value = propagate!(self.eval_expression(value, env));
                Value::Return(Box::new(value))
            },
            Statement::Expression(expression) => self.eval_expression(expression, env),
        }
    }

    /// Evaluates an expression.
    ///
    /// Operands are evaluated left to right. As soon as one of them yields
    /// an interrupt, that value becomes the result and nothing to its right
    /// is evaluated.
    pub fn eval_expression(&mut self, expression: &Expression, env: &Rc<Environment>) -> Value {
        ensure_sufficient_stack(|| match expression {
            Expression::Identifier(identifier) => self.eval_identifier(identifier, env),
            Expression::IntegerLiteral(value) => Value::Integer(*value),
            Expression::BooleanLiteral(value) => Value::from(*value),
            Expression::StringLiteral(value) => Value::from(value.as_str()),
            Expression::Prefix { operator, right } => {
                let right = propagate!(self.eval_expression(right, env));
                Self::eval_prefix(*operator, &right)
            },
            Expression::Infix { left,
                                operator,
                                right, } => {
                let left = propagate!(self.eval_expression(left, env));
                let right = propagate!(self.eval_expression(right, env));
                Self::eval_infix(*operator, &left, &right)
            },
            Expression::If { condition,
                             consequence,
                             alternative, } => {
                self.eval_if(condition, consequence, alternative.as_ref(), env)
            },
            Expression::Function(literal) => {
                Value::Function(Rc::new(Function { parameters: literal.parameters.clone(),
                                                   body:       Rc::clone(&literal.body),
                                                   env:        Rc::clone(env), }))
            },
            Expression::Call { function, arguments } => self.eval_call(function, arguments, env),
        })
    }

    /// Resolves a name through the environment chain, then the builtins.
    fn eval_identifier(&self, identifier: &Identifier, env: &Environment) -> Value {
        if let Some(value) = env.get(&identifier.name) {
            return value;
        }
        if let Some(builtin) = self.builtins.get(identifier.name.as_str()) {
            return Value::Builtin(*builtin);
        }
        RuntimeError::IdentifierNotFound { name: identifier.name.clone() }.into()
    }

    /// Evaluates the consequence when the condition is truthy, otherwise the
    /// alternative, otherwise `null`.
    fn eval_if(&mut self,
               condition: &Expression,
               consequence: &BlockStatement,
               alternative: Option<&BlockStatement>,
               env: &Rc<Environment>)
               -> Value {
        let condition = propagate!(self.eval_expression(condition, env));

        if condition.is_truthy() {
            self.eval_block(consequence, env)
        } else if let Some(alternative) = alternative {
            self.eval_block(alternative, env)
        } else {
            NULL
        }
    }
}
