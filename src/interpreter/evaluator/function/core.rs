use std::rc::Rc;

use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Evaluator, propagate},
        value::{
            core::{Function, Value},
            environment::Environment,
        },
    },
};

impl Evaluator {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then the arguments from left to right.
    /// The first interrupt among them is the result of the call, and the
    /// remaining arguments are not evaluated. Whether the callee is callable
    /// is checked only after all arguments have been evaluated.
    pub(in crate::interpreter::evaluator) fn eval_call(&mut self,
                                                       function: &Expression,
                                                       arguments: &[Expression],
                                                       env: &Rc<Environment>)
                                                       -> Value {
        let callee = propagate!(self.eval_expression(function, env));

        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(propagate!(self.eval_expression(argument, env)));
        }

        self.apply_function(&callee, &args)
    }

    /// Applies a callable value to evaluated arguments.
    ///
    /// # Parameters
    /// - `callee`: A closure or a builtin.
    /// - `args`: The evaluated arguments, in order.
    ///
    /// # Returns
    /// The function's result with any `Return` wrapper removed, or
    /// `Value::Error` when `callee` is not callable, the argument count does
    /// not match the parameter count, or the call would nest deeper than
    /// `config.max_depth`.
    #[tracing::instrument(level = "trace", skip_all, fields(callee = %callee.value_type(), depth = self.depth))]
    pub fn apply_function(&mut self, callee: &Value, args: &[Value]) -> Value {
        match callee {
            Value::Function(function) => self.apply_closure(function, args),
            Value::Builtin(builtin) => (builtin.func)(args),
            other => RuntimeError::NotAFunction { callee: other.value_type() }.into(),
        }
    }

    fn apply_closure(&mut self, function: &Function, args: &[Value]) -> Value {
        if args.len() != function.parameters.len() {
            return RuntimeError::WrongArgumentCount { expected: function.parameters.len(),
                                                      found:    args.len(), }.into();
        }
        if self.depth >= self.config.max_depth {
            tracing::debug!(max_depth = self.config.max_depth, "call depth limit reached");
            return RuntimeError::StackDepthExceeded { max_depth: self.config.max_depth }.into();
        }

        let env = extend_function_env(function, args);

        self.depth += 1;
        let result = self.eval_block(&function.body, &env);
        self.depth -= 1;

        result.unwrap_return()
    }
}

/// Creates the call scope: a child of the closure's captured environment
/// with each parameter bound to its argument.
fn extend_function_env(function: &Function, args: &[Value]) -> Rc<Environment> {
    let env = Environment::new_enclosed(Rc::clone(&function.env));

    for (parameter, argument) in function.parameters.iter().zip(args) {
        env.set(parameter.name.clone(), argument.clone());
    }

    env
}
