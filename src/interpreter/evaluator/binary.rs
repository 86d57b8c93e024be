use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary operation.
    ///
    /// Both operands are evaluated, left first, before the operator is
    /// applied. `+` accepts two numbers or two strings; the other arithmetic
    /// and ordering operators require numbers. Division follows IEEE 754, so
    /// dividing by zero yields an infinity rather than an error. Equality is
    /// defined for every pair of values and never fails.
    pub(in crate::interpreter::evaluator) fn eval_binary(&mut self,
                                                         left: &Expr,
                                                         op: BinaryOperator,
                                                         right: &Expr,
                                                         line: usize)
                                                         -> EvalResult<Value> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;

        match op {
            BinaryOperator::Add => match (&left, &right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::Str(a), Value::Str(b)) => Ok(Value::Str(Rc::from(format!("{a}{b}")))),
                _ => Err(RuntimeError::OperandsMustBeNumbersOrStrings { line }),
            },
            BinaryOperator::Sub => {
                let (a, b) = number_operands(&left, &right, op, line)?;
                Ok(Value::Number(a - b))
            },
            BinaryOperator::Mul => {
                let (a, b) = number_operands(&left, &right, op, line)?;
                Ok(Value::Number(a * b))
            },
            BinaryOperator::Div => {
                let (a, b) = number_operands(&left, &right, op, line)?;
                Ok(Value::Number(a / b))
            },
            BinaryOperator::Less => {
                let (a, b) = number_operands(&left, &right, op, line)?;
                Ok(Value::Bool(a < b))
            },
            BinaryOperator::LessEqual => {
                let (a, b) = number_operands(&left, &right, op, line)?;
                Ok(Value::Bool(a <= b))
            },
            BinaryOperator::Greater => {
                let (a, b) = number_operands(&left, &right, op, line)?;
                Ok(Value::Bool(a > b))
            },
            BinaryOperator::GreaterEqual => {
                let (a, b) = number_operands(&left, &right, op, line)?;
                Ok(Value::Bool(a >= b))
            },
            BinaryOperator::Equal => Ok(Value::Bool(left == right)),
            BinaryOperator::NotEqual => Ok(Value::Bool(left != right)),
        }
    }

    /// Evaluates a short-circuiting logical operation.
    ///
    /// The result is one of the operand values itself, not a coerced boolean:
    /// `nil or "fallback"` yields the string. The right operand is only
    /// evaluated when the left does not decide the outcome.
    pub(in crate::interpreter::evaluator) fn eval_logical(&mut self,
                                                          left: &Expr,
                                                          op: LogicalOperator,
                                                          right: &Expr)
                                                          -> EvalResult<Value> {
        let left = self.eval(left)?;

        match op {
            LogicalOperator::Or if left.is_truthy() => Ok(left),
            LogicalOperator::And if !left.is_truthy() => Ok(left),
            LogicalOperator::Or | LogicalOperator::And => self.eval(right),
        }
    }
}

fn number_operands(left: &Value,
                   right: &Value,
                   op: BinaryOperator,
                   line: usize)
                   -> EvalResult<(f64, f64)> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(RuntimeError::OperandsMustBeNumbers { operator: op.to_string(),
                                                       line }),
    }
}
