use crate::parser::RPNExpr;
use mathlex::{LexError, MathOp, MathToken};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    UnrecognizedInput(String),
    MalformedExpression,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalError::UnrecognizedInput(lexeme) => {
                write!(f, "unrecognized input '{}'", lexeme)
            }
            EvalError::MalformedExpression => write!(f, "malformed expression"),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<LexError> for EvalError {
    fn from(err: LexError) -> EvalError {
        match err {
            LexError::UnrecognizedInput(lexeme) => EvalError::UnrecognizedInput(lexeme),
        }
    }
}

/// Reduce a postfix expression to a single value on an operand stack.
pub fn evaluate(rpn: &RPNExpr) -> Result<f64, EvalError> {
    let mut operands = Vec::new();

    for token in rpn.0.iter() {
        match *token {
            MathToken::Number(num) => operands.push(num),
            MathToken::BOp(op) => {
                let r = operands.pop().ok_or(EvalError::MalformedExpression)?;
                let l = operands.pop().ok_or(EvalError::MalformedExpression)?;
                operands.push(match op {
                    MathOp::Plus => l + r,
                    MathOp::Minus => l - r,
                    MathOp::Times => l * r,
                    // x/0 follows float semantics, yields inf or nan
                    MathOp::Div => l / r,
                    MathOp::Pow => l.powf(r),
                });
            }
            // grouping never survives a balanced conversion
            MathToken::OParen | MathToken::CParen => {
                return Err(EvalError::MalformedExpression)
            }
        }
    }
    let result = operands.pop().ok_or(EvalError::MalformedExpression)?;
    if !operands.is_empty() {
        return Err(EvalError::MalformedExpression);
    }
    Ok(result)
}
