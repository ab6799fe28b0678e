pub use parser::RPNExpr;
pub use parser::ShuntingParser;

pub mod parser;

pub use self::rpneval::evaluate;
pub use self::rpneval::EvalError;

mod rpnprint;
mod rpneval;
#[cfg(test)]
mod rpneval_test;

/// Parse an infix expression and reduce it to a single number.
pub fn eval(input: &str) -> Result<f64, EvalError> {
    let expr = ShuntingParser::parse_str(input)?;
    evaluate(&expr)
}
