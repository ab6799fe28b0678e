use mathlex::{LexError, MathToken, MathTokenizer};

pub fn precedence(mt: &MathToken) -> usize {
    match *mt {
        MathToken::BOp(op) => op.precedence(),
        _ => 0, // keep grouping at the bottom of the stack
    }
}

#[derive(PartialEq, Debug)]
pub struct RPNExpr(pub Vec<MathToken>);

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, LexError> {
        let tokens: Result<Vec<_>, _> = MathTokenizer::new(expr.chars()).collect();
        Ok(Self::parse(tokens?))
    }

    // Shunting-yard conversion to postfix. Infallible: every pop is
    // guarded, unbalanced grouping flows into the output sequence and
    // is rejected by the evaluator instead of crashing here.
    pub fn parse(expr: impl IntoIterator<Item = MathToken>) -> RPNExpr {
        let mut out = Vec::new();
        let mut stack: Vec<MathToken> = Vec::new();

        for token in expr {
            match token {
                MathToken::Number(_) => out.push(token),
                MathToken::OParen => stack.push(token),
                MathToken::CParen => {
                    // an unmatched ')' drains the stack and is dropped
                    while let Some(top) = stack.pop() {
                        if top == MathToken::OParen {
                            break;
                        }
                        out.push(top);
                    }
                }
                MathToken::BOp(_) => {
                    let prec_rhs = precedence(&token);
                    // equal precedence pops: every operator is
                    // left-associative here, '^' included
                    while let Some(top) = stack.pop() {
                        if precedence(&top) < prec_rhs {
                            stack.push(top);
                            break;
                        }
                        out.push(top);
                    }
                    stack.push(token);
                }
            }
        }
        // a leftover '(' ends up in the output and fails evaluation
        while let Some(top) = stack.pop() {
            out.push(top);
        }
        RPNExpr(out)
    }
}
