use crate::parser::RPNExpr;
use std::fmt;

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut tokens = self.0.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{}", first)?;
            for token in tokens {
                write!(f, " {}", token)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::ShuntingParser;

    #[test]
    fn postfix_display() {
        let expr = ShuntingParser::parse_str("(2+3)*4").unwrap();
        assert_eq!(format!("{}", expr), "2 3 + 4 *");
    }
}
