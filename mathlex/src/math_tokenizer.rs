#![deny(warnings)]

use crate::helpers;
use crate::scanner::Scanner;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum MathOp {
    Plus,
    Minus,
    Times,
    Div,
    Pow,
}

impl MathOp {
    pub fn symbol(&self) -> char {
        match self {
            MathOp::Plus => '+',
            MathOp::Minus => '-',
            MathOp::Times => '*',
            MathOp::Div => '/',
            MathOp::Pow => '^',
        }
    }

    // binding strength, higher binds tighter
    pub fn precedence(&self) -> usize {
        match self {
            MathOp::Plus | MathOp::Minus => 1,
            MathOp::Times | MathOp::Div => 2,
            MathOp::Pow => 3,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum MathToken {
    Number(f64),
    BOp(MathOp),
    OParen,
    CParen,
}

impl fmt::Display for MathToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MathToken::Number(x) => write!(f, "{}", x),
            MathToken::BOp(op) => write!(f, "{}", op.symbol()),
            MathToken::OParen => write!(f, "("),
            MathToken::CParen => write!(f, ")"),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum LexError {
    UnrecognizedInput(String),
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LexError::UnrecognizedInput(lexeme) => {
                write!(f, "unrecognized input '{}'", lexeme)
            }
        }
    }
}

impl std::error::Error for LexError {}

fn not_space(c: &char) -> bool {
    *c != ' '
}

pub struct MathTokenizer<I: Iterator<Item=char>> {
    src: Scanner<std::iter::Filter<I, fn(&char) -> bool>>,
}

impl<I: Iterator<Item=char>> MathTokenizer<I> {
    pub fn new(source: I) -> Self {
        // spaces are stripped before scanning, so a digit run split
        // by spaces rejoins into a single number: "1 2" lexes as 12
        MathTokenizer{src: Scanner::new(source.filter(not_space as fn(&char) -> bool))}
    }

    fn get_token(&mut self) -> Option<Result<MathToken, LexError>> {
        // numbers are tried first, then operators, then grouping
        if let Some(run) = helpers::scan_numeric_run(&mut self.src) {
            // a lone '.' doesn't parse as a float but is kept as 0.0
            if run == "." {
                return Some(Ok(MathToken::Number(0.0)));
            }
            return Some(match f64::from_str(&run) {
                Ok(num) => Ok(MathToken::Number(num)),
                Err(_) => Err(LexError::UnrecognizedInput(run)),
            });
        }
        if let Some(sym) = helpers::scan_math_symbol(&mut self.src) {
            return Some(Ok(match sym.as_ref() {
                "+" => MathToken::BOp(MathOp::Plus),
                "-" => MathToken::BOp(MathOp::Minus),
                "*" => MathToken::BOp(MathOp::Times),
                "/" => MathToken::BOp(MathOp::Div),
                "^" => MathToken::BOp(MathOp::Pow),
                "(" => MathToken::OParen,
                ")" => MathToken::CParen,
                _ => return Some(Err(LexError::UnrecognizedInput(sym))),
            }));
        }
        if self.src.next().is_some() {
            return Some(Err(LexError::UnrecognizedInput(self.src.extract_string())));
        }
        None
    }
}

impl<I: Iterator<Item=char>> Iterator for MathTokenizer<I> {
    type Item = Result<MathToken, LexError>;
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

pub fn tokenize(input: &str) -> Result<Vec<MathToken>, LexError> {
    MathTokenizer::new(input.chars()).collect()
}

///////////////////////////////////////////////////////////////////////////////
