mod scanner;
mod char_scanner;
mod helpers;
mod math_tokenizer;

pub use scanner::Scanner;
pub use math_tokenizer::{tokenize, LexError, MathOp, MathToken, MathTokenizer};

pub use helpers::scan_math_symbol;
pub use helpers::scan_numeric_run;
