#![deny(warnings)]

use crate::scanner::Scanner;

impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    pub fn accept_any_char(&mut self, any: &str) -> Option<char> {
        let chars: Vec<char> = any.chars().collect();
        self.accept_any(&chars)
    }

    pub fn skip_all_chars(&mut self, over: &str) -> bool {
        let chars: Vec<char> = over.chars().collect();
        self.skip_all(&chars)
    }
}
