#![deny(warnings)]

use crate::scanner::Scanner;

/*
 * The caller of these function is expected to setup the scanner for a
 * clear start, ie: call scanner.ignore() to start fresh
 */

// scan the longest run of digit / '.' characters, eg: 42, 5.25, .5
// No backtracking: a malformed run like 1.2.3 is consumed whole and
// left for the float parser to reject
pub fn scan_numeric_run<I: Iterator<Item=char>>(scanner: &mut Scanner<I>) -> Option<String> {
    if scanner.skip_all_chars("0123456789.") {
        Some(scanner.extract_string())
    } else {
        None
    }
}

// scan a single operator or grouping character
pub fn scan_math_symbol<I: Iterator<Item=char>>(scanner: &mut Scanner<I>) -> Option<String> {
    if scanner.accept_any_char("+-*/^()").is_some() {
        Some(scanner.extract_string())
    } else {
        None
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_numeric_run() {
        let tests = vec!["987", "41.98", "5.25", ".5", "43.", ".", "1.2.3", "1..2"];
        for t in tests.iter() {
            let mut s = Scanner::new(t.chars());
            assert_eq!(Some(t.to_string()), scan_numeric_run(&mut s));
        }
    }

    #[test]
    fn test_scan_numeric_run_stops() {
        let mut s = Scanner::new("12.5+3".chars());
        assert_eq!(Some("12.5".to_string()), scan_numeric_run(&mut s));
        assert_eq!(Some("+".to_string()), scan_math_symbol(&mut s));
        assert_eq!(Some("3".to_string()), scan_numeric_run(&mut s));
        assert_eq!(None, scan_numeric_run(&mut s));
    }

    #[test]
    fn test_scan_math_symbols() {
        let tests = vec!["+", "-", "*", "/", "^", "(", ")"];
        for t in tests.iter() {
            let mut s = Scanner::new(t.chars());
            assert_eq!(Some(t.to_string()), scan_math_symbol(&mut s));
        }
        let mut s = Scanner::new("#".chars());
        assert_eq!(None, scan_math_symbol(&mut s));
    }
}
