use rustyline::error::ReadlineError;

// expressions run on every plain invocation, malformed ones included
const DEMO_EXPRS: &[&str] = &[
    "1/3",
    "(2+3)*(4+5.0)",
    "3^2",
    "(2*2)^(2*2)",
    "30/(3*2)",
    "5.25-4.50",
    "8-4-2",
    "(2+3)*(4+ 5.0",
    "1.2.3+1",
    "2#3",
];

fn evalexpr(input: &str) {
    match rpncalc::eval(input) {
        Ok(result) => println!("{} = {}", input, result),
        Err(e) => println!("Error with expression {} -> {}", input, e),
    }
}

fn main() {
    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1)
            .collect::<Vec<String>>().join(" ");
        evalexpr(&input);
        return;
    }

    for expr in DEMO_EXPRS {
        evalexpr(expr);
    }

    let mut rl = rustyline::Editor::<()>::new();
    let history = dirs::home_dir().map(|home| home.join(".rpncalc_history"));
    if let Some(ref path) = history {
        let _ = rl.load_history(path);
    }
    loop {
        match rl.readline(">> ") {
            Ok(input) => {
                if input.trim().is_empty() {
                    println!("Invalid expression.");
                    continue;
                }
                rl.add_history_entry(input.as_str());
                evalexpr(&input);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("readline error: {:?}", err);
                break;
            }
        }
    }
    if let Some(ref path) = history {
        let _ = rl.save_history(path);
    }
}
