use std::io::{self, BufRead, Write};

use clap::Parser;
use symba::{eval_statement, Session};

/// symba is a small symbolic-expression evaluator: statements are parsed
/// into terms and rewritten to normal form, printing every intermediate
/// value along the way.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Statements to evaluate, one per argument, instead of starting the
    /// interactive repl.
    statements: Vec<String>,

    /// Abort a statement whose reduction trace exceeds this many steps,
    /// instead of rewriting forever on a cyclic rule set.
    #[arg(long)]
    max_steps: Option<usize>,
}

fn main() {
    let args = Args::parse();

    let mut session = match args.max_steps {
        Some(steps) => Session::with_step_limit(steps),
        None => Session::new(),
    };

    if !args.statements.is_empty() {
        for statement in &args.statements {
            run(statement, &mut session);
        }
        return;
    }

    println!("Welcome to the symba repl!");
    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }
        input.clear();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }
        let line = input.trim();
        if line == "quit" {
            break;
        }
        if line.is_empty() {
            continue;
        }
        run(line, &mut session);
    }
}

/// Evaluates one statement and prints its whole reduction trace, one value
/// per line. Errors are reported on stderr and leave the session's bindings
/// intact.
fn run(source: &str, session: &mut Session) {
    match eval_statement(source, session) {
        Ok(trace) => {
            for value in trace {
                println!("{value}");
            }
        },
        Err(error) => eprintln!("{error}"),
    }
}
