use clap::Parser;
use numera::interpreter::session::Session;
use rustyline::{error::ReadlineError, DefaultEditor};

/// numera is an interactive evaluator for arithmetic expressions with
/// variables, assignment, factorial, and built-in math functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the parsed syntax tree alongside each result.
    #[arg(short, long)]
    tree: bool,

    /// Evaluate a single expression and exit instead of starting the REPL.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    let mut session = match Session::new() {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    };

    if let Some(expression) = args.expression {
        let line = expression.trim();
        if !line.is_empty() {
            evaluate_line(&mut session, line, args.tree);
        }
        return;
    }

    repl(&mut session, args.tree);
}

fn repl(session: &mut Session, mut show_tree: bool) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to initialize the line editor: {e}");
            std::process::exit(1);
        },
    };

    println!("numera {}", env!("CARGO_PKG_VERSION"));
    println!("Type '.help' for commands, '.exit' to quit.");

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);

                match line {
                    ".exit" => break,
                    ".help" => print_help(),
                    ".list" => {
                        for (name, value) in session.variables() {
                            println!("{name} = {value}");
                        }
                    },
                    ".tree" => {
                        show_tree = !show_tree;
                        println!("AST printing: {}", if show_tree { "on" } else { "off" });
                    },
                    _ => {
                        evaluate_line(session, line, show_tree);
                        session.reset();
                    },
                }
            },

            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,

            Err(e) => {
                eprintln!("{e}");
                break;
            },
        }
    }
}

fn evaluate_line(session: &mut Session, line: &str, show_tree: bool) {
    let root = match session.parse(line) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("{e}");
            return;
        },
    };

    if show_tree {
        if let Some(tree) = session.render_ast(root) {
            println!("AST: {tree}");
        }
    }

    match session.evaluate(root) {
        // A NaN result always comes with a diagnostic; never print it as a
        // numeric answer.
        Ok(value) => {
            if !value.is_nan() {
                println!("{value}");
            }
        },
        Err(e) => eprintln!("{e}"),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  .help   show this help");
    println!("  .list   list all variables");
    println!("  .tree   toggle AST printing");
    println!("  .exit   quit");
    println!();
    println!("Anything else is evaluated as an expression, e.g. 'x = 2 ^ 10'.");
}
