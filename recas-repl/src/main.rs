mod command;

use ariadne::Source;
use command::{parse_command, Command};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs::File, io::{self, BufReader, IsTerminal, Read}};

/// Runs one recognized command, returning the engine's output line.
fn run_command(command: &Command) -> Result<String, recas_compute::numerical::error::Error> {
    match command {
        Command::Simplify { variables, infix } => recas_compute::simplify(variables, infix),
        Command::Solve { variables, infix } => recas_compute::solve(variables, infix),
    }
}

/// Recognizes and runs one input line, printing the result or the error report.
fn execute(input: &str) {
    let Some(command) = parse_command(input) else {
        if !input.trim().is_empty() {
            eprintln!("unrecognized command; try `simplify(<expr>)` or `solve(<lhs> = <rhs>)`");
        }
        return;
    };

    match run_command(&command) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            err.build_report("input")
                .eprint(("input", Source::from(command.infix().to_string())))
                .unwrap();
        }
    }
}

fn main() {
    let mut args = std::env::args();
    args.next();

    if let Some(filename) = args.next() {
        // run commands from a file, one per line
        let mut file = BufReader::new(File::open(filename).unwrap());
        let mut input = String::new();
        file.read_to_string(&mut input).unwrap();

        input.lines().for_each(execute);
    } else if !io::stdin().is_terminal() {
        // read commands from stdin
        let mut input = String::new();
        io::stdin().read_to_string(&mut input).unwrap();

        input.lines().for_each(execute);
    } else {
        // run the repl / interactive mode
        let mut rl = DefaultEditor::new().unwrap();

        fn process_line(rl: &mut DefaultEditor) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            execute(&input);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }
}
