use std::io::{self, BufRead};

use clap::Parser;
use engine::{
    cli::{handle_command, split_ignore_quotes, Cli, Command, Line},
    Position,
};

fn main() {
    env_logger::init();
    let args = Cli::parse();
    let mut position = match Position::from_fen(&args.fen) {
        Ok(p) => p,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    match args.command {
        Command::Interactive => {
            for line in io::stdin().lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        log::error!("reading stdin failed: {err}");
                        break;
                    }
                };
                let words = split_ignore_quotes(&line);
                if words.is_empty() {
                    continue;
                }
                match Line::try_parse_from(words) {
                    Ok(Line {
                        command: Command::Exit,
                    }) => break,
                    Ok(Line { command }) => println!("{}", handle_command(command, &mut position)),
                    Err(err) => {
                        err.print()
                            .unwrap_or_else(|_| println!("Failed to display parsing error"));
                    }
                }
            }
        }
        cmd => println!("{}", handle_command(cmd, &mut position)),
    };
}
