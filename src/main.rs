#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
#[macro_use]
extern crate prettytable;
extern crate clap;
extern crate cmdline_parser;
extern crate env_logger;
extern crate linefeed;
extern crate rand;
extern crate time;

mod commands;
mod data;
mod errors;
mod library;
mod notify;
mod view;

use std::fs::File;
use std::io::{BufRead, BufReader};

use clap::{App, Arg};

use linefeed::{Interface, ReadResult};

use commands::{Command, exec_command, parse_command};
use errors::*;
use library::Library;
use notify::Notifier;
use view::{TableView, View};

const NAME: &'static str = "stacks";
const PROMPT: &'static str = "stacks> ";

/// Replay a command file into the session, one line per command. Blank
/// lines and `#` comments are skipped; a `quit` line stops the replay.
fn run_script<V: View>(path: &str, shelf: &mut Library<V>, notices: &mut Notifier) -> Result<u32> {
    let file = File::open(path)?;

    let mut n = 0;
    for line in BufReader::new(file).lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let command = parse_command(line)?;
        if command == Command::Quit {
            break;
        }

        let msg = exec_command(shelf, notices, command)?;
        if !msg.is_empty() {
            debug!("seed: {}", msg);
        }

        n += 1;
    }

    Ok(n)
}

fn repl<V: View>(shelf: &mut Library<V>, notices: &mut Notifier) -> Result<()> {
    let reader = Interface::new(NAME)?;
    reader.set_prompt(PROMPT)?;

    while let ReadResult::Input(line) = reader.read_line()? {
        if line.trim().is_empty() {
            continue;
        }

        reader.add_history(line.clone());

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("error: {}", e);
                continue;
            }
        };

        debug!("dispatching: {}", command);

        if command == Command::Quit {
            break;
        }

        match exec_command(shelf, notices, command) {
            Ok(ref msg) if msg.is_empty() => {}
            Ok(msg) => println!("{}", msg),
            Err(e) => println!("error: {}", e),
        }

        if let Some(note) = notices.current() {
            println!("! {}", note);
        }
    }

    Ok(())
}

fn main() {
    env_logger::init().expect("Couldn't init logger");

    let matches = App::new(NAME)
        .author("Mark <mark.edward.x@gmail.com>")
        .about("in-memory book shelf")
        .version("0.1")
        .arg(Arg::with_name("SEED")
                 .short("s")
                 .long("seed")
                 .takes_value(true)
                 .value_name("FILE")
                 .help("command file replayed into the session before the prompt"))
        .get_matches();

    let mut shelf = Library::new(TableView::new());
    let mut notices = Notifier::new();

    if let Some(path) = matches.value_of("SEED") {
        match run_script(path, &mut shelf, &mut notices) {
            Ok(n) => println!("Replayed {} command(s) from {}", n, path),
            Err(e) => println!("error: couldn't replay {}: {}", path, e),
        }
    }

    if let Err(e) = repl(&mut shelf, &mut notices) {
        println!("error: {}", e);
    }
}
