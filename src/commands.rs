use std::fmt;

use cmdline_parser::Parser;

use rand::{self, Rng};

use data::Entry;
use errors::*;
use library::Library;
use notify::Notifier;
use view::View;

const HELP: &'static str = "\
add TITLE AUTHOR [GENRE] [--read]   shelve a book (quote multi-word fields)
toggle ENTRY_ID                     flip a book between READ and NOT READ
remove ENTRY_ID                     take a book off the shelf
clear                               take every book off the shelf
list                                draw the shelf
show ENTRY_ID                       describe one book
pick                                suggest a random unread book
help                                this text
quit                                end the session (the shelf is not saved)";

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    Add(Entry),
    Toggle(String),
    Remove(String),
    Clear,
    List,
    Show(String),
    Pick,
    Help,
    Quit,
    Nil,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Command::Add(ref entry) => write!(f, "Add '{}' by '{}'", entry.title, entry.author),
            Command::Toggle(ref id) => write!(f, "Toggle read status of `{}`", id),
            Command::Remove(ref id) => write!(f, "Remove `{}`", id),
            Command::Clear => write!(f, "Clear the shelf"),
            Command::List => write!(f, "List entries"),
            Command::Show(ref id) => write!(f, "Show `{}`", id),
            Command::Pick => write!(f, "Pick a random unread entry"),
            Command::Help => write!(f, "Show help"),
            Command::Quit => write!(f, "Quit the session"),
            Command::Nil => write!(f, "Nil command for implementation reasons"),
        }
    }
}

/// Turn one submitted line into a command. Blank lines parse to `Nil`.
pub fn parse_command(line: &str) -> Result<Command> {
    let words: Vec<String> = Parser::new(line).map(|(_, word)| word).collect();

    if words.is_empty() {
        return Ok(Command::Nil);
    }

    let command = match words[0].as_str() {
        "add" => {
            let read = words[1..].iter().any(|word| word == "--read");
            let fields: Vec<&str> = words[1..]
                .iter()
                .filter(|word| word.as_str() != "--read")
                .map(|word| word.as_str())
                .collect();

            let title = match fields.get(0) {
                Some(title) => *title,
                None => return Err(ErrorKind::MissingArg("TITLE").into()),
            };
            let author = match fields.get(1) {
                Some(author) => *author,
                None => return Err(ErrorKind::MissingArg("AUTHOR").into()),
            };
            let genre = fields.get(2).map(|genre| *genre);

            Command::Add(Entry::new(title, author, genre, read))
        }
        "toggle" => Command::Toggle(id_arg(&words)?),
        "remove" => Command::Remove(id_arg(&words)?),
        "clear" => Command::Clear,
        "list" => Command::List,
        "show" => Command::Show(id_arg(&words)?),
        "pick" => Command::Pick,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ErrorKind::UnknownCommand(other.to_owned()).into()),
    };

    Ok(command)
}

fn id_arg(words: &[String]) -> Result<String> {
    match words.get(1) {
        Some(id) => Ok(id.clone()),
        None => Err(ErrorKind::MissingArg("ENTRY_ID").into()),
    }
}

/// Run one command against the shelf. The reply is the line shown to the
/// user; an empty reply means the command spoke through the surface or the
/// notifier instead.
pub fn exec_command<V: View>(shelf: &mut Library<V>,
                             notices: &mut Notifier,
                             command: Command)
                             -> Result<String> {
    match command {
        Command::Add(entry) => do_add(shelf, notices, entry),
        Command::Toggle(id) => do_toggle(shelf, id),
        Command::Remove(id) => do_remove(shelf, id),
        Command::Clear => do_clear(shelf),
        Command::List => do_list(shelf),
        Command::Show(id) => do_show(shelf, id),
        Command::Pick => do_pick(shelf),
        Command::Help => Ok(HELP.to_owned()),
        Command::Quit | Command::Nil => Ok(String::new()),
    }
}

fn do_add<V: View>(shelf: &mut Library<V>, notices: &mut Notifier, entry: Entry) -> Result<String> {
    let label = format!("'{}' by {}", entry.title, entry.author);

    if shelf.add(entry) {
        Ok(format!("Shelved {}", label))
    } else {
        notices.post(format!("{} is already on the shelf", label));
        Ok(String::new())
    }
}

fn do_toggle<V: View>(shelf: &mut Library<V>, id: String) -> Result<String> {
    if !shelf.toggle_read(&id) {
        return Err(ErrorKind::NoSuchEntry(id).into());
    }

    let status = shelf.get(&id).map(|entry| entry.status()).unwrap_or("NOT READ");

    Ok(format!("Marked `{}` as {}", id, status))
}

fn do_remove<V: View>(shelf: &mut Library<V>, id: String) -> Result<String> {
    let shelved = shelf.contains(&id);

    shelf.remove(&id);

    if shelved {
        Ok(format!("Removed `{}`", id))
    } else {
        Ok(format!("Nothing shelved under `{}`", id))
    }
}

fn do_clear<V: View>(shelf: &mut Library<V>) -> Result<String> {
    let n = shelf.len();

    shelf.remove_all();

    Ok(format!("Cleared {} book(s) from the shelf", n))
}

fn do_list<V: View>(shelf: &Library<V>) -> Result<String> {
    shelf.view().draw();

    Ok(format!("{} book(s) on the shelf", shelf.len()))
}

fn do_show<V: View>(shelf: &Library<V>, id: String) -> Result<String> {
    match shelf.get(&id) {
        Some(entry) => {
            Ok(format!("'{}' by {} [{}] - {}",
                       entry.title,
                       entry.author,
                       entry.genre,
                       entry.status()))
        }
        None => Err(ErrorKind::NoSuchEntry(id).into()),
    }
}

fn do_pick<V: View>(shelf: &Library<V>) -> Result<String> {
    let unread: Vec<&Entry> = shelf.entries().iter().filter(|entry| !entry.read).collect();

    let mut rng = rand::thread_rng();

    match rng.choose(&unread) {
        Some(entry) => Ok(format!("Try '{}' by {}. Happy Reading!", entry.title, entry.author)),
        None => Ok("Nothing unread on the shelf.".to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data::NO_GENRE;
    use library::Library;
    use notify::Notifier;
    use view::NullView;

    fn session() -> (Library<NullView>, Notifier) {
        (Library::new(NullView), Notifier::new())
    }

    fn run(shelf: &mut Library<NullView>, notices: &mut Notifier, line: &str) -> Result<String> {
        let command = parse_command(line)?;
        exec_command(shelf, notices, command)
    }

    #[test]
    fn parse_add_with_quotes_and_flag() {
        let command = parse_command("add \"The Fifth Season\" \"N. K. Jemisin\" fantasy --read")
            .unwrap();

        match command {
            Command::Add(entry) => {
                assert_eq!(entry.title, "The Fifth Season");
                assert_eq!(entry.author, "N. K. Jemisin");
                assert_eq!(entry.genre, "fantasy");
                assert!(entry.read);
                assert_eq!(entry.id, "n.-k.-jemisin_the-fifth-season");
            }
            other => panic!("parsed {:?}", other),
        }
    }

    #[test]
    fn parse_add_defaults_genre_and_status() {
        match parse_command("add Dune \"Frank Herbert\"").unwrap() {
            Command::Add(entry) => {
                assert_eq!(entry.genre, NO_GENRE);
                assert!(!entry.read);
            }
            other => panic!("parsed {:?}", other),
        }
    }

    #[test]
    fn parse_rejects_missing_arguments() {
        let err = parse_command("add Dune").unwrap_err();
        assert!(err.to_string().contains("AUTHOR"));

        let err = parse_command("toggle").unwrap_err();
        assert!(err.to_string().contains("ENTRY_ID"));
    }

    #[test]
    fn parse_rejects_unknown_commands() {
        let err = parse_command("shelve Dune").unwrap_err();
        assert!(err.to_string().contains("shelve"));
    }

    #[test]
    fn parse_blank_line_is_nil() {
        assert_eq!(parse_command("").unwrap(), Command::Nil);
        assert_eq!(parse_command("   ").unwrap(), Command::Nil);
    }

    #[test]
    fn parse_quit_aliases() {
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn add_duplicate_posts_a_notice_and_remove_clears_it_out() {
        let (mut shelf, mut notices) = session();

        let msg = run(&mut shelf, &mut notices, "add Dune \"Frank Herbert\"").unwrap();
        assert!(msg.contains("Dune"));
        assert!(shelf.contains("frank-herbert_dune"));
        assert_eq!(notices.current(), None);

        // Same book, different genre: rejected, shelf untouched, notice posted.
        let msg = run(&mut shelf, &mut notices, "add Dune \"Frank Herbert\" classic").unwrap();
        assert!(msg.is_empty());
        assert_eq!(shelf.len(), 1);
        assert!(notices.current().is_some());

        let msg = run(&mut shelf, &mut notices, "remove frank-herbert_dune").unwrap();
        assert!(msg.contains("Removed"));
        assert!(shelf.is_empty());
    }

    #[test]
    fn remove_of_absent_id_replies_instead_of_failing() {
        let (mut shelf, mut notices) = session();

        let msg = run(&mut shelf, &mut notices, "remove nobody_nothing").unwrap();
        assert!(msg.contains("Nothing shelved"));
    }

    #[test]
    fn toggle_flips_and_reports() {
        let (mut shelf, mut notices) = session();
        run(&mut shelf, &mut notices, "add Dune \"Frank Herbert\"").unwrap();

        run(&mut shelf, &mut notices, "toggle frank-herbert_dune").unwrap();
        assert_eq!(shelf.get("frank-herbert_dune").map(|e| e.read), Some(true));

        assert!(run(&mut shelf, &mut notices, "toggle nobody_nothing").is_err());
    }

    #[test]
    fn clear_reports_how_many_went() {
        let (mut shelf, mut notices) = session();
        run(&mut shelf, &mut notices, "add Dune \"Frank Herbert\"").unwrap();
        run(&mut shelf, &mut notices, "add \"The Hobbit\" \"J. R. R. Tolkien\"").unwrap();

        let msg = run(&mut shelf, &mut notices, "clear").unwrap();
        assert!(msg.contains("2"));
        assert!(shelf.is_empty());
    }

    #[test]
    fn show_describes_one_entry() {
        let (mut shelf, mut notices) = session();
        run(&mut shelf, &mut notices, "add Dune \"Frank Herbert\" sci-fi").unwrap();

        let msg = run(&mut shelf, &mut notices, "show frank-herbert_dune").unwrap();
        assert!(msg.contains("Dune"));
        assert!(msg.contains("sci-fi"));

        assert!(run(&mut shelf, &mut notices, "show nobody_nothing").is_err());
    }

    #[test]
    fn pick_only_suggests_unread() {
        let (mut shelf, mut notices) = session();

        let msg = run(&mut shelf, &mut notices, "pick").unwrap();
        assert!(msg.contains("Nothing unread"));

        run(&mut shelf, &mut notices, "add Dune \"Frank Herbert\" sci-fi --read").unwrap();
        run(&mut shelf, &mut notices, "add \"The Hobbit\" \"J. R. R. Tolkien\"").unwrap();

        let msg = run(&mut shelf, &mut notices, "pick").unwrap();
        assert!(msg.contains("The Hobbit"));
    }
}
