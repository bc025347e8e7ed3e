use std::io;

error_chain! {
    foreign_links {
        Io(io::Error);
    }

    errors {
        NoSuchEntry(id: String) {
            description("Invalid entry id")
            display("No entry shelved under `{}`", id)
        }
        MissingArg(arg: &'static str) {
            description("Missing argument")
            display("Required argument `{}` is missing", arg)
        }
        UnknownCommand(cmd: String) {
            description("Unknown command")
            display("`{}` is not a command (try `help`)", cmd)
        }
    }
}
