use prettytable::row::Row;

/// Sentinel genre for entries added without one.
pub const NO_GENRE: &'static str = "Not Set";

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub read: bool,
}

impl Entry {
    pub fn new(title: &str, author: &str, genre: Option<&str>, read: bool) -> Entry {
        Entry {
            id: entry_id(author, title),
            title: title.to_owned(),
            author: author.to_owned(),
            genre: genre.unwrap_or(NO_GENRE).to_owned(),
            read: read,
        }
    }

    pub fn toggle_read(&mut self) {
        self.read = !self.read;
    }

    pub fn status(&self) -> &'static str {
        if self.read { "READ" } else { "NOT READ" }
    }

    /// One table row: id, title, author, genre, status.
    pub fn render(&self) -> Row {
        row![&self.id,
             &self.title,
             &self.author,
             &self.genre,
             self.status()]
    }
}

/// Identity key for an entry. Case and spacing of author and title do not
/// affect it; genre and read status never enter into it.
pub fn entry_id(author: &str, title: &str) -> String {
    format!("{}_{}", slug(author), slug(title))
}

fn slug(field: &str) -> String {
    field
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
