use prettytable::Table;
use prettytable::row::Row;

/// A rendering surface the library keeps in sync with itself. Rows are
/// keyed by entry id; the surface never looks back into the library.
pub trait View {
    /// Add a row for a newly shelved entry, at the end.
    fn append(&mut self, id: &str, row: Row);
    /// Replace the row for `id` in place. No-op if the id has no row.
    fn refresh(&mut self, id: &str, row: Row);
    /// Drop the row for `id`, if any.
    fn remove(&mut self, id: &str);
    /// Drop every row.
    fn clear(&mut self);
    /// Present the whole surface to the user.
    fn draw(&self);
}

/// The terminal surface: an ordered id -> row mirror, drawn as a table.
pub struct TableView {
    rows: Vec<(String, Row)>,
}

impl TableView {
    pub fn new() -> TableView {
        TableView { rows: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.rows.iter().position(|&(ref row_id, _)| row_id == id)
    }
}

impl View for TableView {
    fn append(&mut self, id: &str, row: Row) {
        self.rows.push((id.to_owned(), row));
    }

    fn refresh(&mut self, id: &str, row: Row) {
        if let Some(pos) = self.position(id) {
            self.rows[pos].1 = row;
        }
    }

    fn remove(&mut self, id: &str) {
        if let Some(pos) = self.position(id) {
            self.rows.remove(pos);
        }
    }

    fn clear(&mut self) {
        self.rows.clear();
    }

    fn draw(&self) {
        if self.rows.is_empty() {
            println!("The shelf is empty.");
            return;
        }

        let mut table = Table::new();
        table.add_row(row!["ID", "TITLE", "AUTHOR", "GENRE", "STATUS"]);

        for &(_, ref row) in &self.rows {
            table.add_row(row.clone());
        }

        table.printstd();
    }
}

/// Headless surface. Discards everything.
pub struct NullView;

impl View for NullView {
    fn append(&mut self, _id: &str, _row: Row) {}

    fn refresh(&mut self, _id: &str, _row: Row) {}

    fn remove(&mut self, _id: &str) {}

    fn clear(&mut self) {}

    fn draw(&self) {}
}
