use data::Entry;
use view::View;

/// The shelf: an ordered list of unique entries plus the surface that
/// mirrors it. Entries are keyed by their derived id; insertion order is
/// display order, most recent last. Every mutation pushes the matching
/// change to the view before returning.
pub struct Library<V: View> {
    entries: Vec<Entry>,
    view: V,
}

impl<V: View> Library<V> {
    pub fn new(view: V) -> Library<V> {
        Library {
            entries: Vec::new(),
            view: view,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Shelve an entry. Returns false without touching anything when an
    /// entry with the same id is already shelved; the caller decides how
    /// to surface that.
    pub fn add(&mut self, entry: Entry) -> bool {
        if self.contains(&entry.id) {
            return false;
        }

        self.view.append(&entry.id, entry.render());
        self.entries.push(entry);

        true
    }

    /// Drop the entry with this id. At most one entry can match. Absent
    /// ids are a no-op, not an error.
    pub fn remove(&mut self, id: &str) {
        if let Some(pos) = self.entries.iter().position(|entry| entry.id == id) {
            self.entries.remove(pos);
            self.view.remove(id);
        }
    }

    pub fn remove_all(&mut self) {
        self.entries.clear();
        self.view.clear();
    }

    /// Flip the read flag of the entry with this id and refresh its row.
    /// Returns false when no entry matches.
    pub fn toggle_read(&mut self, id: &str) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.toggle_read();
                self.view.refresh(id, entry.render());
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}
