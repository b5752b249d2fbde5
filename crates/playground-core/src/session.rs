//! Per-session storage for the uploaded table.
//!
//! The UI shell owns one [`Session`] per user session and passes it to every
//! data-menu action. Nothing here is global, so two sessions never see each
//! other's data.

use crate::table::Table;
use crate::Notice;

/// The data explorer's session state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    table: Option<Table>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The loaded table, if any.
    pub fn get(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    /// Store a table, returning the one it replaces.
    pub fn set(&mut self, table: Table) -> Option<Table> {
        self.table.replace(table)
    }

    /// Drop the loaded table.
    pub fn clear(&mut self) -> Option<Table> {
        self.table.take()
    }

    pub fn has_table(&self) -> bool {
        self.table.is_some()
    }

    /// The loaded table, or [`Notice::NoData`] for the UI to show.
    pub fn require(&self) -> Result<&Table, Notice> {
        self.table.as_ref().ok_or_else(|| {
            log::warn!("data action requested before a CSV was uploaded");
            Notice::NoData
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn table(n: i64) -> Table {
        Table::from_frame(df!("n" => [n]).unwrap()).unwrap()
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(session.get().is_none());
        assert!(!session.has_table());
        assert!(matches!(session.require(), Err(Notice::NoData)));
    }

    #[test]
    fn test_set_get_clear() {
        let mut session = Session::new();
        assert!(session.set(table(1)).is_none());
        assert_eq!(session.get(), Some(&table(1)));

        let previous = session.set(table(2));
        assert_eq!(previous, Some(table(1)));
        assert_eq!(session.require().unwrap(), &table(2));

        assert_eq!(session.clear(), Some(table(2)));
        assert!(session.get().is_none());
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut a = Session::new();
        let b = Session::new();
        a.set(table(7));
        assert!(a.has_table());
        assert!(!b.has_table());
    }
}
