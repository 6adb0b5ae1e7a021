use rusqlite::Connection;
use std::cell::Cell;
use std::io::{self, Write};
use std::rc::Rc;

use crate::db::storage;
use crate::error::{HeroError, HeroResult};
use crate::model::{Model, ModelEvent, ModelManager};

/// Flags raised by model events, cleared once the change is persisted.
#[derive(Debug, Default)]
struct Dirty {
    address_book: Cell<bool>,
    accounts: Cell<bool>,
}

pub struct CLIContext {
    pub conn: Connection,
    pub model: ModelManager,
    dirty: Rc<Dirty>,
}

impl CLIContext {
    pub fn new(conn: Connection, mut model: ModelManager) -> Self {
        let dirty = Rc::new(Dirty::default());
        let flags = Rc::clone(&dirty);
        model.subscribe(Box::new(move |event| match event {
            ModelEvent::AddressBookChanged => flags.address_book.set(true),
            ModelEvent::AccountsChanged => flags.accounts.set(true),
            ModelEvent::SessionChanged { .. } => {}
        }));
        Self { conn, model, dirty }
    }

    /// Writes whatever changed since the last successful call. A flag stays
    /// raised until its save commits.
    pub fn persist(&self) -> HeroResult<()> {
        if self.dirty.address_book.get() {
            storage::save_address_book(&self.conn, self.model.address_book())?;
            self.dirty.address_book.set(false);
        }
        if self.dirty.accounts.get() {
            storage::save_accounts(&self.conn, self.model.accounts_manager())?;
            self.dirty.accounts.set(false);
        }
        Ok(())
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Print an error.
    pub fn print_error(&self, e: &HeroError) {
        println!("Error: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{person_repo, schema};
    use crate::model::*;
    use std::collections::BTreeSet;

    fn amy() -> Person {
        Person::new(
            Name::new("Amy Bee").unwrap(),
            Phone::new("85355255").unwrap(),
            Email::new("amy@example.com").unwrap(),
            Address::new("123, Jurong West Ave 6").unwrap(),
            CurrentPosition::new("Manager").unwrap(),
            Company::new("Acme").unwrap(),
            None,
            BTreeSet::new(),
        )
    }

    #[test]
    fn persist_writes_only_after_a_change() {
        let mut ctx = CLIContext::new(schema::test_connection(), ModelManager::new());
        ctx.persist().unwrap();
        assert_eq!(person_repo::count(&ctx.conn).unwrap(), 0);

        ctx.model.add_person(amy()).unwrap();
        ctx.persist().unwrap();
        assert_eq!(person_repo::count(&ctx.conn).unwrap(), 1);
    }

    #[test]
    fn failed_save_is_retried_on_next_persist() {
        let mut ctx = CLIContext::new(schema::test_connection(), ModelManager::new());
        ctx.conn
            .execute_batch("DROP TABLE person_tags; DROP TABLE persons;")
            .unwrap();

        ctx.model.add_person(amy()).unwrap();
        assert!(ctx.persist().is_err());

        schema::initialize(&ctx.conn).unwrap();
        ctx.persist().unwrap();
        assert_eq!(person_repo::count(&ctx.conn).unwrap(), 1);
    }
}
