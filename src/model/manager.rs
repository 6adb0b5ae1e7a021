use log::{debug, info, warn};
use std::fmt;

use crate::error::HeroResult;

use super::accounts::{AccountsManager, ReadOnlyAccountsManager};
use super::address_book::{AddressBook, ReadOnlyAddressBook};
use super::fields::Tag;
use super::filter::{FilteredView, Predicate};
use super::job::Job;
use super::person::Person;

/// Emitted after every successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelEvent {
    AddressBookChanged,
    AccountsChanged,
    SessionChanged { username: Option<String> },
}

pub type Listener = Box<dyn FnMut(&ModelEvent)>;

/// The mutation and query surface used by the command layer.
pub trait Model {
    /// Replaces the backing address book with a copy of `data`.
    fn reset_data(&mut self, data: &dyn ReadOnlyAddressBook) -> HeroResult<()>;

    fn address_book(&self) -> &dyn ReadOnlyAddressBook;

    fn delete_person(&mut self, target: &Person) -> HeroResult<()>;

    fn add_person(&mut self, person: Person) -> HeroResult<()>;

    /// Replaces `target` with `edited`. Fails if `target` is absent or if
    /// `edited` equals another person in the book.
    fn update_person(&mut self, target: &Person, edited: Person) -> HeroResult<()>;

    /// Removes `tag` from every person in the book.
    fn delete_tag(&mut self, tag: &Tag) -> HeroResult<()>;

    fn filtered_person_list(&self) -> Vec<&Person>;

    fn update_filtered_person_list(&mut self, predicate: Predicate<Person>);

    fn accounts_manager(&self) -> &dyn ReadOnlyAccountsManager;

    fn login(&mut self, username: &str, password: &str) -> HeroResult<()>;

    fn logout(&mut self) -> HeroResult<()>;

    fn register(&mut self, username: &str, password: &str) -> HeroResult<()>;

    fn add_job(&mut self, job: Job) -> HeroResult<()>;

    fn delete_job(&mut self, target: &Job) -> HeroResult<()>;

    fn filtered_job_list(&self) -> Vec<&Job>;

    fn update_filtered_job_list(&mut self, predicate: Predicate<Job>);

    /// Registers a callback run synchronously after each successful mutation.
    fn subscribe(&mut self, listener: Listener);
}

/// In-memory [`Model`] over an [`AddressBook`] and an [`AccountsManager`].
#[derive(Default)]
pub struct ModelManager {
    address_book: AddressBook,
    accounts: AccountsManager,
    person_view: FilteredView<Person>,
    job_view: FilteredView<Job>,
    listeners: Vec<Listener>,
}

impl ModelManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(address_book: AddressBook, accounts: AccountsManager) -> Self {
        debug!(
            "event=model_init persons={} jobs={} accounts={}",
            address_book.person_list().len(),
            address_book.job_list().len(),
            accounts.account_list().len()
        );
        Self {
            address_book,
            accounts,
            ..Self::default()
        }
    }

    fn notify(&mut self, event: ModelEvent) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    fn address_book_changed(&mut self) {
        self.person_view.invalidate();
        self.job_view.invalidate();
        self.notify(ModelEvent::AddressBookChanged);
    }

    fn session_changed(&mut self) {
        let username = self.accounts.current_user().map(str::to_string);
        self.notify(ModelEvent::SessionChanged { username });
    }
}

impl Model for ModelManager {
    fn reset_data(&mut self, data: &dyn ReadOnlyAddressBook) -> HeroResult<()> {
        self.address_book.reset_data(data)?;
        info!(
            "event=reset_data persons={} jobs={}",
            self.address_book.person_list().len(),
            self.address_book.job_list().len()
        );
        self.address_book_changed();
        Ok(())
    }

    fn address_book(&self) -> &dyn ReadOnlyAddressBook {
        &self.address_book
    }

    fn delete_person(&mut self, target: &Person) -> HeroResult<()> {
        self.address_book.remove_person(target)?;
        info!("event=person_deleted total={}", self.address_book.person_list().len());
        self.address_book_changed();
        Ok(())
    }

    fn add_person(&mut self, person: Person) -> HeroResult<()> {
        self.address_book.add_person(person)?;
        info!("event=person_added total={}", self.address_book.person_list().len());
        self.address_book_changed();
        Ok(())
    }

    fn update_person(&mut self, target: &Person, edited: Person) -> HeroResult<()> {
        self.address_book.update_person(target, edited)?;
        info!("event=person_updated");
        self.address_book_changed();
        Ok(())
    }

    fn delete_tag(&mut self, tag: &Tag) -> HeroResult<()> {
        let affected = self.address_book.remove_tag(tag)?;
        info!("event=tag_deleted affected={}", affected);
        self.address_book_changed();
        Ok(())
    }

    fn filtered_person_list(&self) -> Vec<&Person> {
        self.person_view.view(self.address_book.person_list())
    }

    fn update_filtered_person_list(&mut self, predicate: Predicate<Person>) {
        self.person_view.set_predicate(predicate);
    }

    fn accounts_manager(&self) -> &dyn ReadOnlyAccountsManager {
        &self.accounts
    }

    fn login(&mut self, username: &str, password: &str) -> HeroResult<()> {
        if let Err(e) = self.accounts.login(username, password) {
            warn!("event=login status=error reason=\"{}\"", e);
            return Err(e);
        }
        info!("event=login status=ok");
        self.session_changed();
        Ok(())
    }

    fn logout(&mut self) -> HeroResult<()> {
        self.accounts.logout()?;
        info!("event=logout status=ok");
        self.session_changed();
        Ok(())
    }

    fn register(&mut self, username: &str, password: &str) -> HeroResult<()> {
        self.accounts.register(username, password)?;
        info!("event=register status=ok accounts={}", self.accounts.account_list().len());
        self.notify(ModelEvent::AccountsChanged);
        Ok(())
    }

    fn add_job(&mut self, job: Job) -> HeroResult<()> {
        self.address_book.add_job(job)?;
        info!("event=job_added total={}", self.address_book.job_list().len());
        self.address_book_changed();
        Ok(())
    }

    fn delete_job(&mut self, target: &Job) -> HeroResult<()> {
        self.address_book.remove_job(target)?;
        info!("event=job_deleted total={}", self.address_book.job_list().len());
        self.address_book_changed();
        Ok(())
    }

    fn filtered_job_list(&self) -> Vec<&Job> {
        self.job_view.view(self.address_book.job_list())
    }

    fn update_filtered_job_list(&mut self, predicate: Predicate<Job>) {
        self.job_view.set_predicate(predicate);
    }

    fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }
}

impl fmt::Debug for ModelManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelManager")
            .field("address_book", &self.address_book)
            .field("accounts", &self.accounts)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
