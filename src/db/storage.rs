use log::{debug, info};
use rusqlite::Connection;

use super::{account_repo, job_repo, person_repo};
use crate::error::HeroResult;
use crate::model::{AccountsManager, AddressBook, ReadOnlyAccountsManager, ReadOnlyAddressBook};

/// Overwrites every stored person and job with `book` in one transaction.
pub fn save_address_book(conn: &Connection, book: &dyn ReadOnlyAddressBook) -> HeroResult<()> {
    let tx = conn.unchecked_transaction()?;
    person_repo::delete_all(&tx)?;
    job_repo::delete_all(&tx)?;

    for (position, person) in book.person_list().iter().enumerate() {
        person_repo::insert(&tx, position, person)?;
    }
    for (position, job) in book.job_list().iter().enumerate() {
        job_repo::insert(&tx, position, job)?;
    }
    tx.commit()?;

    debug!(
        "event=address_book_saved persons={} jobs={}",
        book.person_list().len(),
        book.job_list().len()
    );
    Ok(())
}

pub fn load_address_book(conn: &Connection) -> HeroResult<AddressBook> {
    let book = AddressBook::from_parts(person_repo::find_all(conn)?, job_repo::find_all(conn)?)?;
    info!(
        "event=address_book_loaded persons={} jobs={}",
        book.person_list().len(),
        book.job_list().len()
    );
    Ok(book)
}

pub fn save_accounts(conn: &Connection, accounts: &dyn ReadOnlyAccountsManager) -> HeroResult<()> {
    let tx = conn.unchecked_transaction()?;
    account_repo::delete_all(&tx)?;
    for account in accounts.account_list() {
        account_repo::upsert(&tx, account)?;
    }
    tx.commit()?;
    Ok(())
}

pub fn load_accounts(conn: &Connection) -> HeroResult<AccountsManager> {
    AccountsManager::from_accounts(account_repo::find_all(conn)?)
}
