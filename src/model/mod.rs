pub mod fields;
pub mod unique_list;
pub mod person;
pub mod job;
pub mod address_book;
pub mod accounts;
pub mod filter;
pub mod manager;

// Re-exports for convenience
pub use fields::{
    Address, Company, CurrentPosition, Email, JobTitle, Location, Name, Phone, ProfilePicture,
    Skill, Tag,
};
pub use unique_list::{Unique, UniqueList, UniqueTagList};
pub use person::Person;
pub use job::Job;
pub use address_book::{AddressBook, ReadOnlyAddressBook};
pub use accounts::{Account, AccountsManager, ReadOnlyAccountsManager, Session};
pub use filter::{FilteredView, Predicate};
pub use manager::{Listener, Model, ModelEvent, ModelManager};
