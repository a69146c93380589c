//! Storage abstraction traits.

mod linked_account_repository;

pub use linked_account_repository::LinkedAccountRepository;
