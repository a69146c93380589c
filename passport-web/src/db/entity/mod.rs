//! `SeaORM` entities.

pub mod linked_account;
