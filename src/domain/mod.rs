pub mod backend;
pub mod catalog;
pub mod error;
pub mod matcher;
pub mod models;
pub mod speech;
