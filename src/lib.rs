//! Stores transactions that may hang off a parent transaction and answers
//! queries by type and by tree total.

pub mod engine;
pub mod models;
pub mod service;
pub mod storage;
pub mod types;
