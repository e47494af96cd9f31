pub mod matching;
pub mod models;
pub mod store;
