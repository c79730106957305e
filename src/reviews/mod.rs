pub mod import;
pub mod query;
pub mod respond;
pub mod stats;
pub mod validate;
