pub mod business;
pub mod import;
pub mod response;
pub mod review;
pub mod stats;

pub use business::upsert_business_handler;

pub use import::import_reviews_handler;

pub use response::{add_response_handler, delete_response_handler, update_response_handler};

pub use review::{
    list_reviews_handler, moderate_review_handler, submit_review_handler, vote_review_handler,
};

pub use stats::get_stats_handler;
