pub mod delete;
pub mod post;
pub mod put;

pub use delete::remove_response;
pub use post::add_response;
pub use put::edit_response;
