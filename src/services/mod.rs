pub mod error;
pub mod pagination;
pub mod posts;
pub mod seed;
pub mod slug;
pub mod store;
pub mod text;
pub mod validation;

pub use error::{FieldError, PostError, ValidationErrors};
pub use store::PostStore;
