pub mod comment;
pub mod movie;
pub mod post;
pub mod reaction;
pub mod shared;
pub mod user;
