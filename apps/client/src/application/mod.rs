pub mod admin;
pub mod errors;
pub mod feed;
pub mod post_detail;
pub mod profile;
pub mod reaction_toggle;
pub mod session;
