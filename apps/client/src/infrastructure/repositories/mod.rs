pub mod http_admin_repository;
pub mod http_comment_repository;
pub mod http_post_repository;
pub mod http_profile_repository;
pub mod http_reaction_service;
pub mod http_session_repository;
