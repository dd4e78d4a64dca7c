pub mod entity;
pub mod permissions;
pub mod repository;
