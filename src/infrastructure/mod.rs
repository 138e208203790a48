pub mod auth;
pub mod repositories;
pub mod storage;
pub mod system;
