pub mod auth;
pub mod devtools;
pub mod health;
pub mod root;
pub mod users;
