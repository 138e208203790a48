pub mod devtools;
pub mod errors;
pub mod models;
pub mod repositories;
