pub mod check_email;
pub mod count_users;
pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod health;
pub mod list_users;
pub mod proxy_auth;
pub mod update_user;
