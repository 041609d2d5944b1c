pub mod delete_session;
pub mod get_history;
pub mod get_session;
