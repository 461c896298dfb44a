pub mod app_state;
pub mod cards;
pub mod messages;
