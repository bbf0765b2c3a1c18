pub mod app;
pub mod chats;
pub mod constants;
pub mod message;
pub mod models;
