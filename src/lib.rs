//! Backend for the conference website: a JSON admin API over SQLite, a
//! WebSocket change-notification channel, and the aggregated committee view
//! served to the public pages.

pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod notify;
