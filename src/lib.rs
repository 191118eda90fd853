pub mod api;
pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod error;
pub mod favorites;
pub mod forms;
pub mod guard;
pub mod models;
pub mod pages;
pub mod query;
pub mod toast;
pub mod utils;
