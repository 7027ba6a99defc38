pub mod auth;
pub mod config;
pub mod errors;
pub mod graphql;
pub mod handlers;
pub mod models;
pub mod page;
pub mod templates_structs;
pub mod views;
