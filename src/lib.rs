pub mod config;
pub mod database;
pub mod models;
pub mod server;
pub mod services;
pub mod web;
