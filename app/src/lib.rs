// app/src/lib.rs

//! HTTP surface of the hub: configuration, error mapping and the actix-web routes.

pub mod config;
pub mod errors;
pub mod state;
pub mod web;
