//! fibweb HTTP Server Library
//!
//! Exposes the router for testing; the main entry point is [`create_app`].
//! Request logging is injected through [`logging::RequestLogger`].

pub mod config;
pub mod handlers;
pub mod logging;
mod server;

pub use server::{create_app, run};
