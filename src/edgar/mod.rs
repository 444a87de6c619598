// src/edgar/mod.rs
pub mod cache;
pub mod client;
pub mod models;
pub mod urls;

pub use client::EdgarClient;
