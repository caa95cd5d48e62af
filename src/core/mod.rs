//! Configuration and request/response models shared by every tool

pub mod config;
pub mod models;
