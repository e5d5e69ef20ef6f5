//! `stockroom-shell`
//!
//! **Responsibility:** interactive terminal front end for the inventory store.
//!
//! This crate provides:
//! - The closed set of user actions and their menu captions
//! - Validation of numeric input before it reaches the store
//! - Table and detail rendering
//! - The session loop tying them together
//!
//! The shell is a **thin layer** around `InventoryStore`: it holds no
//! inventory state of its own.

pub mod action;
pub mod config;
pub mod input;
pub mod render;
pub mod shell;

pub use action::Action;
pub use config::Config;
pub use shell::{Flow, Shell};
