//! Reusable TUI widgets

pub mod alert;
