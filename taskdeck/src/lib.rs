//! `TaskDeck` — interactive console to-do list manager library.

pub mod config;
pub mod console;
pub mod screen;
