//! Terminal viewer: deal hands and inspect the showdown.

pub mod app;
pub mod controller;
mod ui;
