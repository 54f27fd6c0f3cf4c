// Rust Datepicker Library
// Calendar model, navigation rules and the egui widget

pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;
