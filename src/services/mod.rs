// Service module exports

pub mod config;
pub mod database;
pub mod locale;
pub mod navigation;
pub mod picker;
pub mod preferences;
