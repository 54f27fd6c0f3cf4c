// Module exports for models

pub mod calendar;
pub mod settings;
