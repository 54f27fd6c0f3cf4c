mod app;
pub mod date_picker;
pub mod icon;
pub mod placement;
pub mod theme;

pub use app::{DemoApp, UI_LANGUAGE_KEY};
pub use date_picker::{DatePicker, DatePickerResponse};
