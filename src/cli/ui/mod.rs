pub mod formatting;
pub mod progress_bar;
pub mod views;
