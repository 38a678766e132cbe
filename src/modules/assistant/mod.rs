// Work-description assistant

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{items_from_parsed, ParsedItem};
pub use services::{GeminiParser, WorkDescriptionParser};
