// Documents module: data handed to the bill renderer

pub mod controllers;
pub mod models;
pub mod services;

pub use models::DocumentView;
pub use services::{amount_in_words, words_for};
