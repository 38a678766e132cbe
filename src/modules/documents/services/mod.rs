pub mod amount_in_words;

pub use amount_in_words::{amount_in_words, words_for};
