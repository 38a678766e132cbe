pub mod gemini;
pub mod parser_trait;

pub use gemini::GeminiParser;
pub use parser_trait::WorkDescriptionParser;
