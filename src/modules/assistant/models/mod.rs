mod parsed_item;

pub use parsed_item::{items_from_parsed, ParsedItem};
