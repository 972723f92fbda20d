pub mod use_formatter;
pub mod use_translation;
