pub mod config;
pub mod llm;
pub mod parser;
pub mod patterns;

// Re-export commonly used types
pub use config::Config;
pub use parser::{detect_language, Language, Method, NaturalLanguageParser, ParseResult};
