use anyhow::Result;
use imsq::NaturalLanguageParser;

/// Exit code 0 when the query is already IMS syntax, 1 when it needs
/// parsing - scripts can branch on it.
pub fn execute(query: &str) -> Result<i32> {
    let parser = NaturalLanguageParser::new()?;

    if parser.is_boolean_syntax(query) {
        println!("✅ Already IMS syntax: {query}");
        Ok(0)
    } else {
        println!("📝 Natural language, needs parsing: {query}");
        Ok(1)
    }
}
