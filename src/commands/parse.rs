use anyhow::Result;
use imsq::llm::OllamaClient;
use imsq::{Config, NaturalLanguageParser};

pub fn execute(query: &str, json_output: bool, use_llm: bool) -> Result<i32> {
    let config = Config::load()?;

    let mut parser =
        NaturalLanguageParser::new()?.with_threshold(config.confidence_threshold);
    if use_llm {
        let client = OllamaClient::new(config.llm.clone())?;
        parser = parser.with_fallback(Box::new(client));
    }

    let result = parser.parse(query)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("🔍 {}", result.original_query);
        println!("   IMS syntax:  {}", result.ims_query);
        println!("   Language:    {}", result.language);
        println!("   Method:      {}", result.method);
        println!("   Confidence:  {:.0}%", result.confidence * 100.0);
        println!("   {}", result.explanation);
    }

    Ok(0)
}
