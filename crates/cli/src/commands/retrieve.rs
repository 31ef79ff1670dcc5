//! `arcana retrieve`: score corpus passages for explicit topic keys.

use arcana_config::AppConfig;

pub fn run(
    keys: &[String],
    question: &str,
    max: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let corpus = super::load_corpus(&config)?;
    let retriever = super::build_retriever(&config);
    let max_passages = max.unwrap_or(config.retrieval.max_passages);

    let passages = retriever.retrieve(
        &corpus,
        keys,
        question,
        max_passages,
        config.retrieval.min_relevance,
    );

    println!(
        "🔎 {} passage(s) for {} key(s), scorer: {}",
        passages.len(),
        keys.len(),
        retriever.comparator_name().unwrap_or("keyword only")
    );
    println!();
    for passage in &passages {
        println!("  [{:.2}] {}", passage.relevance_score, passage.source_key);
        println!("         {}", passage.text);
    }

    Ok(())
}
