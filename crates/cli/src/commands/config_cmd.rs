//! `arcana config`: configuration management commands.

use arcana_config::AppConfig;

pub fn validate() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Validating configuration...");

    match AppConfig::load() {
        Ok(config) => {
            println!("   ✅ Config parsed successfully");

            let mut warnings = Vec::new();
            if !config.retrieval.semantic && config.retrieval.semantic_weight > 0.0 {
                warnings.push(
                    "semantic_weight is set but semantic scoring is off; a neutral constant is used",
                );
            }
            if config
                .knowledge
                .corpus_path
                .as_ref()
                .is_some_and(|path| !path.exists())
            {
                warnings.push("knowledge.corpus_path does not exist");
            }

            if warnings.is_empty() {
                println!("   ✅ All checks passed");
            } else {
                println!();
                for w in &warnings {
                    println!("   ⚠️  {w}");
                }
            }

            println!();
            println!("   Target:    {}", config.default_target);
            println!("   Style:     {:?}", config.style);
            let budget = config.default_budget();
            println!("   Budgets:   system {} / user {}", budget.system, budget.user);
            println!(
                "   Retrieval: max {} passages, min relevance {:.2}",
                config.retrieval.max_passages, config.retrieval.min_relevance
            );
            match &config.knowledge.corpus_path {
                Some(path) => println!("   Corpus:    {}", path.display()),
                None => println!("   Corpus:    built-in"),
            }
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

pub fn path() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", AppConfig::config_dir().join("config.toml").display());
    Ok(())
}
