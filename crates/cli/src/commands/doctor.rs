//! `arcana doctor`: diagnose configuration and corpus health.

use arcana_config::AppConfig;
use arcana_core::{Deck, SpreadLayout};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("🩺 Arcana Doctor");
    println!("================\n");

    let mut issues = 0;

    let config_path = AppConfig::config_dir().join("config.toml");
    if !config_path.exists() {
        println!("  ⚠️  No config file, using defaults. Run `arcana onboard` to create one");
    }
    let config = match AppConfig::load() {
        Ok(config) => {
            println!("  ✅ Config valid (target: {})", config.default_target);
            config
        }
        Err(e) => {
            println!("  ❌ Config invalid: {e}");
            println!("\n  ⚠️  1 issue(s) found. See above for details.");
            return Ok(());
        }
    };

    let deck = Deck::standard();
    println!("  ✅ Deck catalog: {} cards", deck.len());
    println!("  ✅ Spread layouts: {}", SpreadLayout::all().len());

    match super::load_corpus(&config) {
        Ok(corpus) => {
            println!(
                "  ✅ Corpus loaded: {} passage(s) under {} key(s)",
                corpus.len(),
                corpus.key_count()
            );
            let uncovered = deck
                .cards()
                .iter()
                .filter(|card| card.is_major)
                .filter(|card| !corpus.contains_key(&format!("card:{}", card.slug())))
                .count();
            if uncovered > 0 {
                println!("  ⚠️  {uncovered} major card(s) have no corpus entry");
                issues += 1;
            }
        }
        Err(e) => {
            println!("  ❌ Corpus failed to load: {e}");
            issues += 1;
        }
    }

    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
