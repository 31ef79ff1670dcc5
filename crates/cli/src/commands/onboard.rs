//! `arcana onboard`: write the default configuration.

use arcana_config::AppConfig;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = AppConfig::config_dir();
    let config_path = config_dir.join("config.toml");

    println!("🃏 Arcana Setup");
    println!("===============\n");

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
        println!("✅ Created config directory: {}", config_dir.display());
    } else {
        println!("  Config directory exists: {}", config_dir.display());
    }

    if config_path.exists() {
        println!("  Config file exists: {}", config_path.display());
    } else {
        std::fs::write(&config_path, AppConfig::default_toml())?;
        println!("✅ Created config.toml");
    }

    println!();
    println!("Next steps:");
    println!("  1. Adjust target budgets in {}", config_path.display());
    println!("  2. Optionally point knowledge.corpus_path at your own corpus");
    println!("  3. Run: arcana doctor");

    Ok(())
}
