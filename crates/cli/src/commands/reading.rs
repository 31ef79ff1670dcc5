//! `arcana reading`: assemble the prompt blocks for one drawn spread.

use arcana_config::AppConfig;
use arcana_core::{DrawnCard, ReadingRequest, Style};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};

pub struct ReadingArgs {
    pub spread: String,
    pub cards: PathBuf,
    pub question: String,
    pub reflections: Vec<String>,
    pub target: Option<String>,
    pub style: Option<Style>,
    pub explain: bool,
}

pub fn run(args: ReadingArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let target = args.target.as_deref().unwrap_or(&config.default_target);
    let budget = config
        .budget_for(target)
        .ok_or_else(|| format!("unknown target '{target}'"))?;
    let style = args.style.unwrap_or(config.style);

    let request = ReadingRequest {
        spread_key: args.spread,
        cards: Some(read_cards(&args.cards)?),
        question: args.question,
        reflections: parse_reflections(&args.reflections)?,
    };

    let pipeline = super::build_pipeline(&config)?;
    let reading = pipeline.run(&request, budget, style)?;

    println!("{}", reading.prompt.system_text);
    println!("\n---\n");
    println!("{}", reading.prompt.user_text);

    if args.explain {
        let explain = serde_json::json!({
            "target": target,
            "reasoning": reading.reasoning,
            "topic_keys": reading.topic_keys,
            "passages": reading.passages,
            "report": reading.prompt.report,
        });
        println!("\n---\n");
        println!("{}", serde_json::to_string_pretty(&explain)?);
    }

    Ok(())
}

/// Drawn cards as a JSON array, from a file or `-` for stdin.
fn read_cards(path: &Path) -> Result<Vec<DrawnCard>, Box<dyn std::error::Error>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?
    };
    Ok(serde_json::from_str(&content).map_err(arcana_core::Error::from)?)
}

/// `Position=text` pairs into the reflections map.
fn parse_reflections(raw: &[String]) -> Result<BTreeMap<String, String>, String> {
    raw.iter()
        .map(|pair| {
            let (position, text) = pair
                .split_once('=')
                .ok_or_else(|| format!("reflection '{pair}' must look like Position=text"))?;
            Ok((position.trim().to_string(), text.trim().to_string()))
        })
        .collect()
}
