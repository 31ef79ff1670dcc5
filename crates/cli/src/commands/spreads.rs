//! `arcana spreads`: list the spread layouts.

use arcana_core::SpreadLayout;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("🃏 Spread Layouts");
    println!("=================\n");

    for layout in SpreadLayout::all() {
        println!("  {} ({}, {} cards)", layout.key, layout.name, layout.card_count());
        println!("     Positions: {}", layout.positions.join(", "));
        println!("     Pivot:     {}", layout.pivot_default);
        if !layout.key_tensions.is_empty() {
            let pairs: Vec<String> = layout
                .key_tensions
                .iter()
                .map(|(a, b)| format!("{a} ↔ {b}"))
                .collect();
            println!("     Tensions:  {}", pairs.join(", "));
        }
        println!();
    }

    Ok(())
}
