// Gold Stocks - Extractor CLI
// Default mode prints the data.js artifact to stdout (redirect it into
// data.js); `inspect` mode dumps the sheet so a new export's layout can be
// checked before extraction. Progress lines go to stderr so stdout stays
// clean for redirection.

use anyhow::{bail, Result};
use std::env;

use gold_stocks::{build_timeline, open_sheet, render_script, RawSheetData, SheetLayout};

const DEFAULT_WORKBOOK: &str = "data/above-ground-gold-stocks.xlsx";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "inspect" {
        run_inspect(args.get(2).map(String::as_str))?;
    } else {
        run_extract(&args[1..])?;
    }

    Ok(())
}

/// Default mode: extract and print the artifact
fn run_extract(args: &[String]) -> Result<()> {
    let mut workbook_path: Option<&str> = None;
    let mut layout_path: Option<&str> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--layout" => match iter.next() {
                Some(path) => layout_path = Some(path),
                None => bail!("--layout requires a path to a layout JSON file"),
            },
            path if workbook_path.is_none() => workbook_path = Some(path),
            other => bail!("Unexpected argument: {}", other),
        }
    }

    let workbook_path = workbook_path.unwrap_or(DEFAULT_WORKBOOK);

    let layout = match layout_path {
        Some(path) => {
            eprintln!("🗺️  Using layout from {}", path);
            SheetLayout::from_file(path)?
        }
        None => SheetLayout::default(),
    };

    eprintln!("📂 Opening workbook {}", workbook_path);
    let source = open_sheet(workbook_path)?;
    eprintln!("✓ Worksheet: {}", source.name);

    let raw = RawSheetData::read(&source, &layout)?;
    let timeline = build_timeline(&raw)?;
    eprintln!(
        "✓ Extracted {} years ({}-{})",
        timeline.len(),
        timeline[0].year,
        timeline[timeline.len() - 1].year
    );

    print!("{}", render_script(&timeline)?);

    eprintln!("✓ Done. Redirect stdout into data.js to update the site.");
    Ok(())
}

/// Inspect mode: dump sheet name, the first rows, and the layout hints
/// needed to write a layout JSON for a new export
fn run_inspect(path: Option<&str>) -> Result<()> {
    let workbook_path = path.unwrap_or(DEFAULT_WORKBOOK);

    let source = open_sheet(workbook_path)?;
    println!("Sheet name: {}", source.name);
    println!("\nFirst 20 rows:");
    for row in gold_stocks::sheet::preview(&source.range, 20) {
        println!("{}", row);
    }

    println!("\n{}", "=".repeat(80));
    println!("Expected layout (override with --layout <file.json>):");
    println!("{}", serde_json::to_string_pretty(&SheetLayout::default())?);

    Ok(())
}
