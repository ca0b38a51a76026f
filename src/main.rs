use clap::Parser;
use std::collections::BTreeMap;
use std::fs;

use docsift::build::run_build;
use docsift::search::{
    is_searchable, parse_index, search_with_limit, FileSource, IndexCache, MAX_RESULTS,
};
use docsift::types::IndexRecord;
use docsift::util::{compressed_size, format_bytes};
use docsift::verify::validate_index;

mod cli;
use cli::display::{self, result_rows, row, section_bot, section_top, themed};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Index {
            input,
            output,
            pretty,
        } => run_build(&input, &output, pretty).map(|_| ()),
        Commands::Search {
            file,
            query,
            limit,
            json,
        } => run_search(&file, &query, limit, json),
        Commands::Inspect { file } => run_inspect(&file),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run_search(file: &str, query: &str, limit: usize, json: bool) -> Result<(), String> {
    // Short input behaves like the search box: no load, no results
    let results = if is_searchable(query) {
        let index = IndexCache::new()
            .get_or_load(&FileSource::new(file))
            .map_err(|e| e.to_string())?;
        search_with_limit(&index, query, limit.min(MAX_RESULTS))
    } else {
        Vec::new()
    };

    if json {
        let out: Vec<serde_json::Value> = results
            .iter()
            .map(|r| -> Result<serde_json::Value, String> {
                let mut value = serde_json::to_value(r).map_err(|e| e.to_string())?;
                value["href"] = serde_json::Value::String(r.href());
                Ok(value)
            })
            .collect::<Result<_, String>>()?;
        let text = serde_json::to_string_pretty(&out)
            .map_err(|e| format!("Failed to serialize results: {}", e))?;
        println!("{}", text);
        return Ok(());
    }

    section_top(&format!("RESULTS \"{}\" ({})", query, results.len()));
    if results.is_empty() {
        row(&format!(
            " {}",
            themed(display::GRAY, &[], "No results. Try a different search term.")
        ));
    }
    for (i, result) in results.iter().enumerate() {
        result_rows(i + 1, result);
    }
    section_bot();
    Ok(())
}

fn run_inspect(file: &str) -> Result<(), String> {
    let raw = fs::read_to_string(file).map_err(|e| format!("Failed to read {}: {}", file, e))?;
    let records = parse_index(&raw).map_err(|e| e.to_string())?;

    let pages = records.iter().filter(|r| r.is_page()).count();
    let sections = records.len() - pages;

    section_top("INDEX");
    row(&format!("  File:        {}", display::clip(file, 56)));
    row(&format!("  Records:     {}", records.len()));
    row(&format!("  Pages:       {}", pages));
    row(&format!("  Sections:    {}", sections));
    row(&format!("  Size:        {}", format_bytes(raw.len())));
    row(&format!(
        "  Brotli:      {}",
        format_bytes(compressed_size(raw.as_bytes()))
    ));
    section_bot();

    section_top("PAGES");
    for (slug, (title, count)) in sections_per_page(&records) {
        let slug = if slug.is_empty() { "(root)" } else { slug };
        row(&format!(
            "  {:<24} {:<32} {:>4}",
            display::clip(slug, 24),
            display::clip(title, 32),
            count
        ));
    }
    section_bot();

    section_top("VALIDATION");
    let status = match validate_index(&records) {
        Ok(()) => {
            row(&format!("  {}", display::ok("✓ all invariants hold")));
            Ok(())
        }
        Err(errors) => {
            for err in &errors {
                row(&format!("  {}", display::bad(&format!("✗ {}", err))));
            }
            Err(format!("{} invariant violation(s) in {}", errors.len(), file))
        }
    };
    section_bot();
    status
}

/// Page slug → (title, section count), in slug order.
fn sections_per_page(records: &[IndexRecord]) -> BTreeMap<&str, (&str, usize)> {
    let mut pages: BTreeMap<&str, (&str, usize)> = BTreeMap::new();
    for record in records {
        let entry = pages.entry(record.slug()).or_insert((record.title(), 0));
        if !record.is_page() {
            entry.1 += 1;
        }
    }
    pages
}
