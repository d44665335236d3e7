//! Listing of the files produced by a conversion

use std::fs;
use std::path::Path;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Table};
use console::style;

use crate::error::Result;

/// A file in the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub name: String,
    pub size: u64,
}

/// List the output directory's entries with their sizes, sorted by name
pub fn list_output_files(dir: &Path) -> Result<Vec<OutputFile>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        files.push(OutputFile {
            name: entry.file_name().to_string_lossy().to_string(),
            size: entry.metadata()?.len(),
        });
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

/// Build the table shown after conversion
pub fn output_files_table(files: &[OutputFile]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("File").add_attribute(Attribute::Bold),
        Cell::new("Size (bytes)").add_attribute(Attribute::Bold),
    ]);
    for file in files {
        table.add_row(vec![
            Cell::new(&file.name),
            Cell::new(file.size).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Print the files generated by the conversion
pub fn display_output_files(files: &[OutputFile]) {
    println!();
    println!(
        "    {} {}",
        style("📦").cyan(),
        style("FILES GENERATED AFTER CONVERSION").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    for line in output_files_table(files).to_string().lines() {
        println!("    {}", line);
    }
}
