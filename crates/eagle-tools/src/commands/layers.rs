use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, Table};
use eagle::EagleFile;

pub fn execute(file: &Path) -> Result<()> {
    let doc = EagleFile::parse_file(file)?;

    println!("{}", "Layer Table".bold());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Number", "Name", "Color", "Fill", "Visible", "Deletable"]);

    for layer in &doc.drawing().layers {
        table.add_row(vec![
            Cell::new(layer.number),
            Cell::new(&layer.name),
            Cell::new(layer.color),
            Cell::new(layer.fill),
            Cell::new(if layer.visible { "yes" } else { "no" }),
            Cell::new(if layer.deletable { "yes" } else { "no" }),
        ]);
    }

    println!("{table}");
    Ok(())
}
