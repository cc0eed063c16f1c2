use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, Color, Table};
use eagle::{Design, EagleFile};

pub fn execute(file: &Path) -> Result<()> {
    let doc = EagleFile::parse_file(file)?;
    log::debug!(
        "parsed {:?} document with {} layers",
        doc.kind(),
        doc.drawing().layers.len()
    );

    println!("{}", "Document Summary".bold());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(comfy_table::ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Version").fg(Color::Cyan),
        Cell::new(doc.version()),
    ]);
    table.add_row(vec![
        Cell::new("Layers").fg(Color::Cyan),
        Cell::new(doc.drawing().layers.len()),
    ]);

    match doc.design() {
        Design::Library(library) => {
            table.add_row(vec![Cell::new("Kind").fg(Color::Cyan), Cell::new("library")]);
            table.add_row(vec![
                Cell::new("Packages").fg(Color::Cyan),
                Cell::new(library.packages.len()),
            ]);
            table.add_row(vec![
                Cell::new("Symbols").fg(Color::Cyan),
                Cell::new(library.symbols.len()),
            ]);
            table.add_row(vec![
                Cell::new("Device sets").fg(Color::Cyan),
                Cell::new(library.devicesets.len()),
            ]);
        }
        Design::Schematic(schematic) => {
            table.add_row(vec![
                Cell::new("Kind").fg(Color::Cyan),
                Cell::new("schematic"),
            ]);
            table.add_row(vec![
                Cell::new("Libraries").fg(Color::Cyan),
                Cell::new(schematic.libraries.len()),
            ]);
            table.add_row(vec![
                Cell::new("Parts").fg(Color::Cyan),
                Cell::new(schematic.parts.len()),
            ]);
            table.add_row(vec![
                Cell::new("Sheets").fg(Color::Cyan),
                Cell::new(schematic.sheets.len()),
            ]);
            let nets: usize = schematic.sheets.iter().map(|s| s.nets.len()).sum();
            table.add_row(vec![Cell::new("Nets").fg(Color::Cyan), Cell::new(nets)]);
        }
        Design::Board(board) => {
            table.add_row(vec![Cell::new("Kind").fg(Color::Cyan), Cell::new("board")]);
            table.add_row(vec![
                Cell::new("Libraries").fg(Color::Cyan),
                Cell::new(board.libraries.len()),
            ]);
            table.add_row(vec![
                Cell::new("Elements").fg(Color::Cyan),
                Cell::new(board.elements.len()),
            ]);
            table.add_row(vec![
                Cell::new("Signals").fg(Color::Cyan),
                Cell::new(board.signals.len()),
            ]);
        }
    }

    println!("{table}");

    super::report_diagnostics(doc.diagnostics());
    Ok(())
}
