use std::path::Path;

use anyhow::{Result, bail};
use colored::Colorize;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, Table};
use eagle::{Design, EagleFile, SegmentItem, SignalItem};

pub fn execute(file: &Path) -> Result<()> {
    let doc = EagleFile::parse_file(file)?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    match doc.design() {
        Design::Schematic(schematic) => {
            println!("{}", "Nets".bold());
            table.set_header(vec!["Net", "Class", "Segments", "Pins"]);
            for sheet in &schematic.sheets {
                for net in &sheet.nets {
                    let pins = net
                        .segments
                        .iter()
                        .flat_map(|s| &s.items)
                        .filter(|i| matches!(i, SegmentItem::PinRef(_)))
                        .count();
                    table.add_row(vec![
                        Cell::new(&net.name),
                        Cell::new(net.class),
                        Cell::new(net.segments.len()),
                        Cell::new(pins),
                    ]);
                }
            }
        }
        Design::Board(board) => {
            println!("{}", "Signals".bold());
            table.set_header(vec!["Signal", "Class", "Contacts", "Wires", "Vias"]);
            for signal in &board.signals {
                let count = |pred: fn(&SignalItem) -> bool| {
                    signal.items.iter().filter(|i| pred(i)).count()
                };
                table.add_row(vec![
                    Cell::new(&signal.name),
                    Cell::new(signal.class),
                    Cell::new(count(|i| matches!(i, SignalItem::ContactRef(_)))),
                    Cell::new(count(|i| matches!(i, SignalItem::Wire(_)))),
                    Cell::new(count(|i| matches!(i, SignalItem::Via(_)))),
                ]);
            }
        }
        Design::Library(_) => bail!("libraries have no nets; use a .sch or .brd file"),
    }

    println!("{table}");

    super::report_diagnostics(doc.diagnostics());
    Ok(())
}
