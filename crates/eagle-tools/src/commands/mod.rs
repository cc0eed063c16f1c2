pub mod info;
pub mod layers;
pub mod nets;

use colored::Colorize;
use eagle::Diagnostic;

/// Print unresolved-reference diagnostics after the main command output.
pub fn report_diagnostics(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }

    println!();
    println!("{}", "Unresolved references".yellow().bold());
    for diagnostic in diagnostics {
        match diagnostic {
            Diagnostic::UnresolvedLibrary { owner, library } => {
                println!("  {} references unknown library '{}'", owner, library)
            }
            Diagnostic::UnresolvedElement { signal, element } => {
                println!("  signal {} contacts unknown element '{}'", signal, element)
            }
            Diagnostic::UnresolvedPart { net, part } => {
                println!("  net {} pins unknown part '{}'", net, part)
            }
        }
    }
}
