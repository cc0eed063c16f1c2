//! Cross-reference resolution.
//!
//! Runs once after assembly. Every pass is a by-name lookup against a
//! sibling list of the already-built graph; matches are stored as indices,
//! misses are recorded as diagnostics and never abort ingestion.

use crate::types::*;
use std::collections::HashMap;
use tracing::warn;

/// Non-fatal finding from cross-reference resolution. The graph stays
/// complete and usable; the named back-reference is simply unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A placed element or part declared a library name that matches no
    /// embedded library.
    UnresolvedLibrary { owner: String, library: String },
    /// A signal's contact reference named a placed element that does not
    /// exist on the board.
    UnresolvedElement { signal: String, element: String },
    /// A net segment's pin reference named a part that does not exist in
    /// the schematic.
    UnresolvedPart { net: String, part: String },
}

pub(crate) fn link(drawing: &mut Drawing) -> Vec<Diagnostic> {
    match &mut drawing.design {
        Design::Board(board) => link_board(board),
        Design::Schematic(schematic) => link_schematic(schematic),
        Design::Library(_) => Vec::new(),
    }
}

fn link_board(board: &mut Board) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let libraries = named_indices(board.libraries.iter().map(|l| l.name.as_deref()));
    for element in &mut board.elements {
        match libraries.get(element.library.as_str()) {
            Some(&idx) => element.library_idx = Some(idx),
            None => {
                warn!(
                    element = %element.name,
                    library = %element.library,
                    "element references unknown library"
                );
                diagnostics.push(Diagnostic::UnresolvedLibrary {
                    owner: element.name.clone(),
                    library: element.library.clone(),
                });
            }
        }
    }

    let elements = named_indices(board.elements.iter().map(|e| Some(e.name.as_str())));
    for signal in &mut board.signals {
        for item in &mut signal.items {
            let SignalItem::ContactRef(cref) = item else {
                continue;
            };
            match elements.get(cref.element.as_str()) {
                Some(&idx) => cref.element_idx = Some(idx),
                None => {
                    warn!(
                        signal = %signal.name,
                        element = %cref.element,
                        "contact reference names unknown element"
                    );
                    diagnostics.push(Diagnostic::UnresolvedElement {
                        signal: signal.name.clone(),
                        element: cref.element.clone(),
                    });
                }
            }
        }
    }

    diagnostics
}

fn link_schematic(schematic: &mut Schematic) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let libraries = named_indices(schematic.libraries.iter().map(|l| l.name.as_deref()));
    link_parts(&mut schematic.parts, &libraries, &mut diagnostics);
    link_sheets(&mut schematic.sheets, &schematic.parts, &mut diagnostics);

    // Modules are their own part scope; their parts still resolve against
    // the schematic's libraries.
    for module in &mut schematic.modules {
        link_parts(&mut module.parts, &libraries, &mut diagnostics);
        link_sheets(&mut module.sheets, &module.parts, &mut diagnostics);
    }

    diagnostics
}

fn link_parts(
    parts: &mut [Part],
    libraries: &HashMap<&str, usize>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for part in parts {
        match libraries.get(part.library.as_str()) {
            Some(&idx) => part.library_idx = Some(idx),
            None => {
                warn!(
                    part = %part.name,
                    library = %part.library,
                    "part references unknown library"
                );
                diagnostics.push(Diagnostic::UnresolvedLibrary {
                    owner: part.name.clone(),
                    library: part.library.clone(),
                });
            }
        }
    }
}

fn link_sheets(sheets: &mut [Sheet], parts: &[Part], diagnostics: &mut Vec<Diagnostic>) {
    let parts = named_indices(parts.iter().map(|p| Some(p.name.as_str())));
    for sheet in sheets {
        for net in &mut sheet.nets {
            for segment in &mut net.segments {
                for item in &mut segment.items {
                    let SegmentItem::PinRef(pinref) = item else {
                        continue;
                    };
                    match parts.get(pinref.part.as_str()) {
                        Some(&idx) => pinref.part_idx = Some(idx),
                        None => {
                            warn!(
                                net = %net.name,
                                part = %pinref.part,
                                "pin reference names unknown part"
                            );
                            diagnostics.push(Diagnostic::UnresolvedPart {
                                net: net.name.clone(),
                                part: pinref.part.clone(),
                            });
                        }
                    }
                }
            }
        }
    }
}

/// Name → position map. Later entries win on duplicate names, matching the
/// editor's behavior of finding the last definition.
fn named_indices<'a>(names: impl Iterator<Item = Option<&'a str>>) -> HashMap<&'a str, usize> {
    names
        .enumerate()
        .filter_map(|(idx, name)| name.map(|n| (n, idx)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_library(name: &str) -> Library {
        Library {
            name: Some(name.to_string()),
            description: None,
            packages: Vec::new(),
            packages3d: Vec::new(),
            symbols: Vec::new(),
            devicesets: Vec::new(),
        }
    }

    fn placed_element(name: &str, library: &str) -> Element {
        Element {
            name: name.to_string(),
            library: library.to_string(),
            library_urn: None,
            package: "P".to_string(),
            package3d_urn: None,
            value: String::new(),
            x: 0.0,
            y: 0.0,
            locked: false,
            populate: true,
            smashed: false,
            rot: Rot::default(),
            grouprefs: Vec::new(),
            attributes: Vec::new(),
            variants: Vec::new(),
            library_idx: None,
        }
    }

    fn board_with(libraries: Vec<Library>, elements: Vec<Element>, signals: Vec<Signal>) -> Board {
        Board {
            description: None,
            plain: Vec::new(),
            libraries,
            attributes: Vec::new(),
            variant_defs: Vec::new(),
            classes: Vec::new(),
            design_rules: None,
            autorouter: Vec::new(),
            groups: Vec::new(),
            elements,
            signals,
            mfg_preview_colors: Vec::new(),
            errors: Vec::new(),
            fusion_sync: None,
            fusion_team: None,
        }
    }

    #[test]
    fn element_library_resolves_by_name() {
        let mut board = board_with(
            vec![empty_library("A"), empty_library("B")],
            vec![placed_element("R1", "B")],
            Vec::new(),
        );
        let diagnostics = link_board(&mut board);
        assert!(diagnostics.is_empty());
        assert_eq!(board.elements[0].library_idx, Some(1));
    }

    #[test]
    fn unresolved_library_is_diagnostic_not_error() {
        let mut board = board_with(
            vec![empty_library("A")],
            vec![placed_element("R1", "MISSING")],
            Vec::new(),
        );
        let diagnostics = link_board(&mut board);
        assert_eq!(board.elements[0].library_idx, None);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::UnresolvedLibrary {
                owner: "R1".to_string(),
                library: "MISSING".to_string(),
            }]
        );
    }

    #[test]
    fn contactref_resolves_placed_element() {
        let signal = Signal {
            name: "GND".to_string(),
            class: 0,
            airwires_hidden: false,
            items: vec![
                SignalItem::ContactRef(ContactRef {
                    element: "R1".to_string(),
                    pad: "1".to_string(),
                    route: None,
                    route_tag: String::new(),
                    element_idx: None,
                }),
                SignalItem::ContactRef(ContactRef {
                    element: "GHOST".to_string(),
                    pad: "2".to_string(),
                    route: None,
                    route_tag: String::new(),
                    element_idx: None,
                }),
            ],
        };
        let mut board = board_with(
            vec![empty_library("A")],
            vec![placed_element("R1", "A")],
            vec![signal],
        );

        let diagnostics = link_board(&mut board);

        let refs: Vec<_> = board.signals[0]
            .items
            .iter()
            .filter_map(|i| match i {
                SignalItem::ContactRef(c) => Some(c.element_idx),
                _ => None,
            })
            .collect();
        assert_eq!(refs, vec![Some(0), None]);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::UnresolvedElement {
                signal: "GND".to_string(),
                element: "GHOST".to_string(),
            }]
        );
    }
}
