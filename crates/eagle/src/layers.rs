//! Reserved layer numbers.
//!
//! EAGLE fixes the meaning of certain layer numbers per editor kind; those
//! layers may be renamed but never deleted. The sets are closed and static.

use crate::types::{DesignKind, Drawing};

/// Mark each ingested layer's `deletable` flag from the reserved set of the
/// drawing's design kind. Runs once per drawing, after assembly.
pub(crate) fn apply(drawing: &mut Drawing) {
    let kind = drawing.design.kind();
    for layer in &mut drawing.layers {
        layer.deletable = !is_reserved(kind, layer.number);
    }
}

/// Whether `number` belongs to the fixed reserved-layer set for `kind`.
///
/// Boards reserve the copper/manufacturing range 1-49 plus tDocu/bDocu
/// (51, 52); schematics reserve the symbol range 91-98; libraries hold both
/// packages and symbols and reserve the union.
pub fn is_reserved(kind: DesignKind, number: i32) -> bool {
    match kind {
        DesignKind::Board => board_reserved(number),
        DesignKind::Schematic => schematic_reserved(number),
        DesignKind::Library => board_reserved(number) || schematic_reserved(number),
    }
}

fn board_reserved(number: i32) -> bool {
    matches!(number, 1..=49 | 51 | 52)
}

fn schematic_reserved(number: i32) -> bool {
    matches!(number, 91..=98)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_reserves_copper_and_docu() {
        assert!(is_reserved(DesignKind::Board, 1));
        assert!(is_reserved(DesignKind::Board, 16));
        assert!(is_reserved(DesignKind::Board, 44));
        assert!(is_reserved(DesignKind::Board, 51));
        assert!(!is_reserved(DesignKind::Board, 50));
        assert!(!is_reserved(DesignKind::Board, 94));
        assert!(!is_reserved(DesignKind::Board, 104));
    }

    #[test]
    fn schematic_reserves_symbol_range() {
        assert!(is_reserved(DesignKind::Schematic, 91));
        assert!(is_reserved(DesignKind::Schematic, 94));
        assert!(is_reserved(DesignKind::Schematic, 98));
        assert!(!is_reserved(DesignKind::Schematic, 1));
        assert!(!is_reserved(DesignKind::Schematic, 99));
    }

    #[test]
    fn library_reserves_both() {
        assert!(is_reserved(DesignKind::Library, 1));
        assert!(is_reserved(DesignKind::Library, 94));
        assert!(!is_reserved(DesignKind::Library, 104));
    }
}
