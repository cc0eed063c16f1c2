//! EAGLE XML ingestion.
//!
//! Parses EAGLE's design-interchange format (library `.lbr`, schematic
//! `.sch`, board `.brd`) into a strongly-typed, immutable design graph.
//! The grammar is treated as a closed contract: unknown tags and attributes
//! reject the file instead of being skipped. Cross-references between
//! sibling subtrees (placed element → embedded library, signal contact →
//! placed element) are resolved in a second pass; a miss is a recorded
//! diagnostic, not an error.

mod decode;
mod layers;
mod parse;
mod resolve;
pub mod types;

pub use layers::is_reserved;
pub use resolve::Diagnostic;
pub use types::*;

use roxmltree::Document;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EagleError {
    #[error("XML parse error: {0}")]
    XmlParse(#[from] roxmltree::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown tag <{tag}> in <{context}>")]
    UnknownTag { tag: String, context: &'static str },

    #[error("unknown attribute '{attr}' on <{element}>")]
    UnknownAttribute { attr: String, element: &'static str },

    #[error("missing required attribute '{attr}' on <{element}>")]
    MissingAttribute {
        element: &'static str,
        attr: &'static str,
    },

    #[error("missing required element: {0}")]
    MissingElement(&'static str),

    #[error("drawing already contains <{first}>, second design <{second}> is not allowed")]
    DuplicateDesign {
        first: &'static str,
        second: &'static str,
    },

    #[error("invalid number '{value}' for attribute '{attr}'")]
    InvalidNumber { value: String, attr: &'static str },

    #[error("invalid value '{value}' for attribute '{attr}'")]
    InvalidEnum { value: String, attr: &'static str },

    #[error("invalid rotation '{value}' for attribute '{attr}'")]
    InvalidRotation { value: String, attr: &'static str },

    #[error("invalid EAGLE structure: {0}")]
    InvalidStructure(String),
}

pub type Result<T> = std::result::Result<T, EagleError>;

/// A fully ingested EAGLE document.
///
/// Construction is atomic: any structural or value error aborts the whole
/// file and yields nothing. On success the graph is complete and internally
/// consistent; unresolved by-name references are listed in `diagnostics()`.
#[derive(Debug)]
pub struct EagleFile {
    version: String,
    notes: Vec<Note>,
    drawing: Drawing,
    diagnostics: Vec<Diagnostic>,
}

impl EagleFile {
    /// Parse an EAGLE document from an XML string.
    pub fn parse(xml: &str) -> Result<Self> {
        let doc = Document::parse(xml)?;
        let parsed = parse::parse_document(&doc)?;

        let mut drawing = parsed.drawing;
        let diagnostics = resolve::link(&mut drawing);
        layers::apply(&mut drawing);

        Ok(Self {
            version: parsed.version,
            notes: parsed.notes,
            drawing,
            diagnostics,
        })
    }

    /// Parse an EAGLE document from a file.
    pub fn parse_file(path: impl AsRef<Path>) -> Result<Self> {
        let xml = std::fs::read_to_string(path)?;
        Self::parse(&xml)
    }

    /// File format version string, e.g. "9.6.2".
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Version compatibility notes, if any.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn design(&self) -> &Design {
        &self.drawing.design
    }

    /// Which kind of document this is: library, schematic or board.
    pub fn kind(&self) -> DesignKind {
        self.drawing.design.kind()
    }

    /// Unresolved cross-references found after assembly.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_types_compile() {
        let _err = EagleError::MissingElement("layers");
        let _err = EagleError::MissingAttribute {
            element: "wire",
            attr: "x1",
        };
    }

    #[test]
    fn parse_minimal_library() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<eagle version="6.0">
  <drawing>
    <layers>
      <layer number="1" name="Top" color="4" fill="1"/>
    </layers>
    <library name="L1">
      <packages/>
      <symbols/>
      <devicesets/>
    </library>
  </drawing>
</eagle>"#;

        let file = EagleFile::parse(xml).expect("minimal library should parse");
        assert_eq!(file.version(), "6.0");
        assert_eq!(file.kind(), DesignKind::Library);
        assert_eq!(file.drawing().layers.len(), 1);
        assert_eq!(file.drawing().layers[0].number, 1);
        assert_eq!(file.drawing().layers[0].name, "Top");

        let Design::Library(library) = file.design() else {
            panic!("expected a library design");
        };
        assert_eq!(library.name.as_deref(), Some("L1"));
        assert!(file.diagnostics().is_empty());
    }
}
