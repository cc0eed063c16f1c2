use super::{Board, Library, Schematic};

/// Root container for one designed artifact plus its grid/layer/settings
/// metadata. A drawing owns exactly one design payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    pub settings: Settings,
    pub grid: Option<Grid>,
    pub layers: Vec<Layer>,
    pub design: Design,
}

/// The Library, Schematic, or Board payload of a Drawing (mutually
/// exclusive). Which variant is present determines the file kind, not the
/// file extension.
#[derive(Debug, Clone, PartialEq)]
pub enum Design {
    Library(Library),
    Schematic(Schematic),
    Board(Board),
}

impl Design {
    pub fn kind(&self) -> DesignKind {
        match self {
            Design::Library(_) => DesignKind::Library,
            Design::Schematic(_) => DesignKind::Schematic,
            Design::Board(_) => DesignKind::Board,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignKind {
    Library,
    Schematic,
    Board,
}

/// Editor settings stored in the drawing header. Only the documented subset
/// is ingested; the rest of the `<settings>` content is intentionally not
/// modeled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub always_vector_font: bool,
    pub vertical_text: VerticalText,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            always_vector_font: false,
            vertical_text: VerticalText::Up,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalText {
    Up,
    Off,
}

/// Grid configuration of the drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub distance: Option<f64>,
    pub unit_dist: Option<GridUnit>,
    pub unit: Option<GridUnit>,
    pub style: GridStyle,
    pub multiple: i32,
    pub display: bool,
    pub alt_distance: Option<f64>,
    pub alt_unit_dist: Option<GridUnit>,
    pub alt_unit: Option<GridUnit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridUnit {
    Mic,
    Mm,
    Mil,
    Inch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridStyle {
    Lines,
    Dots,
}

/// One entry of the drawing's layer table.
///
/// `deletable` is not part of the file; it is computed after ingestion from
/// the reserved layer-number set of the drawing's design kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub number: i32,
    pub name: String,
    pub color: i32,
    pub fill: i32,
    pub visible: bool,
    pub active: bool,
    pub deletable: bool,
}

/// Version compatibility note carried next to the drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub version: String,
    pub severity: Severity,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}
