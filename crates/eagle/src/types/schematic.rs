use super::{
    Attribute, Description, Junction, Label, Library, PinDirection, PlainItem, Probe, Rot,
    TextFont, Wire, WireStyle,
};

/// Schematic design: libraries, parts and sheets plus design-wide metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Schematic {
    pub xref_label: Option<String>,
    pub xref_part: Option<String>,
    pub description: Option<Description>,
    pub libraries: Vec<Library>,
    pub attributes: Vec<Attribute>,
    pub variant_defs: Vec<VariantDef>,
    pub classes: Vec<NetClass>,
    pub modules: Vec<Module>,
    pub groups: Vec<Group>,
    pub parts: Vec<Part>,
    pub sheets: Vec<Sheet>,
    pub errors: Vec<Approved>,
}

/// Assembly variant declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantDef {
    pub name: String,
    pub current: bool,
}

/// Net class with routing width/drill and per-class clearances.
#[derive(Debug, Clone, PartialEq)]
pub struct NetClass {
    pub number: i32,
    pub name: String,
    pub width: f64,
    pub drill: f64,
    pub clearances: Vec<Clearance>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clearance {
    pub class: i32,
    pub value: f64,
}

/// Reusable sub-schematic with its own sheets and ports.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub name: String,
    pub prefix: String,
    pub dx: f64,
    pub dy: f64,
    pub description: Option<Description>,
    pub ports: Vec<Port>,
    pub variant_defs: Vec<VariantDef>,
    pub groups: Vec<Group>,
    pub parts: Vec<Part>,
    pub sheets: Vec<Sheet>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Port {
    pub name: String,
    pub side: PortSide,
    pub coord: f64,
    pub direction: PinDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortSide {
    Top,
    Bottom,
    Left,
    Right,
}

/// Named object group. Used by both schematics and boards.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    pub selectable: Option<bool>,
    pub width: Option<f64>,
    pub title_size: Option<f64>,
    pub title_font: Option<TextFont>,
    pub style: Option<WireStyle>,
    pub show_annotations: Option<bool>,
    pub layer: Option<i32>,
    pub grouprefs: Vec<String>,
    pub description: Option<Description>,
    pub attributes: Vec<Attribute>,
}

/// Placed component on the schematic side. `library_idx` is filled by the
/// resolver and indexes `Schematic::libraries`.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub name: String,
    pub library: String,
    pub library_urn: Option<String>,
    pub deviceset: String,
    pub device: String,
    pub package3d_urn: Option<String>,
    pub technology: String,
    pub value: Option<String>,
    pub attributes: Vec<Attribute>,
    pub variants: Vec<PartVariant>,
    pub library_idx: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PartVariant {
    pub name: String,
    pub populate: bool,
    pub value: Option<String>,
    pub technology: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub description: Option<Description>,
    pub plain: Vec<PlainItem>,
    pub module_insts: Vec<ModuleInst>,
    pub instances: Vec<Instance>,
    pub busses: Vec<Bus>,
    pub nets: Vec<Net>,
}

/// Placement of a module on a sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleInst {
    pub name: String,
    pub module: String,
    pub module_variant: Option<String>,
    pub x: f64,
    pub y: f64,
    pub offset: i32,
    pub smashed: bool,
    pub rot: Rot,
}

/// Placement of one gate of a part on a sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub part: String,
    pub gate: String,
    pub x: f64,
    pub y: f64,
    pub smashed: bool,
    pub rot: Rot,
    pub grouprefs: Vec<String>,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bus {
    pub name: String,
    pub segments: Vec<Segment>,
}

/// Electrical net; owns its segments in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Net {
    pub name: String,
    pub class: i32,
    pub segments: Vec<Segment>,
}

/// One contiguous piece of a net: an ordered, heterogeneous list of
/// connection points, wires and annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub items: Vec<SegmentItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SegmentItem {
    PinRef(PinRef),
    PortRef(PortRef),
    Wire(Wire),
    Junction(Junction),
    Label(Label),
    Probe(Probe),
}

/// Connection of a segment to a gate pin. `part_idx` is filled by the
/// resolver and indexes `Schematic::parts`.
#[derive(Debug, Clone, PartialEq)]
pub struct PinRef {
    pub part: String,
    pub gate: String,
    pub pin: String,
    pub part_idx: Option<usize>,
}

/// Connection of a segment to a module instance port.
#[derive(Debug, Clone, PartialEq)]
pub struct PortRef {
    pub module_inst: String,
    pub port: String,
}

/// Approved (suppressed) ERC/DRC error, identified by hash.
#[derive(Debug, Clone, PartialEq)]
pub struct Approved {
    pub hash: String,
}
