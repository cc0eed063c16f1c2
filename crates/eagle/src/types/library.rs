use super::{
    Attribute, Circle, Description, Dimension, Frame, Hole, Pad, Pin, Polygon, Rectangle, Smd,
    Text, Wire,
};

/// Component library: packages (footprints), schematic symbols and the
/// device sets tying them together. Boards and schematics embed copies of
/// the libraries their placed parts came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Library {
    /// Only present on libraries embedded in a board or schematic; a
    /// standalone `.lbr` drawing leaves it unset.
    pub name: Option<String>,
    pub description: Option<Description>,
    pub packages: Vec<Package>,
    pub packages3d: Vec<Package3d>,
    pub symbols: Vec<Symbol>,
    pub devicesets: Vec<DeviceSet>,
}

/// Footprint: the board-side geometry of a component.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub name: String,
    pub description: Option<Description>,
    /// Graphics and pads in document order.
    pub items: Vec<PackageItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PackageItem {
    Polygon(Polygon),
    Wire(Wire),
    Text(Text),
    Dimension(Dimension),
    Circle(Circle),
    Rectangle(Rectangle),
    Frame(Frame),
    Hole(Hole),
    Pad(Pad),
    Smd(Smd),
}

/// Managed 3D model reference attached to a package.
#[derive(Debug, Clone, PartialEq)]
pub struct Package3d {
    pub name: String,
    pub urn: String,
    pub package_type: String,
    pub description: Option<Description>,
    pub instances: Vec<PackageInstance>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackageInstance {
    pub name: String,
}

/// Schematic symbol: the sheet-side geometry of a component.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub description: Option<Description>,
    pub items: Vec<SymbolItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SymbolItem {
    Polygon(Polygon),
    Wire(Wire),
    Text(Text),
    Dimension(Dimension),
    Pin(Pin),
    Circle(Circle),
    Rectangle(Rectangle),
    Frame(Frame),
}

/// Hierarchy mapping a schematic symbol to one or more interchangeable
/// footprints: a device set owns gates (symbol placements) and devices
/// (package bindings with pin→pad connections).
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSet {
    pub name: String,
    pub prefix: String,
    pub uservalue: bool,
    pub description: Option<Description>,
    pub gates: Vec<Gate>,
    pub devices: Vec<Device>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gate {
    pub name: String,
    pub symbol: String,
    pub x: f64,
    pub y: f64,
    pub add_level: AddLevel,
    pub swap_level: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddLevel {
    Must,
    Can,
    Next,
    Request,
    Always,
}

/// One package binding of a device set.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    pub name: String,
    pub package: Option<String>,
    pub connects: Vec<Connect>,
    pub technologies: Vec<Technology>,
    pub package3d_instances: Vec<Package3dInstance>,
}

/// Gate/pin → pad mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Connect {
    pub gate: String,
    pub pin: String,
    pub pad: String,
    pub route: ContactRoute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactRoute {
    All,
    Any,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Technology {
    pub name: String,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Package3dInstance {
    pub package3d_urn: String,
}
