//! Flat graphic and connectivity primitives shared by packages, symbols,
//! sheets and boards.

/// Decoded rotation token (`[S][M]R<angle>`).
///
/// `spin` keeps text upright-agnostic, `mirror` flips around the y axis,
/// `angle` is in degrees counterclockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rot {
    pub mirror: bool,
    pub spin: bool,
    pub angle: f64,
}

impl Default for Rot {
    fn default() -> Self {
        Self {
            mirror: false,
            spin: false,
            angle: 0.0,
        }
    }
}

/// Line segment, optionally curved. `curve` is the arc angle in degrees;
/// 0 means straight.
#[derive(Debug, Clone, PartialEq)]
pub struct Wire {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub width: f64,
    pub layer: i32,
    /// Airwire extent ("<from>-<to>" layer span), only used on signal wires.
    pub extent: Option<String>,
    pub style: WireStyle,
    pub curve: f64,
    pub cap: WireCap,
    pub grouprefs: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireStyle {
    Continuous,
    LongDash,
    ShortDash,
    DashDot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireCap {
    Flat,
    Round,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub layer: i32,
    pub font: TextFont,
    pub ratio: i32,
    pub rot: Rot,
    pub align: Align,
    /// Line distance in percent.
    pub distance: i32,
    pub grouprefs: Vec<String>,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFont {
    Vector,
    Proportional,
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    BottomLeft,
    BottomCenter,
    BottomRight,
    CenterLeft,
    Center,
    CenterRight,
    TopLeft,
    TopCenter,
    TopRight,
}

/// Measurement annotation between two points with a text anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub x3: f64,
    pub y3: f64,
    pub layer: i32,
    pub dtype: DimensionType,
    pub width: f64,
    pub ext_width: f64,
    pub ext_length: f64,
    pub ext_offset: f64,
    pub text_size: f64,
    pub text_ratio: i32,
    pub unit: super::GridUnit,
    pub precision: i32,
    pub visible: bool,
    pub grouprefs: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionType {
    Parallel,
    Horizontal,
    Vertical,
    Radius,
    Diameter,
    Angle,
    Leader,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub width: f64,
    pub layer: i32,
    pub grouprefs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub layer: i32,
    pub rot: Rot,
    pub grouprefs: Vec<String>,
}

/// Drawing frame with row/column index borders.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub columns: i32,
    pub rows: i32,
    pub layer: i32,
    pub border_left: bool,
    pub border_top: bool,
    pub border_right: bool,
    pub border_bottom: bool,
    pub grouprefs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hole {
    pub x: f64,
    pub y: f64,
    pub drill: f64,
    pub grouprefs: Vec<String>,
}

/// Through-hole pad. `diameter` 0 means automatic sizing from the drill.
#[derive(Debug, Clone, PartialEq)]
pub struct Pad {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub drill: f64,
    pub diameter: f64,
    pub shape: PadShape,
    pub rot: Rot,
    pub stop: bool,
    pub thermals: bool,
    pub first: bool,
    pub grouprefs: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadShape {
    Square,
    Round,
    Octagon,
    Long,
    Offset,
}

/// Surface-mount pad. `roundness` is the corner rounding in percent.
#[derive(Debug, Clone, PartialEq)]
pub struct Smd {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub layer: i32,
    pub roundness: i32,
    pub rot: Rot,
    pub stop: bool,
    pub thermals: bool,
    pub cream: bool,
    pub grouprefs: Vec<String>,
}

/// Symbol connection point.
#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub visible: PinVisible,
    pub length: PinLength,
    pub direction: PinDirection,
    pub function: PinFunction,
    pub swap_level: i32,
    pub rot: Rot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinVisible {
    Off,
    Pad,
    Pin,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinLength {
    Point,
    Short,
    Middle,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinDirection {
    Nc,
    In,
    Out,
    Io,
    Oc,
    Pwr,
    Pas,
    Hiz,
    Sup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinFunction {
    None,
    Dot,
    Clk,
    DotClk,
}

/// Filled area. On copper layers the pour mode and rank control how the
/// area is computed against other objects of the same signal.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub width: f64,
    pub layer: i32,
    pub spacing: Option<f64>,
    pub pour: PolygonPour,
    pub isolate: Option<f64>,
    pub orphans: bool,
    pub thermals: bool,
    pub rank: i32,
    pub grouprefs: Vec<String>,
    pub vertices: Vec<Vertex>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonPour {
    Solid,
    Hatch,
    Cutout,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub curve: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    pub width: f64,
    pub vertices: Vec<Vertex>,
}

/// Plated through connection between copper layers. `extent` is the layer
/// span, e.g. "1-16".
#[derive(Debug, Clone, PartialEq)]
pub struct Via {
    pub x: f64,
    pub y: f64,
    pub extent: String,
    pub drill: f64,
    pub diameter: f64,
    pub shape: ViaShape,
    pub always_stop: bool,
    pub grouprefs: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViaShape {
    Square,
    Round,
    Octagon,
}

/// Named attribute, either a bare name/value pair (device technologies,
/// global attributes) or a placed, displayable one (smashed part texts).
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub size: Option<f64>,
    pub layer: Option<i32>,
    pub font: Option<TextFont>,
    pub ratio: Option<i32>,
    pub rot: Rot,
    pub display: AttributeDisplay,
    pub constant: bool,
    pub align: Align,
    pub grouprefs: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeDisplay {
    Off,
    Value,
    Name,
    Both,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Junction {
    pub x: f64,
    pub y: f64,
    pub grouprefs: Vec<String>,
}

/// Net name label on a sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub layer: i32,
    pub font: TextFont,
    pub ratio: i32,
    pub rot: Rot,
    pub xref: bool,
    pub align: Align,
    pub grouprefs: Vec<String>,
    pub value: String,
}

/// Simulation probe attached to a net.
#[derive(Debug, Clone, PartialEq)]
pub struct Probe {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub layer: i32,
    pub font: TextFont,
    pub ratio: i32,
    pub rot: Rot,
    pub xref: bool,
    pub grouprefs: Vec<String>,
    pub value: String,
}

/// Rich-text description. `locale` is only set for non-English languages;
/// the body keeps any nested markup verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Description {
    pub locale: Option<String>,
    pub text: String,
}

/// Free-floating graphics of a sheet or board (the `<plain>` section).
#[derive(Debug, Clone, PartialEq)]
pub enum PlainItem {
    Polygon(Polygon),
    Wire(Wire),
    Text(Text),
    Dimension(Dimension),
    Circle(Circle),
    Rectangle(Rectangle),
    Frame(Frame),
    Hole(Hole),
    Spline(Spline),
}
