//! Tag dispatcher and entity assemblers.
//!
//! One function per grammar production. Each follows the same two-phase
//! shape: attribute dispatch populates the scalar fields, then child
//! dispatch recurses into sub-assemblers. The grammar is a closed contract:
//! an unknown tag under a known context or an unknown attribute on a known
//! entity aborts ingestion instead of being skipped. The only exceptions
//! are `<settings>`, `<grid>` and `<filters>`, whose content is ingested to
//! a documented best-effort subset.

use crate::decode;
use crate::types::*;
use crate::{EagleError, Result};
use roxmltree::{Document, Node};
use tracing::debug;

pub(crate) fn parse_document(doc: &Document) -> Result<ParsedEagle> {
    let root = doc.root_element();

    if root.tag_name().name() != "eagle" {
        return Err(EagleError::InvalidStructure(format!(
            "expected root element <eagle>, found <{}>",
            root.tag_name().name()
        )));
    }

    let mut version = None;
    for attr in root.attributes() {
        match attr.name() {
            "version" => version = Some(attr.value().to_string()),
            other => return Err(unknown_attr(other, "eagle")),
        }
    }

    let mut notes = Vec::new();
    let mut drawing_node = None;
    for child in elements(root) {
        match child.tag_name().name() {
            "compatibility" => notes.extend(parse_compatibility(&child)?),
            "drawing" => {
                if drawing_node.is_some() {
                    return Err(EagleError::InvalidStructure(
                        "multiple <drawing> elements".to_string(),
                    ));
                }
                drawing_node = Some(child);
            }
            _ => return Err(unknown_tag(&child, "eagle")),
        }
    }

    let drawing = parse_drawing(&drawing_node.ok_or(EagleError::MissingElement("drawing"))?)?;

    Ok(ParsedEagle {
        version: require(version, "eagle", "version")?,
        notes,
        drawing,
    })
}

fn parse_compatibility(node: &Node) -> Result<Vec<Note>> {
    parse_list(node, "compatibility", "note", parse_note)
}

fn parse_note(node: &Node) -> Result<Note> {
    let mut version = None;
    let mut severity = None;
    for attr in node.attributes() {
        match attr.name() {
            "version" => version = Some(attr.value().to_string()),
            "severity" => severity = Some(decode::severity(attr.value(), "severity")?),
            other => return Err(unknown_attr(other, "note")),
        }
    }
    no_child_elements(node, "note")?;

    Ok(Note {
        version: require(version, "note", "version")?,
        severity: require(severity, "note", "severity")?,
        text: text_payload(node),
    })
}

fn parse_drawing(node: &Node) -> Result<Drawing> {
    no_attributes(node, "drawing")?;

    let mut settings = Settings::default();
    let mut grid = None;
    let mut layers = None;
    let mut design: Option<(&'static str, Design)> = None;

    for child in elements(*node) {
        match child.tag_name().name() {
            "settings" => settings = parse_settings(&child)?,
            "grid" => grid = Some(parse_grid(&child)?),
            "filters" => debug!("skipping <filters> content"),
            "layers" => layers = Some(parse_list(&child, "layers", "layer", parse_layer)?),
            "library" | "schematic" | "board" => {
                let tag: &'static str = match child.tag_name().name() {
                    "library" => "library",
                    "schematic" => "schematic",
                    _ => "board",
                };
                if let Some((first, _)) = &design {
                    return Err(EagleError::DuplicateDesign {
                        first: *first,
                        second: tag,
                    });
                }
                let parsed = match tag {
                    "library" => Design::Library(parse_library(&child)?),
                    "schematic" => Design::Schematic(parse_schematic(&child)?),
                    _ => Design::Board(parse_board(&child)?),
                };
                design = Some((tag, parsed));
            }
            _ => return Err(unknown_tag(&child, "drawing")),
        }
    }

    Ok(Drawing {
        settings,
        grid,
        layers: layers.ok_or(EagleError::MissingElement("layers"))?,
        design: design
            .ok_or(EagleError::MissingElement("library, schematic or board"))?
            .1,
    })
}

/// `<settings>` holds one `<setting>` per editor knob. Only the documented
/// subset is stored; unmodeled knobs are skipped, not rejected.
fn parse_settings(node: &Node) -> Result<Settings> {
    no_attributes(node, "settings")?;

    let mut settings = Settings::default();
    for child in elements(*node) {
        if child.tag_name().name() != "setting" {
            return Err(unknown_tag(&child, "settings"));
        }
        for attr in child.attributes() {
            match attr.name() {
                "alwaysvectorfont" => settings.always_vector_font = decode::boolean(attr.value()),
                "verticaltext" => {
                    settings.vertical_text = decode::vertical_text(attr.value(), "verticaltext")?
                }
                other => debug!(setting = other, "skipping unmodeled editor setting"),
            }
        }
    }

    Ok(settings)
}

/// `<grid>` is ingested best-effort like `<settings>`: documented attributes
/// are decoded strictly, unmodeled ones are skipped.
fn parse_grid(node: &Node) -> Result<Grid> {
    let mut grid = Grid {
        distance: None,
        unit_dist: None,
        unit: None,
        style: GridStyle::Lines,
        multiple: 1,
        display: false,
        alt_distance: None,
        alt_unit_dist: None,
        alt_unit: None,
    };

    for attr in node.attributes() {
        match attr.name() {
            "distance" => grid.distance = Some(decode::real(attr.value(), "distance")?),
            "unitdist" => grid.unit_dist = Some(decode::grid_unit(attr.value(), "unitdist")?),
            "unit" => grid.unit = Some(decode::grid_unit(attr.value(), "unit")?),
            "style" => grid.style = decode::grid_style(attr.value(), "style")?,
            "multiple" => grid.multiple = decode::int(attr.value(), "multiple")?,
            "display" => grid.display = decode::boolean(attr.value()),
            "altdistance" => grid.alt_distance = Some(decode::real(attr.value(), "altdistance")?),
            "altunitdist" => {
                grid.alt_unit_dist = Some(decode::grid_unit(attr.value(), "altunitdist")?)
            }
            "altunit" => grid.alt_unit = Some(decode::grid_unit(attr.value(), "altunit")?),
            other => debug!(attr = other, "skipping unmodeled grid attribute"),
        }
    }

    Ok(grid)
}

fn parse_layer(node: &Node) -> Result<Layer> {
    let mut number = None;
    let mut name = None;
    let mut color = None;
    let mut fill = None;
    let mut visible = true;
    let mut active = true;

    for attr in node.attributes() {
        match attr.name() {
            "number" => number = Some(decode::int(attr.value(), "number")?),
            "name" => name = Some(attr.value().to_string()),
            "color" => color = Some(decode::int(attr.value(), "color")?),
            "fill" => fill = Some(decode::int(attr.value(), "fill")?),
            "visible" => visible = decode::boolean(attr.value()),
            "active" => active = decode::boolean(attr.value()),
            other => return Err(unknown_attr(other, "layer")),
        }
    }
    no_child_elements(node, "layer")?;

    Ok(Layer {
        number: require(number, "layer", "number")?,
        name: require(name, "layer", "name")?,
        color: require(color, "layer", "color")?,
        fill: require(fill, "layer", "fill")?,
        visible,
        active,
        // computed by the layer policy once the design kind is known
        deletable: false,
    })
}

// ---------------------------------------------------------------------------
// Library

fn parse_library(node: &Node) -> Result<Library> {
    let mut name = None;
    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            other => return Err(unknown_attr(other, "library")),
        }
    }

    let mut library = Library {
        name,
        description: None,
        packages: Vec::new(),
        packages3d: Vec::new(),
        symbols: Vec::new(),
        devicesets: Vec::new(),
    };

    for child in elements(*node) {
        match child.tag_name().name() {
            "description" => library.description = Some(parse_description(&child)?),
            "packages" => {
                library.packages = parse_list(&child, "packages", "package", parse_package)?
            }
            "packages3d" => {
                library.packages3d =
                    parse_list(&child, "packages3d", "package3d", parse_package3d)?
            }
            "symbols" => library.symbols = parse_list(&child, "symbols", "symbol", parse_symbol)?,
            "devicesets" => {
                library.devicesets =
                    parse_list(&child, "devicesets", "deviceset", parse_deviceset)?
            }
            _ => return Err(unknown_tag(&child, "library")),
        }
    }

    Ok(library)
}

fn parse_package(node: &Node) -> Result<Package> {
    let mut name = None;
    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            other => return Err(unknown_attr(other, "package")),
        }
    }

    let mut description = None;
    let mut items = Vec::new();
    for child in elements(*node) {
        match child.tag_name().name() {
            "description" => description = Some(parse_description(&child)?),
            "polygon" => items.push(PackageItem::Polygon(parse_polygon(&child)?)),
            "wire" => items.push(PackageItem::Wire(parse_wire(&child)?)),
            "text" => items.push(PackageItem::Text(parse_text(&child)?)),
            "dimension" => items.push(PackageItem::Dimension(parse_dimension(&child)?)),
            "circle" => items.push(PackageItem::Circle(parse_circle(&child)?)),
            "rectangle" => items.push(PackageItem::Rectangle(parse_rectangle(&child)?)),
            "frame" => items.push(PackageItem::Frame(parse_frame(&child)?)),
            "hole" => items.push(PackageItem::Hole(parse_hole(&child)?)),
            "pad" => items.push(PackageItem::Pad(parse_pad(&child)?)),
            "smd" => items.push(PackageItem::Smd(parse_smd(&child)?)),
            _ => return Err(unknown_tag(&child, "package")),
        }
    }

    Ok(Package {
        name: require(name, "package", "name")?,
        description,
        items,
    })
}

fn parse_package3d(node: &Node) -> Result<Package3d> {
    let mut name = None;
    let mut urn = None;
    let mut package_type = None;
    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            "urn" => urn = Some(attr.value().to_string()),
            "type" => package_type = Some(attr.value().to_string()),
            other => return Err(unknown_attr(other, "package3d")),
        }
    }

    let mut description = None;
    let mut instances = Vec::new();
    for child in elements(*node) {
        match child.tag_name().name() {
            "description" => description = Some(parse_description(&child)?),
            "packageinstances" => {
                instances = parse_list(
                    &child,
                    "packageinstances",
                    "packageinstance",
                    parse_package_instance,
                )?
            }
            _ => return Err(unknown_tag(&child, "package3d")),
        }
    }

    Ok(Package3d {
        name: require(name, "package3d", "name")?,
        urn: require(urn, "package3d", "urn")?,
        package_type: require(package_type, "package3d", "type")?,
        description,
        instances,
    })
}

fn parse_package_instance(node: &Node) -> Result<PackageInstance> {
    let mut name = None;
    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            other => return Err(unknown_attr(other, "packageinstance")),
        }
    }
    no_child_elements(node, "packageinstance")?;

    Ok(PackageInstance {
        name: require(name, "packageinstance", "name")?,
    })
}

fn parse_symbol(node: &Node) -> Result<Symbol> {
    let mut name = None;
    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            other => return Err(unknown_attr(other, "symbol")),
        }
    }

    let mut description = None;
    let mut items = Vec::new();
    for child in elements(*node) {
        match child.tag_name().name() {
            "description" => description = Some(parse_description(&child)?),
            "polygon" => items.push(SymbolItem::Polygon(parse_polygon(&child)?)),
            "wire" => items.push(SymbolItem::Wire(parse_wire(&child)?)),
            "text" => items.push(SymbolItem::Text(parse_text(&child)?)),
            "dimension" => items.push(SymbolItem::Dimension(parse_dimension(&child)?)),
            "pin" => items.push(SymbolItem::Pin(parse_pin(&child)?)),
            "circle" => items.push(SymbolItem::Circle(parse_circle(&child)?)),
            "rectangle" => items.push(SymbolItem::Rectangle(parse_rectangle(&child)?)),
            "frame" => items.push(SymbolItem::Frame(parse_frame(&child)?)),
            _ => return Err(unknown_tag(&child, "symbol")),
        }
    }

    Ok(Symbol {
        name: require(name, "symbol", "name")?,
        description,
        items,
    })
}

fn parse_deviceset(node: &Node) -> Result<DeviceSet> {
    let mut name = None;
    let mut prefix = String::new();
    let mut uservalue = false;
    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            "prefix" => prefix = attr.value().to_string(),
            "uservalue" => uservalue = decode::boolean(attr.value()),
            other => return Err(unknown_attr(other, "deviceset")),
        }
    }

    let mut description = None;
    let mut gates = Vec::new();
    let mut devices = Vec::new();
    for child in elements(*node) {
        match child.tag_name().name() {
            "description" => description = Some(parse_description(&child)?),
            "gates" => gates = parse_list(&child, "gates", "gate", parse_gate)?,
            "devices" => devices = parse_list(&child, "devices", "device", parse_device)?,
            _ => return Err(unknown_tag(&child, "deviceset")),
        }
    }

    Ok(DeviceSet {
        name: require(name, "deviceset", "name")?,
        prefix,
        uservalue,
        description,
        gates,
        devices,
    })
}

fn parse_gate(node: &Node) -> Result<Gate> {
    let mut name = None;
    let mut symbol = None;
    let mut x = None;
    let mut y = None;
    let mut add_level = AddLevel::Next;
    let mut swap_level = 0;

    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            "symbol" => symbol = Some(attr.value().to_string()),
            "x" => x = Some(decode::real(attr.value(), "x")?),
            "y" => y = Some(decode::real(attr.value(), "y")?),
            "addlevel" => add_level = decode::add_level(attr.value(), "addlevel")?,
            "swaplevel" => swap_level = decode::int(attr.value(), "swaplevel")?,
            other => return Err(unknown_attr(other, "gate")),
        }
    }
    no_child_elements(node, "gate")?;

    Ok(Gate {
        name: require(name, "gate", "name")?,
        symbol: require(symbol, "gate", "symbol")?,
        x: require(x, "gate", "x")?,
        y: require(y, "gate", "y")?,
        add_level,
        swap_level,
    })
}

fn parse_device(node: &Node) -> Result<Device> {
    let mut name = String::new();
    let mut package = None;
    for attr in node.attributes() {
        match attr.name() {
            "name" => name = attr.value().to_string(),
            "package" => package = Some(attr.value().to_string()),
            other => return Err(unknown_attr(other, "device")),
        }
    }

    let mut connects = Vec::new();
    let mut technologies = Vec::new();
    let mut package3d_instances = Vec::new();
    for child in elements(*node) {
        match child.tag_name().name() {
            "connects" => connects = parse_list(&child, "connects", "connect", parse_connect)?,
            "technologies" => {
                technologies =
                    parse_list(&child, "technologies", "technology", parse_technology)?
            }
            "package3dinstances" => {
                package3d_instances = parse_list(
                    &child,
                    "package3dinstances",
                    "package3dinstance",
                    parse_package3d_instance,
                )?
            }
            _ => return Err(unknown_tag(&child, "device")),
        }
    }

    Ok(Device {
        name,
        package,
        connects,
        technologies,
        package3d_instances,
    })
}

fn parse_connect(node: &Node) -> Result<Connect> {
    let mut gate = None;
    let mut pin = None;
    let mut pad = None;
    let mut route = ContactRoute::All;

    for attr in node.attributes() {
        match attr.name() {
            "gate" => gate = Some(attr.value().to_string()),
            "pin" => pin = Some(attr.value().to_string()),
            "pad" => pad = Some(attr.value().to_string()),
            "route" => route = decode::contact_route(attr.value(), "route")?,
            other => return Err(unknown_attr(other, "connect")),
        }
    }
    no_child_elements(node, "connect")?;

    Ok(Connect {
        gate: require(gate, "connect", "gate")?,
        pin: require(pin, "connect", "pin")?,
        pad: require(pad, "connect", "pad")?,
        route,
    })
}

fn parse_technology(node: &Node) -> Result<Technology> {
    let mut name = None;
    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            other => return Err(unknown_attr(other, "technology")),
        }
    }

    let attributes = parse_children(node, "technology", "attribute", parse_attribute)?;

    Ok(Technology {
        name: require(name, "technology", "name")?,
        attributes,
    })
}

fn parse_package3d_instance(node: &Node) -> Result<Package3dInstance> {
    let mut package3d_urn = None;
    for attr in node.attributes() {
        match attr.name() {
            "package3d_urn" => package3d_urn = Some(attr.value().to_string()),
            other => return Err(unknown_attr(other, "package3dinstance")),
        }
    }
    no_child_elements(node, "package3dinstance")?;

    Ok(Package3dInstance {
        package3d_urn: require(package3d_urn, "package3dinstance", "package3d_urn")?,
    })
}

// ---------------------------------------------------------------------------
// Schematic

fn parse_schematic(node: &Node) -> Result<Schematic> {
    let mut xref_label = None;
    let mut xref_part = None;
    for attr in node.attributes() {
        match attr.name() {
            "xreflabel" => xref_label = Some(attr.value().to_string()),
            "xrefpart" => xref_part = Some(attr.value().to_string()),
            other => return Err(unknown_attr(other, "schematic")),
        }
    }

    let mut schematic = Schematic {
        xref_label,
        xref_part,
        description: None,
        libraries: Vec::new(),
        attributes: Vec::new(),
        variant_defs: Vec::new(),
        classes: Vec::new(),
        modules: Vec::new(),
        groups: Vec::new(),
        parts: Vec::new(),
        sheets: Vec::new(),
        errors: Vec::new(),
    };

    for child in elements(*node) {
        match child.tag_name().name() {
            "description" => schematic.description = Some(parse_description(&child)?),
            "libraries" => {
                schematic.libraries = parse_list(&child, "libraries", "library", parse_library)?
            }
            "attributes" => {
                schematic.attributes =
                    parse_list(&child, "attributes", "attribute", parse_attribute)?
            }
            "variantdefs" => {
                schematic.variant_defs =
                    parse_list(&child, "variantdefs", "variantdef", parse_variantdef)?
            }
            "classes" => schematic.classes = parse_list(&child, "classes", "class", parse_class)?,
            "modules" => schematic.modules = parse_list(&child, "modules", "module", parse_module)?,
            "groups" => {
                schematic.groups = parse_list(&child, "groups", "schematic_group", parse_group)?
            }
            "parts" => schematic.parts = parse_list(&child, "parts", "part", parse_part)?,
            "sheets" => schematic.sheets = parse_list(&child, "sheets", "sheet", parse_sheet)?,
            "errors" => schematic.errors = parse_list(&child, "errors", "approved", parse_approved)?,
            _ => return Err(unknown_tag(&child, "schematic")),
        }
    }

    Ok(schematic)
}

fn parse_variantdef(node: &Node) -> Result<VariantDef> {
    let mut name = None;
    let mut current = false;
    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            "current" => current = decode::boolean(attr.value()),
            other => return Err(unknown_attr(other, "variantdef")),
        }
    }
    no_child_elements(node, "variantdef")?;

    Ok(VariantDef {
        name: require(name, "variantdef", "name")?,
        current,
    })
}

fn parse_class(node: &Node) -> Result<NetClass> {
    let mut number = None;
    let mut name = None;
    let mut width = 0.0;
    let mut drill = 0.0;

    for attr in node.attributes() {
        match attr.name() {
            "number" => number = Some(decode::int(attr.value(), "number")?),
            "name" => name = Some(attr.value().to_string()),
            "width" => width = decode::real(attr.value(), "width")?,
            "drill" => drill = decode::real(attr.value(), "drill")?,
            other => return Err(unknown_attr(other, "class")),
        }
    }

    let clearances = parse_children(node, "class", "clearance", parse_clearance)?;

    Ok(NetClass {
        number: require(number, "class", "number")?,
        name: require(name, "class", "name")?,
        width,
        drill,
        clearances,
    })
}

fn parse_clearance(node: &Node) -> Result<Clearance> {
    let mut class = None;
    let mut value = 0.0;
    for attr in node.attributes() {
        match attr.name() {
            "class" => class = Some(decode::int(attr.value(), "class")?),
            "value" => value = decode::real(attr.value(), "value")?,
            other => return Err(unknown_attr(other, "clearance")),
        }
    }
    no_child_elements(node, "clearance")?;

    Ok(Clearance {
        class: require(class, "clearance", "class")?,
        value,
    })
}

fn parse_module(node: &Node) -> Result<Module> {
    let mut name = None;
    let mut prefix = String::new();
    let mut dx = None;
    let mut dy = None;

    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            "prefix" => prefix = attr.value().to_string(),
            "dx" => dx = Some(decode::real(attr.value(), "dx")?),
            "dy" => dy = Some(decode::real(attr.value(), "dy")?),
            other => return Err(unknown_attr(other, "module")),
        }
    }

    let mut description = None;
    let mut ports = Vec::new();
    let mut variant_defs = Vec::new();
    let mut groups = Vec::new();
    let mut parts = Vec::new();
    let mut sheets = Vec::new();
    for child in elements(*node) {
        match child.tag_name().name() {
            "description" => description = Some(parse_description(&child)?),
            "ports" => ports = parse_list(&child, "ports", "port", parse_port)?,
            "variantdefs" => {
                variant_defs = parse_list(&child, "variantdefs", "variantdef", parse_variantdef)?
            }
            "groups" => groups = parse_list(&child, "groups", "schematic_group", parse_group)?,
            "parts" => parts = parse_list(&child, "parts", "part", parse_part)?,
            "sheets" => sheets = parse_list(&child, "sheets", "sheet", parse_sheet)?,
            _ => return Err(unknown_tag(&child, "module")),
        }
    }

    Ok(Module {
        name: require(name, "module", "name")?,
        prefix,
        dx: require(dx, "module", "dx")?,
        dy: require(dy, "module", "dy")?,
        description,
        ports,
        variant_defs,
        groups,
        parts,
        sheets,
    })
}

fn parse_port(node: &Node) -> Result<Port> {
    let mut name = None;
    let mut side = None;
    let mut coord = None;
    let mut direction = PinDirection::Io;

    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            "side" => side = Some(decode::port_side(attr.value(), "side")?),
            "coord" => coord = Some(decode::real(attr.value(), "coord")?),
            "direction" => direction = decode::pin_direction(attr.value(), "direction")?,
            other => return Err(unknown_attr(other, "port")),
        }
    }
    no_child_elements(node, "port")?;

    Ok(Port {
        name: require(name, "port", "name")?,
        side: require(side, "port", "side")?,
        coord: require(coord, "port", "coord")?,
        direction,
    })
}

fn parse_group(node: &Node) -> Result<Group> {
    let mut group = Group {
        name: String::new(),
        selectable: None,
        width: None,
        title_size: None,
        title_font: None,
        style: None,
        show_annotations: None,
        layer: None,
        grouprefs: Vec::new(),
        description: None,
        attributes: Vec::new(),
    };
    let mut name = None;

    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            "selectable" => group.selectable = Some(decode::boolean(attr.value())),
            "width" => group.width = Some(decode::real(attr.value(), "width")?),
            "titleSize" => group.title_size = Some(decode::real(attr.value(), "titleSize")?),
            "titleFont" => {
                group.title_font = Some(decode::text_font(attr.value(), "titleFont")?)
            }
            "style" => group.style = Some(decode::wire_style(attr.value(), "style")?),
            "showAnnotations" => group.show_annotations = Some(decode::boolean(attr.value())),
            "layer" => group.layer = Some(decode::int(attr.value(), "layer")?),
            "grouprefs" => group.grouprefs = decode::grouprefs(attr.value()),
            other => return Err(unknown_attr(other, "schematic_group")),
        }
    }

    for child in elements(*node) {
        match child.tag_name().name() {
            "description" => group.description = Some(parse_description(&child)?),
            "attribute" => group.attributes.push(parse_attribute(&child)?),
            _ => return Err(unknown_tag(&child, "schematic_group")),
        }
    }

    group.name = require(name, "schematic_group", "name")?;
    Ok(group)
}

fn parse_part(node: &Node) -> Result<Part> {
    let mut name = None;
    let mut library = None;
    let mut library_urn = None;
    let mut deviceset = None;
    let mut device = None;
    let mut package3d_urn = None;
    let mut technology = String::new();
    let mut value = None;

    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            "library" => library = Some(attr.value().to_string()),
            "library_urn" => library_urn = Some(attr.value().to_string()),
            "deviceset" => deviceset = Some(attr.value().to_string()),
            "device" => device = Some(attr.value().to_string()),
            "package3d_urn" => package3d_urn = Some(attr.value().to_string()),
            "technology" => technology = attr.value().to_string(),
            "value" => value = Some(attr.value().to_string()),
            other => return Err(unknown_attr(other, "part")),
        }
    }

    let mut attributes = Vec::new();
    let mut variants = Vec::new();
    for child in elements(*node) {
        match child.tag_name().name() {
            "attribute" => attributes.push(parse_attribute(&child)?),
            "variant" => variants.push(parse_variant(&child)?),
            _ => return Err(unknown_tag(&child, "part")),
        }
    }

    Ok(Part {
        name: require(name, "part", "name")?,
        library: require(library, "part", "library")?,
        library_urn,
        deviceset: require(deviceset, "part", "deviceset")?,
        device: require(device, "part", "device")?,
        package3d_urn,
        technology,
        value,
        attributes,
        variants,
        library_idx: None,
    })
}

fn parse_variant(node: &Node) -> Result<PartVariant> {
    let mut name = None;
    let mut populate = true;
    let mut value = None;
    let mut technology = None;

    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            "populate" => populate = decode::boolean(attr.value()),
            "value" => value = Some(attr.value().to_string()),
            "technology" => technology = Some(attr.value().to_string()),
            other => return Err(unknown_attr(other, "variant")),
        }
    }
    no_child_elements(node, "variant")?;

    Ok(PartVariant {
        name: require(name, "variant", "name")?,
        populate,
        value,
        technology,
    })
}

fn parse_sheet(node: &Node) -> Result<Sheet> {
    no_attributes(node, "sheet")?;

    let mut sheet = Sheet {
        description: None,
        plain: Vec::new(),
        module_insts: Vec::new(),
        instances: Vec::new(),
        busses: Vec::new(),
        nets: Vec::new(),
    };

    for child in elements(*node) {
        match child.tag_name().name() {
            "description" => sheet.description = Some(parse_description(&child)?),
            "plain" => sheet.plain = parse_plain(&child)?,
            "moduleinsts" => {
                sheet.module_insts =
                    parse_list(&child, "moduleinsts", "moduleinst", parse_moduleinst)?
            }
            "instances" => {
                sheet.instances = parse_list(&child, "instances", "instance", parse_instance)?
            }
            "busses" => sheet.busses = parse_list(&child, "busses", "bus", parse_bus)?,
            "nets" => sheet.nets = parse_list(&child, "nets", "net", parse_net)?,
            _ => return Err(unknown_tag(&child, "sheet")),
        }
    }

    Ok(sheet)
}

fn parse_moduleinst(node: &Node) -> Result<ModuleInst> {
    let mut name = None;
    let mut module = None;
    let mut module_variant = None;
    let mut x = None;
    let mut y = None;
    let mut offset = 0;
    let mut smashed = false;
    let mut rot = Rot::default();

    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            "module" => module = Some(attr.value().to_string()),
            "modulevariant" => module_variant = Some(attr.value().to_string()),
            "x" => x = Some(decode::real(attr.value(), "x")?),
            "y" => y = Some(decode::real(attr.value(), "y")?),
            "offset" => offset = decode::int(attr.value(), "offset")?,
            "smashed" => smashed = decode::boolean(attr.value()),
            "rot" => rot = decode::rotation_orthogonal(attr.value(), "rot")?,
            other => return Err(unknown_attr(other, "moduleinst")),
        }
    }
    no_child_elements(node, "moduleinst")?;

    Ok(ModuleInst {
        name: require(name, "moduleinst", "name")?,
        module: require(module, "moduleinst", "module")?,
        module_variant,
        x: require(x, "moduleinst", "x")?,
        y: require(y, "moduleinst", "y")?,
        offset,
        smashed,
        rot,
    })
}

fn parse_instance(node: &Node) -> Result<Instance> {
    let mut part = None;
    let mut gate = None;
    let mut x = None;
    let mut y = None;
    let mut smashed = false;
    let mut rot = Rot::default();
    let mut grouprefs = Vec::new();

    for attr in node.attributes() {
        match attr.name() {
            "part" => part = Some(attr.value().to_string()),
            "gate" => gate = Some(attr.value().to_string()),
            "x" => x = Some(decode::real(attr.value(), "x")?),
            "y" => y = Some(decode::real(attr.value(), "y")?),
            "smashed" => smashed = decode::boolean(attr.value()),
            "rot" => rot = decode::rotation_orthogonal(attr.value(), "rot")?,
            "grouprefs" => grouprefs = decode::grouprefs(attr.value()),
            other => return Err(unknown_attr(other, "instance")),
        }
    }

    let mut attributes = Vec::new();
    for child in elements(*node) {
        match child.tag_name().name() {
            "attribute" => attributes.push(parse_attribute(&child)?),
            _ => return Err(unknown_tag(&child, "instance")),
        }
    }

    Ok(Instance {
        part: require(part, "instance", "part")?,
        gate: require(gate, "instance", "gate")?,
        x: require(x, "instance", "x")?,
        y: require(y, "instance", "y")?,
        smashed,
        rot,
        grouprefs,
        attributes,
    })
}

fn parse_bus(node: &Node) -> Result<Bus> {
    let mut name = None;
    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            other => return Err(unknown_attr(other, "bus")),
        }
    }

    let segments = parse_children(node, "bus", "segment", parse_segment)?;

    Ok(Bus {
        name: require(name, "bus", "name")?,
        segments,
    })
}

fn parse_net(node: &Node) -> Result<Net> {
    let mut name = None;
    let mut class = 0;
    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            "class" => class = decode::int(attr.value(), "class")?,
            other => return Err(unknown_attr(other, "net")),
        }
    }

    let segments = parse_children(node, "net", "segment", parse_segment)?;

    Ok(Net {
        name: require(name, "net", "name")?,
        class,
        segments,
    })
}

fn parse_segment(node: &Node) -> Result<Segment> {
    no_attributes(node, "segment")?;

    let mut items = Vec::new();
    for child in elements(*node) {
        match child.tag_name().name() {
            "pinref" => items.push(SegmentItem::PinRef(parse_pinref(&child)?)),
            "portref" => items.push(SegmentItem::PortRef(parse_portref(&child)?)),
            "wire" => items.push(SegmentItem::Wire(parse_wire(&child)?)),
            "junction" => items.push(SegmentItem::Junction(parse_junction(&child)?)),
            "label" => items.push(SegmentItem::Label(parse_label(&child)?)),
            "probe" => items.push(SegmentItem::Probe(parse_probe(&child)?)),
            _ => return Err(unknown_tag(&child, "segment")),
        }
    }

    Ok(Segment { items })
}

fn parse_pinref(node: &Node) -> Result<PinRef> {
    let mut part = None;
    let mut gate = None;
    let mut pin = None;
    for attr in node.attributes() {
        match attr.name() {
            "part" => part = Some(attr.value().to_string()),
            "gate" => gate = Some(attr.value().to_string()),
            "pin" => pin = Some(attr.value().to_string()),
            other => return Err(unknown_attr(other, "pinref")),
        }
    }
    no_child_elements(node, "pinref")?;

    Ok(PinRef {
        part: require(part, "pinref", "part")?,
        gate: require(gate, "pinref", "gate")?,
        pin: require(pin, "pinref", "pin")?,
        part_idx: None,
    })
}

fn parse_portref(node: &Node) -> Result<PortRef> {
    let mut module_inst = None;
    let mut port = None;
    for attr in node.attributes() {
        match attr.name() {
            "moduleinst" => module_inst = Some(attr.value().to_string()),
            "port" => port = Some(attr.value().to_string()),
            other => return Err(unknown_attr(other, "portref")),
        }
    }
    no_child_elements(node, "portref")?;

    Ok(PortRef {
        module_inst: require(module_inst, "portref", "moduleinst")?,
        port: require(port, "portref", "port")?,
    })
}

fn parse_junction(node: &Node) -> Result<Junction> {
    let mut x = None;
    let mut y = None;
    let mut grouprefs = Vec::new();
    for attr in node.attributes() {
        match attr.name() {
            "x" => x = Some(decode::real(attr.value(), "x")?),
            "y" => y = Some(decode::real(attr.value(), "y")?),
            "grouprefs" => grouprefs = decode::grouprefs(attr.value()),
            other => return Err(unknown_attr(other, "junction")),
        }
    }
    no_child_elements(node, "junction")?;

    Ok(Junction {
        x: require(x, "junction", "x")?,
        y: require(y, "junction", "y")?,
        grouprefs,
    })
}

fn parse_label(node: &Node) -> Result<Label> {
    let mut x = None;
    let mut y = None;
    let mut size = None;
    let mut layer = None;
    let mut font = TextFont::Proportional;
    let mut ratio = 8;
    let mut rot = Rot::default();
    let mut xref = false;
    let mut align = Align::BottomLeft;
    let mut grouprefs = Vec::new();

    for attr in node.attributes() {
        match attr.name() {
            "x" => x = Some(decode::real(attr.value(), "x")?),
            "y" => y = Some(decode::real(attr.value(), "y")?),
            "size" => size = Some(decode::real(attr.value(), "size")?),
            "layer" => layer = Some(decode::int(attr.value(), "layer")?),
            "font" => font = decode::text_font(attr.value(), "font")?,
            "ratio" => ratio = decode::int(attr.value(), "ratio")?,
            "rot" => rot = decode::rotation(attr.value(), "rot")?,
            "xref" => xref = decode::boolean(attr.value()),
            "align" => align = decode::align(attr.value(), "align")?,
            "grouprefs" => grouprefs = decode::grouprefs(attr.value()),
            other => return Err(unknown_attr(other, "label")),
        }
    }
    no_child_elements(node, "label")?;

    Ok(Label {
        x: require(x, "label", "x")?,
        y: require(y, "label", "y")?,
        size: require(size, "label", "size")?,
        layer: require(layer, "label", "layer")?,
        font,
        ratio,
        rot,
        xref,
        align,
        grouprefs,
        value: text_payload(node),
    })
}

fn parse_probe(node: &Node) -> Result<Probe> {
    let mut x = None;
    let mut y = None;
    let mut size = None;
    let mut layer = None;
    let mut font = TextFont::Proportional;
    let mut ratio = 8;
    let mut rot = Rot::default();
    let mut xref = false;
    let mut grouprefs = Vec::new();

    for attr in node.attributes() {
        match attr.name() {
            "x" => x = Some(decode::real(attr.value(), "x")?),
            "y" => y = Some(decode::real(attr.value(), "y")?),
            "size" => size = Some(decode::real(attr.value(), "size")?),
            "layer" => layer = Some(decode::int(attr.value(), "layer")?),
            "font" => font = decode::text_font(attr.value(), "font")?,
            "ratio" => ratio = decode::int(attr.value(), "ratio")?,
            "rot" => rot = decode::rotation(attr.value(), "rot")?,
            "xref" => xref = decode::boolean(attr.value()),
            "grouprefs" => grouprefs = decode::grouprefs(attr.value()),
            other => return Err(unknown_attr(other, "probe")),
        }
    }
    no_child_elements(node, "probe")?;

    Ok(Probe {
        x: require(x, "probe", "x")?,
        y: require(y, "probe", "y")?,
        size: require(size, "probe", "size")?,
        layer: require(layer, "probe", "layer")?,
        font,
        ratio,
        rot,
        xref,
        grouprefs,
        value: text_payload(node),
    })
}

fn parse_approved(node: &Node) -> Result<Approved> {
    let mut hash = None;
    for attr in node.attributes() {
        match attr.name() {
            "hash" => hash = Some(attr.value().to_string()),
            other => return Err(unknown_attr(other, "approved")),
        }
    }
    no_child_elements(node, "approved")?;

    Ok(Approved {
        hash: require(hash, "approved", "hash")?,
    })
}

// ---------------------------------------------------------------------------
// Board

fn parse_board(node: &Node) -> Result<Board> {
    no_attributes(node, "board")?;

    let mut board = Board {
        description: None,
        plain: Vec::new(),
        libraries: Vec::new(),
        attributes: Vec::new(),
        variant_defs: Vec::new(),
        classes: Vec::new(),
        design_rules: None,
        autorouter: Vec::new(),
        groups: Vec::new(),
        elements: Vec::new(),
        signals: Vec::new(),
        mfg_preview_colors: Vec::new(),
        errors: Vec::new(),
        fusion_sync: None,
        fusion_team: None,
    };

    for child in elements(*node) {
        match child.tag_name().name() {
            "description" => board.description = Some(parse_description(&child)?),
            "plain" => board.plain = parse_plain(&child)?,
            "libraries" => {
                board.libraries = parse_list(&child, "libraries", "library", parse_library)?
            }
            "attributes" => {
                board.attributes = parse_list(&child, "attributes", "attribute", parse_attribute)?
            }
            "variantdefs" => {
                board.variant_defs =
                    parse_list(&child, "variantdefs", "variantdef", parse_variantdef)?
            }
            "classes" => board.classes = parse_list(&child, "classes", "class", parse_class)?,
            "designrules" => board.design_rules = Some(parse_designrules(&child)?),
            "autorouter" => {
                board.autorouter = parse_list(&child, "autorouter", "pass", parse_pass)?
            }
            "groups" => {
                board.groups = parse_list(&child, "groups", "schematic_group", parse_group)?
            }
            "elements" => {
                board.elements = parse_list(&child, "elements", "element", parse_element)?
            }
            "signals" => board.signals = parse_list(&child, "signals", "signal", parse_signal)?,
            "mfgpreviewcolors" => {
                board.mfg_preview_colors = parse_list(
                    &child,
                    "mfgpreviewcolors",
                    "mfgpreviewcolor",
                    parse_mfgpreviewcolor,
                )?
            }
            "errors" => board.errors = parse_list(&child, "errors", "approved", parse_approved)?,
            "fusionsync" => board.fusion_sync = Some(parse_fusionsync(&child)?),
            "fusionteam" => board.fusion_team = Some(parse_fusionteam(&child)?),
            _ => return Err(unknown_tag(&child, "board")),
        }
    }

    Ok(board)
}

fn parse_element(node: &Node) -> Result<Element> {
    let mut name = None;
    let mut library = None;
    let mut library_urn = None;
    let mut package = None;
    let mut package3d_urn = None;
    let mut value = None;
    let mut x = None;
    let mut y = None;
    let mut locked = false;
    let mut populate = true;
    let mut smashed = false;
    let mut rot = Rot::default();
    let mut grouprefs = Vec::new();

    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            "library" => library = Some(attr.value().to_string()),
            "library_urn" => library_urn = Some(attr.value().to_string()),
            "package" => package = Some(attr.value().to_string()),
            "package3d_urn" => package3d_urn = Some(attr.value().to_string()),
            "value" => value = Some(attr.value().to_string()),
            "x" => x = Some(decode::real(attr.value(), "x")?),
            "y" => y = Some(decode::real(attr.value(), "y")?),
            "locked" => locked = decode::boolean(attr.value()),
            "populate" => populate = decode::boolean(attr.value()),
            "smashed" => smashed = decode::boolean(attr.value()),
            "rot" => rot = decode::rotation(attr.value(), "rot")?,
            "grouprefs" => grouprefs = decode::grouprefs(attr.value()),
            other => return Err(unknown_attr(other, "element")),
        }
    }

    let mut attributes = Vec::new();
    let mut variants = Vec::new();
    for child in elements(*node) {
        match child.tag_name().name() {
            "attribute" => attributes.push(parse_attribute(&child)?),
            "variant" => variants.push(parse_variant(&child)?),
            _ => return Err(unknown_tag(&child, "element")),
        }
    }

    Ok(Element {
        name: require(name, "element", "name")?,
        library: require(library, "element", "library")?,
        library_urn,
        package: require(package, "element", "package")?,
        package3d_urn,
        value: require(value, "element", "value")?,
        x: require(x, "element", "x")?,
        y: require(y, "element", "y")?,
        locked,
        populate,
        smashed,
        rot,
        grouprefs,
        attributes,
        variants,
        library_idx: None,
    })
}

fn parse_signal(node: &Node) -> Result<Signal> {
    let mut name = None;
    let mut class = 0;
    let mut airwires_hidden = false;

    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            "class" => class = decode::int(attr.value(), "class")?,
            "airwireshidden" => airwires_hidden = decode::boolean(attr.value()),
            other => return Err(unknown_attr(other, "signal")),
        }
    }

    let mut items = Vec::new();
    for child in elements(*node) {
        match child.tag_name().name() {
            "contactref" => items.push(SignalItem::ContactRef(parse_contactref(&child)?)),
            "polygon" => items.push(SignalItem::Polygon(parse_polygon(&child)?)),
            "wire" => items.push(SignalItem::Wire(parse_wire(&child)?)),
            "via" => items.push(SignalItem::Via(parse_via(&child)?)),
            _ => return Err(unknown_tag(&child, "signal")),
        }
    }

    Ok(Signal {
        name: require(name, "signal", "name")?,
        class,
        airwires_hidden,
        items,
    })
}

fn parse_contactref(node: &Node) -> Result<ContactRef> {
    let mut element = None;
    let mut pad = None;
    let mut route = None;
    let mut route_tag = String::new();

    for attr in node.attributes() {
        match attr.name() {
            "element" => element = Some(attr.value().to_string()),
            "pad" => pad = Some(attr.value().to_string()),
            "route" => route = Some(decode::contact_route(attr.value(), "route")?),
            "routetag" => route_tag = attr.value().to_string(),
            other => return Err(unknown_attr(other, "contactref")),
        }
    }
    no_child_elements(node, "contactref")?;

    Ok(ContactRef {
        element: require(element, "contactref", "element")?,
        pad: require(pad, "contactref", "pad")?,
        route,
        route_tag,
        element_idx: None,
    })
}

fn parse_designrules(node: &Node) -> Result<DesignRules> {
    let mut name = None;
    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            other => return Err(unknown_attr(other, "designrules")),
        }
    }

    let mut descriptions = Vec::new();
    let mut params = Vec::new();
    for child in elements(*node) {
        match child.tag_name().name() {
            "description" => descriptions.push(parse_description(&child)?),
            "param" => params.push(parse_param(&child)?),
            _ => return Err(unknown_tag(&child, "designrules")),
        }
    }

    Ok(DesignRules {
        name,
        descriptions,
        params,
    })
}

fn parse_param(node: &Node) -> Result<Param> {
    let mut name = None;
    let mut value = None;
    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            "value" => value = Some(attr.value().to_string()),
            other => return Err(unknown_attr(other, "param")),
        }
    }
    no_child_elements(node, "param")?;

    Ok(Param {
        name: require(name, "param", "name")?,
        value: require(value, "param", "value")?,
    })
}

fn parse_pass(node: &Node) -> Result<AutorouterPass> {
    let mut name = None;
    let mut refer = None;
    let mut active = true;

    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            "refer" => refer = Some(attr.value().to_string()),
            "active" => active = decode::boolean(attr.value()),
            other => return Err(unknown_attr(other, "pass")),
        }
    }

    let params = parse_children(node, "pass", "param", parse_param)?;

    Ok(AutorouterPass {
        name: require(name, "pass", "name")?,
        refer,
        active,
        params,
    })
}

fn parse_mfgpreviewcolor(node: &Node) -> Result<MfgPreviewColor> {
    let mut name = None;
    let mut color = None;
    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            "color" => color = Some(attr.value().to_string()),
            other => return Err(unknown_attr(other, "mfgpreviewcolor")),
        }
    }
    no_child_elements(node, "mfgpreviewcolor")?;

    Ok(MfgPreviewColor {
        name: require(name, "mfgpreviewcolor", "name")?,
        color: require(color, "mfgpreviewcolor", "color")?,
    })
}

fn parse_fusionsync(node: &Node) -> Result<FusionSync> {
    let mut hub_urn = None;
    let mut project_urn = None;
    let mut f3d_urn = None;
    let mut project_name = None;
    let mut last_synced_change_guid = None;
    let mut last_pulled_time = None;

    for attr in node.attributes() {
        match attr.name() {
            "huburn" => hub_urn = Some(attr.value().to_string()),
            "projecturn" => project_urn = Some(attr.value().to_string()),
            "f3durn" => f3d_urn = Some(attr.value().to_string()),
            "projectname" => project_name = Some(attr.value().to_string()),
            "lastsyncedchangeguid" => {
                last_synced_change_guid = Some(attr.value().to_string())
            }
            "lastpulledtime" => last_pulled_time = Some(attr.value().to_string()),
            other => return Err(unknown_attr(other, "fusionsync")),
        }
    }
    no_child_elements(node, "fusionsync")?;

    Ok(FusionSync {
        hub_urn: require(hub_urn, "fusionsync", "huburn")?,
        project_urn: require(project_urn, "fusionsync", "projecturn")?,
        f3d_urn: require(f3d_urn, "fusionsync", "f3durn")?,
        project_name: require(project_name, "fusionsync", "projectname")?,
        last_synced_change_guid: require(
            last_synced_change_guid,
            "fusionsync",
            "lastsyncedchangeguid",
        )?,
        last_pulled_time: require(last_pulled_time, "fusionsync", "lastpulledtime")?,
    })
}

fn parse_fusionteam(node: &Node) -> Result<FusionTeam> {
    let mut hub_urn = None;
    let mut project_urn = None;
    let mut folder_urn = None;
    let mut urn = None;
    let mut version_urn = None;
    let mut last_synced_version_id = None;
    let mut last_pulled_time = None;

    for attr in node.attributes() {
        match attr.name() {
            "huburn" => hub_urn = Some(attr.value().to_string()),
            "projecturn" => project_urn = Some(attr.value().to_string()),
            "folderurn" => folder_urn = Some(attr.value().to_string()),
            "urn" => urn = Some(attr.value().to_string()),
            "versionurn" => version_urn = Some(attr.value().to_string()),
            "lastsyncedversionid" => {
                last_synced_version_id = Some(attr.value().to_string())
            }
            "lastpulledtime" => last_pulled_time = Some(attr.value().to_string()),
            other => return Err(unknown_attr(other, "fusionteam")),
        }
    }
    no_child_elements(node, "fusionteam")?;

    Ok(FusionTeam {
        hub_urn: require(hub_urn, "fusionteam", "huburn")?,
        project_urn: require(project_urn, "fusionteam", "projecturn")?,
        folder_urn: require(folder_urn, "fusionteam", "folderurn")?,
        urn: require(urn, "fusionteam", "urn")?,
        version_urn: require(version_urn, "fusionteam", "versionurn")?,
        last_synced_version_id: require(
            last_synced_version_id,
            "fusionteam",
            "lastsyncedversionid",
        )?,
        last_pulled_time: require(last_pulled_time, "fusionteam", "lastpulledtime")?,
    })
}

// ---------------------------------------------------------------------------
// Shared graphic primitives

fn parse_plain(node: &Node) -> Result<Vec<PlainItem>> {
    no_attributes(node, "plain")?;

    let mut items = Vec::new();
    for child in elements(*node) {
        match child.tag_name().name() {
            "polygon" => items.push(PlainItem::Polygon(parse_polygon(&child)?)),
            "wire" => items.push(PlainItem::Wire(parse_wire(&child)?)),
            "text" => items.push(PlainItem::Text(parse_text(&child)?)),
            "dimension" => items.push(PlainItem::Dimension(parse_dimension(&child)?)),
            "circle" => items.push(PlainItem::Circle(parse_circle(&child)?)),
            "rectangle" => items.push(PlainItem::Rectangle(parse_rectangle(&child)?)),
            "frame" => items.push(PlainItem::Frame(parse_frame(&child)?)),
            "hole" => items.push(PlainItem::Hole(parse_hole(&child)?)),
            "spline" => items.push(PlainItem::Spline(parse_spline(&child)?)),
            _ => return Err(unknown_tag(&child, "plain")),
        }
    }

    Ok(items)
}

fn parse_wire(node: &Node) -> Result<Wire> {
    let mut x1 = None;
    let mut y1 = None;
    let mut x2 = None;
    let mut y2 = None;
    let mut width = None;
    let mut layer = None;
    let mut extent = None;
    let mut style = WireStyle::Continuous;
    let mut curve = 0.0;
    let mut cap = WireCap::Round;
    let mut grouprefs = Vec::new();

    for attr in node.attributes() {
        match attr.name() {
            "x1" => x1 = Some(decode::real(attr.value(), "x1")?),
            "y1" => y1 = Some(decode::real(attr.value(), "y1")?),
            "x2" => x2 = Some(decode::real(attr.value(), "x2")?),
            "y2" => y2 = Some(decode::real(attr.value(), "y2")?),
            "width" => width = Some(decode::real(attr.value(), "width")?),
            "layer" => layer = Some(decode::int(attr.value(), "layer")?),
            "extent" => extent = Some(attr.value().to_string()),
            "style" => style = decode::wire_style(attr.value(), "style")?,
            "curve" => curve = decode::real(attr.value(), "curve")?,
            "cap" => cap = decode::wire_cap(attr.value(), "cap")?,
            "grouprefs" => grouprefs = decode::grouprefs(attr.value()),
            other => return Err(unknown_attr(other, "wire")),
        }
    }
    no_child_elements(node, "wire")?;

    Ok(Wire {
        x1: require(x1, "wire", "x1")?,
        y1: require(y1, "wire", "y1")?,
        x2: require(x2, "wire", "x2")?,
        y2: require(y2, "wire", "y2")?,
        width: require(width, "wire", "width")?,
        layer: require(layer, "wire", "layer")?,
        extent,
        style,
        curve,
        cap,
        grouprefs,
    })
}

fn parse_text(node: &Node) -> Result<Text> {
    let mut x = None;
    let mut y = None;
    let mut size = None;
    let mut layer = None;
    let mut font = TextFont::Proportional;
    let mut ratio = 8;
    let mut rot = Rot::default();
    let mut align = Align::BottomLeft;
    let mut distance = 50;
    let mut grouprefs = Vec::new();

    for attr in node.attributes() {
        match attr.name() {
            "x" => x = Some(decode::real(attr.value(), "x")?),
            "y" => y = Some(decode::real(attr.value(), "y")?),
            "size" => size = Some(decode::real(attr.value(), "size")?),
            "layer" => layer = Some(decode::int(attr.value(), "layer")?),
            "font" => font = decode::text_font(attr.value(), "font")?,
            "ratio" => ratio = decode::int(attr.value(), "ratio")?,
            "rot" => rot = decode::rotation(attr.value(), "rot")?,
            "align" => align = decode::align(attr.value(), "align")?,
            "distance" => distance = decode::int(attr.value(), "distance")?,
            "grouprefs" => grouprefs = decode::grouprefs(attr.value()),
            other => return Err(unknown_attr(other, "text")),
        }
    }
    no_child_elements(node, "text")?;

    Ok(Text {
        x: require(x, "text", "x")?,
        y: require(y, "text", "y")?,
        size: require(size, "text", "size")?,
        layer: require(layer, "text", "layer")?,
        font,
        ratio,
        rot,
        align,
        distance,
        grouprefs,
        value: text_payload(node),
    })
}

fn parse_dimension(node: &Node) -> Result<Dimension> {
    let mut x1 = None;
    let mut y1 = None;
    let mut x2 = None;
    let mut y2 = None;
    let mut x3 = None;
    let mut y3 = None;
    let mut layer = None;
    let mut dtype = DimensionType::Parallel;
    let mut width = 0.13;
    let mut ext_width = 0.0;
    let mut ext_length = 0.0;
    let mut ext_offset = 0.0;
    let mut text_size = None;
    let mut text_ratio = 8;
    let mut unit = GridUnit::Mm;
    let mut precision = 2;
    let mut visible = false;
    let mut grouprefs = Vec::new();

    for attr in node.attributes() {
        match attr.name() {
            "x1" => x1 = Some(decode::real(attr.value(), "x1")?),
            "y1" => y1 = Some(decode::real(attr.value(), "y1")?),
            "x2" => x2 = Some(decode::real(attr.value(), "x2")?),
            "y2" => y2 = Some(decode::real(attr.value(), "y2")?),
            "x3" => x3 = Some(decode::real(attr.value(), "x3")?),
            "y3" => y3 = Some(decode::real(attr.value(), "y3")?),
            "layer" => layer = Some(decode::int(attr.value(), "layer")?),
            "dtype" => dtype = decode::dimension_type(attr.value(), "dtype")?,
            "width" => width = decode::real(attr.value(), "width")?,
            "extwidth" => ext_width = decode::real(attr.value(), "extwidth")?,
            "extlength" => ext_length = decode::real(attr.value(), "extlength")?,
            "extoffset" => ext_offset = decode::real(attr.value(), "extoffset")?,
            "textsize" => text_size = Some(decode::real(attr.value(), "textsize")?),
            "textratio" => text_ratio = decode::int(attr.value(), "textratio")?,
            "unit" => unit = decode::grid_unit(attr.value(), "unit")?,
            "precision" => precision = decode::int(attr.value(), "precision")?,
            "visible" => visible = decode::boolean(attr.value()),
            "grouprefs" => grouprefs = decode::grouprefs(attr.value()),
            other => return Err(unknown_attr(other, "dimension")),
        }
    }
    no_child_elements(node, "dimension")?;

    Ok(Dimension {
        x1: require(x1, "dimension", "x1")?,
        y1: require(y1, "dimension", "y1")?,
        x2: require(x2, "dimension", "x2")?,
        y2: require(y2, "dimension", "y2")?,
        x3: require(x3, "dimension", "x3")?,
        y3: require(y3, "dimension", "y3")?,
        layer: require(layer, "dimension", "layer")?,
        dtype,
        width,
        ext_width,
        ext_length,
        ext_offset,
        text_size: require(text_size, "dimension", "textsize")?,
        text_ratio,
        unit,
        precision,
        visible,
        grouprefs,
    })
}

fn parse_circle(node: &Node) -> Result<Circle> {
    let mut x = None;
    let mut y = None;
    let mut radius = None;
    let mut width = None;
    let mut layer = None;
    let mut grouprefs = Vec::new();

    for attr in node.attributes() {
        match attr.name() {
            "x" => x = Some(decode::real(attr.value(), "x")?),
            "y" => y = Some(decode::real(attr.value(), "y")?),
            "radius" => radius = Some(decode::real(attr.value(), "radius")?),
            "width" => width = Some(decode::real(attr.value(), "width")?),
            "layer" => layer = Some(decode::int(attr.value(), "layer")?),
            "grouprefs" => grouprefs = decode::grouprefs(attr.value()),
            other => return Err(unknown_attr(other, "circle")),
        }
    }
    no_child_elements(node, "circle")?;

    Ok(Circle {
        x: require(x, "circle", "x")?,
        y: require(y, "circle", "y")?,
        radius: require(radius, "circle", "radius")?,
        width: require(width, "circle", "width")?,
        layer: require(layer, "circle", "layer")?,
        grouprefs,
    })
}

fn parse_rectangle(node: &Node) -> Result<Rectangle> {
    let mut x1 = None;
    let mut y1 = None;
    let mut x2 = None;
    let mut y2 = None;
    let mut layer = None;
    let mut rot = Rot::default();
    let mut grouprefs = Vec::new();

    for attr in node.attributes() {
        match attr.name() {
            "x1" => x1 = Some(decode::real(attr.value(), "x1")?),
            "y1" => y1 = Some(decode::real(attr.value(), "y1")?),
            "x2" => x2 = Some(decode::real(attr.value(), "x2")?),
            "y2" => y2 = Some(decode::real(attr.value(), "y2")?),
            "layer" => layer = Some(decode::int(attr.value(), "layer")?),
            "rot" => rot = decode::rotation_orthogonal(attr.value(), "rot")?,
            "grouprefs" => grouprefs = decode::grouprefs(attr.value()),
            other => return Err(unknown_attr(other, "rectangle")),
        }
    }
    no_child_elements(node, "rectangle")?;

    Ok(Rectangle {
        x1: require(x1, "rectangle", "x1")?,
        y1: require(y1, "rectangle", "y1")?,
        x2: require(x2, "rectangle", "x2")?,
        y2: require(y2, "rectangle", "y2")?,
        layer: require(layer, "rectangle", "layer")?,
        rot,
        grouprefs,
    })
}

fn parse_frame(node: &Node) -> Result<Frame> {
    let mut x1 = None;
    let mut y1 = None;
    let mut x2 = None;
    let mut y2 = None;
    let mut columns = None;
    let mut rows = None;
    let mut layer = None;
    let mut border_left = true;
    let mut border_top = true;
    let mut border_right = true;
    let mut border_bottom = true;
    let mut grouprefs = Vec::new();

    for attr in node.attributes() {
        match attr.name() {
            "x1" => x1 = Some(decode::real(attr.value(), "x1")?),
            "y1" => y1 = Some(decode::real(attr.value(), "y1")?),
            "x2" => x2 = Some(decode::real(attr.value(), "x2")?),
            "y2" => y2 = Some(decode::real(attr.value(), "y2")?),
            "columns" => columns = Some(decode::int(attr.value(), "columns")?),
            "rows" => rows = Some(decode::int(attr.value(), "rows")?),
            "layer" => layer = Some(decode::int(attr.value(), "layer")?),
            "border-left" => border_left = decode::boolean(attr.value()),
            "border-top" => border_top = decode::boolean(attr.value()),
            "border-right" => border_right = decode::boolean(attr.value()),
            "border-bottom" => border_bottom = decode::boolean(attr.value()),
            "grouprefs" => grouprefs = decode::grouprefs(attr.value()),
            other => return Err(unknown_attr(other, "frame")),
        }
    }
    no_child_elements(node, "frame")?;

    Ok(Frame {
        x1: require(x1, "frame", "x1")?,
        y1: require(y1, "frame", "y1")?,
        x2: require(x2, "frame", "x2")?,
        y2: require(y2, "frame", "y2")?,
        columns: require(columns, "frame", "columns")?,
        rows: require(rows, "frame", "rows")?,
        layer: require(layer, "frame", "layer")?,
        border_left,
        border_top,
        border_right,
        border_bottom,
        grouprefs,
    })
}

fn parse_hole(node: &Node) -> Result<Hole> {
    let mut x = None;
    let mut y = None;
    let mut drill = None;
    let mut grouprefs = Vec::new();

    for attr in node.attributes() {
        match attr.name() {
            "x" => x = Some(decode::real(attr.value(), "x")?),
            "y" => y = Some(decode::real(attr.value(), "y")?),
            "drill" => drill = Some(decode::real(attr.value(), "drill")?),
            "grouprefs" => grouprefs = decode::grouprefs(attr.value()),
            other => return Err(unknown_attr(other, "hole")),
        }
    }
    no_child_elements(node, "hole")?;

    Ok(Hole {
        x: require(x, "hole", "x")?,
        y: require(y, "hole", "y")?,
        drill: require(drill, "hole", "drill")?,
        grouprefs,
    })
}

fn parse_pad(node: &Node) -> Result<Pad> {
    let mut name = None;
    let mut x = None;
    let mut y = None;
    let mut drill = None;
    let mut diameter = 0.0;
    let mut shape = PadShape::Round;
    let mut rot = Rot::default();
    let mut stop = true;
    let mut thermals = true;
    let mut first = false;
    let mut grouprefs = Vec::new();

    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            "x" => x = Some(decode::real(attr.value(), "x")?),
            "y" => y = Some(decode::real(attr.value(), "y")?),
            "drill" => drill = Some(decode::real(attr.value(), "drill")?),
            "diameter" => diameter = decode::real(attr.value(), "diameter")?,
            "shape" => shape = decode::pad_shape(attr.value(), "shape")?,
            "rot" => rot = decode::rotation_orthogonal(attr.value(), "rot")?,
            "stop" => stop = decode::boolean(attr.value()),
            "thermals" => thermals = decode::boolean(attr.value()),
            "first" => first = decode::boolean(attr.value()),
            "grouprefs" => grouprefs = decode::grouprefs(attr.value()),
            other => return Err(unknown_attr(other, "pad")),
        }
    }
    no_child_elements(node, "pad")?;

    Ok(Pad {
        name: require(name, "pad", "name")?,
        x: require(x, "pad", "x")?,
        y: require(y, "pad", "y")?,
        drill: require(drill, "pad", "drill")?,
        diameter,
        shape,
        rot,
        stop,
        thermals,
        first,
        grouprefs,
    })
}

fn parse_smd(node: &Node) -> Result<Smd> {
    let mut name = None;
    let mut x = None;
    let mut y = None;
    let mut dx = None;
    let mut dy = None;
    let mut layer = None;
    let mut roundness = 0;
    let mut rot = Rot::default();
    let mut stop = true;
    let mut thermals = true;
    let mut cream = true;
    let mut grouprefs = Vec::new();

    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            "x" => x = Some(decode::real(attr.value(), "x")?),
            "y" => y = Some(decode::real(attr.value(), "y")?),
            "dx" => dx = Some(decode::real(attr.value(), "dx")?),
            "dy" => dy = Some(decode::real(attr.value(), "dy")?),
            "layer" => layer = Some(decode::int(attr.value(), "layer")?),
            "roundness" => roundness = decode::int(attr.value(), "roundness")?,
            "rot" => rot = decode::rotation_orthogonal(attr.value(), "rot")?,
            "stop" => stop = decode::boolean(attr.value()),
            "thermals" => thermals = decode::boolean(attr.value()),
            "cream" => cream = decode::boolean(attr.value()),
            "grouprefs" => grouprefs = decode::grouprefs(attr.value()),
            other => return Err(unknown_attr(other, "smd")),
        }
    }
    no_child_elements(node, "smd")?;

    Ok(Smd {
        name: require(name, "smd", "name")?,
        x: require(x, "smd", "x")?,
        y: require(y, "smd", "y")?,
        dx: require(dx, "smd", "dx")?,
        dy: require(dy, "smd", "dy")?,
        layer: require(layer, "smd", "layer")?,
        roundness,
        rot,
        stop,
        thermals,
        cream,
        grouprefs,
    })
}

fn parse_pin(node: &Node) -> Result<Pin> {
    let mut name = None;
    let mut x = None;
    let mut y = None;
    let mut visible = PinVisible::Both;
    let mut length = PinLength::Long;
    let mut direction = PinDirection::Io;
    let mut function = PinFunction::None;
    let mut swap_level = 0;
    let mut rot = Rot::default();

    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            "x" => x = Some(decode::real(attr.value(), "x")?),
            "y" => y = Some(decode::real(attr.value(), "y")?),
            "visible" => visible = decode::pin_visible(attr.value(), "visible")?,
            "length" => length = decode::pin_length(attr.value(), "length")?,
            "direction" => direction = decode::pin_direction(attr.value(), "direction")?,
            "function" => function = decode::pin_function(attr.value(), "function")?,
            "swaplevel" => swap_level = decode::int(attr.value(), "swaplevel")?,
            "rot" => rot = decode::rotation_orthogonal(attr.value(), "rot")?,
            other => return Err(unknown_attr(other, "pin")),
        }
    }
    no_child_elements(node, "pin")?;

    Ok(Pin {
        name: require(name, "pin", "name")?,
        x: require(x, "pin", "x")?,
        y: require(y, "pin", "y")?,
        visible,
        length,
        direction,
        function,
        swap_level,
        rot,
    })
}

fn parse_polygon(node: &Node) -> Result<Polygon> {
    let mut width = None;
    let mut layer = None;
    let mut spacing = None;
    let mut pour = PolygonPour::Solid;
    let mut isolate = None;
    let mut orphans = false;
    let mut thermals = true;
    let mut rank = 1;
    let mut grouprefs = Vec::new();

    for attr in node.attributes() {
        match attr.name() {
            "width" => width = Some(decode::real(attr.value(), "width")?),
            "layer" => layer = Some(decode::int(attr.value(), "layer")?),
            "spacing" => spacing = Some(decode::real(attr.value(), "spacing")?),
            "pour" => pour = decode::polygon_pour(attr.value(), "pour")?,
            "isolate" => isolate = Some(decode::real(attr.value(), "isolate")?),
            "orphans" => orphans = decode::boolean(attr.value()),
            "thermals" => thermals = decode::boolean(attr.value()),
            "rank" => rank = decode::int(attr.value(), "rank")?,
            "grouprefs" => grouprefs = decode::grouprefs(attr.value()),
            other => return Err(unknown_attr(other, "polygon")),
        }
    }

    let vertices = parse_children(node, "polygon", "vertex", parse_vertex)?;

    Ok(Polygon {
        width: require(width, "polygon", "width")?,
        layer: require(layer, "polygon", "layer")?,
        spacing,
        pour,
        isolate,
        orphans,
        thermals,
        rank,
        grouprefs,
        vertices,
    })
}

fn parse_vertex(node: &Node) -> Result<Vertex> {
    let mut x = None;
    let mut y = None;
    let mut curve = 0.0;

    for attr in node.attributes() {
        match attr.name() {
            "x" => x = Some(decode::real(attr.value(), "x")?),
            "y" => y = Some(decode::real(attr.value(), "y")?),
            "curve" => curve = decode::real(attr.value(), "curve")?,
            other => return Err(unknown_attr(other, "vertex")),
        }
    }
    no_child_elements(node, "vertex")?;

    Ok(Vertex {
        x: require(x, "vertex", "x")?,
        y: require(y, "vertex", "y")?,
        curve,
    })
}

fn parse_spline(node: &Node) -> Result<Spline> {
    let mut width = None;
    for attr in node.attributes() {
        match attr.name() {
            "width" => width = Some(decode::real(attr.value(), "width")?),
            other => return Err(unknown_attr(other, "spline")),
        }
    }

    let vertices = parse_children(node, "spline", "vertex", parse_vertex)?;

    Ok(Spline {
        width: require(width, "spline", "width")?,
        vertices,
    })
}

fn parse_via(node: &Node) -> Result<Via> {
    let mut x = None;
    let mut y = None;
    let mut extent = None;
    let mut drill = None;
    let mut diameter = 0.0;
    let mut shape = ViaShape::Round;
    let mut always_stop = false;
    let mut grouprefs = Vec::new();

    for attr in node.attributes() {
        match attr.name() {
            "x" => x = Some(decode::real(attr.value(), "x")?),
            "y" => y = Some(decode::real(attr.value(), "y")?),
            "extent" => extent = Some(attr.value().to_string()),
            "drill" => drill = Some(decode::real(attr.value(), "drill")?),
            "diameter" => diameter = decode::real(attr.value(), "diameter")?,
            "shape" => shape = decode::via_shape(attr.value(), "shape")?,
            "alwaysstop" => always_stop = decode::boolean(attr.value()),
            "grouprefs" => grouprefs = decode::grouprefs(attr.value()),
            other => return Err(unknown_attr(other, "via")),
        }
    }
    no_child_elements(node, "via")?;

    Ok(Via {
        x: require(x, "via", "x")?,
        y: require(y, "via", "y")?,
        extent: require(extent, "via", "extent")?,
        drill: require(drill, "via", "drill")?,
        diameter,
        shape,
        always_stop,
        grouprefs,
    })
}

fn parse_attribute(node: &Node) -> Result<Attribute> {
    let mut attribute = Attribute {
        name: String::new(),
        value: None,
        x: None,
        y: None,
        size: None,
        layer: None,
        font: None,
        ratio: None,
        rot: Rot::default(),
        display: AttributeDisplay::Value,
        constant: false,
        align: Align::BottomLeft,
        grouprefs: Vec::new(),
    };
    let mut name = None;

    for attr in node.attributes() {
        match attr.name() {
            "name" => name = Some(attr.value().to_string()),
            "value" => attribute.value = Some(attr.value().to_string()),
            "x" => attribute.x = Some(decode::real(attr.value(), "x")?),
            "y" => attribute.y = Some(decode::real(attr.value(), "y")?),
            "size" => attribute.size = Some(decode::real(attr.value(), "size")?),
            "layer" => attribute.layer = Some(decode::int(attr.value(), "layer")?),
            "font" => attribute.font = Some(decode::text_font(attr.value(), "font")?),
            "ratio" => attribute.ratio = Some(decode::int(attr.value(), "ratio")?),
            "rot" => attribute.rot = decode::rotation(attr.value(), "rot")?,
            "display" => {
                attribute.display = decode::attribute_display(attr.value(), "display")?
            }
            "constant" => attribute.constant = decode::boolean(attr.value()),
            "align" => attribute.align = decode::align(attr.value(), "align")?,
            "grouprefs" => attribute.grouprefs = decode::grouprefs(attr.value()),
            other => return Err(unknown_attr(other, "attribute")),
        }
    }
    no_child_elements(node, "attribute")?;

    attribute.name = require(name, "attribute", "name")?;
    Ok(attribute)
}

/// `language="en"` is the implicit default and is not stored; the body is
/// the node's inner markup, preserved verbatim.
fn parse_description(node: &Node) -> Result<Description> {
    let mut locale = None;
    for attr in node.attributes() {
        match attr.name() {
            "language" => {
                if !attr.value().eq_ignore_ascii_case("en") {
                    locale = Some(attr.value().to_string());
                }
            }
            other => return Err(unknown_attr(other, "description")),
        }
    }

    Ok(Description {
        locale,
        text: inner_markup(node),
    })
}

// ---------------------------------------------------------------------------
// Helpers

fn elements<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|n| n.is_element())
}

/// Homogeneous wrapper list: every child must carry `tag`, the wrapper
/// itself carries no attributes.
fn parse_list<'a, 'i, T>(
    node: &Node<'a, 'i>,
    context: &'static str,
    tag: &str,
    parse: impl Fn(&Node<'a, 'i>) -> Result<T>,
) -> Result<Vec<T>> {
    no_attributes(node, context)?;
    parse_children(node, context, tag, parse)
}

/// Homogeneous child list of a node whose attributes were already
/// dispatched by its own assembler.
fn parse_children<'a, 'i, T>(
    node: &Node<'a, 'i>,
    context: &'static str,
    tag: &str,
    parse: impl Fn(&Node<'a, 'i>) -> Result<T>,
) -> Result<Vec<T>> {
    let mut out = Vec::new();
    for child in elements(*node) {
        if child.tag_name().name() == tag {
            out.push(parse(&child)?);
        } else {
            return Err(unknown_tag(&child, context));
        }
    }
    Ok(out)
}

fn unknown_tag(node: &Node, context: &'static str) -> EagleError {
    EagleError::UnknownTag {
        tag: node.tag_name().name().to_string(),
        context,
    }
}

fn unknown_attr(attr: &str, element: &'static str) -> EagleError {
    EagleError::UnknownAttribute {
        attr: attr.to_string(),
        element,
    }
}

fn require<T>(value: Option<T>, element: &'static str, attr: &'static str) -> Result<T> {
    value.ok_or(EagleError::MissingAttribute { element, attr })
}

fn no_attributes(node: &Node, element: &'static str) -> Result<()> {
    match node.attributes().next() {
        Some(attr) => Err(unknown_attr(attr.name(), element)),
        None => Ok(()),
    }
}

fn no_child_elements(node: &Node, context: &'static str) -> Result<()> {
    match elements(*node).next() {
        Some(child) => Err(unknown_tag(&child, context)),
        None => Ok(()),
    }
}

/// `#PCDATA` payload: the node's first text-type child.
fn text_payload(node: &Node) -> String {
    node.children()
        .find(|n| n.is_text())
        .and_then(|n| n.text())
        .map(str::to_string)
        .unwrap_or_default()
}

/// Inner markup of the node, sliced verbatim from the source document so
/// legacy rich-text descriptions keep their nested tags unescaped.
fn inner_markup(node: &Node) -> String {
    let Some(first) = node.first_child() else {
        return String::new();
    };
    let last = node.last_child().unwrap_or(first);
    node.document().input_text()[first.range().start..last.range().end].to_string()
}

/// Parsed `<eagle>` document before cross-reference resolution.
#[derive(Debug)]
pub(crate) struct ParsedEagle {
    pub version: String,
    pub notes: Vec<Note>,
    pub drawing: Drawing,
}
