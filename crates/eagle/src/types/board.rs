use super::{
    Approved, Attribute, ContactRoute, Description, Group, Library, NetClass, PartVariant,
    PlainItem, Polygon, Rot, VariantDef, Via, Wire,
};

/// Board design: placed elements and copper signals plus the same general
/// metadata a schematic carries.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub description: Option<Description>,
    pub plain: Vec<PlainItem>,
    pub libraries: Vec<Library>,
    pub attributes: Vec<Attribute>,
    pub variant_defs: Vec<VariantDef>,
    pub classes: Vec<NetClass>,
    pub design_rules: Option<DesignRules>,
    pub autorouter: Vec<AutorouterPass>,
    pub groups: Vec<Group>,
    pub elements: Vec<Element>,
    pub signals: Vec<Signal>,
    pub mfg_preview_colors: Vec<MfgPreviewColor>,
    pub errors: Vec<Approved>,
    pub fusion_sync: Option<FusionSync>,
    pub fusion_team: Option<FusionTeam>,
}

impl Board {
    /// Library a placed element resolved to, if any.
    pub fn library_of(&self, element: &Element) -> Option<&Library> {
        element.library_idx.map(|i| &self.libraries[i])
    }

    /// Placed element a contact reference resolved to, if any.
    pub fn element_of(&self, cref: &ContactRef) -> Option<&Element> {
        cref.element_idx.map(|i| &self.elements[i])
    }
}

/// Placed footprint on the board. `library_idx` is filled by the resolver
/// and indexes `Board::libraries`.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub library: String,
    pub library_urn: Option<String>,
    pub package: String,
    pub package3d_urn: Option<String>,
    pub value: String,
    pub x: f64,
    pub y: f64,
    pub locked: bool,
    pub populate: bool,
    pub smashed: bool,
    pub rot: Rot,
    pub grouprefs: Vec<String>,
    pub attributes: Vec<Attribute>,
    pub variants: Vec<PartVariant>,
    pub library_idx: Option<usize>,
}

/// Copper net on the board: an ordered, heterogeneous list of contact
/// references, polygons, wires and vias.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub name: String,
    pub class: i32,
    pub airwires_hidden: bool,
    pub items: Vec<SignalItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SignalItem {
    ContactRef(ContactRef),
    Polygon(Polygon),
    Wire(Wire),
    Via(Via),
}

/// Link between a signal and a specific pad of a placed element.
/// `element_idx` is filled by the resolver and indexes `Board::elements`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactRef {
    pub element: String,
    pub pad: String,
    pub route: Option<ContactRoute>,
    pub route_tag: String,
    pub element_idx: Option<usize>,
}

/// Design rule set stored with the board. Parameter values stay raw; their
/// interpretation (units, percentages) belongs to the rule engine.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignRules {
    pub name: Option<String>,
    pub descriptions: Vec<Description>,
    pub params: Vec<Param>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AutorouterPass {
    pub name: String,
    pub refer: Option<String>,
    pub active: bool,
    pub params: Vec<Param>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MfgPreviewColor {
    pub name: String,
    pub color: String,
}

/// Fusion 360 synchronization state carried in board files saved by EAGLE 9.
#[derive(Debug, Clone, PartialEq)]
pub struct FusionSync {
    pub hub_urn: String,
    pub project_urn: String,
    pub f3d_urn: String,
    pub project_name: String,
    pub last_synced_change_guid: String,
    pub last_pulled_time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FusionTeam {
    pub hub_urn: String,
    pub project_urn: String,
    pub folder_urn: String,
    pub urn: String,
    pub version_urn: String,
    pub last_synced_version_id: String,
    pub last_pulled_time: String,
}
