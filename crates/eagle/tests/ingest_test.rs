//! Full-document ingestion against the public API.

use eagle::*;

fn parse(xml: &str) -> EagleFile {
    EagleFile::parse(xml).expect("document should ingest")
}

const BOARD: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<eagle version="9.6.2">
<drawing>
<layers>
  <layer number="1" name="Top" color="4" fill="1"/>
  <layer number="16" name="Bottom" color="1" fill="1"/>
  <layer number="104" name="Sketch" color="7" fill="1" visible="no"/>
</layers>
<board>
  <plain>
    <wire x1="0" y1="0" x2="80" y2="0" width="0" layer="20"/>
    <text x="2" y="2" size="2.54" layer="21" rot="R45">rev A</text>
  </plain>
  <libraries>
    <library name="passives">
      <description>Chip <b>passives</b> in common sizes</description>
      <packages>
        <package name="R0402">
          <smd name="1" x="-0.5" y="0" dx="0.6" dy="0.7" layer="1"/>
          <smd name="2" x="0.5" y="0" dx="0.6" dy="0.7" layer="1" rot="R90" cream="no"/>
          <text x="0" y="1" size="1.27" layer="25">&gt;NAME</text>
        </package>
      </packages>
      <symbols/>
      <devicesets/>
    </library>
  </libraries>
  <designrules name="default">
    <param name="mdWireWire" value="8mil"/>
    <param name="msWidth" value="10mil"/>
  </designrules>
  <autorouter>
    <pass name="Default" active="yes">
      <param name="RoutingGrid" value="50mil"/>
    </pass>
  </autorouter>
  <elements>
    <element name="R1" library="passives" package="R0402" value="10k" x="10" y="20" rot="MR90"/>
    <element name="R2" library="ghost" package="R0402" value="1k" x="14" y="20" locked="yes"/>
  </elements>
  <signals>
    <signal name="GND" class="0">
      <contactref element="R1" pad="2"/>
      <contactref element="R9" pad="1"/>
      <wire x1="10.5" y1="20" x2="14" y2="20" width="0.254" layer="1"/>
      <via x="12" y="20" extent="1-16" drill="0.3"/>
      <polygon width="0.2" layer="16" rank="2">
        <vertex x="0" y="0"/>
        <vertex x="20" y="0" curve="-90"/>
        <vertex x="20" y="20"/>
      </polygon>
    </signal>
  </signals>
</board>
</drawing>
</eagle>"#;

#[test]
fn board_ingests_to_typed_graph() {
    let file = parse(BOARD);
    assert_eq!(file.version(), "9.6.2");
    assert_eq!(file.kind(), DesignKind::Board);

    let Design::Board(board) = file.design() else {
        panic!("expected a board design");
    };

    assert_eq!(board.plain.len(), 2);
    assert!(matches!(&board.plain[0], PlainItem::Wire(w) if w.layer == 20));
    // free-text rotation is unconstrained
    assert!(matches!(&board.plain[1], PlainItem::Text(t) if t.rot.angle == 45.0));

    assert_eq!(board.libraries.len(), 1);
    let library = &board.libraries[0];
    assert_eq!(library.name.as_deref(), Some("passives"));

    let rules = board.design_rules.as_ref().expect("design rules");
    assert_eq!(rules.name.as_deref(), Some("default"));
    assert_eq!(rules.params.len(), 2);
    assert_eq!(rules.params[0].name, "mdWireWire");

    assert_eq!(board.autorouter.len(), 1);
    assert!(board.autorouter[0].active);
    assert_eq!(board.autorouter[0].params[0].value, "50mil");
}

#[test]
fn package_items_keep_document_order() {
    let file = parse(BOARD);
    let Design::Board(board) = file.design() else {
        unreachable!()
    };

    let package = &board.libraries[0].packages[0];
    assert_eq!(package.name, "R0402");
    assert_eq!(package.items.len(), 3);
    assert!(matches!(&package.items[0], PackageItem::Smd(s) if s.name == "1" && s.cream));
    assert!(matches!(
        &package.items[1],
        PackageItem::Smd(s) if s.rot.angle == 90.0 && !s.cream
    ));
    assert!(matches!(&package.items[2], PackageItem::Text(t) if t.value == ">NAME"));
}

#[test]
fn description_markup_is_preserved_verbatim() {
    let file = parse(BOARD);
    let Design::Board(board) = file.design() else {
        unreachable!()
    };

    let description = board.libraries[0].description.as_ref().expect("description");
    assert_eq!(description.locale, None);
    assert_eq!(description.text, "Chip <b>passives</b> in common sizes");
}

#[test]
fn element_rotation_and_flags_decode() {
    let file = parse(BOARD);
    let Design::Board(board) = file.design() else {
        unreachable!()
    };

    let r1 = &board.elements[0];
    assert_eq!(r1.name, "R1");
    assert!(r1.rot.mirror);
    assert_eq!(r1.rot.angle, 90.0);
    assert!(!r1.locked);

    let r2 = &board.elements[1];
    assert!(r2.locked);
    assert!(r2.populate);
}

#[test]
fn board_references_resolve_with_diagnostics_for_misses() {
    let file = parse(BOARD);
    let Design::Board(board) = file.design() else {
        unreachable!()
    };

    // R1 resolved to the only embedded library, R2's library is missing
    assert_eq!(board.elements[0].library_idx, Some(0));
    assert_eq!(board.elements[1].library_idx, None);
    assert!(board.library_of(&board.elements[0]).is_some());

    let signal = &board.signals[0];
    let SignalItem::ContactRef(resolved) = &signal.items[0] else {
        panic!("expected contactref");
    };
    assert_eq!(resolved.element_idx, Some(0));
    assert_eq!(board.element_of(resolved).unwrap().name, "R1");

    let SignalItem::ContactRef(ghost) = &signal.items[1] else {
        panic!("expected contactref");
    };
    assert_eq!(ghost.element_idx, None);

    assert_eq!(
        file.diagnostics(),
        &[
            Diagnostic::UnresolvedLibrary {
                owner: "R2".to_string(),
                library: "ghost".to_string(),
            },
            Diagnostic::UnresolvedElement {
                signal: "GND".to_string(),
                element: "R9".to_string(),
            },
        ]
    );
}

#[test]
fn signal_items_decode() {
    let file = parse(BOARD);
    let Design::Board(board) = file.design() else {
        unreachable!()
    };

    let signal = &board.signals[0];
    assert_eq!(signal.name, "GND");

    assert!(matches!(
        &signal.items[2],
        SignalItem::Wire(w) if w.width == 0.254 && w.style == WireStyle::Continuous && w.cap == WireCap::Round
    ));
    assert!(matches!(
        &signal.items[3],
        SignalItem::Via(v) if v.extent == "1-16" && v.drill == 0.3 && v.shape == ViaShape::Round
    ));

    let SignalItem::Polygon(polygon) = &signal.items[4] else {
        panic!("expected polygon");
    };
    assert_eq!(polygon.rank, 2);
    assert_eq!(polygon.pour, PolygonPour::Solid);
    assert_eq!(polygon.vertices.len(), 3);
    assert_eq!(polygon.vertices[1].curve, -90.0);
}

#[test]
fn board_layer_policy_marks_reserved_layers() {
    let file = parse(BOARD);
    let layers = &file.drawing().layers;

    assert!(!layers[0].deletable, "copper layer 1 is reserved");
    assert!(!layers[1].deletable, "copper layer 16 is reserved");
    assert!(layers[2].deletable, "user layer 104 is free");
    assert!(!layers[2].visible);
}

const SCHEMATIC: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<eagle version="9.6.2">
<drawing>
<settings>
  <setting alwaysvectorfont="yes"/>
  <setting verticaltext="up"/>
</settings>
<grid distance="0.1" unitdist="inch" unit="inch" style="lines" multiple="1" display="no"/>
<layers>
  <layer number="91" name="Nets" color="2" fill="1"/>
  <layer number="94" name="Symbols" color="4" fill="1"/>
  <layer number="104" name="Notes" color="7" fill="1"/>
</layers>
<schematic xreflabel="%F%N/%S.%C%R" xrefpart="/%S.%C%R">
  <libraries>
    <library name="logic">
      <packages/>
      <symbols>
        <symbol name="NAND">
          <description language="de">NAND mit zwei Eingängen</description>
          <pin name="A" x="-7.62" y="2.54" direction="in"/>
          <pin name="B" x="-7.62" y="-2.54" direction="in" length="middle" rot="R180"/>
          <wire x1="-5.08" y1="5.08" x2="-5.08" y2="-5.08" width="0.254" layer="94"/>
        </symbol>
      </symbols>
      <devicesets>
        <deviceset name="7400" prefix="IC" uservalue="yes">
          <gates>
            <gate name="G$1" symbol="NAND" x="0" y="0" swaplevel="1"/>
          </gates>
          <devices>
            <device name="N" package="DIL14">
              <connects>
                <connect gate="G$1" pin="A" pad="1"/>
                <connect gate="G$1" pin="B" pad="2" route="any"/>
              </connects>
              <technologies>
                <technology name=""/>
              </technologies>
            </device>
          </devices>
        </deviceset>
      </devicesets>
    </library>
  </libraries>
  <classes>
    <class number="0" name="default" width="0.1524">
      <clearance class="0" value="0.1524"/>
    </class>
  </classes>
  <parts>
    <part name="IC1" library="logic" deviceset="7400" device="N">
      <attribute name="MPN" value="SN7400N"/>
    </part>
    <part name="IC2" library="missing" deviceset="7400" device="N"/>
  </parts>
  <sheets>
    <sheet>
      <instances>
        <instance part="IC1" gate="G$1" x="50.8" y="50.8" rot="R90"/>
      </instances>
      <nets>
        <net name="N$1" class="0">
          <segment>
            <pinref part="IC1" gate="G$1" pin="A"/>
            <pinref part="NOPE" gate="G$1" pin="B"/>
            <wire x1="43.18" y1="53.34" x2="38.1" y2="53.34" width="0.1524" layer="91"/>
            <junction x="43.18" y="53.34"/>
            <label x="38.1" y="53.34" size="1.778" layer="95" xref="yes"/>
          </segment>
        </net>
      </nets>
    </sheet>
  </sheets>
</schematic>
</drawing>
</eagle>"#;

#[test]
fn schematic_ingests_to_typed_graph() {
    let file = parse(SCHEMATIC);
    assert_eq!(file.kind(), DesignKind::Schematic);

    let Design::Schematic(schematic) = file.design() else {
        panic!("expected a schematic design");
    };
    assert_eq!(schematic.xref_label.as_deref(), Some("%F%N/%S.%C%R"));

    let symbol = &schematic.libraries[0].symbols[0];
    let description = symbol.description.as_ref().expect("description");
    assert_eq!(description.locale.as_deref(), Some("de"));

    let SymbolItem::Pin(a) = &symbol.items[0] else {
        panic!("expected pin");
    };
    assert_eq!(a.direction, PinDirection::In);
    assert_eq!(a.visible, PinVisible::Both);
    assert_eq!(a.length, PinLength::Long);

    let SymbolItem::Pin(b) = &symbol.items[1] else {
        panic!("expected pin");
    };
    assert_eq!(b.length, PinLength::Middle);
    assert_eq!(b.rot.angle, 180.0);

    let deviceset = &schematic.libraries[0].devicesets[0];
    assert_eq!(deviceset.prefix, "IC");
    assert!(deviceset.uservalue);
    assert_eq!(deviceset.gates[0].swap_level, 1);
    assert_eq!(deviceset.gates[0].add_level, AddLevel::Next);

    let device = &deviceset.devices[0];
    assert_eq!(device.package.as_deref(), Some("DIL14"));
    assert_eq!(device.connects[0].route, ContactRoute::All);
    assert_eq!(device.connects[1].route, ContactRoute::Any);
    assert_eq!(device.technologies[0].name, "");
}

#[test]
fn schematic_settings_and_grid_subset() {
    let file = parse(SCHEMATIC);
    assert!(file.drawing().settings.always_vector_font);
    assert_eq!(file.drawing().settings.vertical_text, VerticalText::Up);

    let grid = file.drawing().grid.expect("grid");
    assert_eq!(grid.distance, Some(0.1));
    assert_eq!(grid.unit, Some(GridUnit::Inch));
    assert_eq!(grid.style, GridStyle::Lines);
    assert!(!grid.display);
}

#[test]
fn schematic_references_resolve_like_board_ones() {
    let file = parse(SCHEMATIC);
    let Design::Schematic(schematic) = file.design() else {
        unreachable!()
    };

    assert_eq!(schematic.parts[0].library_idx, Some(0));
    assert_eq!(schematic.parts[1].library_idx, None);

    let segment = &schematic.sheets[0].nets[0].segments[0];
    let SegmentItem::PinRef(good) = &segment.items[0] else {
        panic!("expected pinref");
    };
    assert_eq!(good.part_idx, Some(0));
    let SegmentItem::PinRef(bad) = &segment.items[1] else {
        panic!("expected pinref");
    };
    assert_eq!(bad.part_idx, None);

    assert_eq!(
        file.diagnostics(),
        &[
            Diagnostic::UnresolvedLibrary {
                owner: "IC2".to_string(),
                library: "missing".to_string(),
            },
            Diagnostic::UnresolvedPart {
                net: "N$1".to_string(),
                part: "NOPE".to_string(),
            },
        ]
    );
}

#[test]
fn net_segment_keeps_heterogeneous_order() {
    let file = parse(SCHEMATIC);
    let Design::Schematic(schematic) = file.design() else {
        unreachable!()
    };

    let net = &schematic.sheets[0].nets[0];
    assert_eq!(net.class, 0);
    let kinds: Vec<&str> = net.segments[0]
        .items
        .iter()
        .map(|item| match item {
            SegmentItem::PinRef(_) => "pinref",
            SegmentItem::PortRef(_) => "portref",
            SegmentItem::Wire(_) => "wire",
            SegmentItem::Junction(_) => "junction",
            SegmentItem::Label(_) => "label",
            SegmentItem::Probe(_) => "probe",
        })
        .collect();
    assert_eq!(kinds, ["pinref", "pinref", "wire", "junction", "label"]);

    let SegmentItem::Label(label) = &net.segments[0].items[4] else {
        unreachable!()
    };
    assert!(label.xref);
    assert_eq!(label.align, Align::BottomLeft);
}

#[test]
fn schematic_layer_policy_uses_schematic_set() {
    let file = parse(SCHEMATIC);
    let layers = &file.drawing().layers;
    assert!(!layers[0].deletable, "layer 91 is reserved");
    assert!(!layers[1].deletable, "layer 94 is reserved");
    assert!(layers[2].deletable, "layer 104 is free");
}

#[test]
fn schematic_part_attributes_are_owned() {
    let file = parse(SCHEMATIC);
    let Design::Schematic(schematic) = file.design() else {
        unreachable!()
    };

    let part = &schematic.parts[0];
    assert_eq!(part.attributes.len(), 1);
    assert_eq!(part.attributes[0].name, "MPN");
    assert_eq!(part.attributes[0].value.as_deref(), Some("SN7400N"));
    assert_eq!(part.technology, "");
}
