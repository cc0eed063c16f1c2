//! The grammar is a closed contract: anything outside it must reject the
//! whole file with a precise error.

use eagle::*;

fn in_library_drawing(body: &str) -> String {
    format!(
        r#"<eagle version="6.0"><drawing>
<layers><layer number="1" name="Top" color="4" fill="1"/></layers>
<library name="L1">{body}</library>
</drawing></eagle>"#
    )
}

fn parse_err(xml: &str) -> EagleError {
    EagleFile::parse(xml).expect_err("document should be rejected")
}

#[test]
fn unknown_child_tag_is_fatal() {
    let err = parse_err(&in_library_drawing("<bogus/>"));
    match err {
        EagleError::UnknownTag { tag, context } => {
            assert_eq!(tag, "bogus");
            assert_eq!(context, "library");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn unknown_attribute_is_fatal() {
    let err = parse_err(&in_library_drawing(
        r#"<packages><package name="P">
             <wire x1="0" y1="0" x2="1" y2="1" width="0.1" layer="21" glow="yes"/>
           </package></packages>"#,
    ));
    match err {
        EagleError::UnknownAttribute { attr, element } => {
            assert_eq!(attr, "glow");
            assert_eq!(element, "wire");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn missing_required_attribute_names_it() {
    let err = parse_err(&in_library_drawing(
        r#"<packages><package name="P">
             <wire x1="0" y1="0" x2="1" y2="1" layer="21"/>
           </package></packages>"#,
    ));
    assert!(matches!(
        err,
        EagleError::MissingAttribute {
            element: "wire",
            attr: "width"
        }
    ));
}

#[test]
fn second_design_is_duplicate() {
    let xml = r#"<eagle version="6.0"><drawing>
<layers><layer number="1" name="Top" color="4" fill="1"/></layers>
<library name="L1"><packages/><symbols/><devicesets/></library>
<schematic><sheets/></schematic>
</drawing></eagle>"#;
    assert!(matches!(
        parse_err(xml),
        EagleError::DuplicateDesign {
            first: "library",
            second: "schematic"
        }
    ));
}

#[test]
fn drawing_requires_layers_and_a_design() {
    let no_layers = r#"<eagle version="6.0"><drawing>
<library name="L1"><packages/><symbols/><devicesets/></library>
</drawing></eagle>"#;
    assert!(matches!(
        parse_err(no_layers),
        EagleError::MissingElement("layers")
    ));

    let no_design = r#"<eagle version="6.0"><drawing>
<layers><layer number="1" name="Top" color="4" fill="1"/></layers>
</drawing></eagle>"#;
    assert!(matches!(
        parse_err(no_design),
        EagleError::MissingElement(_)
    ));
}

#[test]
fn eagle_root_requires_version() {
    let xml = r#"<eagle><drawing>
<layers><layer number="1" name="Top" color="4" fill="1"/></layers>
<library name="L1"/>
</drawing></eagle>"#;
    assert!(matches!(
        parse_err(xml),
        EagleError::MissingAttribute {
            element: "eagle",
            attr: "version"
        }
    ));
}

#[test]
fn bad_enum_code_is_fatal() {
    let err = parse_err(&in_library_drawing(
        r#"<packages><package name="P">
             <pad name="1" x="0" y="0" drill="0.8" shape="blobby"/>
           </package></packages>"#,
    ));
    match err {
        EagleError::InvalidEnum { value, attr } => {
            assert_eq!(value, "blobby");
            assert_eq!(attr, "shape");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn bad_number_is_fatal() {
    let err = parse_err(&in_library_drawing(
        r#"<packages><package name="P">
             <hole x="1,5" y="0" drill="3"/>
           </package></packages>"#,
    ));
    assert!(matches!(
        err,
        EagleError::InvalidNumber { attr: "x", .. }
    ));
}

#[test]
fn pad_rotation_is_constrained_to_right_angles() {
    let err = parse_err(&in_library_drawing(
        r#"<packages><package name="P">
             <pad name="1" x="0" y="0" drill="0.8" rot="R45"/>
           </package></packages>"#,
    ));
    assert!(matches!(
        err,
        EagleError::InvalidRotation { attr: "rot", .. }
    ));

    // the same angle is fine on free-text kinds
    let xml = in_library_drawing(
        r#"<packages><package name="P">
             <text x="0" y="0" size="1.27" layer="25" rot="R45">ok</text>
           </package></packages>"#,
    );
    assert!(EagleFile::parse(&xml).is_ok());
}

#[test]
fn boolean_defaults_apply_when_attributes_are_absent() {
    let xml = in_library_drawing(
        r#"<packages><package name="P">
             <smd name="1" x="0" y="0" dx="1" dy="1" layer="1"/>
             <smd name="2" x="1" y="0" dx="1" dy="1" layer="1" stop="no" thermals="NO"/>
           </package></packages>"#,
    );
    let file = EagleFile::parse(&xml).unwrap();
    let Design::Library(library) = file.design() else {
        unreachable!()
    };

    let PackageItem::Smd(first) = &library.packages[0].items[0] else {
        panic!("expected smd");
    };
    assert!(first.stop && first.thermals && first.cream);

    let PackageItem::Smd(second) = &library.packages[0].items[1] else {
        panic!("expected smd");
    };
    assert!(!second.stop);
    assert!(!second.thermals);
}

#[test]
fn wire_decodes_with_documented_defaults() {
    let xml = in_library_drawing(
        r#"<packages><package name="P">
             <wire x1="0" y1="0" x2="1" y2="1" width="0.254" layer="94"/>
           </package></packages>"#,
    );
    let file = EagleFile::parse(&xml).unwrap();
    let Design::Library(library) = file.design() else {
        unreachable!()
    };

    let PackageItem::Wire(wire) = &library.packages[0].items[0] else {
        panic!("expected wire");
    };
    assert_eq!(
        *wire,
        Wire {
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 1.0,
            width: 0.254,
            layer: 94,
            extent: None,
            style: WireStyle::Continuous,
            curve: 0.0,
            cap: WireCap::Round,
            grouprefs: Vec::new(),
        }
    );
}

#[test]
fn unmodeled_editor_settings_are_skipped_not_rejected() {
    let xml = r#"<eagle version="9.6.2"><drawing>
<settings>
  <setting alwaysvectorfont="no"/>
  <setting keepoldvectorfont="yes"/>
</settings>
<layers><layer number="1" name="Top" color="4" fill="1"/></layers>
<library name="L1"><packages/><symbols/><devicesets/></library>
</drawing></eagle>"#;
    let file = EagleFile::parse(xml).unwrap();
    assert!(!file.drawing().settings.always_vector_font);
}

#[test]
fn grouprefs_lists_stay_ordered() {
    let xml = in_library_drawing(
        r#"<packages><package name="P">
             <hole x="0" y="0" drill="3" grouprefs="G1 G2 G1"/>
           </package></packages>"#,
    );
    let file = EagleFile::parse(&xml).unwrap();
    let Design::Library(library) = file.design() else {
        unreachable!()
    };
    let PackageItem::Hole(hole) = &library.packages[0].items[0] else {
        panic!("expected hole");
    };
    assert_eq!(hole.grouprefs, ["G1", "G2", "G1"]);
}

#[test]
fn compatibility_notes_are_collected() {
    let xml = r#"<eagle version="7.4.0">
<compatibility>
  <note version="6.3" severity="warning">Upgrade required for arcs.</note>
</compatibility>
<drawing>
<layers><layer number="1" name="Top" color="4" fill="1"/></layers>
<library name="L1"><packages/><symbols/><devicesets/></library>
</drawing></eagle>"#;
    let file = EagleFile::parse(xml).unwrap();
    assert_eq!(file.notes().len(), 1);
    assert_eq!(file.notes()[0].severity, Severity::Warning);
    assert_eq!(file.notes()[0].text, "Upgrade required for arcs.");
}
