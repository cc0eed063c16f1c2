//! Attribute value decoders.
//!
//! Pure functions turning raw attribute strings into typed values. Every
//! closed code table lives here; assemblers in `parse` only route values to
//! the right decoder. `attr` names the offending attribute in errors.

use crate::types::*;
use crate::{EagleError, Result};

/// IEEE-754 double with `.` as the decimal point, never locale-sensitive.
pub fn real(raw: &str, attr: &'static str) -> Result<f64> {
    raw.parse().map_err(|_| EagleError::InvalidNumber {
        value: raw.to_string(),
        attr,
    })
}

pub fn int(raw: &str, attr: &'static str) -> Result<i32> {
    raw.parse().map_err(|_| EagleError::InvalidNumber {
        value: raw.to_string(),
        attr,
    })
}

/// EAGLE booleans: `"yes"` (any case) is true, anything else is false.
pub fn boolean(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("yes")
}

/// Rotation token: `[S][M]R<angle>`. `S` sets spin, `M` sets mirror, the
/// prefixes combine in either order, the mandatory `R` is followed by a
/// real angle in degrees.
pub fn rotation(raw: &str, attr: &'static str) -> Result<Rot> {
    let mut rest = raw;
    let mut rot = Rot::default();

    loop {
        if let Some(r) = rest.strip_prefix('S') {
            rot.spin = true;
            rest = r;
        } else if let Some(r) = rest.strip_prefix('M') {
            rot.mirror = true;
            rest = r;
        } else {
            break;
        }
    }

    let angle = rest
        .strip_prefix('R')
        .ok_or_else(|| EagleError::InvalidRotation {
            value: raw.to_string(),
            attr,
        })?;
    rot.angle = angle.parse().map_err(|_| EagleError::InvalidRotation {
        value: raw.to_string(),
        attr,
    })?;

    Ok(rot)
}

/// Rotation for symmetric element kinds, where only right angles are legal.
/// The constraint belongs to the field, not the token grammar, so this is a
/// separate entry point over [`rotation`].
pub fn rotation_orthogonal(raw: &str, attr: &'static str) -> Result<Rot> {
    let rot = rotation(raw, attr)?;
    if [0.0, 90.0, 180.0, 270.0].contains(&rot.angle) {
        Ok(rot)
    } else {
        Err(EagleError::InvalidRotation {
            value: raw.to_string(),
            attr,
        })
    }
}

/// Ordered group-membership list, split on ASCII whitespace. Empty input
/// yields an empty list; duplicates are kept.
pub fn grouprefs(raw: &str) -> Vec<String> {
    raw.split_ascii_whitespace().map(str::to_string).collect()
}

fn invalid(raw: &str, attr: &'static str) -> EagleError {
    EagleError::InvalidEnum {
        value: raw.to_string(),
        attr,
    }
}

pub fn wire_style(raw: &str, attr: &'static str) -> Result<WireStyle> {
    match raw {
        "continuous" => Ok(WireStyle::Continuous),
        "longdash" => Ok(WireStyle::LongDash),
        "shortdash" => Ok(WireStyle::ShortDash),
        "dashdot" => Ok(WireStyle::DashDot),
        _ => Err(invalid(raw, attr)),
    }
}

pub fn wire_cap(raw: &str, attr: &'static str) -> Result<WireCap> {
    match raw {
        "flat" => Ok(WireCap::Flat),
        "round" => Ok(WireCap::Round),
        _ => Err(invalid(raw, attr)),
    }
}

pub fn text_font(raw: &str, attr: &'static str) -> Result<TextFont> {
    match raw {
        "vector" => Ok(TextFont::Vector),
        "proportional" => Ok(TextFont::Proportional),
        "fixed" => Ok(TextFont::Fixed),
        _ => Err(invalid(raw, attr)),
    }
}

pub fn align(raw: &str, attr: &'static str) -> Result<Align> {
    match raw {
        "bottom-left" => Ok(Align::BottomLeft),
        "bottom-center" => Ok(Align::BottomCenter),
        "bottom-right" => Ok(Align::BottomRight),
        "center-left" => Ok(Align::CenterLeft),
        "center" => Ok(Align::Center),
        "center-right" => Ok(Align::CenterRight),
        "top-left" => Ok(Align::TopLeft),
        "top-center" => Ok(Align::TopCenter),
        "top-right" => Ok(Align::TopRight),
        _ => Err(invalid(raw, attr)),
    }
}

pub fn pad_shape(raw: &str, attr: &'static str) -> Result<PadShape> {
    match raw {
        "square" => Ok(PadShape::Square),
        "round" => Ok(PadShape::Round),
        "octagon" => Ok(PadShape::Octagon),
        "long" => Ok(PadShape::Long),
        "offset" => Ok(PadShape::Offset),
        _ => Err(invalid(raw, attr)),
    }
}

pub fn via_shape(raw: &str, attr: &'static str) -> Result<ViaShape> {
    match raw {
        "square" => Ok(ViaShape::Square),
        "round" => Ok(ViaShape::Round),
        "octagon" => Ok(ViaShape::Octagon),
        _ => Err(invalid(raw, attr)),
    }
}

pub fn pin_visible(raw: &str, attr: &'static str) -> Result<PinVisible> {
    match raw {
        "off" => Ok(PinVisible::Off),
        "pad" => Ok(PinVisible::Pad),
        "pin" => Ok(PinVisible::Pin),
        "both" => Ok(PinVisible::Both),
        _ => Err(invalid(raw, attr)),
    }
}

pub fn pin_length(raw: &str, attr: &'static str) -> Result<PinLength> {
    match raw {
        "point" => Ok(PinLength::Point),
        "short" => Ok(PinLength::Short),
        "middle" => Ok(PinLength::Middle),
        "long" => Ok(PinLength::Long),
        _ => Err(invalid(raw, attr)),
    }
}

pub fn pin_direction(raw: &str, attr: &'static str) -> Result<PinDirection> {
    match raw {
        "nc" => Ok(PinDirection::Nc),
        "in" => Ok(PinDirection::In),
        "out" => Ok(PinDirection::Out),
        "io" => Ok(PinDirection::Io),
        "oc" => Ok(PinDirection::Oc),
        "pwr" => Ok(PinDirection::Pwr),
        "pas" => Ok(PinDirection::Pas),
        "hiz" => Ok(PinDirection::Hiz),
        "sup" => Ok(PinDirection::Sup),
        _ => Err(invalid(raw, attr)),
    }
}

pub fn pin_function(raw: &str, attr: &'static str) -> Result<PinFunction> {
    match raw {
        "none" => Ok(PinFunction::None),
        "dot" => Ok(PinFunction::Dot),
        "clk" => Ok(PinFunction::Clk),
        "dotclk" => Ok(PinFunction::DotClk),
        _ => Err(invalid(raw, attr)),
    }
}

pub fn polygon_pour(raw: &str, attr: &'static str) -> Result<PolygonPour> {
    match raw {
        "solid" => Ok(PolygonPour::Solid),
        "hatch" => Ok(PolygonPour::Hatch),
        "cutout" => Ok(PolygonPour::Cutout),
        _ => Err(invalid(raw, attr)),
    }
}

pub fn dimension_type(raw: &str, attr: &'static str) -> Result<DimensionType> {
    match raw {
        "parallel" => Ok(DimensionType::Parallel),
        "horizontal" => Ok(DimensionType::Horizontal),
        "vertical" => Ok(DimensionType::Vertical),
        "radius" => Ok(DimensionType::Radius),
        "diameter" => Ok(DimensionType::Diameter),
        "angle" => Ok(DimensionType::Angle),
        "leader" => Ok(DimensionType::Leader),
        _ => Err(invalid(raw, attr)),
    }
}

pub fn grid_unit(raw: &str, attr: &'static str) -> Result<GridUnit> {
    match raw {
        "mic" => Ok(GridUnit::Mic),
        "mm" => Ok(GridUnit::Mm),
        "mil" => Ok(GridUnit::Mil),
        "inch" => Ok(GridUnit::Inch),
        _ => Err(invalid(raw, attr)),
    }
}

pub fn grid_style(raw: &str, attr: &'static str) -> Result<GridStyle> {
    match raw {
        "lines" => Ok(GridStyle::Lines),
        "dots" => Ok(GridStyle::Dots),
        _ => Err(invalid(raw, attr)),
    }
}

pub fn severity(raw: &str, attr: &'static str) -> Result<Severity> {
    match raw {
        "info" => Ok(Severity::Info),
        "warning" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        _ => Err(invalid(raw, attr)),
    }
}

pub fn vertical_text(raw: &str, attr: &'static str) -> Result<VerticalText> {
    match raw {
        "up" => Ok(VerticalText::Up),
        "off" => Ok(VerticalText::Off),
        _ => Err(invalid(raw, attr)),
    }
}

pub fn add_level(raw: &str, attr: &'static str) -> Result<AddLevel> {
    match raw {
        "must" => Ok(AddLevel::Must),
        "can" => Ok(AddLevel::Can),
        "next" => Ok(AddLevel::Next),
        "request" => Ok(AddLevel::Request),
        "always" => Ok(AddLevel::Always),
        _ => Err(invalid(raw, attr)),
    }
}

pub fn contact_route(raw: &str, attr: &'static str) -> Result<ContactRoute> {
    match raw {
        "all" => Ok(ContactRoute::All),
        "any" => Ok(ContactRoute::Any),
        _ => Err(invalid(raw, attr)),
    }
}

pub fn port_side(raw: &str, attr: &'static str) -> Result<PortSide> {
    match raw {
        "top" => Ok(PortSide::Top),
        "bottom" => Ok(PortSide::Bottom),
        "left" => Ok(PortSide::Left),
        "right" => Ok(PortSide::Right),
        _ => Err(invalid(raw, attr)),
    }
}

pub fn attribute_display(raw: &str, attr: &'static str) -> Result<AttributeDisplay> {
    match raw {
        "off" => Ok(AttributeDisplay::Off),
        "value" => Ok(AttributeDisplay::Value),
        "name" => Ok(AttributeDisplay::Name),
        "both" => Ok(AttributeDisplay::Both),
        _ => Err(invalid(raw, attr)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_rotation() {
        let rot = rotation("R90", "rot").unwrap();
        assert!(!rot.mirror);
        assert!(!rot.spin);
        assert_eq!(rot.angle, 90.0);
    }

    #[test]
    fn mirrored_rotation() {
        let rot = rotation("MR90", "rot").unwrap();
        assert!(rot.mirror);
        assert!(!rot.spin);
        assert_eq!(rot.angle, 90.0);
    }

    #[test]
    fn spin_rotation() {
        let rot = rotation("SR270", "rot").unwrap();
        assert!(rot.spin);
        assert!(!rot.mirror);
        assert_eq!(rot.angle, 270.0);
    }

    #[test]
    fn combined_prefixes_either_order() {
        for raw in ["SMR180", "MSR180"] {
            let rot = rotation(raw, "rot").unwrap();
            assert!(rot.spin && rot.mirror, "{raw}");
            assert_eq!(rot.angle, 180.0);
        }
    }

    #[test]
    fn fractional_angle() {
        let rot = rotation("R12.5", "rot").unwrap();
        assert_eq!(rot.angle, 12.5);
    }

    #[test]
    fn rotation_requires_r() {
        assert!(rotation("90", "rot").is_err());
        assert!(rotation("M90", "rot").is_err());
        assert!(rotation("", "rot").is_err());
    }

    #[test]
    fn orthogonal_rejects_free_angle() {
        assert!(rotation_orthogonal("R90", "rot").is_ok());
        assert!(rotation_orthogonal("R45", "rot").is_err());
    }

    #[test]
    fn booleans_compare_against_yes() {
        assert!(boolean("yes"));
        assert!(boolean("YES"));
        assert!(boolean("Yes"));
        assert!(!boolean("no"));
        assert!(!boolean(""));
        assert!(!boolean("true"));
    }

    #[test]
    fn grouprefs_keep_order_and_duplicates() {
        assert_eq!(grouprefs("A B  A\tC"), ["A", "B", "A", "C"]);
        assert!(grouprefs("").is_empty());
        assert!(grouprefs("   ").is_empty());
    }

    #[test]
    fn real_rejects_locale_commas() {
        assert_eq!(real("0.254", "width").unwrap(), 0.254);
        assert!(real("0,254", "width").is_err());
    }

    #[test]
    fn enum_errors_name_field() {
        match wire_style("wavy", "style") {
            Err(EagleError::InvalidEnum { value, attr }) => {
                assert_eq!(value, "wavy");
                assert_eq!(attr, "style");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
