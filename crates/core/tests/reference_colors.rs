//! Cross-model checks against known reference colors.

use swatch_core::{AnyColor, Cmyk, ColorModel, ColorSpace, Hex, Hsl, Hsv, Lab, Rgb, Xyz};

/// Two-decimal reference values are compared with half a unit in the last place.
const TOLERANCE: f64 = 0.005;

struct Reference {
    name: &'static str,
    rgb: (i32, i32, i32),
    hex: &'static str,
    hsl: [f64; 3],
    hsv: [f64; 3],
    cmyk: [f64; 4],
    xyz: [f64; 3],
    lab: [f64; 3],
}

const REFERENCES: &[Reference] = &[
    Reference {
        name: "black",
        rgb: (0, 0, 0),
        hex: "#000000",
        hsl: [0.0, 0.0, 0.0],
        hsv: [0.0, 0.0, 0.0],
        cmyk: [0.0, 0.0, 0.0, 100.0],
        xyz: [0.0, 0.0, 0.0],
        lab: [0.0, 0.0, 0.0],
    },
    Reference {
        name: "white",
        rgb: (255, 255, 255),
        hex: "#FFFFFF",
        hsl: [0.0, 0.0, 100.0],
        hsv: [0.0, 0.0, 100.0],
        cmyk: [0.0, 0.0, 0.0, 0.0],
        xyz: [95.05, 100.0, 108.88],
        lab: [100.0, 0.0, 0.0],
    },
    Reference {
        name: "red",
        rgb: (255, 0, 0),
        hex: "#FF0000",
        hsl: [0.0, 100.0, 50.0],
        hsv: [0.0, 100.0, 100.0],
        cmyk: [0.0, 100.0, 100.0, 0.0],
        xyz: [41.25, 21.27, 1.93],
        lab: [53.24, 80.09, 67.2],
    },
    Reference {
        name: "green",
        rgb: (0, 255, 0),
        hex: "#00FF00",
        hsl: [120.0, 100.0, 50.0],
        hsv: [120.0, 100.0, 100.0],
        cmyk: [100.0, 0.0, 100.0, 0.0],
        xyz: [35.76, 71.52, 11.92],
        lab: [87.73, -86.18, 83.18],
    },
    Reference {
        name: "blue",
        rgb: (0, 0, 255),
        hex: "#0000FF",
        hsl: [240.0, 100.0, 50.0],
        hsv: [240.0, 100.0, 100.0],
        cmyk: [100.0, 100.0, 0.0, 0.0],
        xyz: [18.04, 7.22, 95.03],
        lab: [32.3, 79.19, -107.86],
    },
    Reference {
        name: "material blue",
        rgb: (33, 150, 243),
        hex: "#2196F3",
        hsl: [206.57, 89.74, 54.12],
        hsv: [206.57, 86.42, 95.29],
        cmyk: [86.42, 38.27, 0.0, 4.71],
        xyz: [27.7, 28.6, 88.84],
        lab: [60.43, 2.08, -55.11],
    },
    Reference {
        name: "purple",
        rgb: (116, 58, 111),
        hex: "#743A6F",
        hsl: [305.17, 33.33, 34.12],
        hsv: [305.17, 50.0, 45.49],
        cmyk: [0.0, 50.0, 4.31, 54.51],
        xyz: [11.58, 7.89, 15.95],
        lab: [33.75, 33.48, -19.65],
    },
];

fn rgb_of(r: &Reference) -> Rgb {
    let (red, green, blue) = r.rgb;
    Rgb::from_scaled(red, green, blue).unwrap()
}

fn assert_close(name: &str, model: &str, actual: &[f64], expected: &[f64]) {
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= TOLERANCE,
            "{name} {model}[{i}]: expected {e}, got {a}"
        );
    }
}

// -- Cross-model values --

#[test]
fn rgb_to_hex() {
    for r in REFERENCES {
        assert_eq!(rgb_of(r).to_hex().to_string(), r.hex, "{}", r.name);
    }
}

#[test]
fn rgb_to_hsl() {
    for r in REFERENCES {
        let hsl = rgb_of(r).to_hsl();
        assert_close(r.name, "hsl", &[hsl.hue(), hsl.saturation(), hsl.luminance()], &r.hsl);
    }
}

#[test]
fn rgb_to_hsv() {
    for r in REFERENCES {
        let hsv = rgb_of(r).to_hsv();
        let scaled = [hsv.scaled_hue(), hsv.scaled_saturation(), hsv.scaled_value()];
        assert_close(r.name, "hsv", &scaled, &r.hsv);
    }
}

#[test]
fn rgb_to_cmyk() {
    for r in REFERENCES {
        let c = rgb_of(r).to_cmyk();
        let scaled = [c.scaled_cyan(), c.scaled_magenta(), c.scaled_yellow(), c.scaled_key()];
        assert_close(r.name, "cmyk", &scaled, &r.cmyk);
    }
}

#[test]
fn rgb_to_xyz() {
    for r in REFERENCES {
        let xyz = rgb_of(r).to_xyz();
        assert_close(r.name, "xyz", &[xyz.x(), xyz.y(), xyz.z()], &r.xyz);
    }
}

#[test]
fn rgb_to_lab() {
    for r in REFERENCES {
        let lab = Lab::from_rgb(rgb_of(r));
        assert_close(r.name, "lab", &[lab.l(), lab.a(), lab.b()], &r.lab);
    }
}

#[test]
fn every_reference_reaches_its_hex_from_every_model() {
    for r in REFERENCES {
        for model in ColorModel::ALL {
            let converted = AnyColor::from_rgb(rgb_of(r), model);
            assert_eq!(converted.to_hex().to_string(), r.hex, "{} via {model}", r.name);
        }
    }
}

// -- Round trips --

#[test]
fn round_trips_through_each_model() {
    for r in REFERENCES {
        let rgb = rgb_of(r);
        let trips = [
            ("hsl", rgb.to_hsl().to_rgb()),
            ("hsv", rgb.to_hsv().to_rgb()),
            ("cmyk", rgb.to_cmyk().to_rgb()),
            ("xyz", rgb.to_xyz().to_rgb()),
            ("lab", Lab::from_rgb(rgb).to_rgb()),
        ];
        for (model, back) in trips {
            assert_close(
                r.name,
                model,
                &[back.red(), back.green(), back.blue()],
                &[rgb.red(), rgb.green(), rgb.blue()],
            );
            assert_eq!(back.to_hex(), rgb.to_hex(), "{} via {model}", r.name);
        }
    }
}

// -- Canonical strings --

#[test]
fn material_blue_canonical_forms() {
    let rgb = Rgb::from_scaled(33, 150, 243).unwrap();
    assert_eq!(rgb.to_string(), "rgb(0.129, 0.588, 0.953)");
    assert_eq!(rgb.to_scaled_string(), "rgb(33, 150, 243)");
    assert_eq!(rgb.to_hex().to_string(), "#2196F3");
    assert_eq!(rgb.to_hsl().to_string(), "hsl(206.57, 89.74%, 54.12%)");
    assert_eq!(rgb.to_hsv().to_string(), "hsv(206.57, 86.42%, 95.29%)");
    assert_eq!(rgb.to_cmyk().to_string(), "cmyk(86.4%, 38.3%, 0%, 4.7%)");
    assert_eq!(rgb.to_xyz().to_string(), "xyz(27.7, 28.6, 88.84)");
    assert_eq!(Lab::from_rgb(rgb).to_string(), "lab(60.43, 2.08, -55.11)");
}

#[test]
fn parse_of_display_is_idempotent_for_every_model() {
    for r in REFERENCES {
        let rgb = rgb_of(r);
        for model in ColorModel::ALL {
            let color = AnyColor::from_rgb(rgb, model);
            let text = color.to_string();
            let parsed = AnyColor::parse(&text).unwrap_or_else(|| panic!("failed to parse {text}"));
            assert_eq!(parsed.model(), model, "{text}");
            assert_eq!(parsed.to_string(), text);
        }
    }
}

#[test]
fn malformed_strings_are_rejected_by_every_parser() {
    for input in ["", "rgb(-1, )", "cmyk(a,b,c,d)", "hsl(255a, 100, 30)", "#12", "lab(1 2 3)"] {
        assert!(AnyColor::parse(input).is_none(), "{input:?}");
        assert!(Rgb::parse(input).is_none(), "{input:?}");
        assert!(Hex::parse(input).is_none(), "{input:?}");
        assert!(Hsl::parse(input).is_none(), "{input:?}");
        assert!(Hsv::parse(input).is_none(), "{input:?}");
        assert!(Cmyk::parse(input).is_none(), "{input:?}");
        assert!(Xyz::parse(input).is_none(), "{input:?}");
        assert!(Lab::parse(input).is_none(), "{input:?}");
        assert!(input.parse::<AnyColor>().is_err(), "{input:?}");
    }
}

// -- Edge cases --

#[test]
fn hue_360_and_hue_0_agree_across_models() {
    let a = Hsl::new(360.0, 70.0, 40.0).to_rgb();
    let b = Hsl::new(0.0, 70.0, 40.0).to_rgb();
    assert_eq!(a, b);
    let c = Hsv::from_scaled(360.0, 70.0, 40.0).to_rgb();
    let d = Hsv::from_scaled(0.0, 70.0, 40.0).to_rgb();
    assert_eq!(c, d);
}

#[test]
fn empty_sentinels_are_black() {
    assert_eq!(Rgb::EMPTY.to_hex(), Hex::EMPTY);
    assert_eq!(Hsl::EMPTY.to_rgb(), Rgb::BLACK);
    assert_eq!(Hsv::EMPTY.to_rgb(), Rgb::BLACK);
    assert_eq!(Xyz::EMPTY.to_rgb(), Rgb::BLACK);
    assert_eq!(Lab::EMPTY.to_rgb().to_hex(), Hex::EMPTY);
    // CMYK with no ink is white, not black.
    assert_eq!(Cmyk::EMPTY.to_rgb(), Rgb::WHITE);
}

#[test]
fn clamping_at_each_model_boundary() {
    assert_eq!(Hsl::new(-0.01, 100.01, -0.01), Hsl::new(0.0, 100.0, 0.0));
    assert_eq!(Hsv::new(1.01, -0.01, 1.01), Hsv::new(1.0, 0.0, 1.0));
    assert_eq!(Cmyk::new(1.01, -0.01, 0.5, 2.0), Cmyk::new(1.0, 0.0, 0.5, 1.0));
    assert_eq!(Hex::new(-1, 256, 128), Hex::from_bytes(0, 255, 128));
    assert_eq!(Xyz::new(1000.0, -1.0, 1000.0), Xyz::new(95.0489, 0.0, 108.884));
    assert_eq!(Lab::new(101.0, -129.0, 128.0), Lab::new(100.0, -128.0, 127.0));
    assert!(Rgb::new(1.01, 0.0, 0.0).is_err());
}

#[test]
fn brightness_picks_readable_text() {
    for r in REFERENCES {
        let rgb = rgb_of(r);
        let text = rgb.contrasting_text();
        assert!(text == Rgb::BLACK || text == Rgb::WHITE, "{}", r.name);
        assert_eq!(text == Rgb::WHITE, rgb.brightness() < 130.0, "{}", r.name);
    }
}
