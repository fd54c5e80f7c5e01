use super::*;
use std::sync::Arc;

use crate::compose::color::Hsl;
use crate::compose::paths::Species;
use crate::foundation::core::Point;
use crate::geometry::curve::ClosedCurve;

fn curve(offset: f64) -> Arc<ClosedCurve> {
    Arc::new(ClosedCurve::new(vec![
        Point::new(offset, 0.0),
        Point::new(offset + 10.0, 5.4),
        Point::new(offset - 2.6, -8.0),
    ]))
}

fn stroke(frames: Vec<Arc<ClosedCurve>>) -> StrokePath {
    StrokePath {
        fold: 0,
        species: Species::Core,
        stroke: Hsl::new(40.0, 80, 85),
        width: 1.3,
        opacity: 0.5,
        frames,
    }
}

#[test]
fn writes_header_background_and_watermark() {
    let doc = Document::new("#04040E", vec![], "2024-01-01  ·  Calabi-Yau Quintic");
    let svg = doc.to_svg();
    assert!(svg.starts_with(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 900 400\" width=\"900\" height=\"400\">\n<style>\n    .bg { fill: #04040E; }\n"
    ));
    assert!(svg.contains("<rect class=\"bg\" width=\"900\" height=\"400\"/>\n"));
    assert!(svg.contains("<g transform=\"translate(450,200)\">\n"));
    assert!(svg.ends_with(
        "<text x=\"885\" y=\"388\" fill=\"white\" fill-opacity=\"0.2\" font-family=\"monospace\" font-size=\"10\" text-anchor=\"end\">2024-01-01  ·  Calabi-Yau Quintic</text>\n</svg>"
    ));
}

#[test]
fn path_element_carries_style_first_frame_and_animation() {
    let doc = Document::new("#000000", vec![stroke(vec![curve(0.0), curve(20.0)])], "w");
    let svg = doc.to_svg();
    let expected = concat!(
        "<path class=\"c\" style=\"stroke:hsl(40,80%,85%);stroke-width:1.30;stroke-opacity:0.500\" ",
        "d=\"M0,0L10,5L-3,-8Z\">",
        "<animate attributeName=\"d\" values=\"M0,0L10,5L-3,-8Z;M20,0L30,5L17,-8Z\" ",
        "dur=\"120s\" repeatCount=\"indefinite\" calcMode=\"linear\"/></path>"
    );
    assert!(svg.contains(expected), "{svg}");
}

#[test]
fn one_path_element_per_stroke_in_order() {
    let paths = (0..4)
        .map(|i| StrokePath {
            fold: i,
            ..stroke(vec![curve(f64::from(i))])
        })
        .collect();
    let doc = Document::new("#000000", paths, "w");
    let svg = doc.to_svg();
    assert_eq!(svg.matches("<path ").count(), 4);
    assert_eq!(svg.matches("<animate ").count(), 4);
    let first = svg.find("d=\"M0,0").unwrap();
    let last = svg.find("d=\"M3,0").unwrap();
    assert!(first < last);
}

#[test]
fn watermark_is_escaped() {
    let doc = Document::new("#000000", vec![], "a<b & \"c\"");
    assert!(doc.to_svg().contains(">a&lt;b &amp; &quot;c&quot;</text>"));
}

#[test]
fn accessors_expose_fixed_layout() {
    let doc = Document::new("#0A0A12", vec![stroke(vec![curve(0.0)])], "mark");
    assert_eq!(doc.canvas(), Canvas::DAILY);
    assert_eq!(doc.background(), "#0A0A12");
    assert_eq!(doc.duration_secs(), ANIMATION_SECS);
    assert_eq!(doc.paths().len(), 1);
    assert_eq!(doc.watermark(), "mark");
}

#[test]
fn serialization_is_repeatable() {
    let doc = Document::new("#06061A", vec![stroke(vec![curve(1.0), curve(2.0)])], "w");
    assert_eq!(doc.to_svg(), doc.to_svg());
}
