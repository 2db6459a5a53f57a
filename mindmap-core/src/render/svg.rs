// Standalone SVG serialization of a Scene.

use std::fmt::Write as _;

use super::{EdgeShape, NodeShape, Scene, SceneItem};

pub(crate) const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub(crate) const SVG_STYLE: &str = "width: 100%; height: 100%; min-height: 500px";

/// Number formatting for attributes: at most three decimals, no trailing zeros.
pub(crate) fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub(crate) fn view_box(scene: &Scene) -> String {
    let vp = scene.viewport;
    format!("{} {} {} {}", fmt_num(vp.x), fmt_num(vp.y), fmt_num(vp.w), fmt_num(vp.h))
}

/// `dy` of the i-th tspan: first line sits on the text baseline.
pub(crate) fn tspan_dy(index: usize, line_height: f64) -> String {
    if index == 0 { "0".to_string() } else { format!("{}px", fmt_num(line_height)) }
}

impl Scene {
    /// Serialize as a self-contained `<svg>` document.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="{SVG_NS}" viewBox="{}" style="{SVG_STYLE}">"#,
            view_box(self)
        );
        for item in &self.items {
            match item {
                SceneItem::Edge(edge) => write_edge(&mut out, edge),
                SceneItem::Node(node) => write_node(&mut out, node),
            }
        }
        out.push_str("</svg>");
        out
    }
}

fn write_edge(out: &mut String, edge: &EdgeShape) {
    let _ = write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
        fmt_num(edge.start.x),
        fmt_num(edge.start.y),
        fmt_num(edge.end.x),
        fmt_num(edge.end.y),
        escape_xml(&edge.stroke),
        fmt_num(edge.stroke_width),
    );
}

fn write_node(out: &mut String, node: &NodeShape) {
    let _ = write!(
        out,
        r#"<g transform="translate({}, {})">"#,
        fmt_num(node.center.x),
        fmt_num(node.center.y)
    );
    let _ = write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
        fmt_num(-node.width / 2.0),
        fmt_num(-node.height / 2.0),
        fmt_num(node.width),
        fmt_num(node.height),
        fmt_num(node.corner_radius),
        escape_xml(&node.fill),
        escape_xml(&node.stroke),
        fmt_num(node.stroke_width),
    );
    let _ = write!(
        out,
        r#"<text fill="{}" text-anchor="middle" font-size="{}" font-family="{}" y="{}">"#,
        escape_xml(&node.text_fill),
        fmt_num(node.font_size),
        escape_xml(&node.font_family),
        fmt_num(node.text_y),
    );
    for (i, line) in node.lines.iter().enumerate() {
        let _ = write!(
            out,
            r#"<tspan x="0" dy="{}">{}</tspan>"#,
            tspan_dy(i, node.line_height),
            escape_xml(line)
        );
    }
    out.push_str("</text></g>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutConfig;
    use crate::render::{build_scene, RenderStyle};
    use crate::tree::MindMapInput;

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(300.0), "300");
        assert_eq!(fmt_num(-23.0), "-23");
        assert_eq!(fmt_num(1.5), "1.5");
        assert_eq!(fmt_num(183.71234), "183.712");
        assert_eq!(fmt_num(1.8e-14), "0");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(f64::NAN), "0");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml(r#"Terms & "Conditions" <v2>"#), "Terms &amp; &quot;Conditions&quot; &lt;v2&gt;");
    }

    #[test]
    fn test_single_node_svg() {
        let scene = build_scene(&MindMapInput::leaf("Summary"), &LayoutConfig::default(), &RenderStyle::default())
            .unwrap();
        let svg = scene.to_svg();
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="-160 -120 320 240""#));
        assert!(svg.contains(
            r##"<rect x="-80" y="-23" width="160" height="46" rx="15" fill="#3b82f6" stroke="white" stroke-width="2"/>"##
        ));
        assert!(svg.contains(r#"<tspan x="0" dy="0">Summary</tspan>"#));
        assert!(!svg.contains("<line"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_lines_and_multiline_labels() {
        let input = MindMapInput::branch(
            "Lease & Rent",
            vec![MindMapInput::leaf("Obligations of the tenant under clause")],
        );
        let scene = build_scene(&input, &LayoutConfig::default(), &RenderStyle::default()).unwrap();
        let svg = scene.to_svg();
        assert_eq!(svg.matches("<line ").count(), 1);
        assert_eq!(svg.matches("<g ").count(), 2);
        assert!(svg.contains(r##"<line x1="0" y1="0" x2="-300" y2="0" stroke="#6b7280" stroke-width="1.5"/>"##));
        assert!(svg.contains("Lease &amp; Rent"));
        assert!(svg.contains(r#"<tspan x="0" dy="16px">the tenant under</tspan>"#));
        // Edge comes before the root box.
        assert!(svg.find("<line").unwrap() < svg.find("<g ").unwrap());
    }
}
