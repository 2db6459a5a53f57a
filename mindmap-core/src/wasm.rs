//! WASM bindings for the mind-map engine.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.
//! Tree data and options arrive as JSON strings (`JSON.stringify` on the JS
//! side); an empty options string means defaults.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::output::SceneOutput;
use crate::render::svg::{fmt_num, tspan_dy, view_box, SVG_NS, SVG_STYLE};
use crate::render::{build_scene, EdgeShape, NodeShape, Scene, SceneItem};
use crate::tree::parse_mind_map_json;
use crate::{RenderOptions, Result};

pub(crate) const INVALID_PLACEHOLDER: &str = "<p>Invalid mind map data received.</p>";
pub(crate) const EMPTY_PLACEHOLDER: &str = "<p>No mind map could be generated for this document.</p>";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

pub(crate) fn scene_from_json(data: &str, options: &str) -> Result<Scene> {
    let opts = RenderOptions::from_json(options)?;
    let input = parse_mind_map_json(data)?;
    build_scene(&input, &opts.layout, &opts.style)
}

/// Which placeholder to show when `data` could not be drawn.
pub(crate) fn placeholder_for(data: &str) -> &'static str {
    let trimmed = data.trim();
    if trimmed.is_empty() || trimmed == "null" {
        EMPTY_PLACEHOLDER
    } else {
        INVALID_PLACEHOLDER
    }
}

/// Scene JSON for `data`, or the `{"error": ...}` envelope. Failures are
/// also passed to `report`.
pub(crate) fn scene_json(data: &str, options: &str, report: impl FnOnce(&str)) -> String {
    let output = match scene_from_json(data, options) {
        Ok(scene) => SceneOutput::from(&scene),
        Err(e) => {
            report(&format!("Error laying out mind map: {e}"));
            SceneOutput::from(&e)
        }
    };
    serde_json::to_string(&output).unwrap_or_else(|_| "{\"error\": {\"kind\": \"json\"}}".to_string())
}

/// The scene for `data`, or the placeholder markup to show instead.
pub(crate) fn scene_or_placeholder(
    data: &str,
    options: &str,
    report: impl FnOnce(&str),
) -> std::result::Result<Scene, &'static str> {
    scene_from_json(data, options).map_err(|e| {
        report(&format!("Error rendering mind map: {e}"));
        placeholder_for(data)
    })
}

/// SVG markup for `data`, or placeholder markup on failure.
pub(crate) fn svg_markup(data: &str, options: &str, report: impl FnOnce(&str)) -> String {
    match scene_or_placeholder(data, options, report) {
        Ok(scene) => scene.to_svg(),
        Err(placeholder) => placeholder.to_string(),
    }
}

/// Lay out a mind map and return the scene as JSON (or `{"error": ...}`).
#[wasm_bindgen]
pub fn layout_mind_map_json(data: &str, options: &str) -> String {
    scene_json(data, options, console_error)
}

/// Render a mind map to SVG markup, or placeholder markup on failure.
#[wasm_bindgen]
pub fn render_mind_map_svg(data: &str, options: &str) -> String {
    svg_markup(data, options, console_error)
}

/// Replace the contents of `container` with the rendered mind map.
#[wasm_bindgen]
pub fn draw_mind_map(container: &Element, data: &str, options: &str) -> std::result::Result<(), JsValue> {
    let scene = match scene_or_placeholder(data, options, console_error) {
        Ok(scene) => scene,
        Err(placeholder) => {
            container.set_inner_html(placeholder);
            return Ok(());
        }
    };

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    container.set_inner_html("");
    let svg = document.create_element_ns(Some(SVG_NS), "svg")?;
    svg.set_attribute("viewBox", &view_box(&scene))?;
    svg.set_attribute("style", SVG_STYLE)?;

    for item in &scene.items {
        let el = match item {
            SceneItem::Edge(edge) => create_line(&document, edge)?,
            SceneItem::Node(node) => create_node(&document, node)?,
        };
        svg.append_child(&el)?;
    }

    container.append_child(&svg)?;
    Ok(())
}

fn create_line(document: &web_sys::Document, edge: &EdgeShape) -> std::result::Result<Element, JsValue> {
    let line = document.create_element_ns(Some(SVG_NS), "line")?;
    line.set_attribute("x1", &fmt_num(edge.start.x))?;
    line.set_attribute("y1", &fmt_num(edge.start.y))?;
    line.set_attribute("x2", &fmt_num(edge.end.x))?;
    line.set_attribute("y2", &fmt_num(edge.end.y))?;
    line.set_attribute("stroke", &edge.stroke)?;
    line.set_attribute("stroke-width", &fmt_num(edge.stroke_width))?;
    Ok(line)
}

fn create_node(document: &web_sys::Document, node: &NodeShape) -> std::result::Result<Element, JsValue> {
    let group = document.create_element_ns(Some(SVG_NS), "g")?;
    group.set_attribute(
        "transform",
        &format!("translate({}, {})", fmt_num(node.center.x), fmt_num(node.center.y)),
    )?;

    let rect = document.create_element_ns(Some(SVG_NS), "rect")?;
    rect.set_attribute("x", &fmt_num(-node.width / 2.0))?;
    rect.set_attribute("y", &fmt_num(-node.height / 2.0))?;
    rect.set_attribute("width", &fmt_num(node.width))?;
    rect.set_attribute("height", &fmt_num(node.height))?;
    rect.set_attribute("rx", &fmt_num(node.corner_radius))?;
    rect.set_attribute("fill", &node.fill)?;
    rect.set_attribute("stroke", &node.stroke)?;
    rect.set_attribute("stroke-width", &fmt_num(node.stroke_width))?;

    let text = document.create_element_ns(Some(SVG_NS), "text")?;
    text.set_attribute("fill", &node.text_fill)?;
    text.set_attribute("text-anchor", "middle")?;
    text.set_attribute("font-size", &fmt_num(node.font_size))?;
    text.set_attribute("font-family", &node.font_family)?;
    text.set_attribute("y", &fmt_num(node.text_y))?;
    for (i, line) in node.lines.iter().enumerate() {
        let tspan = document.create_element_ns(Some(SVG_NS), "tspan")?;
        tspan.set_attribute("x", "0")?;
        tspan.set_attribute("dy", &tspan_dy(i, node.line_height))?;
        tspan.set_text_content(Some(line));
        text.append_child(&tspan)?;
    }

    group.append_child(&rect)?;
    group.append_child(&text)?;
    Ok(group)
}
