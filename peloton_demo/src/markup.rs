// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal HTML/SVG dump of a `peloton_core` surface.

use std::fmt::Write as _;

use peloton_core::{ElementId, Surface};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Wraps the serialized surface in a standalone HTML document.
pub(crate) fn render_document<H>(title: &str, surface: &Surface<H>) -> String {
    let mut out = String::new();
    out.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_xml(title));
    out.push_str("<style>body { font-family: sans-serif; }</style>\n");
    out.push_str("</head>\n<body>\n");
    write_element(&mut out, surface, surface.root(), false);
    out.push_str("</body>\n</html>\n");
    out
}

/// Serializes `el` and its subtree.
///
/// Inside `svg`, childless elements are self-closed; HTML elements always get a closing tag.
pub(crate) fn write_element<H>(out: &mut String, surface: &Surface<H>, el: ElementId, in_svg: bool) {
    let Some(element) = surface.get(el) else {
        return;
    };
    let tag = element.tag();
    let is_svg_root = tag == "svg" && !in_svg;
    let in_svg = in_svg || tag == "svg";

    let _ = write!(out, "<{tag}");
    if is_svg_root {
        let _ = write!(out, r#" xmlns="{SVG_NS}""#);
    }
    for (name, value) in element.attrs() {
        let _ = write!(out, r#" {name}="{}""#, escape_xml(&value.to_string()));
    }
    let mut styles = element.styles().peekable();
    if styles.peek().is_some() {
        let style: Vec<String> = styles.map(|(k, v)| format!("{k}: {v}")).collect();
        let _ = write!(out, r#" style="{}""#, escape_xml(&style.join("; ")));
    }

    let text = element.text().unwrap_or_default();
    if in_svg && text.is_empty() && element.children().is_empty() {
        out.push_str("/>\n");
        return;
    }
    out.push('>');
    out.push_str(&escape_xml(text));
    if !element.children().is_empty() {
        out.push('\n');
        for &child in element.children() {
            write_element(out, surface, child, in_svg);
        }
    }
    let _ = writeln!(out, "</{tag}>");
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
