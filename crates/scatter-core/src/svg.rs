// File: crates/scatter-core/src/svg.rs
// Summary: Serialize a Scene to SVG markup; elements carry their mark class names.

use std::path::Path;

use crate::error::{Error, Result};
use crate::scene::{Anchor, Mark, MarkClass, Scene, Shape};
use crate::theme::Theme;

const FONT_SIZE: f32 = 12.0;

pub fn to_svg(scene: &Scene, width: u32, height: u32, theme: &Theme) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
    ));
    out.push_str(&format!("<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n", theme.background.to_hex()));
    for mark in scene.paint_order().into_iter().filter(|m| m.shape.is_finite()) {
        out.push_str(&mark_element(mark, theme));
        out.push('\n');
    }
    out.push_str("</svg>\n");
    out
}

pub fn write_svg(scene: &Scene, width: u32, height: u32, theme: &Theme, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source| Error::Io { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, to_svg(scene, width, height, theme)).map_err(io_err)
}

/// One SVG element for `mark`, without a trailing newline.
fn mark_element(mark: &Mark, theme: &Theme) -> String {
    let class = mark.class.css_class();
    let color = theme.color_for(mark);
    let (hex, opacity) = (color.to_hex(), color.opacity());
    match &mark.shape {
        Shape::Circle { center, radius } => format!(
            r#"<circle class="{class}" cx="{:.2}" cy="{:.2}" r="{radius}" fill="{hex}" fill-opacity="{opacity:.3}"/>"#,
            center.x, center.y
        ),
        Shape::Segment { from, to } => format!(
            r#"<line class="{class}" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{hex}" stroke-opacity="{opacity:.3}" stroke-width="{}"/>"#,
            from.x, from.y, to.x, to.y, stroke_width(mark)
        ),
        Shape::Rect { rect } => format!(
            r#"<rect class="{class}" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="3" fill="{hex}"/>"#,
            rect.left, rect.top, rect.width(), rect.height()
        ),
        Shape::Text { at, text, anchor } => {
            let anchor = match anchor {
                Anchor::Start => "start",
                Anchor::Middle => "middle",
                Anchor::End => "end",
            };
            format!(
                r#"<text class="{class}" x="{:.2}" y="{:.2}" font-size="{FONT_SIZE}" text-anchor="{anchor}" fill="{}">{}</text>"#,
                at.x, at.y, theme.text_color_for(mark).to_hex(), escape(text)
            )
        }
    }
}

fn stroke_width(mark: &Mark) -> f32 {
    match mark.class {
        MarkClass::RegressionLine | MarkClass::Residual => 2.0,
        _ => 1.0,
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
