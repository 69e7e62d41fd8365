use super::surface::{RenderSurface, StrokeStyle};
use crate::model::types::fmt_num;
use crate::model::Point;
use std::fmt::Write;

/// [`RenderSurface`] that builds a standalone SVG document.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
    depth: usize,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
            depth: 1,
        }
    }

    /// Closes any open groups and returns the document.
    pub fn finish(mut self) -> String {
        while self.depth > 1 {
            self.end_group();
        }
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">\n{}</svg>\n",
            fmt_num(self.width),
            fmt_num(self.height),
            self.body
        )
    }

    fn push(&mut self, element: &str) {
        for _ in 0..self.depth {
            self.body.push_str("  ");
        }
        self.body.push_str(element);
        self.body.push('\n');
    }
}

fn stroke_attrs(stroke: StrokeStyle) -> String {
    let mut out = format!(
        "stroke=\"{}\" stroke-width=\"{}\"",
        stroke.color, stroke.width
    );
    if let Some(dash) = stroke.dash {
        let _ = write!(out, " stroke-dasharray=\"{}\"", dash);
    }
    out
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl RenderSurface for SvgSurface {
    fn line(&mut self, from: Point, to: Point, stroke: StrokeStyle) {
        let el = format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {} />",
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y),
            stroke_attrs(stroke)
        );
        self.push(&el);
    }

    fn path(&mut self, data: &str, stroke: StrokeStyle) {
        let el = format!(
            "<path d=\"{}\" {} fill=\"none\" />",
            escape(data),
            stroke_attrs(stroke)
        );
        self.push(&el);
    }

    fn circle(&mut self, center: Point, radius: f64, fill: &str) {
        let el = format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" />",
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(radius),
            escape(fill)
        );
        self.push(&el);
    }

    fn text(&mut self, at: Point, content: &str, class: &str) {
        let el = format!(
            "<text x=\"{}\" y=\"{}\" class=\"{}\">{}</text>",
            fmt_num(at.x),
            fmt_num(at.y),
            escape(class),
            escape(content)
        );
        self.push(&el);
    }

    fn begin_group(&mut self, translate: Point) {
        let el = format!(
            "<g transform=\"translate({}, {})\">",
            fmt_num(translate.x),
            fmt_num(translate.y)
        );
        self.push(&el);
        self.depth += 1;
    }

    fn end_group(&mut self) {
        if self.depth > 1 {
            self.depth -= 1;
            self.push("</g>");
        }
    }
}
