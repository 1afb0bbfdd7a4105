//! A standalone HTML page as a preview surface
//!
//! [`HtmlPreview`] collects what the core applies and renders it as a single
//! self-contained page, so a preview can be opened in any browser.

use std::fs;
use std::io;
use std::path::Path;

use toolbox_core::animation::PREVIEW_ANIMATION;
use toolbox_core::{css_number, KeyframeStep, Style, TimingFunction};

use crate::surface::{AnimationSurface, StyleSurface};

const PAGE_CSS: &str = "body {\n  margin: 0;\n  min-height: 100vh;\n  display: flex;\n  align-items: center;\n  justify-content: center;\n  background: #0a0a0f;\n  color: #ffffff;\n  font-family: system-ui, sans-serif;\n}";

#[derive(Clone, Debug, PartialEq)]
struct Keyframes {
    steps: Vec<KeyframeStep>,
    duration_ms: u64,
    timing: TimingFunction,
}

/// Preview surface that renders an HTML document
#[derive(Clone, Debug)]
pub struct HtmlPreview {
    title: String,
    /// Styled elements by target path, in the order first applied
    elements: Vec<(String, Style)>,
    markup: Vec<(String, String)>,
    keyframes: Option<Keyframes>,
}

impl Default for HtmlPreview {
    fn default() -> Self {
        Self::new("CSS Toolbox preview")
    }
}

fn parent_of(path: &str) -> &str {
    path.rsplit_once('/').map(|(parent, _)| parent).unwrap_or("")
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;").replace('<', "&lt;")
}

impl HtmlPreview {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            elements: Vec::new(),
            markup: Vec::new(),
            keyframes: None,
        }
    }

    /// Number of styled elements
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Duration of the animation being played, if any
    pub fn animation_duration_ms(&self) -> Option<u64> {
        self.keyframes.as_ref().map(|k| k.duration_ms)
    }

    /// The `@keyframes preview-animation` rule for the current steps
    pub fn keyframes_css(&self) -> Option<String> {
        let keyframes = self.keyframes.as_ref()?;
        let mut css = format!("@keyframes {} {{\n", PREVIEW_ANIMATION);
        for step in &keyframes.steps {
            css.push_str(&format!(
                "  {}% {{\n    transform: {};\n    opacity: {};\n    animation-timing-function: {};\n  }}\n",
                css_number(step.offset * 100.0),
                step.transform,
                css_number(step.opacity),
                keyframes.timing
            ));
        }
        css.push('}');
        Some(css)
    }

    fn render_children(&self, parent: &str, depth: usize, out: &mut String) {
        for (path, style) in self.elements.iter().filter(|(p, _)| parent_of(p) == parent) {
            let indent = "  ".repeat(depth + 1);
            out.push_str(&format!(
                "{}<div class=\"{}\" style=\"{}\">",
                indent,
                last_segment(path),
                escape_attr(&style.to_inline())
            ));
            let has_children = self.elements.iter().any(|(p, _)| parent_of(p) == path.as_str());
            if has_children {
                out.push('\n');
                self.render_children(path, depth + 1, out);
                out.push_str(&indent);
            }
            out.push_str("</div>\n");
        }
    }

    /// Render the whole page
    pub fn render(&self) -> String {
        let mut css = vec![PAGE_CSS.to_string()];
        css.extend(self.keyframes_css());
        css.extend(self.markup.iter().map(|(_, c)| c.clone()).filter(|c| !c.is_empty()));

        let mut body = String::new();
        for (html, _) in &self.markup {
            if !html.is_empty() {
                body.push_str(html);
                body.push('\n');
            }
        }
        self.render_children("", 0, &mut body);

        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n{}</body>\n</html>\n",
            self.title,
            css.join("\n\n"),
            body
        )
    }

    /// Render and write the page to `path`
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        fs::write(path, self.render())?;
        log::debug!("Wrote preview to {}", path.display());
        Ok(())
    }
}

impl StyleSurface for HtmlPreview {
    fn apply_style(&mut self, target: &str, style: &Style) {
        match self.elements.iter_mut().find(|(p, _)| p == target) {
            Some(slot) => slot.1 = style.clone(),
            None => self.elements.push((target.to_string(), style.clone())),
        }
    }

    fn apply_markup(&mut self, html: &str, css: &str) {
        self.markup.push((html.to_string(), css.to_string()));
    }

    fn clear(&mut self) {
        self.elements.clear();
        self.markup.clear();
        self.keyframes = None;
    }
}

impl AnimationSurface for HtmlPreview {
    fn apply_keyframe_animation(
        &mut self,
        steps: &[KeyframeStep],
        duration_ms: u64,
        timing: &TimingFunction,
    ) {
        self.keyframes = Some(Keyframes {
            steps: steps.to_vec(),
            duration_ms,
            timing: *timing,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_elements() {
        let mut preview = HtmlPreview::new("t");
        preview.apply_style("scene", &Style::new().with("perspective", "1000px"));
        preview.apply_style("scene/shape", &Style::new().with("width", "200px"));
        preview.apply_style("scene/shape/front", &Style::new().with("opacity", "0.9"));
        let page = preview.render();
        assert!(page.contains(
            "  <div class=\"scene\" style=\"perspective: 1000px;\">\n    <div class=\"shape\" style=\"width: 200px;\">\n      <div class=\"front\" style=\"opacity: 0.9;\"></div>\n    </div>\n  </div>\n"
        ));
    }

    #[test]
    fn test_restyle_replaces() {
        let mut preview = HtmlPreview::default();
        preview.apply_style("element", &Style::new().with("color", "red"));
        preview.apply_style("element", &Style::new().with("color", "blue"));
        assert_eq!(preview.element_count(), 1);
        assert!(preview.render().contains("color: blue;"));
    }

    #[test]
    fn test_keyframes_rule() {
        let mut preview = HtmlPreview::default();
        let steps = [
            KeyframeStep {
                offset: 0.0,
                transform: "none".to_string(),
                opacity: 1.0,
            },
            KeyframeStep {
                offset: 0.5,
                transform: "scale(1.2)".to_string(),
                opacity: 0.5,
            },
        ];
        preview.apply_keyframe_animation(&steps, 1000, &TimingFunction::Linear);
        assert_eq!(preview.animation_duration_ms(), Some(1000));
        let css = preview.keyframes_css().unwrap();
        assert!(css.starts_with("@keyframes preview-animation {\n  0% {\n    transform: none;"));
        assert!(css.contains("  50% {\n    transform: scale(1.2);\n    opacity: 0.5;"));
    }

    #[test]
    fn test_attribute_escaping() {
        let mut preview = HtmlPreview::default();
        preview.apply_style("element", &Style::new().with("font-family", "\"Inter\""));
        assert!(preview.render().contains("font-family: &quot;Inter&quot;;"));
    }

    #[test]
    fn test_clear() {
        let mut preview = HtmlPreview::default();
        preview.apply_style("element", &Style::new().with("color", "red"));
        preview.apply_markup("<p>hi</p>", "p { color: red; }");
        preview.clear();
        assert_eq!(preview.element_count(), 0);
        assert!(!preview.render().contains("<p>hi</p>"));
    }
}
