//! Ordered CSS declarations and generated code

use std::fmt;

/// An ordered list of CSS declarations for one element.
///
/// Setting a property that is already present replaces its value in place,
/// so declaration order is the order properties were first set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    declarations: Vec<(String, String)>,
}

impl Style {
    /// Create an empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a property
    pub fn with(mut self, property: &str, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Set a property, replacing any previous value
    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| p == property) {
            Some(slot) => slot.1 = value,
            None => self.declarations.push((property.to_string(), value)),
        }
    }

    /// Value of a property, if set
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Declarations in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Number of declarations
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether no property is set
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Render as an inline `style` attribute value
    pub fn to_inline(&self) -> String {
        self.iter()
            .map(|(p, v)| format!("{}: {};", p, v))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Render as a CSS rule block for `selector`
    pub fn to_rule(&self, selector: &str) -> String {
        let mut rule = format!("{} {{\n", selector);
        for (p, v) in self.iter() {
            rule.push_str(&format!("  {}: {};\n", p, v));
        }
        rule.push('}');
        rule
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_inline())
    }
}

/// Text produced by an editor's code generator
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeneratedCode {
    pub css: String,
    /// HTML fragment, for editors that produce markup
    pub html: Option<String>,
}

impl GeneratedCode {
    /// CSS only
    pub fn css(css: impl Into<String>) -> Self {
        Self {
            css: css.into(),
            html: None,
        }
    }

    /// CSS plus an HTML fragment
    pub fn with_html(css: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            css: css.into(),
            html: Some(html.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let mut style = Style::new().with("width", "10px").with("height", "5px");
        style.set("width", "20px");
        let props: Vec<_> = style.iter().collect();
        assert_eq!(props, [("width", "20px"), ("height", "5px")]);
    }

    #[test]
    fn test_inline_and_rule() {
        let style = Style::new().with("display", "flex").with("gap", "16px");
        assert_eq!(style.to_inline(), "display: flex; gap: 16px;");
        assert_eq!(style.to_rule(".container"), ".container {\n  display: flex;\n  gap: 16px;\n}");
    }

    #[test]
    fn test_get_missing() {
        assert_eq!(Style::new().get("color"), None);
        assert!(Style::new().is_empty());
    }
}
