//! Card maker editor
//!
//! Produces both a CSS rule set and the HTML fragment for one of six card
//! layouts.

use serde::{Deserialize, Serialize};
use toolbox_math::css_number;

use crate::editor::{check_color, check_range, Editor};
use crate::error::EditorError;
use crate::keywords::css_keywords;
use crate::style::{GeneratedCode, Style};

const GLASS_SHADOW: &str = "0 8px 32px 0 rgba(31, 38, 135, 0.37)";
const DEFAULT_BORDER_COLOR: &str = "rgba(255, 255, 255, 0.2)";
const OUTLINE_COLOR: &str = "#3b82f6";

css_keywords! {
    /// Visual treatment of the card
    pub enum CardStyle {
        Glassmorphism => "glassmorphism",
        Neumorphism => "neumorphism",
        Gradient => "gradient",
        Flat => "flat",
        Outlined => "outlined",
        Elevated => "elevated",
    }
}

css_keywords! {
    /// Content layout of the card
    pub enum CardType {
        Product => "product",
        Profile => "profile",
        Stats => "stats",
        Blog => "blog",
        Pricing => "pricing",
        Testimonial => "testimonial",
    }
}

/// Style preset: background and blur for one card style
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardPreset {
    pub name: String,
    pub style: CardStyle,
    pub background: String,
    pub blur: f64,
}

impl CardPreset {
    pub fn new(name: &str, style: CardStyle, background: &str, blur: f64) -> Self {
        Self {
            name: name.to_string(),
            style,
            background: background.to_string(),
            blur,
        }
    }
}

/// Input events for the card editor
#[derive(Clone, Debug, PartialEq)]
pub enum CardAction {
    SetStyle(CardStyle),
    SetType(CardType),
    /// px, 200 to 500
    SetWidth(f64),
    /// px, 12 to 48
    SetPadding(f64),
    /// px, 0 to 32
    SetBorderRadius(f64),
    SetBackground(String),
    SetTextColor(String),
    SetAccentColor(String),
    /// px, 0 to 8
    SetBorderWidth(f64),
    SetBorderColor(String),
    /// 0 to 50
    SetShadowIntensity(f64),
    /// px, 0 to 24
    SetBlur(f64),
    SetHoverEffect(bool),
    SetImage(bool),
    ApplyPreset(CardPreset),
    Reset,
}

/// Card editor state
#[derive(Clone, Debug, PartialEq)]
pub struct CardState {
    pub style: CardStyle,
    pub card_type: CardType,
    pub width: f64,
    pub padding: f64,
    pub border_radius: f64,
    pub background: String,
    pub text_color: String,
    pub accent_color: String,
    pub border_width: f64,
    pub border_color: String,
    pub shadow_intensity: f64,
    pub blur: f64,
    pub hover_effect: bool,
    pub has_image: bool,
}

impl Default for CardState {
    fn default() -> Self {
        Self {
            style: CardStyle::Glassmorphism,
            card_type: CardType::Product,
            width: 320.0,
            padding: 24.0,
            border_radius: 16.0,
            background: "rgba(255, 255, 255, 0.1)".to_string(),
            text_color: "#ffffff".to_string(),
            accent_color: "#3b82f6".to_string(),
            border_width: 1.0,
            border_color: DEFAULT_BORDER_COLOR.to_string(),
            shadow_intensity: 20.0,
            blur: 12.0,
            hover_effect: true,
            has_image: true,
        }
    }
}

impl CardState {
    /// `box-shadow` value for the current style
    pub fn box_shadow(&self) -> String {
        let s = self.shadow_intensity;
        match self.style {
            CardStyle::Glassmorphism => GLASS_SHADOW.to_string(),
            CardStyle::Neumorphism => format!(
                "{s}px {s}px {d}px #bebebe, -{s}px -{s}px {d}px #ffffff",
                s = css_number(s),
                d = css_number(s * 2.0)
            ),
            CardStyle::Gradient => format!(
                "0 {}px {}px rgba(0, 0, 0, 0.2)",
                css_number(s),
                css_number(s * 2.0)
            ),
            CardStyle::Flat | CardStyle::Outlined => "none".to_string(),
            CardStyle::Elevated => format!(
                "0 {}px {}px rgba(0, 0, 0, 0.15)",
                css_number(s),
                css_number(s * 3.0)
            ),
        }
    }

    fn border(&self) -> String {
        format!("{}px solid {}", css_number(self.border_width), self.border_color)
    }

    fn blur_filter(&self) -> String {
        format!("blur({}px)", css_number(self.blur))
    }

    fn style_lines(&self) -> String {
        let mut css = format!("  background: {};\n", self.background);
        match self.style {
            CardStyle::Glassmorphism => {
                css.push_str(&format!("  backdrop-filter: {};\n", self.blur_filter()));
                css.push_str(&format!("  -webkit-backdrop-filter: {};\n", self.blur_filter()));
                css.push_str(&format!("  box-shadow: {};\n", GLASS_SHADOW));
            }
            CardStyle::Neumorphism => {
                let s = css_number(self.shadow_intensity);
                let d = css_number(self.shadow_intensity * 2.0);
                css.push_str(&format!(
                    "  box-shadow: {s}px {s}px {d}px #bebebe,\n              -{s}px -{s}px {d}px #ffffff;\n",
                    s = s,
                    d = d
                ));
            }
            _ => css.push_str(&format!("  box-shadow: {};\n", self.box_shadow())),
        }
        css
    }

    /// The CSS rules for `.card` and its parts
    pub fn css(&self) -> String {
        let mut css = format!(
            ".card {{\n  width: {}px;\n  padding: {}px;\n  border-radius: {}px;\n  border: {};\n  color: {};\n  transition: all 0.3s ease;\n{}}}",
            css_number(self.width),
            css_number(self.padding),
            css_number(self.border_radius),
            self.border(),
            self.text_color,
            self.style_lines()
        );
        css.push_str(&format!(
            "\n\n.card-accent {{\n  color: {a};\n}}\n\n.card-button {{\n  background: {a};\n  color: white;\n  padding: 12px 24px;\n  border-radius: 8px;\n  border: none;\n  font-weight: 500;\n  cursor: pointer;\n  transition: transform 0.2s ease;\n}}\n\n.card-button:hover {{\n  transform: translateY(-2px);\n}}",
            a = self.accent_color
        ));
        if self.hover_effect {
            css.push_str(&format!(
                "\n\n.card:hover {{\n  transform: translateY(-8px);\n  box-shadow: 0 {}px {}px rgba(0, 0, 0, 0.2);\n}}",
                css_number(self.shadow_intensity + 10.0),
                css_number(self.shadow_intensity * 4.0)
            ));
        }
        css
    }

    /// HTML fragment for the card type
    pub fn html(&self) -> String {
        let image = |line: &str| {
            if self.has_image {
                format!("\n    {}", line)
            } else {
                String::new()
            }
        };
        match self.card_type {
            CardType::Product => format!(
                "  <div class=\"card\">{}\n    <h3>Product Name</h3>\n    <p>Product description...</p>\n    <div class=\"card-footer\">\n      <span class=\"card-accent\">$49.99</span>\n      <button class=\"card-button\">Buy</button>\n    </div>\n  </div>",
                image("<img src=\"product.jpg\" alt=\"Product\" class=\"card-image\">")
            ),
            CardType::Profile => format!(
                "  <div class=\"card\">{}\n    <h3>John Doe</h3>\n    <p>UI/UX Designer</p>\n    <div class=\"card-stats\">\n      <div><strong class=\"card-accent\">1.2K</strong> Followers</div>\n      <div><strong class=\"card-accent\">456</strong> Following</div>\n    </div>\n  </div>",
                image("<img src=\"avatar.jpg\" alt=\"Profile\" class=\"card-avatar\">")
            ),
            CardType::Stats => "  <div class=\"card\">\n    <div class=\"card-icon\">📈</div>\n    <p>Total Revenue</p>\n    <h3>$45,231</h3>\n    <span class=\"card-accent\">+20.1% from last month</span>\n  </div>".to_string(),
            CardType::Blog => format!(
                "  <div class=\"card\">{}\n    <span class=\"card-tag\">Design</span>\n    <h3>A complete guide to modern design</h3>\n    <p>Discover the latest UI/UX trends...</p>\n    <div class=\"card-author\">\n      <img src=\"author.jpg\" alt=\"Author\">\n      <div>\n        <strong>Marie Dubois</strong>\n        <span>Dec 12, 2024</span>\n      </div>\n    </div>\n  </div>",
                image("<img src=\"blog-cover.jpg\" alt=\"Blog\" class=\"card-image\">")
            ),
            CardType::Pricing => "  <div class=\"card\">\n    <h4>PRO</h4>\n    <h2><span class=\"card-accent\">$29</span>/month</h2>\n    <ul>\n      <li>✓ Feature 1</li>\n      <li>✓ Feature 2</li>\n      <li>✓ Feature 3</li>\n      <li>✓ Feature 4</li>\n    </ul>\n    <button class=\"card-button\">Get started</button>\n  </div>".to_string(),
            CardType::Testimonial => "  <div class=\"card\">\n    <div class=\"card-stars\">⭐⭐⭐⭐⭐</div>\n    <p>\"This app completely changed the way I work...\"</p>\n    <div class=\"card-author\">\n      <img src=\"avatar.jpg\" alt=\"Sophie\">\n      <div>\n        <strong>Sophie Martin</strong>\n        <span>CEO, TechStart</span>\n      </div>\n    </div>\n  </div>".to_string(),
        }
    }
}

impl Editor for CardState {
    type Action = CardAction;

    fn reduce(&self, action: CardAction) -> Result<Self, EditorError> {
        let mut next = self.clone();
        match action {
            CardAction::SetStyle(style) => next.style = style,
            CardAction::SetType(card_type) => next.card_type = card_type,
            CardAction::SetWidth(w) => next.width = check_range("width", w, 200.0, 500.0)?,
            CardAction::SetPadding(p) => next.padding = check_range("padding", p, 12.0, 48.0)?,
            CardAction::SetBorderRadius(r) => {
                next.border_radius = check_range("border radius", r, 0.0, 32.0)?
            }
            CardAction::SetBackground(c) => next.background = check_color("background", &c)?,
            CardAction::SetTextColor(c) => next.text_color = check_color("text color", &c)?,
            CardAction::SetAccentColor(c) => next.accent_color = check_color("accent color", &c)?,
            CardAction::SetBorderWidth(w) => {
                next.border_width = check_range("border width", w, 0.0, 8.0)?
            }
            CardAction::SetBorderColor(c) => next.border_color = check_color("border color", &c)?,
            CardAction::SetShadowIntensity(s) => {
                next.shadow_intensity = check_range("shadow intensity", s, 0.0, 50.0)?
            }
            CardAction::SetBlur(b) => next.blur = check_range("blur", b, 0.0, 24.0)?,
            CardAction::SetHoverEffect(on) => next.hover_effect = on,
            CardAction::SetImage(on) => next.has_image = on,
            CardAction::ApplyPreset(preset) => {
                next.background = check_color("background", &preset.background)?;
                next.blur = check_range("blur", preset.blur, 0.0, 24.0)?;
                next.style = preset.style;
                if preset.style == CardStyle::Outlined {
                    next.border_color = OUTLINE_COLOR.to_string();
                    next.border_width = 2.0;
                } else {
                    next.border_color = DEFAULT_BORDER_COLOR.to_string();
                    next.border_width = 1.0;
                }
            }
            CardAction::Reset => next = Self::default(),
        }
        Ok(next)
    }

    fn derive_style(&self) -> Style {
        let mut style = Style::new()
            .with("width", format!("{}px", css_number(self.width)))
            .with("padding", format!("{}px", css_number(self.padding)))
            .with("border-radius", format!("{}px", css_number(self.border_radius)))
            .with("border", self.border())
            .with("color", self.text_color.as_str())
            .with("transition", "all 0.3s ease")
            .with("background", self.background.as_str());
        if self.style == CardStyle::Glassmorphism {
            style.set("backdrop-filter", self.blur_filter());
            style.set("-webkit-backdrop-filter", self.blur_filter());
        }
        style.set("box-shadow", self.box_shadow());
        style
    }

    fn derive_code(&self) -> GeneratedCode {
        GeneratedCode::with_html(self.css(), self.html())
    }
}

/// The built-in card style presets
pub fn builtin_presets() -> Vec<CardPreset> {
    vec![
        CardPreset::new("Glassmorphism", CardStyle::Glassmorphism, "rgba(255, 255, 255, 0.1)", 12.0),
        CardPreset::new("Neumorphism", CardStyle::Neumorphism, "#e0e5ec", 0.0),
        CardPreset::new(
            "Gradient",
            CardStyle::Gradient,
            "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
            0.0,
        ),
        CardPreset::new("Flat", CardStyle::Flat, "#ffffff", 0.0),
        CardPreset::new("Outlined", CardStyle::Outlined, "transparent", 0.0),
        CardPreset::new("Elevated", CardStyle::Elevated, "#ffffff", 0.0),
    ]
}
