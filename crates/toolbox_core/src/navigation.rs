//! The registry of editors the navigation shell lists

/// Every editor page, in sidebar order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditorKind {
    FlexGrid,
    Gradients,
    BoxShadow,
    Animations,
    Layouts,
    Transform3d,
    Shapes3d,
    CardMaker,
}

impl EditorKind {
    /// Every editor, in sidebar order
    pub const ALL: [EditorKind; 8] = [
        EditorKind::FlexGrid,
        EditorKind::Gradients,
        EditorKind::BoxShadow,
        EditorKind::Animations,
        EditorKind::Layouts,
        EditorKind::Transform3d,
        EditorKind::Shapes3d,
        EditorKind::CardMaker,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            EditorKind::FlexGrid => "Flexbox & Grid",
            EditorKind::Gradients => "Gradients",
            EditorKind::BoxShadow => "Box Shadow",
            EditorKind::Animations => "Animations",
            EditorKind::Layouts => "Layouts",
            EditorKind::Transform3d => "3D Transform",
            EditorKind::Shapes3d => "3D Shapes",
            EditorKind::CardMaker => "Card Maker",
        }
    }

    /// Route without the leading slash
    pub fn route(self) -> &'static str {
        match self {
            EditorKind::FlexGrid => "flexbox-grid",
            EditorKind::Gradients => "gradients",
            EditorKind::BoxShadow => "box-shadow",
            EditorKind::Animations => "animations",
            EditorKind::Layouts => "layouts",
            EditorKind::Transform3d => "transform-3d",
            EditorKind::Shapes3d => "3d-shapes",
            EditorKind::CardMaker => "card-maker",
        }
    }

    /// One-line description shown in listings
    pub fn description(self) -> &'static str {
        match self {
            EditorKind::FlexGrid => "Build Flexbox and CSS Grid layouts visually",
            EditorKind::Gradients => "Linear, radial and conic gradients",
            EditorKind::BoxShadow => "Layered box shadows",
            EditorKind::Animations => "Keyframe animations",
            EditorKind::Layouts => "Ready-made page layout templates",
            EditorKind::Transform3d => "3D transforms and perspective",
            EditorKind::Shapes3d => "Pure CSS 3D shapes (cube, pyramid, cylinder...)",
            EditorKind::CardMaker => "UI cards (glassmorphism, neumorphism...)",
        }
    }

    /// Look an editor up by route (with or without a leading `/`) or by a
    /// short alias such as `shadow` or `shapes`
    pub fn from_route(route: &str) -> Option<Self> {
        let route = route.trim().trim_start_matches('/').to_ascii_lowercase();
        if let Some(kind) = Self::ALL.into_iter().find(|k| k.route() == route) {
            return Some(kind);
        }
        match route.as_str() {
            "flex" | "grid" | "flexbox" => Some(EditorKind::FlexGrid),
            "gradient" => Some(EditorKind::Gradients),
            "shadow" | "shadows" => Some(EditorKind::BoxShadow),
            "animation" | "keyframes" => Some(EditorKind::Animations),
            "layout" => Some(EditorKind::Layouts),
            "transform" | "transform3d" => Some(EditorKind::Transform3d),
            "shapes" | "shape" => Some(EditorKind::Shapes3d),
            "card" | "cards" => Some(EditorKind::CardMaker),
            _ => None,
        }
    }
}

impl std::fmt::Display for EditorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
