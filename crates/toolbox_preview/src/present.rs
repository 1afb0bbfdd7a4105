//! Bridges a session to a preview surface
//!
//! Turns the active editor's state into the element styles, markup and
//! keyframe animation a surface needs to show it.

use toolbox_core::{Editor, EditorKind, Session, Style};

use crate::surface::{AnimationSurface, StyleSurface};

/// Size of the single preview element used by the gradient, shadow and
/// animation editors
const ELEMENT_SIZE: (&str, &str) = ("200px", "200px");

fn item_style(index: u32) -> Style {
    let colors = ["#3b82f6", "#8b5cf6", "#ec4899", "#10b981"];
    Style::new()
        .with("min-width", "60px")
        .with("min-height", "60px")
        .with("padding", "16px")
        .with("border-radius", "8px")
        .with("color", "white")
        .with("background", colors[(index as usize - 1) % colors.len()])
}

fn sized(style: Style) -> Style {
    style
        .with("width", ELEMENT_SIZE.0)
        .with("height", ELEMENT_SIZE.1)
}

/// Show the active editor of `session` on `surface`
pub fn present<S>(session: &Session, surface: &mut S)
where
    S: StyleSurface + AnimationSurface,
{
    surface.clear();
    let kind = session.active();
    log::debug!("Presenting {}", kind);

    match kind {
        EditorKind::FlexGrid => {
            surface.apply_style("container", &session.active_style());
            for i in 1..=session.flex_grid().item_count {
                surface.apply_style(&format!("container/item-{}", i), &item_style(i));
            }
        }
        EditorKind::Gradients | EditorKind::BoxShadow => {
            surface.apply_style("element", &sized(session.active_style()));
        }
        EditorKind::Animations => {
            let animation = session.animation();
            surface.apply_style("element", &sized(animation.derive_style()));
            surface.apply_keyframe_animation(
                &animation.steps(),
                animation.duration_ms(),
                &animation.settings.timing,
            );
        }
        EditorKind::Layouts | EditorKind::CardMaker => {
            let code = session.active_code();
            surface.apply_markup(code.html.as_deref().unwrap_or_default(), &code.css);
        }
        EditorKind::Transform3d => {
            let transform = session.transform();
            surface.apply_style("container", &transform.container_style());
            surface.apply_style("container/element", &sized(transform.derive_style()));
        }
        EditorKind::Shapes3d => {
            let shapes = session.shapes();
            if let Some(keyframes) = shapes.rotate_keyframes() {
                surface.apply_markup("", &keyframes);
            }
            surface.apply_style("scene", &shapes.scene_style());
            surface.apply_style("scene/shape", &shapes.derive_style());
            for (face, style) in shapes.face_styles() {
                surface.apply_style(&format!("scene/shape/{}", face.label), &style);
            }
        }
    }
}
