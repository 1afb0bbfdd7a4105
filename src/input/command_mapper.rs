//! Command mapping from typed lines to editor actions
//!
//! Shell commands (navigation, presets, copy) map to [`Command`] variants
//! directly. Editing verbs (`set`, `add`, `remove`, `edit`) depend on the
//! active editor and become an [`EditorAction`].

use std::fmt;

use toolbox_core::animation::{Direction, FillMode, IterationCount, KeyframeField};
use toolbox_core::card::{CardStyle, CardType};
use toolbox_core::flex_grid::{AlignItems, FlexDirection, FlexWrap, GridAlign, JustifyContent};
use toolbox_core::gradient::StopField;
use toolbox_core::shadow::LayerField;
use toolbox_core::{
    AnimationAction, Axis, CardAction, DisplayMode, EditorAction, EditorKind, FaceSlot,
    FlexGridAction, GradientAction, GradientKind, LayerId, LayoutAction, ShadowAction, ShapeKind,
    ShapesAction, TimingFunction, Transform3dAction, WallWidth,
};

/// A parsed line of input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the command summary
    Help,
    /// Leave the program
    Quit,
    /// List the editors
    List,
    /// Switch editor
    Navigate(EditorKind),
    /// List the presets of the active editor
    Presets,
    /// Apply a preset of the active editor by name
    Preset(String),
    /// Reset the active editor
    Reset,
    /// Print the generated code
    Show,
    /// Copy one part of the generated code
    Copy(CodePart),
    /// Write the HTML preview now
    Preview,
    /// Apply an action to the active editor
    Edit(EditorAction),
}

/// Which part of the generated code to copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePart {
    Css,
    Html,
}

/// Error for a line that could not be mapped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Blank line
    Empty,
    /// First word is not a command
    UnknownCommand(String),
    /// A command is missing its argument
    MissingArgument { command: String, expected: &'static str },
    /// An argument could not be parsed
    InvalidArgument { argument: String, expected: &'static str },
    /// The active editor has no such setting
    UnknownSetting { editor: EditorKind, setting: String },
    /// The verb does not apply to the active editor
    Unsupported { editor: EditorKind, verb: String },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "Empty command"),
            CommandError::UnknownCommand(word) => {
                write!(f, "Unknown command '{}' (type 'help')", word)
            }
            CommandError::MissingArgument { command, expected } => {
                write!(f, "'{}' expects {}", command, expected)
            }
            CommandError::InvalidArgument { argument, expected } => {
                write!(f, "'{}' is not {}", argument, expected)
            }
            CommandError::UnknownSetting { editor, setting } => {
                write!(f, "{} has no setting '{}'", editor, setting)
            }
            CommandError::Unsupported { editor, verb } => {
                write!(f, "'{}' does nothing in {}", verb, editor)
            }
        }
    }
}

impl std::error::Error for CommandError {}

pub const HELP: &str = "\
Commands:
  list                      list editors
  go <editor>               switch editor (route or alias)
  presets                   list presets of the current editor
  preset <name>             apply a preset
  set <setting> <value>     change a setting of the current editor
  add | remove [id]         add or remove an item, stop, layer or keyframe
  edit <id> <field> <value> change one stop, layer or keyframe
  play | pause | restart    animation playback
  random [seed]             random gradient
  reset                     restore the editor defaults
  show                      print the generated code
  copy [css|html]           copy the generated code
  preview                   write the HTML preview
  help | quit";

/// Maps input lines to commands for the active editor
pub struct CommandMapper;

impl CommandMapper {
    /// Map one input line
    pub fn map_line(line: &str, active: EditorKind) -> Result<Command, CommandError> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();
        let args: Vec<&str> = words.collect();

        match verb.as_str() {
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "list" | "ls" => Ok(Command::List),
            "go" | "open" => {
                let route = required(&verb, &args, 0, "an editor name")?;
                EditorKind::from_route(route)
                    .map(Command::Navigate)
                    .ok_or_else(|| invalid(route, "an editor name"))
            }
            "presets" => Ok(Command::Presets),
            "preset" => {
                if args.is_empty() {
                    return Err(missing(&verb, "a preset name"));
                }
                Ok(Command::Preset(args.join(" ")))
            }
            "reset" => Ok(Command::Reset),
            "show" | "code" => Ok(Command::Show),
            "copy" => match args.first().map(|a| a.to_ascii_lowercase()).as_deref() {
                None | Some("css") => Ok(Command::Copy(CodePart::Css)),
                Some("html") => Ok(Command::Copy(CodePart::Html)),
                Some(other) => Err(invalid(other, "css or html")),
            },
            "preview" => Ok(Command::Preview),
            "set" => {
                let setting = required(&verb, &args, 0, "a setting name")?;
                if args.len() < 2 {
                    return Err(missing(setting, "a value"));
                }
                map_set(active, &setting.to_ascii_lowercase(), &args[1..]).map(Command::Edit)
            }
            "add" => map_add(active).map(Command::Edit),
            "remove" | "rm" => map_remove(active, &args).map(Command::Edit),
            "edit" => {
                let id = parse_id(required(&verb, &args, 0, "an id")?)?;
                let field = required(&verb, &args, 1, "a field name")?;
                required(&verb, &args, 2, "a value")?;
                let value = args[2..].join(" ");
                map_edit(active, id, &field.to_ascii_lowercase(), &value).map(Command::Edit)
            }
            "play" | "pause" | "toggle" | "restart" => map_playback(active, &verb).map(Command::Edit),
            "random" | "randomize" => {
                if active != EditorKind::Gradients {
                    return Err(unsupported(active, &verb));
                }
                let seed = match args.first() {
                    Some(s) => s.parse().map_err(|_| invalid(s, "a seed number"))?,
                    None => default_seed(),
                };
                Ok(Command::Edit(EditorAction::Gradient(GradientAction::Randomize { seed })))
            }
            _ => Err(CommandError::UnknownCommand(verb)),
        }
    }
}

fn default_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn required<'a>(
    command: &str,
    args: &[&'a str],
    index: usize,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    args.get(index).copied().ok_or_else(|| missing(command, expected))
}

fn missing(command: &str, expected: &'static str) -> CommandError {
    CommandError::MissingArgument {
        command: command.to_string(),
        expected,
    }
}

fn invalid(argument: &str, expected: &'static str) -> CommandError {
    CommandError::InvalidArgument {
        argument: argument.to_string(),
        expected,
    }
}

fn unsupported(editor: EditorKind, verb: &str) -> CommandError {
    CommandError::Unsupported {
        editor,
        verb: verb.to_string(),
    }
}

fn unknown_setting(editor: EditorKind, setting: &str) -> CommandError {
    CommandError::UnknownSetting {
        editor,
        setting: setting.to_string(),
    }
}

fn number(value: &str) -> Result<f64, CommandError> {
    value
        .trim_end_matches("px")
        .trim_end_matches("deg")
        .trim_end_matches('s')
        .trim_end_matches('%')
        .parse::<f64>()
        .map_err(|_| invalid(value, "a number"))
}

fn count(value: &str) -> Result<u32, CommandError> {
    value.parse::<u32>().map_err(|_| invalid(value, "a whole number"))
}

fn flag(value: &str) -> Result<bool, CommandError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(invalid(value, "on or off")),
    }
}

fn keyword<T>(value: &str, parse: fn(&str) -> Option<T>) -> Result<T, CommandError> {
    parse(value).ok_or_else(|| invalid(value, "a known keyword"))
}

fn parse_id(value: &str) -> Result<LayerId, CommandError> {
    value
        .trim_start_matches('#')
        .parse::<u64>()
        .map(LayerId)
        .map_err(|_| invalid(value, "an id"))
}

/// `rotate-x` style setting names
fn axis_setting(setting: &str, prefix: &str) -> Option<Axis> {
    setting
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .and_then(Axis::from_name)
}

fn map_set(active: EditorKind, setting: &str, values: &[&str]) -> Result<EditorAction, CommandError> {
    let value = values[0];
    // Free-form CSS values such as `rgba(0, 0, 0, 0.5)` span several words
    let text = values.join(" ");
    match active {
        EditorKind::FlexGrid => {
            let action = match setting {
                "mode" | "display" => FlexGridAction::SetMode(keyword(value, DisplayMode::from_css)?),
                "items" => FlexGridAction::SetItemCount(count(value)?),
                "direction" => FlexGridAction::SetDirection(keyword(value, FlexDirection::from_css)?),
                "justify" => FlexGridAction::SetJustifyContent(keyword(value, JustifyContent::from_css)?),
                "align" => FlexGridAction::SetAlignItems(keyword(value, AlignItems::from_css)?),
                "wrap" => FlexGridAction::SetWrap(keyword(value, FlexWrap::from_css)?),
                "gap" => FlexGridAction::SetFlexGap(number(value)?),
                "columns" => FlexGridAction::SetColumns(count(value)?),
                "rows" => FlexGridAction::SetRows(count(value)?),
                "grid-gap" => FlexGridAction::SetGridGap(number(value)?),
                "justify-items" => FlexGridAction::SetJustifyItems(keyword(value, GridAlign::from_css)?),
                "align-items" => FlexGridAction::SetGridAlignItems(keyword(value, GridAlign::from_css)?),
                _ => return Err(unknown_setting(active, setting)),
            };
            Ok(EditorAction::FlexGrid(action))
        }
        EditorKind::Gradients => {
            let action = match setting {
                "kind" | "type" => GradientAction::SetKind(keyword(value, GradientKind::from_css)?),
                "angle" => GradientAction::SetAngle(number(value)?),
                _ => return Err(unknown_setting(active, setting)),
            };
            Ok(EditorAction::Gradient(action))
        }
        EditorKind::BoxShadow => {
            let action = match setting {
                "color" | "box-color" => ShadowAction::SetBoxColor(text.clone()),
                "radius" => ShadowAction::SetBorderRadius(number(value)?),
                _ => return Err(unknown_setting(active, setting)),
            };
            Ok(EditorAction::Shadow(action))
        }
        EditorKind::Animations => {
            let action = match setting {
                "name" => AnimationAction::SetName(text.clone()),
                "duration" => AnimationAction::SetDuration(number(value)?),
                "timing" => AnimationAction::SetTiming(keyword(value, TimingFunction::from_css)?),
                "delay" => AnimationAction::SetDelay(number(value)?),
                "iterations" => AnimationAction::SetIterations(keyword(value, IterationCount::from_css)?),
                "direction" => AnimationAction::SetDirection(keyword(value, Direction::from_css)?),
                "fill" | "fill-mode" => AnimationAction::SetFillMode(keyword(value, FillMode::from_css)?),
                _ => return Err(unknown_setting(active, setting)),
            };
            Ok(EditorAction::Animation(action))
        }
        EditorKind::Layouts => match setting {
            "template" => Ok(EditorAction::Layout(LayoutAction::Select(value.to_string()))),
            _ => Err(unknown_setting(active, setting)),
        },
        EditorKind::Transform3d => {
            let action = if let Some(axis) = axis_setting(setting, "rotate") {
                Transform3dAction::SetRotate(axis, number(value)?)
            } else if let Some(axis) = axis_setting(setting, "translate") {
                Transform3dAction::SetTranslate(axis, number(value)?)
            } else if let Some(axis) = axis_setting(setting, "scale") {
                Transform3dAction::SetScale(axis, number(value)?)
            } else {
                match setting {
                    "perspective" => Transform3dAction::SetPerspective(number(value)?),
                    "origin" => {
                        let y = values.get(1).ok_or_else(|| missing(setting, "two percentages"))?;
                        Transform3dAction::SetPerspectiveOrigin {
                            x: number(value)?,
                            y: number(y)?,
                        }
                    }
                    "preserve-3d" => Transform3dAction::SetPreserve3d(flag(value)?),
                    "backface" => Transform3dAction::SetBackfaceVisible(flag(value)?),
                    _ => return Err(unknown_setting(active, setting)),
                }
            };
            Ok(EditorAction::Transform(action))
        }
        EditorKind::Shapes3d => {
            let action = if let Some(axis) = axis_setting(setting, "rotate") {
                ShapesAction::SetRotate(axis, number(value)?)
            } else {
                match setting {
                    "kind" | "shape" => ShapesAction::SetKind(keyword(value, ShapeKind::from_name)?),
                    "size" => ShapesAction::SetSize(number(value)?),
                    "depth" => ShapesAction::SetDepth(number(value)?),
                    "sides" => ShapesAction::SetSides(count(value)?),
                    "wall" => ShapesAction::SetWallWidth(keyword(value, WallWidth::from_name)?),
                    "perspective" => ShapesAction::SetPerspective(number(value)?),
                    "auto-rotate" => ShapesAction::SetAutoRotate(flag(value)?),
                    "face" => {
                        let slot = keyword(value, FaceSlot::from_name)?;
                        if values.len() < 2 {
                            return Err(missing(setting, "a slot and a colour"));
                        }
                        ShapesAction::SetFaceColor(slot, values[1..].join(" "))
                    }
                    _ => return Err(unknown_setting(active, setting)),
                }
            };
            Ok(EditorAction::Shapes(action))
        }
        EditorKind::CardMaker => {
            let action = match setting {
                "style" => CardAction::SetStyle(keyword(value, CardStyle::from_css)?),
                "type" => CardAction::SetType(keyword(value, CardType::from_css)?),
                "width" => CardAction::SetWidth(number(value)?),
                "padding" => CardAction::SetPadding(number(value)?),
                "radius" => CardAction::SetBorderRadius(number(value)?),
                "background" => CardAction::SetBackground(text.clone()),
                "text" => CardAction::SetTextColor(text.clone()),
                "accent" => CardAction::SetAccentColor(text.clone()),
                "border-width" => CardAction::SetBorderWidth(number(value)?),
                "border-color" => CardAction::SetBorderColor(text.clone()),
                "shadow" => CardAction::SetShadowIntensity(number(value)?),
                "blur" => CardAction::SetBlur(number(value)?),
                "hover" => CardAction::SetHoverEffect(flag(value)?),
                "image" => CardAction::SetImage(flag(value)?),
                _ => return Err(unknown_setting(active, setting)),
            };
            Ok(EditorAction::Card(action))
        }
    }
}

fn map_add(active: EditorKind) -> Result<EditorAction, CommandError> {
    match active {
        EditorKind::FlexGrid => Ok(EditorAction::FlexGrid(FlexGridAction::AddItem)),
        EditorKind::Gradients => Ok(EditorAction::Gradient(GradientAction::AddStop)),
        EditorKind::BoxShadow => Ok(EditorAction::Shadow(ShadowAction::AddLayer)),
        EditorKind::Animations => Ok(EditorAction::Animation(AnimationAction::AddKeyframe)),
        _ => Err(unsupported(active, "add")),
    }
}

fn map_remove(active: EditorKind, args: &[&str]) -> Result<EditorAction, CommandError> {
    if active == EditorKind::FlexGrid {
        return Ok(EditorAction::FlexGrid(FlexGridAction::RemoveItem));
    }
    let id = || -> Result<LayerId, CommandError> { parse_id(required("remove", args, 0, "an id")?) };
    match active {
        EditorKind::Gradients => Ok(EditorAction::Gradient(GradientAction::RemoveStop(id()?))),
        EditorKind::BoxShadow => Ok(EditorAction::Shadow(ShadowAction::RemoveLayer(id()?))),
        EditorKind::Animations => Ok(EditorAction::Animation(AnimationAction::RemoveKeyframe(id()?))),
        _ => Err(unsupported(active, "remove")),
    }
}

fn map_edit(active: EditorKind, id: LayerId, field: &str, value: &str) -> Result<EditorAction, CommandError> {
    match active {
        EditorKind::Gradients => {
            let field = match field {
                "color" => StopField::Color(value.to_string()),
                "position" | "pos" => StopField::Position(number(value)?),
                _ => return Err(unknown_setting(active, field)),
            };
            Ok(EditorAction::Gradient(GradientAction::UpdateStop(id, field)))
        }
        EditorKind::BoxShadow => {
            let field = match field {
                "x" => LayerField::X(number(value)?),
                "y" => LayerField::Y(number(value)?),
                "blur" => LayerField::Blur(number(value)?),
                "spread" => LayerField::Spread(number(value)?),
                "color" => LayerField::Color(value.to_string()),
                "inset" => LayerField::Inset(flag(value)?),
                _ => return Err(unknown_setting(active, field)),
            };
            Ok(EditorAction::Shadow(ShadowAction::UpdateLayer(id, field)))
        }
        EditorKind::Animations => {
            let field = match field {
                "percent" | "percentage" => KeyframeField::Percentage(number(value)?),
                "x" => KeyframeField::TranslateX(number(value)?),
                "y" => KeyframeField::TranslateY(number(value)?),
                "scale" => KeyframeField::Scale(number(value)?),
                "rotate" => KeyframeField::Rotate(number(value)?),
                "opacity" => KeyframeField::Opacity(number(value)?),
                _ => return Err(unknown_setting(active, field)),
            };
            Ok(EditorAction::Animation(AnimationAction::UpdateKeyframe(id, field)))
        }
        _ => Err(unsupported(active, "edit")),
    }
}

fn map_playback(active: EditorKind, verb: &str) -> Result<EditorAction, CommandError> {
    if active != EditorKind::Animations {
        return Err(unsupported(active, verb));
    }
    let action = match verb {
        "play" => AnimationAction::SetPlaying(true),
        "pause" => AnimationAction::SetPlaying(false),
        "toggle" => AnimationAction::TogglePlaying,
        _ => AnimationAction::Restart,
    };
    Ok(EditorAction::Animation(action))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(line: &str, active: EditorKind) -> Command {
        CommandMapper::map_line(line, active).unwrap()
    }

    #[test]
    fn test_shell_commands() {
        assert_eq!(map("help", EditorKind::FlexGrid), Command::Help);
        assert_eq!(map("  QUIT ", EditorKind::FlexGrid), Command::Quit);
        assert_eq!(map("go shadow", EditorKind::FlexGrid), Command::Navigate(EditorKind::BoxShadow));
        assert_eq!(map("go /3d-shapes", EditorKind::FlexGrid), Command::Navigate(EditorKind::Shapes3d));
        assert_eq!(
            map("preset Ocean Breeze", EditorKind::Gradients),
            Command::Preset("Ocean Breeze".to_string())
        );
    }

    #[test]
    fn test_copy_parts() {
        assert_eq!(map("copy", EditorKind::CardMaker), Command::Copy(CodePart::Css));
        assert_eq!(map("copy HTML", EditorKind::CardMaker), Command::Copy(CodePart::Html));
        assert!(CommandMapper::map_line("copy js", EditorKind::CardMaker).is_err());
    }

    #[test]
    fn test_empty_and_unknown() {
        assert_eq!(CommandMapper::map_line("   ", EditorKind::FlexGrid), Err(CommandError::Empty));
        assert_eq!(
            CommandMapper::map_line("fly away", EditorKind::FlexGrid),
            Err(CommandError::UnknownCommand("fly".to_string()))
        );
        assert!(matches!(
            CommandMapper::map_line("go nowhere", EditorKind::FlexGrid),
            Err(CommandError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_set_depends_on_active_editor() {
        assert_eq!(
            map("set angle 90deg", EditorKind::Gradients),
            Command::Edit(EditorAction::Gradient(GradientAction::SetAngle(90.0)))
        );
        assert_eq!(
            map("set rotate-x 45", EditorKind::Transform3d),
            Command::Edit(EditorAction::Transform(Transform3dAction::SetRotate(Axis::X, 45.0)))
        );
        assert_eq!(
            map("set kind cylinder", EditorKind::Shapes3d),
            Command::Edit(EditorAction::Shapes(ShapesAction::SetKind(ShapeKind::Cylinder)))
        );
        assert!(matches!(
            CommandMapper::map_line("set angle 90", EditorKind::CardMaker),
            Err(CommandError::UnknownSetting { .. })
        ));
    }

    #[test]
    fn test_set_with_two_values() {
        assert_eq!(
            map("set origin 25 75", EditorKind::Transform3d),
            Command::Edit(EditorAction::Transform(Transform3dAction::SetPerspectiveOrigin {
                x: 25.0,
                y: 75.0
            }))
        );
        assert_eq!(
            map("set face top #ff0000", EditorKind::Shapes3d),
            Command::Edit(EditorAction::Shapes(ShapesAction::SetFaceColor(
                FaceSlot::Top,
                "#ff0000".to_string()
            )))
        );
    }

    #[test]
    fn test_colour_values_keep_every_word() {
        assert_eq!(
            map("set background rgba(255, 255, 255, 0.1)", EditorKind::CardMaker),
            Command::Edit(EditorAction::Card(CardAction::SetBackground(
                "rgba(255, 255, 255, 0.1)".to_string()
            )))
        );
        assert_eq!(
            map("set face front rgba(59, 130, 246, 0.8)", EditorKind::Shapes3d),
            Command::Edit(EditorAction::Shapes(ShapesAction::SetFaceColor(
                FaceSlot::Front,
                "rgba(59, 130, 246, 0.8)".to_string()
            )))
        );
        assert_eq!(
            map("edit 1 color rgba(0, 0, 0, 0.2)", EditorKind::BoxShadow),
            Command::Edit(EditorAction::Shadow(ShadowAction::UpdateLayer(
                LayerId(1),
                LayerField::Color("rgba(0, 0, 0, 0.2)".to_string())
            )))
        );
    }

    #[test]
    fn test_set_missing_value() {
        assert!(matches!(
            CommandMapper::map_line("set angle", EditorKind::Gradients),
            Err(CommandError::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_edit_layer_fields() {
        assert_eq!(
            map("edit #1 y 10px", EditorKind::BoxShadow),
            Command::Edit(EditorAction::Shadow(ShadowAction::UpdateLayer(LayerId(1), LayerField::Y(10.0))))
        );
        assert_eq!(
            map("edit 2 color #3b82f6", EditorKind::Gradients),
            Command::Edit(EditorAction::Gradient(GradientAction::UpdateStop(
                LayerId(2),
                StopField::Color("#3b82f6".to_string())
            )))
        );
        assert!(matches!(
            CommandMapper::map_line("edit x y 1", EditorKind::Gradients),
            Err(CommandError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_add_remove() {
        assert_eq!(map("add", EditorKind::FlexGrid), Command::Edit(EditorAction::FlexGrid(FlexGridAction::AddItem)));
        assert_eq!(
            map("remove 3", EditorKind::Animations),
            Command::Edit(EditorAction::Animation(AnimationAction::RemoveKeyframe(LayerId(3))))
        );
        assert!(matches!(
            CommandMapper::map_line("add", EditorKind::Layouts),
            Err(CommandError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_playback_only_in_animations() {
        assert_eq!(
            map("pause", EditorKind::Animations),
            Command::Edit(EditorAction::Animation(AnimationAction::SetPlaying(false)))
        );
        assert!(CommandMapper::map_line("play", EditorKind::Gradients).is_err());
    }

    #[test]
    fn test_random_seed() {
        assert_eq!(
            map("random 7", EditorKind::Gradients),
            Command::Edit(EditorAction::Gradient(GradientAction::Randomize { seed: 7 }))
        );
    }
}
