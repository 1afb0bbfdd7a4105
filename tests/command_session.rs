//! Integration tests driving the application through typed commands

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use css_toolbox::clipboard::FileSink;
use css_toolbox::config::{AppConfig, PreviewConfig};
use css_toolbox::App;
use toolbox_core::{EditorKind, GradientPreset, PresetLibrary, ShapeKind};

fn app_in(dir: &Path) -> App {
    let config = AppConfig {
        preview: PreviewConfig {
            enabled: true,
            path: dir.join("preview.html").to_string_lossy().into_owned(),
        },
        ..AppConfig::default()
    };
    App::with_sink(&config, Box::new(FileSink::new(dir.join("clipboard.txt"))))
}

fn run(app: &mut App, lines: &[&str]) -> Vec<String> {
    let now = Instant::now();
    lines
        .iter()
        .map(|line| {
            let turn = app.handle_line(line, now);
            assert!(!turn.output.starts_with("Error"), "'{}' failed: {}", line, turn.output);
            turn.output
        })
        .collect()
}

#[test]
fn test_gradient_commands_copy_css() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());

    run(
        &mut app,
        &[
            "go gradients",
            "set kind linear",
            "set angle 135",
            "edit 1 color #3b82f6",
            "edit 2 position 50",
            "edit 3 color #ec4899",
            "copy",
        ],
    );

    let copied = fs::read_to_string(dir.path().join("clipboard.txt")).unwrap();
    assert!(copied.contains("linear-gradient(135deg, #3b82f6 0%, #8b5cf6 50%, #ec4899 100%)"));

    let page = fs::read_to_string(dir.path().join("preview.html")).unwrap();
    assert!(page.contains("linear-gradient"));
}

#[test]
fn test_shadow_commands() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    run(&mut app, &["go box-shadow", "reset"]);

    let id = app.session().shadow().layers[0].id;
    let edits: Vec<String> = [
        "x 0",
        "y 10",
        "blur 30",
        "spread -5",
        "color rgba(59,130,246,0.4)",
        "inset off",
    ]
    .iter()
    .map(|field| format!("edit {} {}", id, field))
    .collect();
    let edits: Vec<&str> = edits.iter().map(String::as_str).collect();
    run(&mut app, &edits);

    assert_eq!(
        app.session().active_style().get("box-shadow"),
        Some("0px 10px 30px -5px rgba(59,130,246,0.4)")
    );
}

#[test]
fn test_rejected_value_keeps_state() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    run(&mut app, &["go shapes", "set kind cylinder", "set sides 12"]);
    let before = app.session().shapes().clone();

    let turn = app.handle_line("set sides 2", Instant::now());
    assert!(turn.output.starts_with("Error"));
    assert_eq!(app.session().shapes(), &before);
    assert_eq!(app.session().shapes().faces().len(), 14);
}

#[test]
fn test_shape_preset_and_preview() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    let outputs = run(&mut app, &["go 3d-shapes", "preset Pyramid", "preview"]);

    assert_eq!(app.session().shapes().params.kind, ShapeKind::Pyramid);
    assert!(outputs[2].starts_with("Preview written to"));
    let page = fs::read_to_string(dir.path().join("preview.html")).unwrap();
    assert!(page.contains("class=\"scene\""));
}

#[test]
fn test_unknown_preset_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    run(&mut app, &["go card"]);
    let turn = app.handle_line("preset Does Not Exist", Instant::now());
    assert!(turn.output.contains("Unknown preset"));
    assert_eq!(app.session().active(), EditorKind::CardMaker);
}

#[test]
fn test_card_html_copy_and_ack_expiry() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    let start = Instant::now();

    app.handle_line("go card-maker", start);
    let turn = app.handle_line("copy html", start);
    assert_eq!(turn.output, "Copied!");
    let copied = fs::read_to_string(dir.path().join("clipboard.txt")).unwrap();
    assert!(copied.contains("<div class=\"card"));

    assert!(app.prompt(start + Duration::from_millis(1500)).contains("Copied!"));
    assert_eq!(app.prompt(start + Duration::from_millis(2000)), "[card-maker] > ");
}

#[test]
fn test_preset_library_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let library_path = dir.path().join("presets.ron");
    let mut extra = PresetLibrary::new();
    extra
        .gradients
        .push(GradientPreset::new("Mint", &["#d1fae5", "#10b981"]));
    extra.save(&library_path).unwrap();

    let mut config = AppConfig::default();
    config.preview.enabled = false;
    config.presets.library = Some(library_path.to_string_lossy().into_owned());
    let mut app = App::with_sink(&config, Box::new(FileSink::new(dir.path().join("clip.txt"))));

    run(&mut app, &["go gradients", "preset mint"]);
    let colors: Vec<&str> = app
        .session()
        .gradient()
        .sorted_stops()
        .iter()
        .map(|s| s.color.as_str())
        .collect();
    assert_eq!(colors, ["#d1fae5", "#10b981"]);
    // Built-in presets are still there
    assert!(app.session().presets().gradient("Sunset").is_some());
}

#[test]
fn test_invalid_preset_library_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let library_path = dir.path().join("presets.ron");
    let mut extra = PresetLibrary::new();
    extra.gradients.push(GradientPreset::new("Lonely", &["#ffffff"]));
    extra.save(&library_path).unwrap();

    let mut config = AppConfig::default();
    config.preview.enabled = false;
    config.presets.library = Some(library_path.to_string_lossy().into_owned());
    let app = App::with_sink(&config, Box::new(FileSink::new(dir.path().join("clip.txt"))));

    assert!(app.session().presets().gradient("Lonely").is_none());
}

#[test]
fn test_spaced_colour_reaches_card_css() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    run(&mut app, &["go card-maker", "set background rgba(255, 255, 255, 0.1)"]);

    assert_eq!(app.session().card().background, "rgba(255, 255, 255, 0.1)");
    assert!(app
        .session()
        .active_code()
        .css
        .contains("rgba(255, 255, 255, 0.1)"));
}

#[test]
fn test_quit() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    assert!(app.handle_line("quit", Instant::now()).quit);
}
