//! CSS Toolbox - visual CSS editors in the terminal
//!
//! Reads commands from standard input, applies them to the active editor
//! and prints the regenerated code.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use css_toolbox::config::AppConfig;
use css_toolbox::systems::editor_list;
use css_toolbox::App;

fn main() -> io::Result<()> {
    // Config first so its log level can seed the logger
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting CSS Toolbox");
    if let Err(e) = &loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let mut app = App::new(&config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}\n\nType 'help' for commands.", editor_list(app.session().active()))?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "{}", app.prompt(Instant::now()))?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let turn = app.handle_line(&line, Instant::now());
        if !turn.output.is_empty() {
            writeln!(stdout, "{}", turn.output)?;
        }
        if turn.quit {
            break;
        }
    }

    log::info!("Exiting");
    Ok(())
}
