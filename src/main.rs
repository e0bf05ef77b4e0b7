use anyhow::{Context, Result, anyhow};
use crossterm::{
    event::{Event, read},
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use log::{info, warn};
use quill::cli::{self, StartupTarget};
use quill::clipboard::system_or_memory;
use quill::config::QuillConfig;
use quill::dialog::DialogKind;
use quill::editor::Editor;
use quill::keymap::key_to_command;
use quill::ui::{Theme, TuiRenderer};
use std::fs::{self, File};
use std::path::PathBuf;

/// Parse arguments, set up logging and the terminal, run the event loop,
/// and restore the terminal on exit, including when the loop fails.
fn main() -> Result<()> {
    // Parse command-line arguments first (before terminal setup)
    let cli_args = cli::parse_args();

    init_logging();

    let config = QuillConfig::load(cli_args.config_path());
    let (config, config_error) = match config {
        Ok(config) => (config, None),
        Err(e) => {
            warn!("falling back to default settings: {}", e);
            (QuillConfig::default(), Some(e))
        }
    };

    let mut editor = Editor::with_config(&config, system_or_memory());
    if let Some(e) = config_error {
        editor.set_status(format!("Error: {}", e));
    }
    open_startup_target(&mut editor, cli_args.startup_target());

    // Enable raw mode and enter alternate screen
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen, SetTitle(&editor.title))
        .context("failed to enter alternate screen")?;

    let result = run(&mut editor, Theme::from_config(&config.theme));

    // Leave alternate screen and disable raw mode
    crossterm::execute!(stdout, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    info!("exiting");
    result
}

fn run(editor: &mut Editor, theme: Theme) -> Result<()> {
    let mut renderer = TuiRenderer::new(theme).map_err(|e| anyhow!("{}", e))?;
    let mut shown_title = editor.title.clone();
    let mut stdout = std::io::stdout();

    loop {
        if editor.title != shown_title {
            crossterm::execute!(stdout, SetTitle(&editor.title))?;
            shown_title = editor.title.clone();
        }
        renderer.draw(editor).map_err(|e| anyhow!("{}", e))?;

        match read()? {
            Event::Key(key_event) => {
                if let Some(cmd) = key_to_command(key_event, editor.mode)
                    && editor.execute_command(cmd)
                {
                    break; // Quit
                }
            }
            Event::Resize(cols, rows) => editor.handle_resize(cols, rows),
            _ => {}
        }
    }
    Ok(())
}

/// Open the FILE argument. A directory starts the Open dialog inside it.
fn open_startup_target(editor: &mut Editor, target: StartupTarget) {
    match target {
        StartupTarget::Empty => {}
        StartupTarget::Directory(dir) => editor.begin_dialog_in(DialogKind::Open, &dir),
        StartupTarget::File(path) => {
            if let Err(e) = editor.open_path(&path) {
                warn!("{}", e);
                editor.set_status(format!("Error: {}", e));
            }
        }
    }
}

/// Log to a file under the cache directory; the terminal belongs to the UI.
/// `RUST_LOG` controls verbosity. Without a writable log file, logging stays off.
fn init_logging() {
    let Some(path) = log_file_path() else { return };
    if let Some(parent) = path.parent()
        && fs::create_dir_all(parent).is_err()
    {
        return;
    }
    let Ok(file) = File::create(&path) else { return };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    info!("logging to {}", path.display());
}

fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("quill").join("quill.log"))
}
