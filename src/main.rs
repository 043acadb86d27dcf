//! Tilde Editor
//!
//! A small terminal text editor built from scratch.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tilde::app::{self, Config};
use tilde::core::{Document, Session};
use tilde::editor::{viewport_for, Editor};
use tilde::renderer::clear_screen;
use tilde::tty::{FrameSink, Terminal};
use tilde::VERSION;

fn main() -> ExitCode {
    let cli = match CliOptions::parse(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("tilde: {}", message);
            eprintln!("Try 'tilde --help' for more information.");
            return ExitCode::FAILURE;
        },
    };

    if cli.show_help {
        print_help();
        return ExitCode::SUCCESS;
    }
    if cli.show_version {
        println!("tilde {}", VERSION);
        return ExitCode::SUCCESS;
    }

    // By the time run() returns, the terminal is back in its original mode
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Fatal error: {}", e);
            eprintln!("tilde: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: &CliOptions) -> tilde::Result<()> {
    let config = match &cli.config_path {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default()?,
    };

    app::init_logging(cli.log_file.as_deref().or(config.log_file.as_deref()))?;
    tracing::info!("Tilde {} starting", VERSION);

    let mut terminal = Terminal::open(config.read_timeout_ds)?;
    terminal.restore_on_panic(clear_screen());

    let result = edit(&mut terminal, &config, cli.file.as_deref());
    if result.is_err() {
        let _ = terminal.write_frame(&clear_screen());
    }

    // Restore the terminal before anything is printed
    drop(terminal);
    result
}

fn edit(terminal: &mut Terminal, config: &Config, file: Option<&Path>) -> tilde::Result<()> {
    let size = terminal.window_size()?;
    let options = config.render_options();

    let document = match file {
        Some(path) => Document::open(path)?,
        None => Document::new(),
    };

    let mut session = Session::new(document, viewport_for(size, &options));
    session.mode = config.start_mode;
    session.file_name = file.map(|path| path.display().to_string());

    Editor::new(session, options).run(terminal)
}

/// Command line options
#[derive(Debug, Default, PartialEq, Eq)]
struct CliOptions {
    file: Option<PathBuf>,
    config_path: Option<PathBuf>,
    log_file: Option<PathBuf>,
    show_help: bool,
    show_version: bool,
}

impl CliOptions {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, String> {
        let mut options = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-c" | "--config" => {
                    let path = args.next().ok_or("--config needs a path")?;
                    options.config_path = Some(PathBuf::from(path));
                },
                "-l" | "--log" => {
                    let path = args.next().ok_or("--log needs a path")?;
                    options.log_file = Some(PathBuf::from(path));
                },
                "-h" | "--help" => options.show_help = true,
                "-V" | "--version" => options.show_version = true,
                _ if arg.starts_with('-') && arg != "-" => {
                    return Err(format!("unknown option '{}'", arg));
                },
                _ => {
                    if options.file.is_some() {
                        return Err(format!("unexpected argument '{}'", arg));
                    }
                    options.file = Some(PathBuf::from(arg));
                },
            }
        }

        Ok(options)
    }
}

fn print_help() {
    println!("Tilde Editor {}", VERSION);
    println!();
    println!("Usage: tilde [OPTIONS] [FILE]");
    println!();
    println!("Options:");
    println!("  -c, --config <PATH>  Read configuration from PATH");
    println!("                       (default: ~/.config/tilde/config.json)");
    println!("  -l, --log <PATH>     Append log output to PATH (filter with RUST_LOG)");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version");
    println!();
    println!("Keys:");
    println!("  Arrows, h/j/k/l      Move the cursor (h/j/k/l in normal mode)");
    println!("  PageUp/PageDown      Move by one screen");
    println!("  Home/End             Start/end of line");
    println!("  i, Esc               Enter insert mode, back to normal mode");
    println!("  Ctrl-Q               Quit");
}
