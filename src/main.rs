use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use tidings::app::App;
use tidings::config::{self, Config};
use tidings::{NotificationStore, TokioTimer};

/// Toast and confirmation playground
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Playground for toast notifications and confirmation dialogs"
)]
struct Args {
    /// Config file (defaults to ~/.config/tidings/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Default toast duration in milliseconds, 0 keeps toasts until dismissed
    #[arg(long)]
    duration_ms: Option<u64>,

    /// Print the effective settings and exit
    #[arg(long)]
    check_config: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/tidings-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        if let Ok(log_file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/tidings-debug.log")
        {
            env_logger::Builder::new()
                .filter_level(log::LevelFilter::Debug)
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .format(|buf, record| {
                    use std::time::SystemTime;
                    let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                    writeln!(
                        buf,
                        "[{}] [{}] {}",
                        datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                        record.level(),
                        record.args()
                    )
                })
                .init();
        }

        log::debug!("=== TIDINGS DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(config::get_config_path);
    let config_result = config::load_config_from(&config_path);
    let mut config = config_result.config;
    if let Some(duration_ms) = args.duration_ms {
        config.toast.default_duration_ms = duration_ms;
    }

    if args.check_config {
        if let Some(warning) = &config_result.warning {
            eprintln!("warning: {}", warning);
        }
        print_settings(&config_path, &config);
        return Ok(());
    }

    let (timer, timer_thread) = TokioTimer::spawn_dedicated()?;
    let store = NotificationStore::with_settings(timer, config.store_settings());
    let app = App::new(store, &config);

    let terminal = init_terminal()?;
    let result = run(terminal, app, config_result.warning);
    restore_terminal()?;
    timer_thread.shutdown();

    #[cfg(debug_assertions)]
    log::debug!("=== TIDINGS DEBUG SESSION ENDED ===");

    result
}

fn print_settings(path: &std::path::Path, config: &Config) {
    println!("config: {}", path.display());
    println!("toast.default_duration_ms = {}", config.toast.default_duration_ms);
    println!("toast.max_visible = {}", config.toast.max_visible);
    println!("confirm.title = {:?}", config.confirm.title);
    println!("confirm.confirm_label = {:?}", config.confirm.confirm_label);
    println!("confirm.cancel_label = {:?}", config.confirm.cancel_label);
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_warning: Option<String>) -> Result<()> {
    if let Some(warning) = config_warning {
        app.store.warning(warning);
    }
    app.store.info("Press s, w, i or e to make some noise");

    loop {
        // Timer expiry bumps the store revision, so this also catches toasts
        // leaving on their own
        if app.should_render() {
            app.begin_frame();
            terminal.draw(|frame| app.render(frame))?;
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
