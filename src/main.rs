use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
    EnableFocusChange, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use autocombo::config::{self, Config};
use autocombo::picker::{self, Picker};

/// Interactive fuzzy picker with an autocomplete menu
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Pick one item from a list with an interactive autocomplete menu"
)]
struct Args {
    /// Input file, one item per line or a JSON array of strings (reads stdin if omitted)
    input: Option<PathBuf>,

    /// Initial filter text
    #[arg(short, long)]
    query: Option<String>,

    /// Keep the menu open after selecting an item
    #[arg(long)]
    keep_open: bool,

    /// Clear the filter text whenever the menu closes
    #[arg(long)]
    reset_on_close: bool,

    /// Do not select the highlighted item with Tab
    #[arg(long)]
    no_tab_select: bool,

    /// Delay before closing the menu after the terminal loses focus
    #[arg(long, value_name = "MS")]
    blur_delay_ms: Option<u64>,
}

impl Args {
    /// Command-line flags win over the config file.
    fn apply_overrides(&self, config: &mut Config) {
        if self.keep_open {
            config.autocomplete.close_on_select = false;
        }
        if self.reset_on_close {
            config.autocomplete.reset_input_on_close = true;
        }
        if self.no_tab_select {
            config.autocomplete.should_select_with_tab = false;
        }
        if let Some(delay) = self.blur_delay_ms {
            config.autocomplete.blur_close_delay_ms = delay;
        }
    }
}

fn main() -> Result<()> {
    // Writes to /tmp/autocombo-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/autocombo-debug.log")
            .expect("Failed to open /tmp/autocombo-debug.log");

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

        log::debug!("=== AUTOCOMBO DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    let config_result = config::load_config();
    let mut config = config_result.config.clone();
    args.apply_overrides(&mut config);

    // Load before the terminal takes over so errors reach stderr
    let items = picker::read_items(args.input.as_deref())?;

    let mut picker = Picker::new(items, &config);
    if let Some(query) = &args.query {
        picker = picker.with_query(query);
    }
    if let Some(warning) = &config_result.warning {
        picker.show_warning(warning);
    }

    let terminal = init_terminal()?;
    let result = run(terminal, picker);
    restore_terminal()?;
    let picker = result?;

    // Output after terminal restore to prevent corruption
    if let Some(item) = picker.accepted() {
        println!("{}", item);
    }

    #[cfg(debug_assertions)]
    log::debug!("=== AUTOCOMBO DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, mouse and focus reporting
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(
            stdout(),
            DisableFocusChange,
            DisableMouseCapture,
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(
        stdout(),
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture,
        EnableFocusChange
    ) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = restore_terminal();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(
        stdout(),
        DisableFocusChange,
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    );
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut picker: Picker) -> Result<Picker> {
    picker.start();

    loop {
        terminal.draw(|frame| picker.render(frame))?;

        picker.handle_events()?;

        if picker.should_quit() {
            break;
        }
    }

    Ok(picker)
}
