use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde::Serialize;
use std::{fs, io, path::PathBuf, time::Duration};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Terminal nav bar that folds overflowing sections into a "More" menu
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp dir>/navfold-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Glyph set for the bar chrome: ascii, unicode or nerdfont (default: from locale)
    #[arg(short, long)]
    glyphs: Option<GlyphSet>,

    /// Print the layout decision for a nav container this many cells wide and exit
    #[arg(long, value_name = "CELLS")]
    layout_width: Option<u16>,
}

mod app;
mod config;
mod handlers;
mod messages;
mod services;
mod ui;

use config::Config;
use messages::Msg;
use navfold::logic::ui::detect_glyph_set;
use navfold::measure::BufferMeasurer;
use navfold::model::{Model, NavBarModel, NavItem, Readiness, SecondaryLink};
use navfold::{log_debug, GlyphSet};

pub struct App {
    pub model: Model,

    /// Off-screen measurer shared by every recompute
    measurer: BufferMeasurer,

    /// Brand shown at the left of the bar
    title: String,

    /// Configured secondary link, kept while it is toggled off
    secondary_link: Option<SecondaryLink>,

    readiness_tx: UnboundedSender<Readiness>,
    readiness_rx: UnboundedReceiver<Readiness>,
    glyph_task: Option<JoinHandle<()>>,

    /// Glyph set forced by CLI or config
    glyph_override: Option<GlyphSet>,

    /// Terminal size as (columns, rows)
    terminal_size: (u16, u16),

    /// Content pane text area the section offsets were computed for
    content_dims: (u16, u16),
}

impl App {
    fn new(config: Config, glyph_override: Option<GlyphSet>) -> Self {
        let (readiness_tx, readiness_rx) = unbounded_channel();
        let secondary_link = config.secondary.clone();
        let model = Model::new(
            config.items,
            config.secondary,
            config.nav.style,
            config.nav.gap,
        );

        Self {
            model,
            measurer: BufferMeasurer::new(),
            title: config.title,
            secondary_link,
            readiness_tx,
            readiness_rx,
            glyph_task: None,
            glyph_override,
            terminal_size: (0, 0),
            content_dims: (0, 0),
        }
    }

    /// Kick off the background services that report readiness
    fn start_services(&mut self) {
        self.glyph_task = Some(services::glyphs::spawn_glyph_detection(
            self.glyph_override,
            self.readiness_tx.clone(),
        ));
    }

    /// Drain readiness signals without blocking the frame
    fn drain_readiness(&mut self) -> Result<()> {
        while let Ok(signal) = self.readiness_rx.try_recv() {
            handlers::update(self, Msg::Readiness(signal))?;
        }
        Ok(())
    }

    /// Tear down: stop recomputing and drop every pending signal
    fn shutdown(&mut self) {
        self.model.nav.dispose();
        self.readiness_rx.close();
        if let Some(task) = self.glyph_task.take() {
            task.abort();
        }
        log_debug("shutdown: nav disposed, readiness channel closed");
    }
}

fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, it must exist
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/navfold/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("navfold").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    // No config found: run with the built-in sections
    Ok(None)
}

fn load_config(cli_path: Option<String>) -> Result<Config> {
    let config = match get_config_path(cli_path)? {
        Some(path) => {
            log_debug(&format!("Loading config from: {:?}", path));
            let config_str = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_yaml::from_str(&config_str)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => {
            log_debug("No config file found, using built-in defaults");
            Config::default()
        }
    };
    config.validate()?;
    Ok(config)
}

/// Layout decision printed by `--layout-width`
#[derive(Debug, Serialize)]
struct LayoutDump {
    container_width: u16,
    glyphs: GlyphSet,
    visible_count: usize,
    visible: Vec<String>,
    overflow: Vec<String>,
    widths: Vec<u16>,
    more_width: u16,
    secondary_width: u16,
}

fn layout_dump(config: Config, glyph_override: Option<GlyphSet>, width: u16) -> LayoutDump {
    let locale = services::glyphs::current_locale();
    let glyphs = detect_glyph_set(glyph_override, locale.as_deref());
    let measurer = BufferMeasurer::new();
    let items = config
        .items
        .iter()
        .map(|s| NavItem {
            id: s.id.clone(),
            label: s.label.clone(),
        })
        .collect();

    let mut nav = NavBarModel::new(items, config.secondary, config.nav.style, config.nav.gap);
    nav.apply(Readiness::GlyphsReady(glyphs), &measurer);
    nav.apply(Readiness::Resize { width }, &measurer);
    let layout = nav.layout();
    let ids = |items: &[NavItem]| -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    };

    LayoutDump {
        container_width: width,
        glyphs,
        visible_count: layout.visible_count,
        visible: ids(nav.visible_items()),
        overflow: ids(nav.overflow_items()),
        widths: nav.widths().to_vec(),
        more_width: nav.more_width(),
        secondary_width: nav.secondary_width(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    navfold::set_debug_mode(args.debug);
    if args.debug {
        log_debug("Debug mode enabled");
    }

    let config = load_config(args.config)?;
    // CLI flag wins over config
    let glyph_override = args.glyphs.or(config.nav.glyphs);

    if let Some(width) = args.layout_width {
        let dump = layout_dump(config, glyph_override, width);
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    let mut app = App::new(config, glyph_override);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;
    app.shutdown();

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let size = terminal.size()?;
    handlers::update(app, Msg::Resize(size.width, size.height))?;
    app.start_services();

    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_quit {
            break;
        }

        app.drain_readiness()?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                // Ignore key release/repeat events from terminals that report them
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handlers::update(app, Msg::KeyPress(key))?;
                }
                Event::Mouse(mouse) => handlers::update(app, Msg::Mouse(mouse))?,
                Event::Resize(width, height) => handlers::update(app, Msg::Resize(width, height))?,
                _ => {}
            }
        }

        handlers::update(app, Msg::Tick)?;

        // Let the glyph task run on the same runtime
        tokio::task::yield_now().await;
    }

    Ok(())
}
