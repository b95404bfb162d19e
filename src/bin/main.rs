use clap::Parser;
use embassy_executor::Spawner;
use embassy_time::{Instant, Timer};
use anyhow::Context as _;
use log::{info, warn};
use rsvp_core::{
    app::{ReaderApp, TickResult},
    content::{Content, sample_content},
};

use cli::Cli;
use loader::{PASTE_SOURCE, PASTE_TITLE};
use renderer::{TerminalRenderer, TerminalSession};
use terminal_input::TerminalInput;

#[path = "main/cli.rs"]
mod cli;
#[path = "main/loader.rs"]
mod loader;
#[path = "main/logging.rs"]
mod logging;
#[path = "main/renderer.rs"]
mod renderer;
#[path = "main/terminal_input.rs"]
mod terminal_input;

/// Upper bound on how long input can sit unread.
const INPUT_POLL_MS: u64 = 16;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("rsvp: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    logging::init(cli.log_file.as_deref())?;

    let content = match cli.path.as_deref() {
        Some(path) => {
            let loaded = loader::load_path(path, cli.title.as_deref())?;
            Content::new(&loaded.title, &loaded.source, &loaded.text)
        }
        None => sample_content(),
    };

    let config = cli.reader_config();
    info!(
        "reader: starting title={:?} words={} wpm={} chunk={}",
        content.title(),
        content.tokens().len(),
        config.wpm,
        config.chunk_size.get()
    );

    let mut app = ReaderApp::new(content, TerminalInput::new(), config);
    if let Some(err) = app.last_error() {
        warn!("reader: {err}; playback disabled until new text is pasted");
    }

    let _session = TerminalSession::enter()?;
    let mut renderer = TerminalRenderer::new();
    let loop_start = Instant::now();

    loop {
        let now_ms = loop_start.elapsed().as_millis();
        let mut render = app.tick(now_ms) == TickResult::RenderRequested;
        if let Some(err) = app.take_input_error() {
            return Err(err).context("terminal input failed");
        }

        if let Some(text) = app.input_mut().take_pasted() {
            if let Err(err) = app.load_content(PASTE_TITLE, PASTE_SOURCE, &text, now_ms) {
                warn!("reader: pasted text rejected: {err}");
            }
            render = true;
        }

        let input = app.input_mut();
        render |= input.take_redraw();
        if input.quit_requested() {
            break;
        }
        let prompt = input.prompt();

        if render {
            let mut result = Ok(());
            app.with_screen(|screen| result = renderer.render(screen, prompt.as_deref()));
            result?;
        }

        let wait_ms = app
            .next_deadline_ms()
            .map_or(INPUT_POLL_MS, |deadline| {
                deadline.saturating_sub(now_ms).min(INPUT_POLL_MS)
            });
        Timer::after_millis(wait_ms).await;
    }

    app.shutdown();
    info!(
        "reader: exiting at word {}/{}",
        app.current_index() + 1,
        app.content().tokens().len()
    );
    Ok(())
}
