use folio::app::{App, AppMessage};
use folio::cli::{parse_args, run_cli_command};
use folio::config::FolioConfig;
use folio::input::CommandRegistry;
use folio::terminal::{install_panic_hook, TerminalManager};
use folio::{logging, ui};

use color_eyre::Result;
use futures::StreamExt;
use crossterm::event::EventStream;
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args())?;
    let Some(options) = run_cli_command(command) else {
        return Ok(());
    };

    let config = options.apply(FolioConfig::default());
    config.validate()?;
    logging::init(config.log_file.as_deref())?;
    info!(version = folio::cli::VERSION, animations = config.animations, "folio starting");

    install_panic_hook();
    let mut manager = TerminalManager::new()?;
    let size = manager.size()?;
    let mut app = App::new(config).with_size(size.width, size.height);

    let result = run_app(manager.terminal(), &mut app).await;

    manager.restore()?;
    info!("folio exiting");
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();
    let mut event_stream = EventStream::new();
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();
    let tick_rate = app.config().tick_rate;

    loop {
        if app.needs_redraw {
            terminal.draw(|frame| ui::render(frame, app))?;
        }

        let timeout = tokio::time::sleep(tick_rate);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event = event_stream.next() => {
                match event {
                    Some(Ok(event)) => app.handle_event(&registry, event),
                    Some(Err(err)) => return Err(err.into()),
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
