use coffee_rec::app::App;
use coffee_rec::config::Config;
use coffee_rec::logging;
use directories::ProjectDirs;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "coffee-rec", "coffee-rec")
}

fn get_config_path() -> PathBuf {
    if let Some(proj_dirs) = project_dirs() {
        proj_dirs.config_dir().join("config.toml")
    } else {
        PathBuf::from("config/default.toml")
    }
}

fn get_log_dir() -> PathBuf {
    if let Some(proj_dirs) = project_dirs() {
        proj_dirs.data_dir().to_path_buf()
    } else {
        PathBuf::from("logs")
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _ = dotenvy::dotenv();
    logging::init(&get_log_dir());

    let config = Config::load_or_default(&get_config_path()).with_env_overrides();
    tracing::info!(endpoint = %config.service.endpoint, "starting coffee-rec");

    let rt = tokio::runtime::Runtime::new()?;
    let _guard = rt.enter();
    let mut app = App::new(config);

    let mut terminal = ratatui::init();
    if app.config.ui.mouse {
        if let Err(e) = ratatui::crossterm::execute!(io::stdout(), EnableMouseCapture) {
            tracing::warn!("Failed to enable mouse capture: {}", e);
            app.config.ui.mouse = false;
        }
    }

    let result = run(&mut terminal, &mut app);

    if app.config.ui.mouse {
        let _ = ratatui::crossterm::execute!(io::stdout(), DisableMouseCapture);
    }
    ratatui::restore();

    result
}

fn run(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> color_eyre::Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(50))? {
            let event = event::read()?;

            match app.handle_event(event) {
                Ok(true) => break,
                Ok(false) => {}
                Err(e) => tracing::warn!("Failed to handle event: {}", e),
            }
        }

        app.process_async_events();
    }

    Ok(())
}
