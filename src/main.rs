mod app;
mod config;
mod db;
mod error;
mod screens;
mod validate;

use app::App;
use db::GradeStore;
use iced::Task;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> iced::Result {
    let cfg = config::load_config();

    let env_filter = EnvFilter::try_new(&cfg.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        db_path = %cfg.db_path,
        theme = %cfg.theme_name,
        loglevel = %cfg.log_level,
        "starting grade journal"
    );

    iced::application("Журнал успеваемости", App::update, App::view)
        .theme(|app: &App| app.theme.clone())
        .window_size(iced::Size::new(800.0, 800.0))
        .run_with(move || {
            let mut app = App::new(GradeStore::new(cfg.db_path.as_str()), cfg.theme());
            app.startup();
            (app, Task::none())
        })
}
