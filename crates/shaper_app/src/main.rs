mod app;
mod effects;
mod logging;
mod render;

use shaper_engine::ServiceSettings;

fn main() -> anyhow::Result<()> {
    logging::initialize();

    let mut settings = ServiceSettings::default();
    if let Some(base_url) = std::env::args().nth(1) {
        settings.base_url = base_url;
    }

    app::run(settings)
}
