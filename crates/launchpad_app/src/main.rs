mod app;
mod effects;
mod logging;
mod render;

fn main() -> std::io::Result<()> {
    logging::initialize(logging::LogDestination::File);
    app::run()
}
