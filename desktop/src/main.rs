use dioxus::desktop::Config;
use dioxus::desktop::WindowBuilder;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::Level;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("expense dashboard {} (desktop)", env!("CARGO_PKG_VERSION"));

    let window = WindowBuilder::new().with_title("Expense Dashboard");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(ui::App);
}
