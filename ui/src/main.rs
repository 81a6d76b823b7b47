#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::{Context as _, anyhow};
use cardtenant_business::BusinessConfig;
use cardtenant_ui::CardTenantApp;
use cardtenant_ui::state::State;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    let config = BusinessConfig::from_env().context("invalid CARDTENANT_* configuration")?;
    log::info!("Card tenant API at {}", config.api_url());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start Tokio runtime")?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    let state = State::new(config, runtime.handle().clone());

    eframe::run_native(
        "Card Tenants",
        native_options,
        Box::new(move |_cc| Ok(Box::new(CardTenantApp::new(state)))),
    )
    .map_err(|err| anyhow!("{err}"))
}
