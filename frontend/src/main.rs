fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starting {}", frontend::config::OWNER_NAME);
    yew::Renderer::<frontend::App>::new().render();
}
