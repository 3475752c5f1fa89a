use solesavvy::{config, App};

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("Starting SoleSavvy landing page");
    yew::Renderer::<App>::new().render();
}
