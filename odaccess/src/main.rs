use clap::Parser;
use odaccess::app::OdcmApp;

fn main() {
    env_logger::init();
    let app = OdcmApp::parse();
    if let Err(e) = app.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
