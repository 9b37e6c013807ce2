#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use relauncher::Relauncher;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let code = Relauncher::from_env().relay();

    std::process::exit(code);
}
