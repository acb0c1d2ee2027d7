//! samplehost - run sample applications under a pluggable host.

use anyhow::Result;

use samplehost_cli::config::HostConfig;
use samplehost_cli::{install_panic_hook, logging, run};

fn main() -> Result<()> {
    install_panic_hook();

    let config = HostConfig::from_env();
    let log_guard = logging::init(&config)?;

    let arguments: Vec<String> = std::env::args().skip(1).collect();
    let code = run(arguments, &config, log_guard);

    std::process::exit(code.process_status());
}
