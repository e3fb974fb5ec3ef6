//! domainshell - interactive domain availability shell
//!
//! Type a domain to check it, `suggest <name>` for alternatives, or `help`
//! for the full command list.

use anyhow::Context;
use domainshell::{
    logging, render, ApiClient, Commands, HistoryStore, LineEditor, Session, ShellConfig,
};
use parking_lot::RwLock;
use std::env;
use std::io::{self, IsTerminal};
use std::process;
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize the library
    if let Err(e) = domainshell::init() {
        eprintln!("Failed to initialize: {}", e);
        process::exit(1);
    }
    logging::init_logging();

    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("--version" | "-v") => {
            print!(
                "{}",
                render::render_version(
                    domainshell::VERSION,
                    domainshell::BUILD_DATE,
                    domainshell::GIT_COMMIT
                )
            );
            return;
        }
        Some("--help" | "-h") => {
            print_help();
            return;
        }
        _ => {}
    }

    if let Err(e) = run_shell().await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Build the session from configuration and run it until exit
async fn run_shell() -> anyhow::Result<()> {
    let config = ShellConfig::from_env().context("invalid configuration")?;

    let api = ApiClient::from_config(&config).context("failed to create lookup client")?;
    let commands = Commands::new(Arc::new(api))
        .with_spinner(config.show_spinner && io::stderr().is_terminal());

    let (store, history_error) = HistoryStore::open_or_in_memory(config.history_path.as_deref());
    if let Some(e) = history_error {
        eprintln!("Warning: failed to initialize history: {}", e);
    }
    let history = Arc::new(RwLock::new(store));

    let editor = LineEditor::new(Arc::clone(&history)).context("failed to initialize line editor")?;

    let mut session = Session::new(editor, io::stdout(), history, commands).with_prompt(config.prompt);
    session.run().await?;
    Ok(())
}

/// Print help information
fn print_help() {
    println!("domainshell - check domain availability from an interactive shell");
    println!();
    println!("USAGE:");
    println!("    domainshell [--version | --help]");
    println!();
    print!("{}", render::render_help());
    println!("ENVIRONMENT VARIABLES:");
    println!("    DOMAINSHELL_API_URL        Lookup service base URL");
    println!("    DOMAINSHELL_TIMEOUT_SECS   HTTP timeout in seconds (default: 30)");
    println!("    DOMAINSHELL_HISTORY_FILE   History file location");
    println!("    DOMAINSHELL_PROMPT         Prompt text");
    println!("    DOMAINSHELL_NO_SPINNER     Disable the progress spinner");
    println!("    RUST_LOG                   Log level (default: warn)");
}
