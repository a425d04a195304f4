use tracing::info;

use outbox::{Address, Config, Dispatch, Dispatcher, JournaledDispatcher, Message, Result};

fn main() {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    outbox::logging::init(&config.logging);

    if let Err(e) = run(&config) {
        eprintln!("Dispatch demo failed: {e}");
        std::process::exit(1);
    }
}

/// Compose, prepare and dispatch a demo message through the journaling
/// wrapper.
fn run(config: &Config) -> Result<()> {
    let sender = Address::parse("system@outbox.com")?;
    let recipients = vec![
        Address::parse("alice@example.com")?,
        Address::parse("bob@example.net")?,
    ];

    let mut message = Message::new(
        "Welcome to outbox",
        "This message was composed, prepared and dispatched entirely in memory.",
        sender,
        recipients,
    );
    message.prepare();
    info!("prepared message: {}", message.status);

    let dispatcher = JournaledDispatcher::new(Dispatcher::new(), &config.dispatch.journal_path);
    let copies = dispatcher.dispatch(&message)?;

    info!("dispatched {} message(s)", copies.len());
    for copy in &copies {
        info!("-> {} [{}]", copy.recipients_masked(), copy.status);
    }
    info!("journal written to {}", config.dispatch.journal_path);

    Ok(())
}
