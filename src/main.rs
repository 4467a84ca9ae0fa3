//! Contact Book - demo entry point
//!
//! Adds a contact, applies a partial update and prints the result as JSON.

use anyhow::Result;
use contact_book::{Config, Contact, ContactService, ContactUpdate, ValidationMetrics};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only so stdout carries just the JSON output)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(max_contacts = config.max_contacts, "Configuration loaded");

    let mut service = ContactService::with_config(&config);

    let contact = Contact::new("15555", "Bob", "Smith", "1234567890", "8850 West Mayfield")?;
    service.add_contact(contact)?;
    info!(size = service.size(), "Contact added");

    service.update_contact(
        "15555",
        ContactUpdate {
            last_name: Some("Blue".to_string()),
            address: Some("8818 East Brooks".to_string()),
            ..Default::default()
        },
    )?;

    // Rejected on purpose to show failure accounting
    if let Err(e) = service.update_contact(
        "15555",
        ContactUpdate {
            phone_number: Some("555-1234".to_string()),
            ..Default::default()
        },
    ) {
        error!("Update rejected: {}", e);
    }

    if let Some(contact) = service.get_contact_by_id("15555") {
        println!("{}", serde_json::to_string_pretty(contact)?);
    }

    println!(
        "Validation failures: {}",
        ValidationMetrics::global().failure_count()
    );

    Ok(())
}
