//! Decode an interaction or interaction response and report which shape it
//! narrowed to.
//!
//! ```text
//! interaction-inspect <interaction|response> [PATH]
//! ```
//!
//! The payload is read from `PATH`, or from stdin when it is absent or `-`.
//! Exits with status 1 if the payload doesn't decode.

use interaction_typings::types::{
    application::interaction::{Interaction, InteractionScope},
    http::interaction::InteractionResponse,
};
use serde_json::Value;
use std::{
    fs,
    io::{self, Read},
    process,
};
use tracing::{error, info};

const USAGE: &str = "usage: interaction-inspect <interaction|response> [PATH]";

fn main() {
    dotenv::dotenv().ok();

    // Respects RUST_LOG, defaults to info.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(family), path) = (args.next(), args.next()) else {
        error!("{USAGE}");
        process::exit(2);
    };

    let value = match read_payload(path.as_deref()) {
        Ok(value) => value,
        Err(e) => {
            error!(error = %e, "failed to read payload");
            process::exit(1);
        }
    };

    let result = match family.as_str() {
        "interaction" => inspect_interaction(value),
        "response" => inspect_response(value),
        other => {
            error!(family = other, "{USAGE}");
            process::exit(2);
        }
    };

    if let Err(e) = result {
        error!(error = %e, "payload did not decode");
        process::exit(1);
    }
}

fn read_payload(path: Option<&str>) -> io::Result<Value> {
    let text = match path {
        None | Some("-") => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
        Some(path) => fs::read_to_string(path)?,
    };

    Ok(serde_json::from_str(&text)?)
}

fn inspect_interaction(value: Value) -> Result<(), Box<dyn std::error::Error>> {
    let interaction = Interaction::from_value(value)?;

    let data = match &interaction {
        Interaction::Ping(_) => "none".to_owned(),
        Interaction::ApplicationCommand(command) => format!("{:?}", command.data().kind()),
        Interaction::Autocomplete(command) => format!("{:?}", command.data().kind()),
        Interaction::MessageComponent(component) => {
            format!("{:?}", component.data().component_type())
        }
        Interaction::ModalSubmit(modal) => format!("modal {}", modal.data().custom_id),
    };
    let scope = match &interaction {
        Interaction::Ping(_) => "none",
        Interaction::ApplicationCommand(InteractionScope::Guild(_))
        | Interaction::MessageComponent(InteractionScope::Guild(_))
        | Interaction::Autocomplete(InteractionScope::Guild(_))
        | Interaction::ModalSubmit(InteractionScope::Guild(_)) => "guild",
        _ => "channel",
    };

    info!(
        kind = interaction.kind().name(),
        scope,
        data = %data,
        guild_id = ?interaction.guild_id(),
        author = ?interaction.author().map(|user| user.tag()),
        "decoded interaction"
    );

    Ok(())
}

fn inspect_response(value: Value) -> Result<(), Box<dyn std::error::Error>> {
    let response = InteractionResponse::from_value(value)?;

    info!(
        kind = ?response.kind(),
        has_data = response.kind().has_data(),
        "decoded interaction response"
    );

    Ok(())
}
