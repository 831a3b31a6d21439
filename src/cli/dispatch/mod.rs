use crate::cli::{actions::Action, globals::GlobalArgs};
use anyhow::{anyhow, Result};
use secrecy::SecretString;

fn required(matches: &clap::ArgMatches, name: &str) -> Result<String> {
    matches
        .get_one::<String>(name)
        .map(|s| s.to_string())
        .ok_or_else(|| anyhow!("missing required argument: --{name}"))
}

pub fn handler(matches: &clap::ArgMatches) -> Result<(Action, GlobalArgs)> {
    let mut globals = GlobalArgs::new(
        required(matches, "tenant-id")?,
        required(matches, "client-id")?,
    );
    globals.set_secret(SecretString::from(required(matches, "client-secret")?));

    let action = match matches.subcommand() {
        Some(("token", _)) => Action::Token,
        Some(("ping", sub_m)) => {
            globals.set_function_name(required(sub_m, "function-name")?);
            Action::Ping
        }
        Some(("test-connection", _)) => Action::TestConnection,
        _ => return Err(anyhow!("unknown subcommand")),
    };

    Ok((action, globals))
}
