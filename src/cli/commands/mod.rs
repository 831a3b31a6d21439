use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("fnping")
        .about("Fetch a client-credentials token and ping a function app")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg(
            Arg::new("tenant-id")
                .long("tenant-id")
                .help("Directory (tenant) id used in the token endpoint URL")
                .env("FNPING_TENANT_ID")
                .required(true),
        )
        .arg(
            Arg::new("client-id")
                .long("client-id")
                .help("Application (client) id")
                .env("FNPING_CLIENT_ID")
                .required(true),
        )
        .arg(
            Arg::new("client-secret")
                .long("client-secret")
                .help("Client secret")
                .env("FNPING_CLIENT_SECRET")
                .hide_env_values(true)
                .required(true),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("FNPING_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .subcommand(Command::new("token").about("Print an access token"))
        .subcommand(
            Command::new("ping")
                .about("Call https://<function-name>.azurewebsites.net/api/ping")
                .arg(
                    Arg::new("function-name")
                        .short('f')
                        .long("function-name")
                        .help("Function app name")
                        .env("FNPING_FUNCTION_NAME")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("test-connection").about("Check that a token can be obtained"),
        )
}
