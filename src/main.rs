use std::io;

use anyhow::Result;
use clap::Parser;
use rand::rngs::OsRng;
use tracing::Level;

use easy_rsa::config::{
    CipherConfig, ShellConfig, DEFAULT_MAX_ATTEMPTS, EXIT_COMMAND, MAXIMUM_COEFFICIENT,
};
use easy_rsa::ui;

/// Generate a small RSA key pair for each message and show every step
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Encrypt this message once and exit instead of prompting
    #[arg(short, long)]
    message: Option<String>,

    /// Key generation attempts before giving up (0 retries forever)
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Largest phi multiplier tried when deriving the private key
    #[arg(long, default_value_t = MAXIMUM_COEFFICIENT)]
    max_coefficient: u64,

    /// Input that ends the interactive loop
    #[arg(long, default_value = EXIT_COMMAND)]
    exit_command: String,

    /// Print encrypted ordinals as hex
    #[arg(long)]
    hex: bool,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn shell_config(&self) -> ShellConfig {
        let cipher = CipherConfig::default().with_maximum_coefficient(self.max_coefficient);
        let cipher = match self.max_attempts {
            0 => cipher.unbounded(),
            attempts => cipher.with_max_attempts(attempts),
        };

        ShellConfig::default()
            .with_exit_command(self.exit_command.clone())
            .with_hex(self.hex)
            .with_cipher(cipher)
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .init();

    let config = cli.shell_config();
    let mut stdout = io::stdout().lock();

    match cli.message.as_deref() {
        Some(message) => ui::encrypt_once(message, &mut stdout, &config, &mut OsRng),
        None => ui::run(io::stdin().lock(), &mut stdout, &config, &mut OsRng),
    }
}
