// Interactive shell
// Reads messages, builds a cipher for each and prints every intermediate value

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rand::{CryptoRng, RngCore};
use tracing::{info, warn};

use crate::config::ShellConfig;
use crate::rsa::bigint::to_bytes;
use crate::rsa::Cipher;

fn join(values: &[u64]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_hex(values: &[u64]) -> String {
    values
        .iter()
        .map(|&value| hex::encode(to_bytes(value)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The labelled fields of a cipher, one per line, ending with a blank line.
pub fn report(cipher: &Cipher, config: &ShellConfig) -> String {
    let ciphertext = if config.hex {
        join_hex(cipher.c())
    } else {
        join(cipher.c())
    };

    format!(
        "Unicode ordinals (m) {}\n\
         First prime (p) {}\n\
         Second prime (q) {}\n\
         Modulus (n) {}\n\
         Totient (phi(n)) {}\n\
         Public key (e) {}\n\
         Private key (d) {}\n\
         Encrypted ordinals (c) {}\n\n",
        join(cipher.m()),
        cipher.p(),
        cipher.q(),
        cipher.n(),
        cipher.phi(),
        cipher.e(),
        cipher.d(),
        ciphertext,
    )
}

/// Encrypt a single message and write its report.
pub fn encrypt_once<O, R>(
    message: &str,
    output: &mut O,
    config: &ShellConfig,
    rng: &mut R,
) -> Result<()>
where
    O: Write,
    R: RngCore + CryptoRng + ?Sized,
{
    let cipher = Cipher::with_rng(message, &config.cipher, rng)
        .with_context(|| format!("could not encrypt {:?}", message))?;
    output.write_all(report(&cipher, config).as_bytes())?;
    Ok(())
}

/// Prompt for messages until the exit command or end of input.
///
/// A message that cannot be encrypted prints a generic error and the loop
/// carries on; only I/O failures end it early.
pub fn run<I, O, R>(input: I, output: &mut O, config: &ShellConfig, rng: &mut R) -> Result<()>
where
    I: BufRead,
    O: Write,
    R: RngCore + CryptoRng + ?Sized,
{
    writeln!(output, "Easy RSA loaded successfully")?;
    writeln!(
        output,
        "Provide a message for encryption or type {} to exit\n",
        config.exit_command
    )?;

    let mut lines = input.lines();
    loop {
        write!(output, ">")?;
        output.flush().context("flushing prompt")?;

        let Some(line) = lines.next() else {
            break;
        };
        let message = line.context("reading message")?;
        if message.starts_with(config.exit_command.as_str()) {
            info!("exit command received");
            break;
        }

        match Cipher::with_rng(&message, &config.cipher, rng) {
            Ok(cipher) => output.write_all(report(&cipher, config).as_bytes())?,
            Err(err) => {
                warn!(error = %err, "could not encrypt message");
                writeln!(output, "An error occurred\n")?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CipherConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    const LABELS: [&str; 8] = [
        "Unicode ordinals (m) ",
        "First prime (p) ",
        "Second prime (q) ",
        "Modulus (n) ",
        "Totient (phi(n)) ",
        "Public key (e) ",
        "Private key (d) ",
        "Encrypted ordinals (c) ",
    ];

    fn session(input: &str, config: &ShellConfig) -> String {
        let mut rng = StdRng::seed_from_u64(42);
        let mut output = Vec::new();
        run(Cursor::new(input), &mut output, config, &mut rng).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_report_labels() {
        let mut rng = StdRng::seed_from_u64(1);
        let cipher = Cipher::with_rng("Hi", &CipherConfig::default(), &mut rng).unwrap();
        let text = report(&cipher, &ShellConfig::default());

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        for (line, label) in lines.iter().zip(LABELS) {
            assert!(line.starts_with(label), "{:?} should start with {:?}", line, label);
        }
        assert_eq!(lines[0], "Unicode ordinals (m) 72, 105");
        assert_eq!(lines[1], format!("First prime (p) {}", cipher.p()));
        assert_eq!(lines[8], "");
    }

    #[test]
    fn test_report_hex() {
        let mut rng = StdRng::seed_from_u64(1);
        let cipher = Cipher::with_rng("A", &CipherConfig::default(), &mut rng).unwrap();
        let text = report(&cipher, &ShellConfig::default().with_hex(true));

        let expected = hex::encode(to_bytes(cipher.c()[0]));
        assert!(text.contains(&format!("Encrypted ordinals (c) {}\n", expected)));
    }

    #[test]
    fn test_exit_command() {
        let text = session("/e\nnever encrypted\n", &ShellConfig::default());
        assert!(text.starts_with("Easy RSA loaded successfully\n"));
        assert!(text.contains("type /e to exit"));
        assert!(!text.contains("Unicode ordinals"));
    }

    #[test]
    fn test_exit_command_prefix() {
        let text = session("/exit\n", &ShellConfig::default());
        assert!(!text.contains("An error occurred"));
        assert!(!text.contains("Unicode ordinals"));
    }

    #[test]
    fn test_custom_exit_command() {
        let config = ShellConfig::default().with_exit_command("quit");
        let text = session("A\nquit\nB\n", &config);
        assert_eq!(text.matches("Unicode ordinals (m) ").count(), 1);
        assert!(text.contains("Unicode ordinals (m) 65\n"));
    }

    #[test]
    fn test_error_then_continue() {
        let text = session("\nA\n/e\n", &ShellConfig::default());
        assert!(text.contains("An error occurred\n"));
        assert!(text.contains("Unicode ordinals (m) 65\n"));
        for label in LABELS {
            assert!(text.contains(label));
        }
    }

    #[test]
    fn test_end_of_input() {
        let text = session("aa\n", &ShellConfig::default());
        assert!(text.contains("Unicode ordinals (m) 97, 97\n"));
        assert!(text.ends_with('>'));
    }

    #[test]
    fn test_encrypt_once() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut output = Vec::new();
        encrypt_once("ok", &mut output, &ShellConfig::default(), &mut rng).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("Unicode ordinals (m) 111, 107\n"));

        let mut output = Vec::new();
        assert!(encrypt_once("", &mut output, &ShellConfig::default(), &mut rng).is_err());
        assert!(output.is_empty());
    }
}
