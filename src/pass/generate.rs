//! Password generation.

use std::io::Write;

use super::charset::Alphabet;
use super::output::PasswordWriter;
use crate::error::Result;
use crate::rng::{self, EntropySource, OsEntropy};
use crate::settings::Settings;

/// Generate `settings.number_of_passwords` passwords and stream them to `out`
/// in generation order. Each character goes straight to the secure buffer.
pub fn generate_batch<W: Write>(settings: &Settings, alphabet: &Alphabet, out: W) -> Result<()> {
    let mut source = OsEntropy::new();
    let mut writer = PasswordWriter::new(out, settings.format);

    for _ in 0..settings.number_of_passwords {
        generate_password(&mut source, settings.pass_length, alphabet, &mut writer)?;
    }
    writer.finish()?;

    log::debug!(
        "generated {} password(s) of {} chars from {} candidates",
        settings.number_of_passwords,
        settings.pass_length,
        alphabet.len()
    );
    Ok(())
}

/// Draw `length` characters independently and uniformly from `alphabet`
/// and write them to `out` as one password.
/// An empty alphabet yields an empty password.
pub fn generate_password<E, W>(
    source: &mut E,
    length: usize,
    alphabet: &Alphabet,
    out: &mut PasswordWriter<W>,
) -> Result<()>
where
    E: EntropySource + ?Sized,
    W: Write,
{
    let chars = alphabet.as_slice();
    out.begin()?;
    if !chars.is_empty() {
        for _ in 0..length {
            let i = rng::below(source, chars.len())?;
            out.push(chars[i])?;
        }
    }
    out.end()
}
