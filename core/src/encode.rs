use crate::prelude::{LutError, LutResult, MAX_WORD};
use std::io::{BufRead, Write};

/// Number of hex digits per table row.
pub const WORD_DIGITS: usize = 4;

/// Formats a sample as a zero-padded lowercase hex word.
pub fn format_word(value: u16) -> String {
    format!("{:04x}", value)
}

/// Narrows a quantized sample to a table word, rejecting anything that would
/// need more than four hex digits or is negative.
pub fn checked_word(index: usize, value: i64) -> LutResult<u16> {
    if !(0..=MAX_WORD).contains(&value) {
        return Err(LutError::SampleOutOfRange { index, value });
    }
    Ok(value as u16)
}

/// Writes one word per line in index order.
pub fn write_hex<W: Write>(samples: &[u16], mut writer: W) -> LutResult<()> {
    for &sample in samples {
        writeln!(writer, "{}", format_word(sample))?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads a table previously produced by [`write_hex`].
///
/// Only the exact byte layout `write_hex` emits is accepted: `\r\n` line
/// endings and a missing final newline are both rejected.
pub fn parse_hex<R: BufRead>(mut reader: R) -> LutResult<Vec<u16>> {
    let mut samples = Vec::new();
    let mut buf = Vec::new();
    let mut number = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        number += 1;

        let word = buf.strip_suffix(b"\n").ok_or_else(|| LutError::MalformedTable {
            line: number,
            reason: "missing trailing newline".into(),
        })?;
        let valid = word.len() == WORD_DIGITS
            && word
                .iter()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(b));
        if !valid {
            return Err(LutError::MalformedTable {
                line: number,
                reason: format!(
                    "expected {} lowercase hex digits, got {:?}",
                    WORD_DIGITS,
                    String::from_utf8_lossy(word)
                ),
            });
        }
        let value = word
            .iter()
            .filter_map(|&b| char::from(b).to_digit(16))
            .fold(0u16, |acc, digit| (acc << 4) | digit as u16);
        samples.push(value);
    }
    Ok(samples)
}
