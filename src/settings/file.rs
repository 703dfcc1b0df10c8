//! Settings file persistence.
//!
//! One comma-separated line at `~/.config/passgen/settings`. Loading is
//! lenient: unparseable fields keep their defaults, and a malformed file is
//! rewritten from the current settings.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use super::Settings;
use crate::engine::{LENGTH_MAX, LENGTH_MIN};

pub fn save(settings: &Settings) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(get_path())?;

    file.write_all(encode(settings).as_bytes())?;
    Ok(())
}

pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    let path = get_path();
    if !Path::new(&path).exists()
        && let Some(parent) = Path::new(&path).parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        eprintln!("Failed to create directory for settings file: {}", e);
        return Ok(());
    }

    let file = OpenOptions::new()
        .read(true)
        .create(true)
        .truncate(false)
        .write(true)
        .open(&path)?;

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.is_empty() || !decode(&line, settings) {
        save(settings)?;
    }

    Ok(())
}

fn encode(settings: &Settings) -> String {
    format!(
        "{},{},{},{},{},{}\n",
        settings.length,
        settings.uppercase,
        settings.lowercase,
        settings.digits,
        settings.special,
        settings.easy_to_read
    )
}

/// Apply a settings line. Returns false when the field count is off.
fn decode(line: &str, settings: &mut Settings) -> bool {
    let parts: Vec<&str> = line.trim().split(',').collect();
    if parts.len() != 6 {
        return false;
    }

    settings.length = parts[0]
        .parse()
        .unwrap_or(settings.length)
        .clamp(LENGTH_MIN, LENGTH_MAX);
    settings.uppercase = parts[1].parse().unwrap_or(settings.uppercase);
    settings.lowercase = parts[2].parse().unwrap_or(settings.lowercase);
    settings.digits = parts[3].parse().unwrap_or(settings.digits);
    settings.special = parts[4].parse().unwrap_or(settings.special);
    settings.easy_to_read = parts[5].parse().unwrap_or(settings.easy_to_read);
    true
}

#[inline]
fn get_path() -> String {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    format!("{}/.config/passgen/settings", home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_then_decode_restores_the_settings() {
        let original = Settings {
            length: 16,
            uppercase: false,
            lowercase: true,
            digits: true,
            special: false,
            easy_to_read: true,
        };

        let mut restored = Settings::default();
        assert!(decode(&encode(&original), &mut restored));
        assert_eq!(restored, original);
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        let mut settings = Settings::default();
        assert!(!decode("12,true,true\n", &mut settings));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn garbage_fields_keep_their_defaults() {
        let mut settings = Settings::default();
        assert!(decode("banana,true,??,false,true,false\n", &mut settings));
        assert_eq!(settings.length, Settings::default().length);
        assert!(settings.uppercase);
        assert!(settings.lowercase);
        assert!(!settings.digits);
    }

    #[test]
    fn out_of_range_length_is_clamped() {
        let mut settings = Settings::default();
        assert!(decode("74,true,true,true,true,false\n", &mut settings));
        assert_eq!(settings.length, LENGTH_MAX);

        assert!(decode("3,true,true,true,true,false\n", &mut settings));
        assert_eq!(settings.length, LENGTH_MIN);
    }
}
