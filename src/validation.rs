use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{HeroError, HeroResult};

static NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}][\p{L}\p{N} ]*$").expect("name pattern"));
static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("phone pattern"));
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.+\-]+@[A-Za-z0-9_.\-]+$").expect("email pattern"));
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L}\p{N}]+$").expect("word pattern"));
static USERNAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.]{3,20}$").expect("username pattern"));

pub const MIN_PASSWORD_LEN: usize = 6;

/// Rejects values whose first character is whitespace. Used by free-text
/// fields that are stored exactly as given.
pub fn starts_non_blank(value: &str, field: &str) -> HeroResult<()> {
    match value.chars().next() {
        Some(c) if !c.is_whitespace() => Ok(()),
        _ => Err(HeroError::invalid(field, "cannot be blank")),
    }
}

pub fn name(value: &str) -> HeroResult<()> {
    check(&NAME, value, "name", "should only contain alphanumeric characters and spaces, and it should not be blank")
}

pub fn phone(value: &str) -> HeroResult<()> {
    check(&PHONE, value, "phone", "should only contain numbers, and it should be at least 3 digits long")
}

pub fn email(value: &str) -> HeroResult<()> {
    check(&EMAIL, value, "email", "should be of the format local-part@domain")
}

/// Single alphanumeric word, as used by tags and skills.
pub fn word(value: &str, field: &str) -> HeroResult<()> {
    check(&WORD, value, field, "should be alphanumeric")
}

pub fn picture_path(value: &str) -> HeroResult<()> {
    if value.is_empty() {
        return Ok(());
    }
    let lower = value.to_lowercase();
    if [".jpg", ".jpeg", ".png"].iter().any(|ext| lower.ends_with(ext)) {
        Ok(())
    } else {
        Err(HeroError::invalid("profile picture", "should be a .jpg, .jpeg or .png file"))
    }
}

pub fn username(value: &str) -> HeroResult<()> {
    check(&USERNAME, value, "username", "should be 3 to 20 characters of letters, digits, '_' or '.'")
        .map_err(|_| HeroError::InvalidUsername)
}

pub fn password(value: &str) -> HeroResult<()> {
    if value.chars().count() < MIN_PASSWORD_LEN || value.chars().any(char::is_whitespace) {
        return Err(HeroError::InvalidPassword);
    }
    Ok(())
}

fn check(pattern: &Regex, value: &str, field: &str, message: &str) -> HeroResult<()> {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(HeroError::invalid(field, message))
    }
}
