//! String to value-object conversions used by the command parser.
//!
//! Every parser trims its input before validating. The `_opt` variants pass
//! `None` straight through and only validate present values.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{HeroError, HeroResult};
use crate::model::{
    Address, Company, CurrentPosition, Email, JobTitle, Location, Name, Phone, ProfilePicture,
    Skill, Tag,
};

/// One-based position in a displayed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index(usize);

impl Index {
    pub fn from_one_based(value: usize) -> HeroResult<Self> {
        if value == 0 {
            return Err(HeroError::InvalidIndex);
        }
        Ok(Self(value))
    }

    pub fn one_based(&self) -> usize {
        self.0
    }

    pub fn zero_based(&self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a non-zero unsigned integer that fits in an `i32`.
pub fn parse_index(value: &str) -> HeroResult<Index> {
    let trimmed = value.trim();
    if trimmed.starts_with('+') {
        return Err(HeroError::InvalidIndex);
    }
    match trimmed.parse::<i32>() {
        Ok(n) if n > 0 => Index::from_one_based(n as usize),
        _ => Err(HeroError::InvalidIndex),
    }
}

macro_rules! field_parser {
    ($parse:ident, $parse_opt:ident, $ty:ty) => {
        pub fn $parse(value: &str) -> HeroResult<$ty> {
            <$ty>::new(value.trim())
        }

        pub fn $parse_opt(value: Option<&str>) -> HeroResult<Option<$ty>> {
            value.map($parse).transpose()
        }
    };
}

field_parser!(parse_name, parse_name_opt, Name);
field_parser!(parse_phone, parse_phone_opt, Phone);
field_parser!(parse_email, parse_email_opt, Email);
field_parser!(parse_address, parse_address_opt, Address);
field_parser!(parse_company, parse_company_opt, Company);
field_parser!(parse_current_position, parse_current_position_opt, CurrentPosition);
field_parser!(parse_profile_picture, parse_profile_picture_opt, ProfilePicture);
field_parser!(parse_job_title, parse_job_title_opt, JobTitle);
field_parser!(parse_location, parse_location_opt, Location);

pub fn parse_tag(value: &str) -> HeroResult<Tag> {
    Tag::new(value.trim())
}

pub fn parse_skill(value: &str) -> HeroResult<Skill> {
    Skill::new(value.trim())
}

/// Fails on the first invalid entry; nothing is returned in that case.
pub fn parse_tags<S: AsRef<str>>(values: &[S]) -> HeroResult<BTreeSet<Tag>> {
    values.iter().map(|v| parse_tag(v.as_ref())).collect()
}

pub fn parse_skills<S: AsRef<str>>(values: &[S]) -> HeroResult<BTreeSet<Skill>> {
    values.iter().map(|v| parse_skill(v.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const INVALID_NAME: &str = "R@chel";
    const INVALID_PHONE: &str = "+651234";
    const INVALID_ADDRESS: &str = " ";
    const INVALID_EMAIL: &str = "example.com";
    const INVALID_SKILL: &str = "friend 1";

    const VALID_NAME: &str = "Rachel Walker";
    const VALID_PHONE: &str = "123456";
    const VALID_ADDRESS: &str = "123 Main Street #0505";
    const VALID_EMAIL: &str = "rachel@example.com";
    const VALID_COMPANY: &str = "Acme Corp";
    const VALID_CURRENT_POSITION: &str = "Software Engineer";
    const VALID_PROFILE_PICTURE: &str = "images/rachel.png";
    const VALID_JOB_TITLE: &str = "Backend Engineer";
    const VALID_LOCATION: &str = "Singapore";
    const VALID_TAG: &str = "colleague";
    const VALID_SKILL_1: &str = "friend";
    const VALID_SKILL_2: &str = "neighbour";

    const WHITESPACE: &str = " \t\r\n";

    fn padded(value: &str) -> String {
        format!("{WHITESPACE}{value}{WHITESPACE}")
    }

    #[test]
    fn parse_index_rejects_non_numeric() {
        assert!(matches!(parse_index("10 a"), Err(HeroError::InvalidIndex)));
    }

    #[test]
    fn parse_index_rejects_out_of_range() {
        let too_big = (i32::MAX as i64 + 1).to_string();
        assert!(matches!(parse_index(&too_big), Err(HeroError::InvalidIndex)));
        assert!(matches!(parse_index("0"), Err(HeroError::InvalidIndex)));
        assert!(matches!(parse_index("+1"), Err(HeroError::InvalidIndex)));
    }

    #[test]
    fn parse_index_trims() {
        assert_eq!(parse_index("1").unwrap().zero_based(), 0);
        assert_eq!(parse_index("  1  ").unwrap().one_based(), 1);
    }

    #[test]
    fn parse_name_invalid() {
        assert!(parse_name(INVALID_NAME).is_err());
        assert!(parse_name_opt(Some(INVALID_NAME)).is_err());
    }

    #[test]
    fn parse_name_trims() {
        let expected = Name::new(VALID_NAME).unwrap();
        assert_eq!(parse_name(VALID_NAME).unwrap(), expected);
        assert_eq!(parse_name(&padded(VALID_NAME)).unwrap(), expected);
        assert_eq!(parse_name_opt(Some(&padded(VALID_NAME))).unwrap(), Some(expected));
        assert_eq!(parse_name(" Rachel Walker ").unwrap(), Name::new("Rachel Walker").unwrap());
    }

    #[test]
    fn parse_phone_invalid() {
        assert!(parse_phone(INVALID_PHONE).is_err());
        assert!(parse_phone_opt(Some(INVALID_PHONE)).is_err());
    }

    #[test]
    fn parse_phone_trims() {
        let expected = Phone::new(VALID_PHONE).unwrap();
        assert_eq!(parse_phone(&padded(VALID_PHONE)).unwrap(), expected);
        assert_eq!(parse_phone_opt(Some(VALID_PHONE)).unwrap(), Some(expected));
    }

    #[test]
    fn parse_address_invalid() {
        assert!(parse_address(INVALID_ADDRESS).is_err());
        assert!(parse_address_opt(Some(INVALID_ADDRESS)).is_err());
    }

    #[test]
    fn parse_address_trims() {
        let expected = Address::new(VALID_ADDRESS).unwrap();
        assert_eq!(parse_address(&padded(VALID_ADDRESS)).unwrap(), expected);
        assert_eq!(parse_address_opt(Some(&padded(VALID_ADDRESS))).unwrap(), Some(expected));
    }

    #[test]
    fn parse_email_invalid() {
        assert!(parse_email(INVALID_EMAIL).is_err());
        assert!(parse_email_opt(Some(INVALID_EMAIL)).is_err());
    }

    #[test]
    fn parse_email_trims() {
        let expected = Email::new(VALID_EMAIL).unwrap();
        assert_eq!(parse_email(&padded(VALID_EMAIL)).unwrap(), expected);
        assert_eq!(parse_email_opt(Some(VALID_EMAIL)).unwrap(), Some(expected));
    }

    #[test]
    fn parse_company_and_current_position_trim() {
        let company = Company::new(VALID_COMPANY).unwrap();
        assert_eq!(parse_company(&padded(VALID_COMPANY)).unwrap(), company);
        assert_eq!(parse_company_opt(Some(&padded(VALID_COMPANY))).unwrap(), Some(company));

        let position = CurrentPosition::new(VALID_CURRENT_POSITION).unwrap();
        assert_eq!(parse_current_position(&padded(VALID_CURRENT_POSITION)).unwrap(), position);
        assert_eq!(
            parse_current_position_opt(Some(&padded(VALID_CURRENT_POSITION))).unwrap(),
            Some(position)
        );
    }

    #[test]
    fn parse_profile_picture_trims() {
        let expected = ProfilePicture::new(VALID_PROFILE_PICTURE).unwrap();
        assert_eq!(parse_profile_picture(&padded(VALID_PROFILE_PICTURE)).unwrap(), expected);
        assert_eq!(
            parse_profile_picture_opt(Some(&padded(VALID_PROFILE_PICTURE))).unwrap(),
            Some(expected)
        );
        assert!(parse_profile_picture("notes.txt").is_err());
    }

    #[test]
    fn parse_job_fields_trim() {
        let title = JobTitle::new(VALID_JOB_TITLE).unwrap();
        assert_eq!(parse_job_title(&padded(VALID_JOB_TITLE)).unwrap(), title);
        assert_eq!(parse_job_title_opt(Some(&padded(VALID_JOB_TITLE))).unwrap(), Some(title));

        let location = Location::new(VALID_LOCATION).unwrap();
        assert_eq!(parse_location(&padded(VALID_LOCATION)).unwrap(), location);
        assert_eq!(parse_location_opt(Some(&padded(VALID_LOCATION))).unwrap(), Some(location));
    }

    #[test]
    fn parse_tag_trims() {
        let expected = Tag::new(VALID_TAG).unwrap();
        assert_eq!(parse_tag(VALID_TAG).unwrap(), expected);
        assert_eq!(parse_tag(&padded(VALID_TAG)).unwrap(), expected);
        assert!(parse_tag("#friend").is_err());
    }

    #[test]
    fn optional_parsers_pass_none_through() {
        assert_eq!(parse_name_opt(None).unwrap(), None);
        assert_eq!(parse_phone_opt(None).unwrap(), None);
        assert_eq!(parse_email_opt(None).unwrap(), None);
        assert_eq!(parse_address_opt(None).unwrap(), None);
        assert_eq!(parse_company_opt(None).unwrap(), None);
        assert_eq!(parse_current_position_opt(None).unwrap(), None);
        assert_eq!(parse_profile_picture_opt(None).unwrap(), None);
        assert_eq!(parse_job_title_opt(None).unwrap(), None);
        assert_eq!(parse_location_opt(None).unwrap(), None);
    }

    #[test]
    fn parse_skill_invalid() {
        assert!(parse_skill(INVALID_SKILL).is_err());
    }

    #[test]
    fn parse_skill_trims() {
        let expected = Skill::new(VALID_SKILL_1).unwrap();
        assert_eq!(parse_skill(VALID_SKILL_1).unwrap(), expected);
        assert_eq!(parse_skill(&padded(VALID_SKILL_1)).unwrap(), expected);
    }

    #[test]
    fn parse_skills_with_any_invalid_entry_fails() {
        assert!(parse_skills(&[VALID_SKILL_1, INVALID_SKILL]).is_err());
    }

    #[test]
    fn parse_skills_empty_input_gives_empty_set() {
        let empty: [&str; 0] = [];
        assert!(parse_skills(&empty).unwrap().is_empty());
    }

    #[test]
    fn parse_skills_collects_valid_entries() {
        let actual = parse_skills(&[VALID_SKILL_1, VALID_SKILL_2]).unwrap();
        let expected: BTreeSet<Skill> = [VALID_SKILL_1, VALID_SKILL_2]
            .iter()
            .map(|s| Skill::new(s).unwrap())
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn parse_tags_dedupes_equal_values() {
        let tags = parse_tags(&["friend", " friend "]).unwrap();
        assert_eq!(tags.len(), 1);
    }
}
