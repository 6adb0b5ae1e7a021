use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{HeroError, HeroResult};
use crate::validation;

/// Declares an immutable string-backed value object. `new` runs the given
/// check on the exact input; trimming is the caller's job (see `parser::util`).
/// Deserialization goes through the same check.
macro_rules! value_object {
    ($(#[$meta:meta])* $name:ident, $check:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn new(value: &str) -> HeroResult<Self> {
                let check: fn(&str) -> HeroResult<()> = $check;
                check(value)?;
                Ok(Self(value.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = HeroError;

            fn try_from(value: String) -> HeroResult<Self> {
                Self::new(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }
    };
}

value_object!(
    /// A person's full name.
    Name,
    validation::name
);

value_object!(
    /// A phone number of at least three digits.
    Phone,
    validation::phone
);

value_object!(Email, validation::email);

value_object!(
    /// Free-text postal address.
    Address,
    |v| validation::starts_non_blank(v, "address")
);

value_object!(Company, |v| validation::starts_non_blank(v, "company"));

value_object!(CurrentPosition, |v| validation::starts_non_blank(v, "current position"));

value_object!(
    /// Path to a profile image. The empty value means "no picture".
    ProfilePicture,
    validation::picture_path
);

value_object!(
    /// A single-word label attached to a person or job.
    Tag,
    |v| validation::word(v, "tag")
);

value_object!(
    /// A single-word skill required by a job.
    Skill,
    |v| validation::word(v, "skill")
);

value_object!(JobTitle, |v| validation::starts_non_blank(v, "job title"));

value_object!(Location, |v| validation::starts_non_blank(v, "location"));

impl ProfilePicture {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ProfilePicture {
    fn default() -> Self {
        Self(String::new())
    }
}
