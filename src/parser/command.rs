use std::collections::BTreeSet;

use crate::error::{HeroError, HeroResult};
use crate::model::{
    Address, Company, CurrentPosition, Email, Job, Name, Person, Phone, ProfilePicture, Tag,
};

use super::args::*;
use super::util::{self, Index};

/// A fully parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Exit,
    List,
    Clear,
    Add(Person),
    Edit { index: Index, edits: PersonEdits },
    Delete(Index),
    Find(Vec<String>),
    FindTag(Tag),
    DeleteTag(Tag),
    AddJob(Job),
    ListJobs,
    FindJob(Vec<String>),
    DeleteJob(Index),
    Register { username: String, password: String },
    Login { username: String, password: String },
    Logout,
}

impl Command {
    /// Commands that touch the address book need a logged-in user.
    pub fn requires_login(&self) -> bool {
        !matches!(
            self,
            Command::Help
                | Command::Exit
                | Command::Register { .. }
                | Command::Login { .. }
                | Command::Logout
        )
    }
}

/// Fields to change on an existing person. `None` leaves a field as is;
/// `tags: Some(empty)` clears every tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonEdits {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub current_position: Option<CurrentPosition>,
    pub company: Option<Company>,
    pub profile_picture: Option<ProfilePicture>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl PersonEdits {
    pub fn is_empty(&self) -> bool {
        *self == PersonEdits::default()
    }

    pub fn apply(&self, person: &Person) -> Person {
        Person::new(
            self.name.clone().unwrap_or_else(|| person.name().clone()),
            self.phone.clone().unwrap_or_else(|| person.phone().clone()),
            self.email.clone().unwrap_or_else(|| person.email().clone()),
            self.address.clone().unwrap_or_else(|| person.address().clone()),
            self.current_position
                .clone()
                .unwrap_or_else(|| person.current_position().clone()),
            self.company.clone().unwrap_or_else(|| person.company().clone()),
            Some(
                self.profile_picture
                    .clone()
                    .unwrap_or_else(|| person.profile_picture().clone()),
            ),
            self.tags.clone().unwrap_or_else(|| person.tag_set()),
        )
    }
}

const ADD_USAGE: &str =
    "add n/NAME p/PHONE e/EMAIL a/ADDRESS cp/POSITION c/COMPANY [pp/PICTURE] [t/TAG]...";
const EDIT_USAGE: &str =
    "edit INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [cp/POSITION] [c/COMPANY] [pp/PICTURE] [t/TAG]...";
const ADD_JOB_USAGE: &str = "addjob j/TITLE l/LOCATION s/SKILL [t/TAG]...";
const ACCOUNT_USAGE: &str = "u/USERNAME pw/PASSWORD";

pub fn parse_command(input: &str) -> HeroResult<Command> {
    let input = input.trim();
    let (word, args) = match input.find(char::is_whitespace) {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    };

    match word {
        "help" | "?" => Ok(Command::Help),
        "exit" | "quit" | "q" => Ok(Command::Exit),
        "list" | "ls" => Ok(Command::List),
        "clear" => Ok(Command::Clear),
        "add" => parse_add(args),
        "edit" => parse_edit(args),
        "delete" => Ok(Command::Delete(util::parse_index(args)?)),
        "find" => Ok(Command::Find(keywords(args, "find KEYWORD [MORE_KEYWORDS]...")?)),
        "findtag" => Ok(Command::FindTag(util::parse_tag(args)?)),
        "deletetag" => Ok(Command::DeleteTag(util::parse_tag(args)?)),
        "addjob" => parse_add_job(args),
        "jobs" => Ok(Command::ListJobs),
        "findjob" => Ok(Command::FindJob(keywords(args, "findjob KEYWORD [MORE_KEYWORDS]...")?)),
        "deletejob" => Ok(Command::DeleteJob(util::parse_index(args)?)),
        "register" => {
            let (username, password) = parse_credentials(args, "register")?;
            Ok(Command::Register { username, password })
        }
        "login" => {
            let (username, password) = parse_credentials(args, "login")?;
            Ok(Command::Login { username, password })
        }
        "logout" => Ok(Command::Logout),
        other => Err(HeroError::invalid(
            "command",
            &format!("unknown command '{}', type 'help' for commands", other),
        )),
    }
}

fn usage(text: &str) -> HeroError {
    HeroError::invalid("command format", &format!("usage: {}", text))
}

fn keywords(args: &str, usage_text: &str) -> HeroResult<Vec<String>> {
    let words: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if words.is_empty() {
        return Err(usage(usage_text));
    }
    Ok(words)
}

fn required<'a>(map: &'a ArgumentMultimap, prefix: &str, usage_text: &str) -> HeroResult<&'a str> {
    map.value(prefix).ok_or_else(|| usage(usage_text))
}

fn parse_add(args: &str) -> HeroResult<Command> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_CURRENT_POSITION,
            PREFIX_COMPANY,
            PREFIX_PROFILE_PICTURE,
            PREFIX_TAG,
        ],
    );
    if !map.preamble().is_empty() {
        return Err(usage(ADD_USAGE));
    }

    let person = Person::new(
        util::parse_name(required(&map, PREFIX_NAME, ADD_USAGE)?)?,
        util::parse_phone(required(&map, PREFIX_PHONE, ADD_USAGE)?)?,
        util::parse_email(required(&map, PREFIX_EMAIL, ADD_USAGE)?)?,
        util::parse_address(required(&map, PREFIX_ADDRESS, ADD_USAGE)?)?,
        util::parse_current_position(required(&map, PREFIX_CURRENT_POSITION, ADD_USAGE)?)?,
        util::parse_company(required(&map, PREFIX_COMPANY, ADD_USAGE)?)?,
        util::parse_profile_picture_opt(map.value(PREFIX_PROFILE_PICTURE))?,
        util::parse_tags(&map.all_values(PREFIX_TAG))?,
    );
    Ok(Command::Add(person))
}

fn parse_edit(args: &str) -> HeroResult<Command> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_CURRENT_POSITION,
            PREFIX_COMPANY,
            PREFIX_PROFILE_PICTURE,
            PREFIX_TAG,
        ],
    );
    let index = util::parse_index(map.preamble()).map_err(|_| usage(EDIT_USAGE))?;

    let edits = PersonEdits {
        name: util::parse_name_opt(map.value(PREFIX_NAME))?,
        phone: util::parse_phone_opt(map.value(PREFIX_PHONE))?,
        email: util::parse_email_opt(map.value(PREFIX_EMAIL))?,
        address: util::parse_address_opt(map.value(PREFIX_ADDRESS))?,
        current_position: util::parse_current_position_opt(map.value(PREFIX_CURRENT_POSITION))?,
        company: util::parse_company_opt(map.value(PREFIX_COMPANY))?,
        profile_picture: util::parse_profile_picture_opt(map.value(PREFIX_PROFILE_PICTURE))?,
        tags: parse_tags_for_edit(&map.all_values(PREFIX_TAG))?,
    };
    if edits.is_empty() {
        return Err(HeroError::invalid("edit", "at least one field to edit must be provided"));
    }
    Ok(Command::Edit { index, edits })
}

/// No `t/` leaves tags alone; a single empty `t/` clears them.
fn parse_tags_for_edit(values: &[&str]) -> HeroResult<Option<BTreeSet<Tag>>> {
    if values.is_empty() {
        return Ok(None);
    }
    if values.len() == 1 && values[0].is_empty() {
        return Ok(Some(BTreeSet::new()));
    }
    util::parse_tags(values).map(Some)
}

fn parse_add_job(args: &str) -> HeroResult<Command> {
    let map = tokenize(args, &[PREFIX_JOB_TITLE, PREFIX_LOCATION, PREFIX_SKILL, PREFIX_TAG]);
    if !map.preamble().is_empty() {
        return Err(usage(ADD_JOB_USAGE));
    }

    let job = Job::new(
        util::parse_job_title(required(&map, PREFIX_JOB_TITLE, ADD_JOB_USAGE)?)?,
        util::parse_location(required(&map, PREFIX_LOCATION, ADD_JOB_USAGE)?)?,
        util::parse_skill(required(&map, PREFIX_SKILL, ADD_JOB_USAGE)?)?,
        util::parse_tags(&map.all_values(PREFIX_TAG))?,
    );
    Ok(Command::AddJob(job))
}

fn parse_credentials(args: &str, command: &str) -> HeroResult<(String, String)> {
    let usage_text = format!("{} {}", command, ACCOUNT_USAGE);
    let map = tokenize(args, &[PREFIX_USERNAME, PREFIX_PASSWORD]);
    let username = required(&map, PREFIX_USERNAME, &usage_text)?.to_string();
    let password = required(&map, PREFIX_PASSWORD, &usage_text)?.to_string();
    Ok((username, password))
}
