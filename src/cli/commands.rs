use crate::cli::context::CLIContext;
use crate::error::HeroResult;
use crate::model::{Job, Model, Person};
use crate::ops::*;
use crate::parser::Command;

/// Whether the REPL should keep reading input.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn execute(ctx: &mut CLIContext, command: Command) -> HeroResult<Flow> {
    if command.requires_login() {
        account_ops::require_login(&ctx.model)?;
    }

    let model = &mut ctx.model;
    match command {
        Command::Help => print_help(),
        Command::Exit => return Ok(Flow::Exit),

        Command::List => {
            let shown = person_ops::list_persons(model);
            print_persons(model.filtered_person_list());
            println!("Listed all persons ({}).", shown);
        }
        Command::Find(keywords) => {
            let shown = person_ops::find_persons(model, keywords);
            print_persons(model.filtered_person_list());
            println!("{} persons listed!", shown);
        }
        Command::FindTag(tag) => {
            let shown = person_ops::find_by_tag(model, tag);
            print_persons(model.filtered_person_list());
            println!("{} persons listed!", shown);
        }
        Command::Add(person) => {
            let added = person_ops::add_person(model, person)?;
            println!("New person added: {}", added);
        }
        Command::Edit { index, edits } => {
            let edited = person_ops::edit_person(model, index, &edits)?;
            println!("Edited person: {}", edited);
        }
        Command::Delete(index) => {
            let deleted = person_ops::delete_person(model, index)?;
            println!("Deleted person: {}", deleted);
        }
        Command::DeleteTag(tag) => {
            person_ops::delete_tag(model, &tag)?;
            println!("Deleted tag: {}", tag);
        }
        Command::Clear => {
            person_ops::clear(model)?;
            println!("Address book has been cleared!");
        }

        Command::AddJob(job) => {
            let added = job_ops::add_job(model, job)?;
            println!("New job added: {}", added);
        }
        Command::ListJobs => {
            let shown = job_ops::list_jobs(model);
            print_jobs(model.filtered_job_list());
            println!("Listed all jobs ({}).", shown);
        }
        Command::FindJob(keywords) => {
            let shown = job_ops::find_jobs(model, keywords);
            print_jobs(model.filtered_job_list());
            println!("{} jobs listed!", shown);
        }
        Command::DeleteJob(index) => {
            let deleted = job_ops::delete_job(model, index)?;
            println!("Deleted job: {}", deleted);
        }

        Command::Register { username, password } => {
            account_ops::register(model, &username, &password)?;
            println!("Account {} registered. Use 'login' to sign in.", username);
        }
        Command::Login { username, password } => {
            let user = account_ops::login(model, &username, &password)?;
            println!("Welcome, {}! {} persons in your address book.", user, model.address_book().person_list().len());
        }
        Command::Logout => {
            let user = account_ops::logout(model)?;
            println!("Goodbye, {}.", user);
        }
    }

    ctx.persist()?;
    Ok(Flow::Continue)
}

fn print_persons(persons: Vec<&Person>) {
    for (i, person) in persons.iter().enumerate() {
        println!("  {}. {}", i + 1, person);
    }
}

fn print_jobs(jobs: Vec<&Job>) {
    for (i, job) in jobs.iter().enumerate() {
        println!("  {}. {}", i + 1, job);
    }
}

fn print_help() {
    println!(r#"
COMMANDS:

  Accounts:
    register u/USERNAME pw/PASSWORD   Create an account
    login u/USERNAME pw/PASSWORD      Log in
    logout                            Log out

  Persons (login required):
    list                              Show all persons
    add n/NAME p/PHONE e/EMAIL a/ADDRESS cp/POSITION c/COMPANY [pp/PICTURE] [t/TAG]...
    edit INDEX [n/NAME] [p/PHONE] ... [t/TAG]...   (t/ alone clears tags)
    delete INDEX                      Delete the person at INDEX
    find KEYWORD [MORE]...            Show persons whose name contains a keyword
    findtag TAG                       Show persons with TAG
    deletetag TAG                     Remove TAG from every person
    clear                             Delete every person and job

  Jobs (login required):
    jobs                              Show all jobs
    addjob j/TITLE l/LOCATION s/SKILL [t/TAG]...
    findjob KEYWORD [MORE]...         Show jobs whose title contains a keyword
    deletejob INDEX                   Delete the job at INDEX

  Other:
    help                              Show this help
    exit / quit / q                   Exit
"#);
}
