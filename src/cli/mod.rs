pub mod context;
pub mod commands;

use rusqlite::Connection;
use std::path::Path;

use crate::db::{schema, storage};
use crate::error::HeroResult;
use crate::model::{ModelManager, ReadOnlyAccountsManager};
use crate::parser::parse_command;
use commands::Flow;
use context::CLIContext;

/// Run the interactive REPL.
pub fn run(db_path: &Path) {
    println!("contactHeRo address book");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let mut ctx = match open(db_path) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error opening database: {}", e);
            return;
        }
    };

    repl_loop(&mut ctx);
}

fn open(db_path: &Path) -> HeroResult<CLIContext> {
    let conn = Connection::open(db_path)?;
    schema::initialize(&conn)?;

    let book = storage::load_address_book(&conn)?;
    let accounts = storage::load_accounts(&conn)?;
    if accounts.account_list().is_empty() {
        println!("No accounts yet. Use 'register u/USERNAME pw/PASSWORD' to create one.");
    }

    Ok(CLIContext::new(conn, ModelManager::with_data(book, accounts)))
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let result = parse_command(input).and_then(|command| commands::execute(ctx, command));
        match result {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => ctx.print_error(&e),
        }
    }
}
