//! Command-line front-end for the contact book.
//!
//! Thin by design: argument parsing and printing only, every operation is
//! a single call into [`ContactBook`].

use crate::domain::ViewMode;
use crate::error::StoreResult;
use crate::services::ContactBook;
use clap::{Parser, Subcommand};

/// CLI arguments for arcade-contacts
#[derive(Debug, Parser)]
#[command(
    name = "arcade-contacts",
    version,
    about = "Manage a small contact list with country-code filtering"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a new contact
    Add {
        name: String,
        phone: String,
        email: String,
    },

    /// List contacts
    List {
        /// Sort the list by name (A-Z, case-insensitive)
        #[arg(long, conflicts_with = "code")]
        sort: bool,

        /// Only show contacts with this calling code (e.g. 44)
        #[arg(long)]
        code: Option<String>,
    },

    /// Look up one contact by name (case-insensitive)
    Find { name: String },

    /// Change fields of an existing contact; omitted fields keep their value
    Update {
        /// Current name of the contact
        name: String,

        /// New name
        #[arg(long, default_value = "")]
        new_name: String,

        /// New phone number
        #[arg(long, default_value = "")]
        new_phone: String,

        /// New email address
        #[arg(long, default_value = "")]
        new_email: String,
    },

    /// Remove a contact by name
    Delete { name: String },

    /// Print the country calling-code table
    Codes,
}

impl Commands {
    /// The view mode a `list` invocation asks for.
    fn view_mode(sort: bool, code: Option<String>) -> ViewMode {
        match code {
            Some(code) => ViewMode::FilterByCode(code),
            None if sort => ViewMode::SortByName,
            None => ViewMode::ShowAll,
        }
    }
}

/// Execute one parsed command against the book.
pub fn run(args: CliArgs, book: &mut ContactBook) -> StoreResult<()> {
    match args.command {
        Commands::Add { name, phone, email } => {
            let contact = book.add(&name, &phone, &email)?;
            println!("Added {contact}");
        }
        Commands::List { sort, code } => {
            let mode = Commands::view_mode(sort, code);
            println!("{}", mode.label(book.code_table()));
            match mode {
                ViewMode::ShowAll => print_all(book),
                ViewMode::SortByName => {
                    book.sort_by_name();
                    print_all(book);
                }
                ViewMode::FilterByCode(code) => {
                    for contact in book.filter_by_phone_code(&code) {
                        println!("{contact}");
                    }
                }
            }
        }
        Commands::Find { name } => match book.find(&name) {
            Some(contact) => println!("{contact}"),
            None => println!("No contact named '{name}'"),
        },
        Commands::Update {
            name,
            new_name,
            new_phone,
            new_email,
        } => {
            if book.find(&name).is_none() {
                println!("No contact named '{name}'");
            } else {
                book.update(&name, &new_name, &new_phone, &new_email)?;
                println!("Updated '{name}'");
            }
        }
        Commands::Delete { name } => {
            if book.delete(&name)? {
                println!("Deleted '{name}'");
            } else {
                println!("No contact named '{name}'");
            }
        }
        Commands::Codes => {
            for (code, country) in book.code_table().entries() {
                println!("+{code}\t{country}");
            }
        }
    }
    Ok(())
}

fn print_all(book: &ContactBook) {
    for contact in book.contacts() {
        println!("{contact}");
    }
}
