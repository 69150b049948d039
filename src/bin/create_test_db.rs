use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::str::FromStr;

use clap::Parser;
use rusqlite::Connection;
use rust_decimal::Decimal;

use budget_tracker::{
    AppState,
    category::{CategoryName, NewCategory},
    money::{Amount, TransactionType},
    stores::{CategoryStore, TransactionStore},
    transaction::NewTransaction,
};

/// A utility for creating a test database for the budget tracker server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const CATEGORIES: [(&str, TransactionType); 6] = [
    ("Salary", TransactionType::Income),
    ("Freelance", TransactionType::Income),
    ("Groceries", TransactionType::Expense),
    ("Rent", TransactionType::Expense),
    ("Transport", TransactionType::Expense),
    ("Entertainment", TransactionType::Expense),
];

const TRANSACTIONS: [(TransactionType, &str, &str, Option<&str>); 6] = [
    (TransactionType::Income, "Salary", "4200.00", Some("Monthly pay")),
    (TransactionType::Income, "Freelance", "650.50", None),
    (TransactionType::Expense, "Rent", "1800.00", Some("October rent")),
    (TransactionType::Expense, "Groceries", "212.37", Some("Weekly shop")),
    (TransactionType::Expense, "Transport", "45.00", None),
    (TransactionType::Expense, "Entertainment", "32.99", Some("Cinema")),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;
    let state = AppState::new(conn)?;

    println!("Creating categories...");

    for (name, category_type) in CATEGORIES {
        state.category_store.create(NewCategory {
            name: CategoryName::new(name)?,
            category_type,
        })?;
    }

    println!("Creating transactions...");

    for (transaction_type, category, amount, description) in TRANSACTIONS {
        let amount = Amount::new(Decimal::from_str(amount)?)?;
        let new_transaction = match transaction_type {
            TransactionType::Income => NewTransaction::income(amount, category),
            TransactionType::Expense => NewTransaction::expense(amount, category),
        }
        .description(description);

        state.transaction_store.create_guarded(new_transaction)?;
    }

    println!("Success!");

    Ok(())
}
