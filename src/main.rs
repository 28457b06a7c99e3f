use clap::{Parser, Subcommand};
use loancalc::application::engine::LoanEngine;
use loancalc::domain::customer::Customer;
use loancalc::domain::language::Language;
use loancalc::domain::loan::LoanInput;
use loancalc::domain::offer::LoanOffer;
use loancalc::domain::ports::{CustomerStoreBox, OfferStoreBox};
use loancalc::error::LoanError;
use loancalc::infrastructure::in_memory::{InMemoryCustomerStore, InMemoryOfferStore};
use loancalc::infrastructure::json_file::JsonFileStore;
use loancalc::interfaces::console;
use loancalc::interfaces::csv::quote_reader::QuoteReader;
use loancalc::interfaces::csv::quote_writer::QuoteWriter;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Display language governing parsing and formatting (de or en)
    #[arg(long, global = true, default_value = "de")]
    lang: Language,

    /// Path to persistent database (optional). If provided, uses a JSON snapshot file.
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the monthly payment for one loan
    Quote {
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        #[arg(long, allow_hyphen_values = true)]
        rate: String,
        #[arg(long, allow_hyphen_values = true)]
        term: String,
        /// Emit the quote as JSON instead of a localized line
        #[arg(long)]
        json: bool,
    },
    /// Compute payments for a CSV of loans, writing CSV to stdout
    Batch {
        /// Input CSV file with amount, interest_rate, term_in_months columns
        input: PathBuf,
    },
    /// Interactive calculator form on stdin/stdout
    Form,
    /// Manage customers
    Customer {
        #[command(subcommand)]
        command: CustomerCommand,
    },
    /// Manage loan offers
    Offer {
        #[command(subcommand)]
        command: OfferCommand,
    },
}

#[derive(Subcommand)]
enum CustomerCommand {
    /// Register a new customer
    Add {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        street: String,
        #[arg(long)]
        house_number: String,
        #[arg(long)]
        postal_code: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        state: String,
        #[arg(long)]
        phone_number: String,
        #[arg(long)]
        email: String,
    },
    /// Show a customer with all stored offers
    Show { id: u32 },
}

#[derive(Subcommand)]
enum OfferCommand {
    /// Store a new loan offer for an existing customer
    Add {
        #[arg(long)]
        customer_id: u32,
        #[arg(long)]
        amount: String,
        #[arg(long)]
        rate: String,
        #[arg(long)]
        term: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let engine = if let Some(db_path) = &cli.db_path {
        // Use persistent storage (JSON snapshot file)
        let store = JsonFileStore::open(db_path).into_diagnostic()?;

        let customers: CustomerStoreBox = Box::new(store.clone());
        let offers: OfferStoreBox = Box::new(store);

        LoanEngine::new(customers, offers)
    } else {
        // Use in-memory storage
        let customers: CustomerStoreBox = Box::new(InMemoryCustomerStore::new());
        let offers: OfferStoreBox = Box::new(InMemoryOfferStore::new());

        LoanEngine::new(customers, offers)
    };

    match cli.command {
        Command::Quote {
            amount,
            rate,
            term,
            json,
        } => {
            let input = LoanInput::new(amount, rate, term, cli.lang);
            match engine.quote(&input) {
                Ok(quote) => {
                    if json {
                        println!(
                            "{}",
                            serde_json::to_string_pretty(&quote).into_diagnostic()?
                        );
                    } else {
                        println!("{}{}", cli.lang.labels().monthly_payment, quote.display);
                    }
                }
                Err(LoanError::InvalidInput(errors)) => {
                    for (field, message) in errors.localized(cli.lang) {
                        eprintln!("{}: {}", field.as_str(), message);
                    }
                    std::process::exit(1);
                }
                Err(e) => return Err(e).into_diagnostic(),
            }
        }
        Command::Batch { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = QuoteReader::new(file);

            let stdout = io::stdout();
            let mut writer = QuoteWriter::new(stdout.lock());
            writer.write_header().into_diagnostic()?;

            for (index, row) in reader.rows().enumerate() {
                let line = index + 2; // data starts after the header line
                match row {
                    Ok(row) => {
                        let input = LoanInput::new(
                            row.amount,
                            row.interest_rate,
                            row.term_in_months,
                            cli.lang,
                        );
                        match engine.quote(&input) {
                            Ok(quote) => writer.write_quote(&quote).into_diagnostic()?,
                            Err(e) => eprintln!("Error processing row {line}: {e}"),
                        }
                    }
                    Err(e) => eprintln!("Error reading row {line}: {e}"),
                }
            }
            writer.flush().into_diagnostic()?;
        }
        Command::Form => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            console::run_form(stdin.lock(), stdout.lock()).into_diagnostic()?;
        }
        Command::Customer { command } => match command {
            CustomerCommand::Add {
                first_name,
                last_name,
                street,
                house_number,
                postal_code,
                city,
                state,
                phone_number,
                email,
            } => {
                let customer = Customer {
                    id: 0,
                    first_name,
                    last_name,
                    street,
                    house_number,
                    postal_code,
                    city,
                    state,
                    phone_number,
                    email,
                };
                let stored = engine.create_customer(customer).await.into_diagnostic()?;
                println!(
                    "{}",
                    serde_json::to_string_pretty(&stored).into_diagnostic()?
                );
            }
            CustomerCommand::Show { id } => {
                let detail = engine.customer_detail(id).await.into_diagnostic()?;
                println!(
                    "{}",
                    serde_json::to_string_pretty(&detail).into_diagnostic()?
                );
            }
        },
        Command::Offer { command } => match command {
            OfferCommand::Add {
                customer_id,
                amount,
                rate,
                term,
            } => {
                let Some(amount) = cli.lang.parse_decimal(&amount) else {
                    miette::bail!("invalid amount for language '{}'", cli.lang);
                };
                let Some(rate) = cli.lang.parse_decimal(&rate) else {
                    miette::bail!("invalid interest rate for language '{}'", cli.lang);
                };
                let offer = LoanOffer {
                    id: 0,
                    customer_id,
                    amount,
                    interest_rate: rate,
                    term_in_months: term,
                };
                let created = engine.create_offer(offer).await.into_diagnostic()?;
                println!(
                    "{}",
                    serde_json::to_string_pretty(&created).into_diagnostic()?
                );
            }
        },
    }

    Ok(())
}
