use clap::Parser;
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use teller::application::terminal::Terminal;
use teller::domain::card::Card;
use teller::domain::request::Request;
use teller::interfaces::csv::session_reader::{OperationKind, SessionReader, SessionRecord};
use teller::interfaces::csv::statement_writer::StatementWriter;
use teller::interfaces::json::load_profiles;

use miette::{IntoDiagnostic, Result};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Recorded session CSV file
    session: PathBuf,

    /// Cardholder profiles JSON file (optional). Seeds the directory.
    #[arg(long)]
    profiles: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut terminal = Terminal::new();
    let mut cards: HashMap<String, Card> = HashMap::new();

    if let Some(path) = cli.profiles {
        let file = File::open(path).into_diagnostic()?;
        for profile in load_profiles(file).into_diagnostic()? {
            cards.insert(profile.id_number.clone(), profile.card());
            terminal
                .directory
                .open_account(profile.person(), profile.account());
        }
    }

    // Replay the session
    let file = File::open(cli.session).into_diagnostic()?;
    let reader = SessionReader::new(file);
    for record in reader.operations() {
        match record {
            Ok(record) => {
                if let Err(e) = run_operation(&mut terminal, &mut cards, record) {
                    eprintln!("Error processing operation: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading operation: {}", e);
            }
        }
    }

    // Output final state
    let stdout = io::stdout();
    let mut writer = StatementWriter::new(stdout.lock());
    writer
        .write_accounts(terminal.directory.accounts())
        .into_diagnostic()?;

    Ok(())
}

fn run_operation(
    terminal: &mut Terminal,
    cards: &mut HashMap<String, Card>,
    record: SessionRecord,
) -> teller::error::Result<()> {
    // Cards the profiles never issued get an empty PIN, so logins against
    // them fail and directory lookups report the unknown id.
    let card = cards
        .entry(record.card.clone())
        .or_insert_with(|| Card::new(record.card.clone(), ""))
        .clone();
    let pin = record.pin.unwrap_or_default();
    let amount = record.amount.unwrap_or_default();

    match record.op {
        OperationKind::Identify => {
            println!("{}", terminal.identify(&Request::new(card))?);
        }
        OperationKind::Login => {
            let mut request = Request::with_pin(card, pin);
            let outcome = terminal.login(&mut request)?;
            println!("{}", outcome);
            // Keep the card: a successful login marks it for later requests.
            cards.insert(record.card, request.card);
        }
        OperationKind::Attempts => {
            println!("{}", terminal.report_attempts(&Request::new(card))?);
        }
        OperationKind::Status => {
            println!("{}", terminal.card_status(&Request::new(card))?);
        }
        OperationKind::Balance => {
            println!("Balance: {}", terminal.balance(&Request::new(card))?);
        }
        OperationKind::Deposit => {
            terminal.deposit(&Request::with_deposit(card, amount), amount)?;
            println!("Amount deposited: {}", amount);
        }
        OperationKind::Withdraw => {
            let request = Request::with_withdrawal(card, pin, amount);
            println!("{}", terminal.withdraw(&request)?);
        }
        OperationKind::Bank => {
            println!("{}", terminal.bank_name(&Request::new(card))?);
        }
    }

    Ok(())
}
