use bank_ledger::{Amount, Balance, BankReport, Ledger, LedgerResult};

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use anyhow::Context;
use colored::Colorize;
use clap::{error::ErrorKind, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(version, about, propagate_version = true)]
struct Cli {
    /// Script of ledger commands, one per line; reads stdin when omitted
    #[clap(value_parser)]
    script: Option<PathBuf>,
}

/// A single line of input
#[derive(Parser, Debug)]
#[clap(no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[clap(subcommand)]
    action: Subcommands,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// Create a named account, or return the existing one
    CreateAccount(AccountName),
    /// Show an account
    GetAccount(AccountName),
    /// Record an amount against an account
    AddFunds(AddFunds),
    /// Move an amount from one account to another
    MoveFunds(MoveFunds),
    /// Show the balance of one account
    Balance(AccountName),
    /// Show the balance of every account
    Balances,
    /// List all accounts
    Accounts,
    /// List all transactions
    Transactions,
}

#[derive(Args, Debug)]
struct AccountName {
    /// Name of the account
    #[clap(value_parser)]
    name: String
}

#[derive(Args, Debug)]
struct AddFunds {
    #[clap(value_parser)]
    name: String,

    /// Amount in pence, may be negative
    #[clap(value_parser, allow_hyphen_values = true)]
    amount: Amount
}

#[derive(Args, Debug)]
struct MoveFunds {
    /// Name of account paying
    #[clap(value_parser)]
    from: String,

    /// Name of account getting paid
    #[clap(value_parser)]
    to: String,

    /// Amount in pence
    #[clap(value_parser, allow_hyphen_values = true)]
    amount: Amount
}

fn format_balance(name: &str, balance: Balance) -> String {
    let color = if balance < 0 {
        colored::ColoredString::bright_red
    } else if balance > 0 {
        colored::ColoredString::green
    } else {
        colored::ColoredString::normal
    };
    let fmt_balance = color(format!("{}", balance).white());
    format!("{}: {}", name, fmt_balance)
}

fn execute(action: Subcommands, ledger: &mut Ledger) -> LedgerResult<Vec<String>> {
    let output = match action {
        Subcommands::CreateAccount(account) => {
            vec![ledger.create_account(&account.name).to_string()]
        },
        Subcommands::GetAccount(account) => {
            vec![ledger.get_account(&account.name)?.to_string()]
        },
        Subcommands::Balance(account) => {
            let balance = BankReport::new(ledger).get_balance(&account.name)?;
            vec![format_balance(&account.name, balance)]
        },
        Subcommands::AddFunds(add) => {
            ledger.add_funds(&add.name, add.amount)?;
            vec![]
        },
        Subcommands::MoveFunds(mv) => {
            ledger.move_funds(&mv.from, &mv.to, mv.amount)?;
            vec![]
        },
        Subcommands::Balances => {
            BankReport::new(ledger).balances().iter()
                .map(|(account, balance)| format_balance(account.name(), *balance))
                .collect()
        },
        Subcommands::Accounts => {
            ledger.list_accounts().iter().map(|a| a.to_string()).collect()
        },
        Subcommands::Transactions => {
            ledger.list_transactions().iter().map(|t| t.to_string()).collect()
        }
    };
    Ok(output)
}

/// Runs one input line, returning what should be printed.
/// Usage and ledger errors are returned as text so the shell can go on.
fn run_line(line: &str, ledger: &mut Ledger) -> Result<Vec<String>, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() || words[0].starts_with('#') {
        return Ok(vec![]);
    }

    let parsed = match Line::try_parse_from(words) {
        Ok(parsed) => parsed,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => return Ok(vec![err.to_string()]),
        Err(err) => return Err(err.to_string()),
    };
    execute(parsed.action, ledger).map_err(|err| err.to_string())
}

fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .try_init();

    let args = Cli::parse();
    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(File::open(path)
            .with_context(|| format!("failed to open script {}", path.display()))?)),
        None => Box::new(io::stdin().lock()),
    };

    let mut ledger = Ledger::new();
    for line in input.lines() {
        let line = line.with_context(|| "failed to read input")?;
        match run_line(&line, &mut ledger) {
            Ok(output) => output.iter().for_each(|out| println!("{}", out)),
            Err(err) => eprintln!("{}", err.trim_end().red()),
        }
    }
    Ok(())
}
