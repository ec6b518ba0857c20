use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use paylog::application::engine::PaymentEngine;
use paylog::application::logger::TransactionLogger;
use paylog::domain::payment::{Amount, PaymentMethod};
use paylog::domain::record::iso_timestamp;
use paylog::domain::strategy::StrategyRegistry;
use paylog::infrastructure::clock::SystemClock;
use paylog::infrastructure::json_file::{DEFAULT_LOG_PATH, JsonFileStore};
use paylog::interfaces::csv::payment_reader::PaymentReader;
use paylog::interfaces::form::PaymentForm;
use std::fs::File;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file the transaction log is kept in
    #[arg(long, global = true, default_value = DEFAULT_LOG_PATH)]
    log_path: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pay an amount with one of the supported methods
    Pay {
        #[arg(long)]
        amount: String,

        #[arg(long)]
        method: Option<String>,

        /// Card number, PayPal email, wallet address, device id or IBAN.
        /// Prompted for on stdin when omitted.
        #[arg(long)]
        reference: Option<String>,
    },
    /// Process every payment in a CSV file (header: amount,method,reference)
    Batch { input: PathBuf },
    /// Print the transaction log
    History,
    /// List the supported payment methods
    Methods,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let logger = TransactionLogger::new(
        Box::new(JsonFileStore::new(cli.log_path)),
        Box::new(SystemClock),
    );
    let engine = PaymentEngine::new(StrategyRegistry::with_defaults(), logger);

    match cli.command {
        Command::Pay {
            amount,
            method,
            reference,
        } => {
            let mut form = PaymentForm {
                amount,
                method,
                reference,
            };

            // Only ask for the reference once amount and method check out.
            if form.reference.is_none()
                && form.amount.parse::<Amount>().is_ok()
                && let Some(Ok(method)) = form.method.as_deref().map(str::parse::<PaymentMethod>)
            {
                form.reference = prompt(method).await.into_diagnostic()?;
            }

            let request = form.validate()?;
            let receipt = engine.process_payment(request).await?;
            println!("{}", receipt.confirmation);
            println!("{}", receipt);
        }
        Command::Batch { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = PaymentReader::new(file);
            for form_result in reader.payments() {
                let request = match form_result.and_then(|form| form.validate()) {
                    Ok(request) => request,
                    Err(e) => {
                        eprintln!("Error reading payment: {}", e);
                        continue;
                    }
                };

                match engine.process_payment(request).await {
                    Ok(receipt) => println!("{}", receipt),
                    Err(e) => eprintln!("Error processing payment: {}", e),
                }
            }
        }
        Command::History => {
            for record in engine.history().await? {
                println!(
                    "{},{},{:.2}",
                    record.timestamp.format(iso_timestamp::FORMAT),
                    record.method,
                    record.amount.round_dp(2)
                );
            }
        }
        Command::Methods => {
            for method in PaymentMethod::ALL
                .into_iter()
                .filter(|m| engine.registry().is_registered(*m))
            {
                println!("{:<16}{}", method.display_name(), method.prompt());
            }
        }
    }

    Ok(())
}

/// Asks for the method's identifying string; `None` if stdin is closed.
async fn prompt(method: PaymentMethod) -> std::io::Result<Option<String>> {
    eprintln!("{}", method.prompt());

    let mut line = String::new();
    let read = BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
    Ok((read > 0).then(|| line.trim().to_string()))
}
