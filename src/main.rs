use clap::{Args, Parser, Subcommand};
use epcqr::domain::encoder::encode;
use epcqr::domain::payment::PaymentInput;
use epcqr::domain::validator::{ValidationOptions, Validator};
use epcqr::interfaces::csv::payment_reader::PaymentReader;
use epcqr::interfaces::json::report_writer::{ReportWriter, RowReport};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Also verify IBAN country length and mod-97 check digits
    #[arg(long, global = true)]
    strict_iban: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate one payment and print its payload
    Encode(EncodeArgs),
    /// Validate and encode every row of a CSV file, one JSON report per line
    Batch {
        /// CSV file with a `name,iban,amount[,reference][,bic]` header
        input: PathBuf,
    },
}

#[derive(Args)]
struct EncodeArgs {
    /// Beneficiary name
    #[arg(long, allow_hyphen_values = true)]
    name: String,

    /// Beneficiary IBAN, spaces allowed
    #[arg(long)]
    iban: String,

    /// Amount in euros, `.` or `,` as decimal separator
    #[arg(long, allow_hyphen_values = true)]
    amount: String,

    /// Unstructured remittance reference
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    reference: String,

    /// Beneficiary bank BIC
    #[arg(long, default_value = "")]
    bic: String,

    /// Print a JSON object instead of the bare payload
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let options = if cli.strict_iban {
        ValidationOptions::strict()
    } else {
        ValidationOptions::default()
    };
    let validator = Validator::new(options);

    match cli.command {
        Command::Encode(args) => run_encode(&validator, args),
        Command::Batch { input } => run_batch(&validator, input),
    }
}

fn run_encode(validator: &Validator, args: EncodeArgs) -> Result<()> {
    let input =
        PaymentInput::new(args.name, args.iban, args.amount, args.reference).with_bic(args.bic);

    let request = match validator.validate_input(&input) {
        Ok(request) => request,
        Err(errors) => {
            for (field, error) in errors.iter() {
                eprintln!("{field}: {error}");
            }
            miette::bail!("{} invalid field(s)", errors.len());
        }
    };
    let payload = encode(&request);

    if args.json {
        let report = serde_json::json!({
            "name": request.name(),
            "iban": request.iban(),
            "iban_print": request.iban().grouped(),
            "amount": request.amount(),
            "currency": request.amount().currency(),
            "reference": request.reference(),
            "bic": request.bic(),
            "payload": payload,
        });
        println!("{report}");
    } else {
        println!("{payload}");
    }
    Ok(())
}

fn run_batch(validator: &Validator, path: PathBuf) -> Result<()> {
    let file = File::open(&path).into_diagnostic()?;
    let reader = PaymentReader::new(file);

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());
    let (mut encoded, mut rejected) = (0usize, 0usize);

    for (index, result) in reader.payments().enumerate() {
        let row = index + 1;
        let input = match result {
            Ok(input) => input,
            Err(e) => {
                tracing::warn!(row, error = %e, "Error reading payment");
                continue;
            }
        };

        match validator.validate_input(&input) {
            Ok(request) => {
                let payload = encode(&request);
                writer
                    .write_row(&RowReport::encoded(row, &request, &payload))
                    .into_diagnostic()?;
                encoded += 1;
            }
            Err(errors) => {
                tracing::warn!(row, %errors, "Rejected payment");
                writer
                    .write_row(&RowReport::invalid(row, &errors))
                    .into_diagnostic()?;
                rejected += 1;
            }
        }
    }

    writer.flush().into_diagnostic()?;
    tracing::info!(encoded, rejected, path = %path.display(), "batch finished");
    Ok(())
}
