//! credidesk CLI entry point.

use clap::Parser;
use credidesk_client::cli::{Cli, Commands, OutputFormat};
use credidesk_client::client::quotes::{CreateQuoteRequest, ListQuotesQuery};
use credidesk_client::output::{format_output, pretty};
use credidesk_client::{ClientConfig, CredideskClient};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "credidesk_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    config.base_url = cli.base_url;
    config.api_prefix = cli.api_prefix;
    let client = CredideskClient::new(config);

    match cli.command {
        Commands::Auth(auth_cmd) => {
            use credidesk_client::cli::auth::AuthAction;
            match auth_cmd.action {
                AuthAction::Login { email, password } => {
                    let password = match password {
                        Some(password) => password,
                        None => dialoguer::Password::new()
                            .with_prompt("Password")
                            .interact()?,
                    };
                    client.login(&email, &password).await?;
                    if !cli.quiet {
                        println!("Logged in as {}", email);
                    }
                }
                AuthAction::Logout => {
                    client.logout()?;
                    if !cli.quiet {
                        println!("Logged out.");
                    }
                }
                AuthAction::Status => match client.auth_token() {
                    Some(_) => println!("Logged in."),
                    None => println!("Not logged in."),
                },
            }
        }
        Commands::Quotes(quotes_cmd) => {
            use credidesk_client::cli::quotes::QuotesAction;
            match quotes_cmd.action {
                QuotesAction::List {
                    status,
                    client: client_name,
                    from,
                    to,
                } => {
                    let quotes = client
                        .list_quotes(ListQuotesQuery {
                            status,
                            client: client_name,
                            from,
                            to,
                        })
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&quotes, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_quotes(&quotes)),
                    }
                }
                QuotesAction::Get { number } => {
                    let quote = client.get_quote(&number).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&quote, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_quote(&quote)),
                    }
                }
                QuotesAction::Create {
                    client: client_name,
                    amount,
                    interest,
                    installments,
                    modality,
                    date,
                } => {
                    let quote = client
                        .create_quote(&CreateQuoteRequest {
                            client: client_name,
                            amount,
                            interest_rate: credidesk_core::numeric::normalize_rate(interest),
                            installments,
                            modality,
                            date,
                        })
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&quote, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_quote(&quote))
                        }
                    }
                }
            }
        }
        Commands::Receipts(receipts_cmd) => {
            use credidesk_client::cli::receipts::ReceiptsAction;
            let receipt = match receipts_cmd.action {
                ReceiptsAction::Get { id } => client.get_receipt(&id).await?,
                ReceiptsAction::ForPayment { payment_id } => {
                    client.receipt_for_payment(&payment_id).await?
                }
                ReceiptsAction::ForCredit { credit_id } => {
                    client.receipt_for_credit(&credit_id).await?
                }
                ReceiptsAction::ForInstallment { installment_id } => {
                    client.receipt_for_installment(&installment_id).await?
                }
            };
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&receipt, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_receipt(&receipt)),
            }
        }
        Commands::PaymentMethods(payment_methods_cmd) => {
            use credidesk_client::cli::payment_methods::PaymentMethodsAction;
            match payment_methods_cmd.action {
                PaymentMethodsAction::List => {
                    let methods = client.list_payment_methods().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&methods, cli.format)),
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_payment_methods(&methods))
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
