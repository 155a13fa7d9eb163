use sqlx::sqlite::SqlitePool;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod db;
mod models;
mod services;
mod utils;

use services::transaction_service::{self, ServiceError};
use utils::extract_clean_error;

const USAGE: &str = "usage: wallet-store <command>

commands:
  record <wallet-id> <debit|credit> <amount>   store a new transaction
  history <wallet-id> [--json] [--page N]      list a wallet's transactions
  show <uuid>                                  show one transaction
  count <wallet-id>                            count a wallet's transactions";

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("wallet_store=debug".parse().unwrap())
                .add_directive("sqlx=warn".parse().unwrap()),
        )
        .with_target(true)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        usage_exit();
    }

    info!("Starting wallet-store...");

    // Initialize database
    let pool = match db::init_db().await {
        Ok(p) => {
            info!("Database initialized successfully");
            p
        }
        Err(e) => {
            error!(
                "Failed to initialize database: {}",
                extract_clean_error(&e.to_string())
            );
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(&pool, &args).await {
        error!("{}", extract_clean_error(&e.to_string()));
        std::process::exit(1);
    }
}

async fn run_command(pool: &SqlitePool, args: &[String]) -> Result<(), ServiceError> {
    match args[0].as_str() {
        "record" => {
            if args.len() != 4 {
                usage_exit();
            }
            let amount: f64 = args[3].parse().unwrap_or_else(|_| usage_exit());
            let tx =
                transaction_service::record_transaction(pool, &args[1], &args[2], amount).await?;
            println!(
                "Recorded {} {:.2} for wallet {} ({})",
                tx.kind, tx.amount, tx.wallet_id, tx.uuid
            );
        }
        "history" => {
            if args.len() < 2 {
                usage_exit();
            }
            let wallet_id = &args[1];
            let mut json = false;
            let mut page: Option<u32> = None;

            let mut flags = args[2..].iter();
            while let Some(flag) = flags.next() {
                match flag.as_str() {
                    "--json" => json = true,
                    "--page" => {
                        page = Some(
                            flags
                                .next()
                                .and_then(|v| v.parse().ok())
                                .unwrap_or_else(|| usage_exit()),
                        );
                    }
                    _ => usage_exit(),
                }
            }

            if json {
                let transactions =
                    transaction_service::get_wallet_transactions(pool, wallet_id).await?;
                println!(
                    "{}",
                    serde_json::to_string_pretty(&transactions)
                        .expect("Failed to serialize transactions")
                );
                return Ok(());
            }

            let history = match page {
                Some(page) => {
                    transaction_service::get_wallet_history_page(pool, wallet_id, page).await?
                }
                None => transaction_service::get_wallet_history(pool, wallet_id).await?,
            };

            if history.is_empty {
                println!("No transactions found");
            } else {
                println!("{}", history.formatted_message);
            }
        }
        "show" => {
            if args.len() != 2 {
                usage_exit();
            }
            let tx = transaction_service::get_transaction_detail(pool, &args[1]).await?;
            println!("Transaction {}", tx.uuid);
            println!("  wallet: {}", tx.wallet_id);
            println!("  kind:   {}", tx.kind);
            println!("  amount: {:.2}", tx.amount);
            println!("  date:   {}", tx.date_created);
        }
        "count" => {
            if args.len() != 2 {
                usage_exit();
            }
            let count = transaction_service::count_wallet_transactions(pool, &args[1]).await?;
            println!("{}", count);
        }
        _ => usage_exit(),
    }

    Ok(())
}

fn usage_exit() -> ! {
    eprintln!("{}", USAGE);
    std::process::exit(2);
}
