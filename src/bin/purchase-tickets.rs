// Copyright (c) 2025 - Cowboy AI, Inc.
//! Ticket Purchase CLI
//!
//! Runs one purchase against the logging payment and seat reservation
//! adapters and prints the resulting order as JSON.
//!
//! Run with either `TYPE=COUNT` arguments or a JSON array of requests:
//!
//! ```text
//! cargo run --bin purchase-tickets -- 42 ADULT=2 CHILD=1
//! cargo run --bin purchase-tickets -- 42 '[{"ticket_type":"ADULT","count":2},{"ticket_type":"CHILD","count":1}]'
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default: info).

use anyhow::{bail, Context, Result};
use ticket_service::adapters::{LoggingPaymentService, LoggingSeatReservationService};
use ticket_service::{TicketService, TicketServiceImpl, TicketTypeRequest};
use tracing::info;

/// Command-line inputs for a single purchase
#[derive(Debug)]
struct PurchaseArgs {
    account_id: i64,
    requests: Vec<TicketTypeRequest>,
}

impl PurchaseArgs {
    /// Parse `<account-id> <requests>...` from the process arguments
    fn from_args() -> Result<Self> {
        Self::parse(std::env::args().skip(1))
    }

    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let Some(account_id) = args.next() else {
            bail!("usage: purchase-tickets <account-id> TYPE=COUNT... | '<json ticket requests>'");
        };

        let account_id = account_id
            .parse()
            .with_context(|| format!("Account id must be an integer, got {account_id:?}"))?;

        let requests = parse_requests(args.collect())?;

        Ok(Self {
            account_id,
            requests,
        })
    }
}

/// A single argument starting with `[` is a JSON array, anything else is a
/// list of `TYPE=COUNT` pairs
fn parse_requests(args: Vec<String>) -> Result<Vec<TicketTypeRequest>> {
    match args.as_slice() {
        [json] if json.trim_start().starts_with('[') => {
            serde_json::from_str(json).context("Failed to parse ticket requests")
        }
        pairs => pairs
            .iter()
            .map(|pair| {
                pair.parse::<TicketTypeRequest>()
                    .with_context(|| format!("Invalid ticket request {pair:?}"))
            })
            .collect(),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = PurchaseArgs::from_args()?;
    info!(
        account_id = args.account_id,
        lines = args.requests.len(),
        "Starting ticket purchase"
    );

    let service = TicketServiceImpl::new(
        LoggingPaymentService::new(),
        LoggingSeatReservationService::new(),
    );

    let order = service
        .purchase_tickets(args.account_id, &args.requests)
        .context("Purchase rejected")?;

    println!("{}", serde_json::to_string_pretty(&order)?);
    Ok(())
}
