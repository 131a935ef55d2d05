//! # Teahouse Counter
//!
//! Operator console for Teahouse POS: one product name per line in, the
//! order total out.
//!
//! ## Module Organization
//! ```text
//! teahouse_counter/
//! ├── lib.rs          ◄─── You are here (startup & session loop)
//! ├── config.rs       ◄─── Environment configuration
//! └── main.rs         ◄─── Binary entry point
//! ```
//!
//! ## Session
//! ```text
//! stdin "紅茶\n奶茶\n" ──► resolve ──► Order ──► stdout "總價: 60"
//!                                                (logs go to stderr)
//! ```
//! Input ends at EOF or at the first blank line.

pub mod config;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::{CounterConfig, OutputFormat};
use teahouse_core::{Money, Order, OrderSummary, ProductRegistry};

/// Runs the counter against the process stdin/stdout.
///
/// ## Startup Sequence
/// 1. Load configuration from the environment
/// 2. Initialize tracing (stderr)
/// 3. Build the product registry (fails fast on catalog errors)
/// 4. Run one order session
pub fn run() -> anyhow::Result<()> {
    let config = CounterConfig::load().context("failed to load configuration")?;

    init_tracing(&config);

    info!("Starting Teahouse counter");

    let registry = ProductRegistry::standard().context("failed to build product registry")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let total = run_session(&registry, &config, stdin.lock(), stdout.lock())?;

    info!(total = %total, "Order completed");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG` wins when set
/// - otherwise `TEAHOUSE_LOG`, defaulting to `warn,teahouse=info`
fn init_tracing(config: &CounterConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Reads product names from `input` into a new order and writes the result.
///
/// Every line is resolved, so unknown names are added as null products and
/// contribute nothing. Returns the order total.
pub fn run_session<R, W>(
    registry: &ProductRegistry,
    config: &CounterConfig,
    input: R,
    mut output: W,
) -> anyhow::Result<Money>
where
    R: BufRead,
    W: Write,
{
    let mut order = Order::new();

    for line in input.lines() {
        let line = line.context("failed to read operator input")?;
        let name = line.trim_end_matches(['\r', '\n']);
        if name.is_empty() {
            break;
        }

        let product = registry.resolve(name);
        debug!(input = name, product = %product, "Adding product");
        order.add_product(product);
    }

    let total = order.total_price()?;

    match config.output {
        OutputFormat::Text => writeln!(output, "{}: {}", config.total_label, total)?,
        OutputFormat::Json => {
            let summary = OrderSummary::try_from(&order)?;
            serde_json::to_writer(&mut output, &summary)?;
            writeln!(output)?;
        }
    }
    output.flush()?;

    Ok(total)
}
