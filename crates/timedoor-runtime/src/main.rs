//! Timed door binary.
//!
//! # Usage
//!
//! ```bash
//! # Unlock, lock again after one second: passes
//! timedoor --timeout 2 --hold 1
//!
//! # Unlock and leave open: reports a violation and exits non-zero
//! timedoor --timeout 1 --leave-open
//! ```

use clap::Parser;
use timedoor_core::DoorConfig;
use timedoor_runtime::{RuntimeConfig, SystemEnv, run_scenario};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Timed door scenario runner
#[derive(Parser, Debug)]
#[command(name = "timedoor")]
#[command(about = "Unlocks a timed door and reports whether it was left open too long")]
#[command(version)]
struct Args {
    /// Seconds the door may stay open
    #[arg(short, long, default_value = "2")]
    timeout: u64,

    /// Seconds to hold the door open after unlocking
    #[arg(long, default_value = "1")]
    hold: u64,

    /// Leave the door open after the hold period instead of locking it
    #[arg(long)]
    leave_open: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    let config = RuntimeConfig {
        door: DoorConfig { timeout_secs: args.timeout },
        hold_secs: args.hold,
        lock_after_hold: !args.leave_open,
    };

    let env = SystemEnv::current()?;

    if let Err(e) = run_scenario(env, &config).await {
        if e.is_violation() {
            tracing::error!("violation: {}", e);
        }
        return Err(e.into());
    }

    Ok(())
}
