/* src/cli/core/src/logging.rs */

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// `RUST_LOG` wins when set; otherwise reborn crates log at info, or debug
/// with `-v`.
pub fn init(verbose: bool) {
  let default = if verbose { "reborn=debug,info" } else { "reborn=info,warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
  tracing_subscriber::registry()
    .with(filter)
    .with(tracing_subscriber::fmt::layer().with_target(false).compact())
    .init();
}
