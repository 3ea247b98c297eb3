//! fleetc - provider registry compiler.

use anyhow::Result;

fn main() -> Result<()> {
    fleet_cli::run()
}
