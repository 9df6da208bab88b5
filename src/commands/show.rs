//! Implementation of the `themecfg show` command.

use crate::cli::ShowArgs;
use crate::config::Config;
use crate::error::Result;

/// Execute the `themecfg show` command.
///
/// Prints the config as loaded: defaults filled in, maps in key order.
pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let config = Config::load(&args.source.config)?;
    print!("{}", config.to_format(args.format.into())?);
    Ok(())
}
