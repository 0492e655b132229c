use anyhow::Result;
use flexi_logger::Logger;

/// Route `log` records to stderr. `RUST_LOG` wins over the default level.
pub fn init(verbose: bool) -> Result<()> {
    let default_spec = if verbose { "debug" } else { "warn" };
    Logger::try_with_env_or_str(default_spec)?
        .format(flexi_logger::colored_default_format)
        .log_to_stderr()
        .start()?;

    Ok(())
}
