use std::io;

use tokio::io::BufReader;

use crate::cli::Cli;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::logging;
use crate::output::Output;
use crate::pipeline;

pub async fn run(cli: Cli) -> AppResult<()> {
    logging::init(cli.verbose)?;

    let ctx = AppContext::bootstrap(&cli)?;
    tracing::debug!(
        base_url = %ctx.client.base_url(),
        domain = %ctx.address_domain,
        policy = ?ctx.on_missing_name,
        "starting lookup"
    );

    let input = BufReader::new(tokio::io::stdin());
    let mut output = Output::new(io::stdout());
    let count = pipeline::run(&ctx, input, &mut output).await?;

    tracing::info!(count, "all identifiers processed");
    Ok(())
}
