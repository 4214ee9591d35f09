use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::api::{FallbackReason, LookupOutcome, MappingRecord};
use crate::config::MissingNamePolicy;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::output::Output;

/// Input value marking a commit without author metadata.
pub const NO_AUTHOR: &str = "(no author)";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Identifier<'a> {
    NoAuthor,
    Author(&'a str),
}

/// Exact, case-sensitive match on the sentinel; anything else, including the
/// empty string, is an author id.
pub fn classify(identifier: &str) -> Identifier<'_> {
    if identifier == NO_AUTHOR {
        Identifier::NoAuthor
    } else {
        Identifier::Author(identifier)
    }
}

pub fn contact_address(name: &str, identifier: &str, domain: &str) -> String {
    format!("{name} <{identifier}@{domain}>")
}

/// Reads `input` to the end and writes exactly one record per line, in order.
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
/// Returns the number of records written.
pub async fn run<R, W>(ctx: &AppContext, input: R, output: &mut Output<W>) -> AppResult<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.split(b'\n');
    while let Some(raw) = lines.next_segment().await? {
        let line = String::from_utf8_lossy(&raw);
        let record = resolve(ctx, line.trim()).await?;
        output.emit(&record)?;
    }

    Ok(output.written())
}

pub async fn resolve(ctx: &AppContext, identifier: &str) -> AppResult<MappingRecord> {
    let display = match classify(identifier) {
        Identifier::NoAuthor => identifier.to_string(),
        Identifier::Author(author) => {
            let outcome = match ctx.client.lookup(author).await {
                Err(AppError::MissingDisplayName { identifier: missing })
                    if ctx.on_missing_name == MissingNamePolicy::Fallback =>
                {
                    tracing::warn!(identifier = %missing, "profile page has no display name");
                    LookupOutcome::FallbackUsed(FallbackReason::MissingDisplayName)
                }
                result => result?,
            };
            display_for(author, outcome, &ctx.address_domain)
        }
    };

    Ok(MappingRecord {
        identifier: identifier.to_string(),
        display,
    })
}

fn display_for(author: &str, outcome: LookupOutcome, domain: &str) -> String {
    match outcome {
        LookupOutcome::Fetched(name) => contact_address(&name, author, domain),
        LookupOutcome::FallbackUsed(reason) => {
            tracing::info!(identifier = author, %reason, "using fallback name");
            contact_address(author, author, domain)
        }
    }
}
