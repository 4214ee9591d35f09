use std::io::Write;

use crate::error::AppResult;

pub fn write_line<W: Write>(writer: &mut W, line: &str) -> AppResult<()> {
    writeln!(writer, "{line}")?;
    writer.flush()?;
    Ok(())
}
