pub mod text;

use std::io::Write;

use crate::api::MappingRecord;
use crate::error::AppResult;

/// Line-at-a-time sink for mapping records. Every record is flushed as soon
/// as it is written, so an aborted run keeps everything emitted before it.
#[derive(Debug)]
pub struct Output<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> Output<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    pub fn emit(&mut self, record: &MappingRecord) -> AppResult<()> {
        text::write_line(&mut self.writer, &record.to_string())?;
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
