//! Death event source - newline-delimited JSON death notifications
//!
//! Each line is one [`DeathNotification`]. Blank lines are skipped. Lines that
//! fail to parse, or are not valid UTF-8, are logged and skipped so one bad
//! payload never stalls the stream.

use std::io::ErrorKind;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::application::dto::DeathNotification;

pub struct DeathEventSource<R> {
    lines: Lines<R>,
    line_number: u64,
}

impl<R: AsyncBufRead + Unpin> DeathEventSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    /// Next well-formed notification, `None` at end of stream
    pub async fn next(&mut self) -> std::io::Result<Option<DeathNotification>> {
        loop {
            let line = match self.lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => return Ok(None),
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    self.line_number += 1;
                    tracing::warn!(
                        line = self.line_number,
                        "Skipping unreadable death notification: {}",
                        e
                    );
                    continue;
                }
                Err(e) => return Err(e),
            };
            self.line_number += 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match line.parse::<DeathNotification>() {
                Ok(notification) => return Ok(Some(notification)),
                Err(e) => {
                    tracing::warn!(line = self.line_number, "Skipping death notification: {}", e);
                }
            }
        }
    }
}
