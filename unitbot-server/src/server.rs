//! Line-delimited JSON message loop
//!
//! One `Message` per input line, one `Reply` per output line. Lines that
//! do not decode are logged and skipped; the loop ends at EOF.

use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{debug, info, warn};
use unitbot_core::{Message, Reply};
use unitbot_plugin::{HandlerRegistry, ReplySink, SinkError};

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),
}

/// Counters reported when the loop ends
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ServeStats {
    pub received: usize,
    pub skipped: usize,
    pub replies: usize,
}

/// Writes each reply as one JSON line and flushes immediately
pub struct JsonLineSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLineSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReplySink for JsonLineSink<W> {
    fn send(&mut self, reply: &Reply) -> Result<(), SinkError> {
        let json = reply.to_json()?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Read messages from `reader` until EOF, replying through `sink`
pub fn serve<R: BufRead>(
    registry: &HandlerRegistry,
    reader: R,
    sink: &mut dyn ReplySink,
) -> Result<ServeStats, ServerError> {
    let mut stats = ServeStats::default();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        stats.received += 1;
        debug!(bytes = line.len(), "received line");

        let message = match Message::from_json(line) {
            Ok(m) => m,
            Err(e) => {
                warn!(error = %e, "skipping undecodable line");
                stats.skipped += 1;
                continue;
            }
        };

        stats.replies += registry.dispatch(&message, sink);
    }

    info!(
        received = stats.received,
        skipped = stats.skipped,
        replies = stats.replies,
        "input closed"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use unitbot_plugin::MemorySink;

    fn registry() -> HandlerRegistry {
        unitbot_units::load_converter(HandlerRegistry::new())
    }

    #[test]
    fn test_serve_replies_per_triaged_message() {
        let input = concat!(
            r#"{"content":"@convert 100 c f","display_recipient":"general","subject":"units"}"#, "\n",
            "\n",
            r#"{"content":"hello there","display_recipient":"general","subject":"chat"}"#, "\n",
            r#"{"content":"@convert","display_recipient":"random","subject":"misc"}"#, "\n",
        );
        let mut sink = MemorySink::new();
        let stats = serve(&registry(), Cursor::new(input), &mut sink).unwrap();

        assert_eq!(stats, ServeStats { received: 3, skipped: 0, replies: 2 });
        assert_eq!(sink.replies[0].content, "100.0 c = 212.0 f\n");
        assert_eq!(sink.replies[1].to, "random");
        assert!(sink.replies[1].content.starts_with("Too few arguments given."));
    }

    #[test]
    fn test_serve_skips_bad_lines() {
        let input = concat!(
            "not json\n",
            r#"{"content":"@convert 1 kilobyte bit"}"#, "\n",
            r#"{"content":"@convert 1 mile km","display_recipient":"general","subject":"units"}"#, "\n",
        );
        let mut sink = MemorySink::new();
        let stats = serve(&registry(), Cursor::new(input), &mut sink).unwrap();

        assert_eq!(stats.skipped, 2);
        assert_eq!(sink.replies.len(), 1);
        assert_eq!(sink.replies[0].content, "1.0 mile = 1.609344 km\n");
    }

    #[test]
    fn test_json_line_sink_output() {
        let input = r#"{"content":"@convert 0 celsius fahrenheit","display_recipient":"general","subject":"units"}"#;
        let mut written = Vec::new();
        let mut sink = JsonLineSink::new(&mut written);
        serve(&registry(), Cursor::new(input), &mut sink).unwrap();

        let output = String::from_utf8(written).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 1);

        let reply: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(reply["type"], "stream");
        assert_eq!(reply["to"], "general");
        assert_eq!(reply["subject"], "units");
        assert_eq!(reply["content"], "0.0 celsius = 32.0 fahrenheit\n");
    }
}
