//! Colorized console event formatter.
//!
//! Renders every event as a single line,
//! `<timestamp> - <target> - <LEVEL> - <message> (<file>:<line>)`,
//! wrapped in an ANSI color picked by severity.

use std::fmt;

use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

const GREY: &str = "\x1b[38;20m";
const YELLOW: &str = "\x1b[33;20m";
const RED: &str = "\x1b[31;20m";
const RESET: &str = "\x1b[0m";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

pub struct ColorFormatter;

fn level_color(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => GREY,
        Level::DEBUG => YELLOW,
        Level::INFO => GREY,
        Level::WARN => YELLOW,
        Level::ERROR => RED,
    }
}

impl<S, N> FormatEvent<S, N> for ColorFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();

        if ansi {
            write!(writer, "{}", level_color(meta.level()))?;
        }

        write!(
            writer,
            "{} - {} - {} - ",
            Local::now().format(TIMESTAMP_FORMAT),
            meta.target(),
            meta.level()
        )?;
        ctx.format_fields(writer.by_ref(), event)?;

        if let (Some(file), Some(line)) = (meta.file(), meta.line()) {
            write!(writer, " ({}:{})", file, line)?;
        }

        if ansi {
            write!(writer, "{}", RESET)?;
        }
        writeln!(writer)
    }
}
