use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Target the `success!` macro logs through; rendered with a check mark
/// instead of the plain info sigil.
const SUCCESS_TARGET: &str = "footprintr::ok";

pub struct FootprintrFormatter;

impl<S, N> FormatEvent<S, N> for FootprintrFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            if meta.target() == SUCCESS_TARGET {
                ("[✓]", |s| s.green().bold())
            } else {
                match *meta.level() {
                    Level::TRACE => ("[ ]", |s| s.dimmed()),
                    Level::DEBUG => ("[?]", |s| s.blue()),
                    Level::INFO => ("[+]", |s| s.green().bold()),
                    Level::WARN => ("[*]", |s| s.yellow().bold()),
                    Level::ERROR => ("[-]", |s| s.red().bold()),
                }
            };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Quiet mode drops everything below warnings except the success target,
/// which carries the summary line and stays enabled at every quiet level.
fn default_directive(quiet: u8) -> &'static str {
    if quiet > 0 {
        "warn,footprintr::ok=info"
    } else {
        "info"
    }
}

/// Installs the subscriber. `FOOTPRINTR_LOG` overrides the level; quiet
/// mode otherwise drops everything below warnings.
pub fn init(quiet: u8) {
    let filter = EnvFilter::try_from_env("FOOTPRINTR_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(FootprintrFormatter)
        .init();
}
