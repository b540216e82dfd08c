use std::fmt::{self, Write};

use gloo_console::{debug, error, info, warn};
use tracing::{
    field::{Field, Visit},
    Event, Level, Metadata, Subscriber,
};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    util::SubscriberInitExt,
    Layer,
};

/// Forwards `tracing` events from the library to the browser console.
pub struct ConsoleLayer {
    max_level: Level,
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        *metadata.level() <= self.max_level
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut line = EventLine::default();
        event.record(&mut line);

        let metadata = event.metadata();
        let text = format!("[{}] {}{}", metadata.target(), line.message, line.fields);
        match *metadata.level() {
            Level::ERROR => error!(text),
            Level::WARN => warn!(text),
            Level::INFO => info!(text),
            _ => debug!(text),
        }
    }
}

#[derive(Default)]
struct EventLine {
    message: String,
    fields: String,
}

impl Visit for EventLine {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

pub fn init(max_level: Level) {
    let installed = tracing_subscriber::registry()
        .with(ConsoleLayer { max_level })
        .try_init();
    if installed.is_err() {
        warn!("A tracing subscriber was already installed");
    }
}
