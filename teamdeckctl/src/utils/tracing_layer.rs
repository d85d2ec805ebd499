use crate::utils::ui::Ui;
use chrono::Local;
use owo_colors::OwoColorize;
use std::sync::Arc;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// A custom tracing layer that routes log messages through the UI component
pub struct UiLayer {
    ui: Arc<Ui>,
}

impl UiLayer {
    pub fn new(ui: Arc<Ui>) -> Self {
        UiLayer { ui }
    }
}

fn colorize_level(level: &Level) -> String {
    match *level {
        Level::ERROR => level.to_string().bright_red().to_string(),
        Level::WARN => level.to_string().yellow().to_string(),
        Level::INFO => level.to_string().green().to_string(),
        Level::DEBUG => level.to_string().bright_blue().to_string(),
        Level::TRACE => level.to_string().dimmed().to_string(),
    }
}

impl<S> Layer<S> for UiLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut message = String::new();
        let mut visitor = MessageVisitor(&mut message);
        event.record(&mut visitor);

        let level = event.metadata().level();
        let target = event.metadata().target();
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");

        let formatted_msg = format!(
            "{} {} [{}] {}",
            timestamp.to_string().dimmed(),
            colorize_level(level),
            target.cyan(),
            message
        );

        // Log lines never go to stdout, it carries command results
        self.ui.eprintln(&formatted_msg);
    }
}

/// Visitor to extract the message from the event
struct MessageVisitor<'a>(&'a mut String);

impl tracing::field::Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let debug_str = format!("{value:?}");
            // Remove quotes if the debug output is a simple string with quotes
            if debug_str.starts_with('"') && debug_str.ends_with('"') && debug_str.len() > 2 {
                self.0.push_str(&debug_str[1..debug_str.len() - 1]);
            } else {
                self.0.push_str(&debug_str);
            }
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.0.push_str(value);
        }
    }
}
