//! Rendered progress items
//!
//! A progress item renders as its name followed by the whole seconds elapsed
//! since it was created, e.g. `compile [3s]`. Ending an item emits an `end`
//! event with its final rendering.

use super::emitter::{EventEmitter, ListenerId, LogEvent};
use chrono::{DateTime, Local};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

const END_EVENT: &str = "end";

/// Something that can be drawn as a single status line.
pub trait Rendered {
    fn render(&self) -> String;

    /// Whether the line should be cleared once the item ends.
    fn clears(&self) -> bool {
        true
    }
}

type RenderFn = Box<dyn Fn(&Progress) -> String + Send + Sync>;

pub struct Progress {
    name: String,
    created_at: DateTime<Local>,
    started: Instant,
    clear: bool,
    render_fn: Option<RenderFn>,
    ended: AtomicBool,
    events: EventEmitter,
}

impl Progress {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_at: Local::now(),
            started: Instant::now(),
            clear: true,
            render_fn: None,
            ended: AtomicBool::new(false),
            events: EventEmitter::new(),
        }
    }

    /// Keep the line on screen after the item ends.
    #[must_use]
    pub fn keep_line(mut self) -> Self {
        self.clear = false;
        self
    }

    /// Replace the default `name [Ns]` rendering.
    #[must_use]
    pub fn with_render<F>(mut self, render: F) -> Self
    where
        F: Fn(&Progress) -> String + Send + Sync + 'static,
    {
        self.render_fn = Some(Box::new(render));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Elapsed time rounded to whole seconds.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs_f64().round() as u64
    }

    /// Called with the final rendering when the item ends.
    pub fn on_end<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&LogEvent<'_>) + Send + Sync + 'static,
    {
        self.events.once(END_EVENT, listener)
    }

    /// End the item. Only the first call emits.
    pub fn end(&self) -> bool {
        if self.ended.swap(true, Ordering::AcqRel) {
            return false;
        }
        let rendered = self.render();
        self.events.emit(END_EVENT, &rendered);
        true
    }

    pub fn is_ended(&self) -> bool {
        self.ended.load(Ordering::Acquire)
    }
}

impl Rendered for Progress {
    fn render(&self) -> String {
        match &self.render_fn {
            Some(render) => render(self),
            None => format!("{} [{}s]", self.name, self.elapsed_secs()),
        }
    }

    fn clears(&self) -> bool {
        self.clear
    }
}

impl fmt::Debug for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Progress")
            .field("name", &self.name)
            .field("created_at", &self.created_at)
            .field("clear", &self.clear)
            .field("ended", &self.is_ended())
            .finish()
    }
}
