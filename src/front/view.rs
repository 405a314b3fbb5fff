// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! User-facing effects of a finished call

use parking_lot::Mutex;
use tracing::info;

/// Surface the frontend reports outcomes to
pub trait View: Send + Sync {
    /// Show an error message, `[<status>] <body>`
    fn show_error(&self, message: &str);

    /// Show a success message
    fn show_success(&self, message: &str);

    /// Go to another page
    fn navigate(&self, location: &str);
}

/// View printing to the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleView;

impl View for ConsoleView {
    fn show_error(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn show_success(&self, message: &str) {
        println!("{}", message);
    }

    fn navigate(&self, location: &str) {
        info!(location, "navigate");
    }
}

/// Effect recorded by [`RecordingView`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Error(String),
    Success(String),
    Navigate(String),
}

/// View keeping every effect in order, for embedding and tests
#[derive(Debug, Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// All effects so far
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().clone()
    }

    /// Locations navigated to
    pub fn navigations(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Navigate(location) => Some(location.clone()),
                _ => None,
            })
            .collect()
    }

    /// Last error shown
    pub fn last_error(&self) -> Option<String> {
        self.events.lock().iter().rev().find_map(|e| match e {
            ViewEvent::Error(message) => Some(message.clone()),
            _ => None,
        })
    }

    fn push(&self, event: ViewEvent) {
        self.events.lock().push(event);
    }
}

impl View for RecordingView {
    fn show_error(&self, message: &str) {
        self.push(ViewEvent::Error(message.to_string()));
    }

    fn show_success(&self, message: &str) {
        self.push(ViewEvent::Success(message.to_string()));
    }

    fn navigate(&self, location: &str) {
        self.push(ViewEvent::Navigate(location.to_string()));
    }
}

impl<V: View + ?Sized> View for std::sync::Arc<V> {
    fn show_error(&self, message: &str) {
        (**self).show_error(message)
    }

    fn show_success(&self, message: &str) {
        (**self).show_success(message)
    }

    fn navigate(&self, location: &str) {
        (**self).navigate(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_order() {
        let view = RecordingView::new();
        view.show_error("[500] boom");
        view.navigate("/");
        view.show_success("ok");

        assert_eq!(
            view.events(),
            vec![
                ViewEvent::Error("[500] boom".into()),
                ViewEvent::Navigate("/".into()),
                ViewEvent::Success("ok".into()),
            ]
        );
        assert_eq!(view.navigations(), vec!["/"]);
        assert_eq!(view.last_error().as_deref(), Some("[500] boom"));
    }
}
