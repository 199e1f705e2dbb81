//! Toast Notifications
//!
//! Transient success/error messages provided via context, auto-dismissed
//! after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Notification signals provided via context
#[derive(Clone, Copy)]
pub struct NotifyContext {
    pub toast: ReadSignal<Option<Toast>>,
    set_toast: WriteSignal<Option<Toast>>,
}

impl NotifyContext {
    pub fn new() -> Self {
        let (toast, set_toast) = signal(None);
        Self { toast, set_toast }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    fn show(&self, kind: ToastKind, message: String) {
        let toast = Toast { kind, message };
        self.set_toast.set(Some(toast.clone()));

        // Dismiss after the timeout unless a newer toast replaced this one.
        let current = self.toast;
        let set_toast = self.set_toast;
        spawn_local(async move {
            TimeoutFuture::new(config::TOAST_DURATION_MS).await;
            if current.get_untracked().as_ref() == Some(&toast) {
                set_toast.set(None);
            }
        });
    }
}

impl Default for NotifyContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the notification context; panics outside the provider scope.
pub fn use_notify() -> NotifyContext {
    expect_context::<NotifyContext>()
}
