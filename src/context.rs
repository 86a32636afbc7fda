//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use proglog_core::DashboardConfig;

/// A short confirmation message
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Startup configuration (read-only)
    pub config: StoredValue<DashboardConfig>,
    /// Currently visible toast
    pub toast: ReadSignal<Option<Toast>>,
    set_toast: WriteSignal<Option<Toast>>,
    next_toast_id: StoredValue<u64>,
}

impl AppContext {
    pub fn new(config: DashboardConfig) -> Self {
        let (toast, set_toast) = signal(None::<Toast>);
        Self {
            config: StoredValue::new(config),
            toast,
            set_toast,
            next_toast_id: StoredValue::new(0),
        }
    }

    /// Show a toast; it clears itself unless replaced by a newer one
    pub fn notify(&self, message: impl Into<String>) {
        let id = self.next_toast_id.with_value(|v| *v + 1);
        self.next_toast_id.set_value(id);
        self.set_toast.set(Some(Toast {
            id,
            message: message.into(),
        }));

        let millis = self.config.with_value(|c| c.toast_millis);
        let set_toast = self.set_toast;
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            set_toast.try_update(|current| {
                if current.as_ref().map(|t| t.id) == Some(id) {
                    *current = None;
                }
            });
        });
    }

    pub fn dismiss_toast(&self) {
        self.set_toast.set(None);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
