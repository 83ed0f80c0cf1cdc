//! Confirmation dialogs and toast notifications.
//!
//! [`AlertHost`] owns the state and renders the overlay; anything below it grabs an [`Alerts`]
//! handle with [`use_alerts`]:
//!
//! ```rust, ignore
//! let mut alerts = use_alerts();
//!
//! let on_delete = move |_| async move {
//!     if alerts.confirm_delete().await {
//!         alerts.show_success("Deleted!");
//!     }
//! };
//! ```

use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use futures_channel::oneshot;

/// How long a success toast stays on screen.
pub const SUCCESS_TOAST_DURATION: Duration = Duration::from_millis(1500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfirmDialog {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ConfirmDialog {
    pub fn delete() -> Self {
        Self {
            title: "Are you sure?".to_string(),
            text: "You won't be able to revert this!".to_string(),
            confirm_label: "Yes, delete".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }
}

struct PendingConfirm {
    dialog: ConfirmDialog,
    reply: oneshot::Sender<bool>,
}

/// Handle to the nearest [`AlertHost`].
#[derive(Clone, Copy)]
pub struct Alerts {
    toast: Signal<Option<Toast>>,
    pending: Signal<Option<PendingConfirm>>,
    next_id: Signal<u64>,
}

impl Alerts {
    fn new() -> Self {
        Self {
            toast: Signal::new(None),
            pending: Signal::new(None),
            next_id: Signal::new(0),
        }
    }

    /// Ask the user to confirm a deletion.
    pub async fn confirm_delete(&mut self) -> bool {
        self.confirm(ConfirmDialog::delete()).await
    }

    /// Show `dialog` and wait for the user's answer.
    ///
    /// Opening a new dialog while another one is pending cancels the older one, which then
    /// resolves to `false`.
    pub async fn confirm(&mut self, dialog: ConfirmDialog) -> bool {
        let (reply, answer) = oneshot::channel();
        self.pending.set(Some(PendingConfirm { dialog, reply }));
        answer.await.unwrap_or(false)
    }

    /// Resolve the pending dialog, if there is one.
    pub fn answer(&mut self, confirmed: bool) {
        if let Some(pending) = self.pending.write().take() {
            _ = pending.reply.send(confirmed);
        }
    }

    /// A success toast that dismisses itself after [`SUCCESS_TOAST_DURATION`].
    pub fn show_success(&mut self, text: impl Into<String>) {
        let id = self.push(ToastKind::Success, "Success!", text.into());

        let mut alerts = *self;
        _ = spawn_forever(async move {
            sleep(SUCCESS_TOAST_DURATION).await;
            alerts.dismiss(id);
        });
    }

    /// An error toast that stays until the user closes it.
    pub fn show_error(&mut self, text: impl Into<String>) {
        self.push(ToastKind::Error, "Oops...", text.into());
    }

    /// Close the toast with the given id. Toasts that were already replaced are left alone.
    pub fn dismiss(&mut self, id: u64) {
        let current = self.toast.peek().as_ref().map(|toast| toast.id);
        if current == Some(id) {
            self.toast.set(None);
        }
    }

    pub fn toast(&self) -> Option<Toast> {
        self.toast.cloned()
    }

    pub fn dialog(&self) -> Option<ConfirmDialog> {
        self.pending.read().as_ref().map(|pending| pending.dialog.clone())
    }

    fn push(&mut self, kind: ToastKind, title: &str, text: String) -> u64 {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.toast.set(Some(Toast {
            id,
            kind,
            title: title.to_string(),
            text,
        }));
        id
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// The [`Alerts`] handle provided by the closest [`AlertHost`] above this component.
pub fn use_alerts() -> Alerts {
    use_context::<Alerts>()
}

/// Provides [`Alerts`] to its children and renders the current dialog and toast on top of them.
#[component]
pub fn AlertHost(children: Element) -> Element {
    let mut alerts = use_context_provider(Alerts::new);

    rsx! {
        {children}
        if let Some(dialog) = alerts.dialog() {
            ConfirmView { dialog, on_answer: move |confirmed: bool| alerts.answer(confirmed) }
        }
        if let Some(toast) = alerts.toast() {
            ToastView { toast, on_dismiss: move |id: u64| alerts.dismiss(id) }
        }
    }
}

#[component]
pub fn ConfirmView(dialog: ConfirmDialog, on_answer: EventHandler<bool>) -> Element {
    rsx! {
        div { class: "alert-backdrop",
            div { class: "alert-dialog", role: "alertdialog",
                div { class: "alert-icon warning", "!" }
                h2 { "{dialog.title}" }
                p { "{dialog.text}" }
                div { class: "alert-actions",
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_answer.call(true),
                        "{dialog.confirm_label}"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_answer.call(false),
                        "{dialog.cancel_label}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn ToastView(toast: Toast, on_dismiss: EventHandler<u64>) -> Element {
    let id = toast.id;
    let class = match toast.kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Error => "toast toast-error",
    };

    rsx! {
        div { class, role: "status",
            strong { "{toast.title}" }
            p { "{toast.text}" }
            if toast.kind == ToastKind::Error {
                button { class: "btn btn-sm", onclick: move |_| on_dismiss.call(id), "OK" }
            }
        }
    }
}
