use leptos::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// User-visible notification queue shared by the pages and the toast host.
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: RwSignal<Vec<Toast>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|toast| toast.id != id));
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    fn push(&self, kind: ToastKind, message: String) {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            message,
        };
        self.toasts.update(|list| list.push(toast));
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifier() -> Notifier {
    match use_context::<Notifier>() {
        Some(notifier) => notifier,
        None => {
            let notifier = Notifier::new();
            provide_context(notifier);
            notifier
        }
    }
}
