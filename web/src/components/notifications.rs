use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, MessageBar, MessageBarIntent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationIntent {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub intent: NotificationIntent,
    pub title: String,
    pub description: String,
}

/// Fire-and-forget handle to the notification stack. Provided via context by
/// `NotificationHost`; flows take it as an explicit dependency instead of
/// reaching for a global.
#[derive(Clone, Copy)]
pub struct Notifier {
    entries: RwSignal<Vec<(usize, Notification)>>,
    next_id: RwSignal<usize>,
}

impl Notifier {
    fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn notify(&self, notification: Notification) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.entries.update(|entries| entries.push((id, notification)));
    }

    pub fn success(&self, title: &str, description: &str) {
        self.notify(Notification {
            intent: NotificationIntent::Success,
            title: title.to_string(),
            description: description.to_string(),
        });
    }

    pub fn error(&self, title: &str, description: &str) {
        self.notify(Notification {
            intent: NotificationIntent::Error,
            title: title.to_string(),
            description: description.to_string(),
        });
    }

    fn dismiss(&self, id: usize) {
        self.entries
            .update(|entries| entries.retain(|(entry_id, _)| *entry_id != id));
    }
}

pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

/// Wraps the app, owns the notification state, and renders the floating
/// message-bar stack above the routed content.
#[component]
pub fn NotificationHost(children: Children) -> impl IntoView {
    let notifier = Notifier::new();
    provide_context(notifier);

    view! {
        {children()}
        <div class="notification-stack">
            {move || {
                notifier
                    .entries
                    .get()
                    .into_iter()
                    .map(|(id, notification)| {
                        let intent = match notification.intent {
                            NotificationIntent::Success => MessageBarIntent::Success,
                            NotificationIntent::Error => MessageBarIntent::Error,
                        };

                        view! {
                            <div class="notification">
                                <MessageBar intent=intent>
                                    <strong class="notification-title">{notification.title}</strong>
                                    <span class="notification-description">
                                        {notification.description}
                                    </span>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| notifier.dismiss(id)
                                    >
                                        "×"
                                    </Button>
                                </MessageBar>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
