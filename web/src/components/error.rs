use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

/// Section-scoped fetch-failure bar; the rest of the screen stays usable.
#[component]
pub fn ErrorView(message: &'static str) -> impl IntoView {
    view! {
        <div class="error-container">
            <MessageBar intent=MessageBarIntent::Error>{message}</MessageBar>
        </div>
    }
}
