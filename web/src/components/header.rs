use leptos::prelude::*;
use leptos_router::components::A;

use crate::utils::session::{sign_out, use_session_user};

/// Shared screen header: optional back link, wordmark, the signed-in profile
/// block and the sign-out control. The profile only appears once hydration
/// has read the session.
#[component]
pub fn Header(#[prop(optional)] back_href: Option<&'static str>) -> impl IntoView {
    let user = use_session_user();

    view! {
        <header class="screen-header">
            <div class="screen-header-content">
                {back_href.map(|href| view! {
                    <A href=href attr:class="screen-header-back">
                        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <line x1="19" y1="12" x2="5" y2="12"></line>
                            <polyline points="12 19 5 12 12 5"></polyline>
                        </svg>
                    </A>
                })}

                <A href="/" attr:class="screen-header-logo">"Salonbook"</A>

                {move || user.get().map(|user| view! {
                    <div class="screen-header-profile">
                        <img src=user.avatar_url alt=user.name.clone()/>
                        <div>
                            <span>"Welcome,"</span>
                            <strong>{user.name.clone()}</strong>
                        </div>
                    </div>
                })}

                <button
                    type="button"
                    class="screen-header-signout"
                    on:click=move |_| sign_out()
                >
                    <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <path d="M18.36 6.64a9 9 0 1 1-12.73 0"></path>
                        <line x1="12" y1="2" x2="12" y2="12"></line>
                    </svg>
                </button>
            </div>
        </header>
    }
}
