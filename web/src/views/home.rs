use chrono::Local;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::error::ErrorView;
use crate::components::header::Header;
use crate::components::loading::LoadingView;
use crate::schedule::phone::format_phone;
use crate::server::get_providers;

/// Provider-selection landing page: the list of bookable providers, each
/// linking into the booking dashboard.
#[component]
pub fn HomePage() -> impl IntoView {
    let providers = Resource::new(|| (), |_| async move { get_providers().await });

    view! {
        <div class="home-screen">
            <Header/>
            <main class="home-content">
                <section class="home-schedule">
                    <h1>"Service providers"</h1>
                    <p class="date-line">
                        <span class="date-line-chip">"Today"</span>
                        <span>{Local::now().date_naive().format("%B %-d").to_string()}</span>
                        <span>{Local::now().date_naive().format("%A").to_string()}</span>
                    </p>

                    <Suspense fallback=move || view! {
                        <LoadingView message="Loading providers..."/>
                    }>
                        {move || match providers.get() {
                            Some(Ok(providers)) => view! {
                                <div class="provider-list">
                                    {providers
                                        .into_iter()
                                        .map(|provider| view! {
                                            <A
                                                href=format!("/dashboard/{}", provider.id)
                                                attr:class="provider-card"
                                            >
                                                <div>
                                                    <img
                                                        src=provider.avatar_url.clone()
                                                        alt=provider.name.clone()
                                                    />
                                                    <div>
                                                        <strong>{provider.name.clone()}</strong>
                                                        <p>{format_phone(&provider.phone)}</p>
                                                    </div>
                                                </div>
                                            </A>
                                        })
                                        .collect_view()}
                                </div>
                            }.into_any(),
                            Some(Err(e)) => {
                                leptos::logging::error!("Failed to fetch providers: {}", e);
                                view! {
                                    <ErrorView message="Could not load providers. Please refresh the page."/>
                                }.into_any()
                            }
                            None => view! {
                                <LoadingView message="Loading providers..."/>
                            }.into_any(),
                        }}
                    </Suspense>
                </section>
            </main>
        </div>
    }
}
