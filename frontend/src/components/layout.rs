use crate::{
    router::ATTENDANCE_PATH,
    state::notice::{use_notices, Notice},
};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">"Attendance Sheet"</h1>
                    <nav class="flex space-x-4">
                        <a href=ATTENDANCE_PATH class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                            "Attendance"
                        </a>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                <NoticeBanner/>
                {children()}
            </main>
        </div>
    }
}

/// Renders the most recent notice pushed through `NoticeState`.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notices = use_notices();
    let current = notices.current();

    view! {
        {move || current.get().map(|Notice { title, description }| view! {
            <div
                role="status"
                class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4"
            >
                <div class="flex items-start justify-between gap-3">
                    <div>
                        <p class="font-semibold">{title}</p>
                        <p class="text-sm mt-1">{description}</p>
                    </div>
                    <button
                        type="button"
                        aria-label="Dismiss"
                        class="text-status-success-text hover:opacity-75"
                        on:click=move |_| notices.dismiss()
                    >
                        {"✕"}
                    </button>
                </div>
            </div>
        })}
    }
}
