use leptos::*;

/// Placeholder shown where a list would render zero rows.
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] icon_class: Option<String>,
) -> impl IntoView {
    let icon_class = icon_class.unwrap_or_else(|| "fas fa-users-slash".to_string());
    view! {
        <div class="text-center py-10 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <div class="mx-auto h-10 w-10 flex items-center justify-center text-fg-muted">
                <i class=format!("{} text-2xl", icon_class) aria-hidden="true"></i>
            </div>
            <h3 class="mt-2 text-sm font-semibold text-fg">{title}</h3>
            {description.map(|desc| view! {
                <p class="mt-1 text-sm text-fg-muted">{desc}</p>
            })}
        </div>
    }
}
