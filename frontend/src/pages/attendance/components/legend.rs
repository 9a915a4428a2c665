use crate::pages::attendance::types::AttendanceKind;
use leptos::*;

#[component]
pub fn AttendanceLegend() -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-4 px-4 py-3 border-b border-border bg-surface-muted">
            {AttendanceKind::ALL
                .iter()
                .map(|kind| {
                    view! {
                        <span class="inline-flex items-center gap-2 text-sm text-fg">
                            <span class=format!(
                                "inline-flex w-5 h-5 items-center justify-center rounded text-xs font-semibold {}",
                                kind.badge_class(),
                            )>{kind.letter().to_string()}</span>
                            {kind.label()}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
