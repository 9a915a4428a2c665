use crate::{
    components::common::{Button, ButtonVariant},
    pages::attendance::utils::{MONTH_OPTIONS, SOCIETY_OPTIONS, USER_TYPE_OPTIONS, YEAR_OPTIONS},
};
use leptos::*;

/// Stateless filter form. Every change is reported verbatim to the owner.
#[component]
pub fn FilterPanel(
    month: Signal<String>,
    year: Signal<String>,
    user_type: Signal<String>,
    society: Signal<String>,
    on_month_change: Callback<String>,
    on_year_change: Callback<String>,
    on_user_type_change: Callback<String>,
    on_society_change: Callback<String>,
    on_apply: Callback<()>,
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated border border-border rounded-lg p-6 mb-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-lg font-semibold text-fg">"Filters"</h2>
                <Button
                    variant=ButtonVariant::Outline
                    on_click=Callback::new(move |_| on_reset.call(()))
                >
                    <i class="fas fa-undo mr-2" aria-hidden="true"></i>
                    "Reset Filters"
                </Button>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4 mb-4">
                <FilterSelect label="Month" options=MONTH_OPTIONS value=month on_change=on_month_change/>
                <FilterSelect label="Year" options=YEAR_OPTIONS value=year on_change=on_year_change/>
                <FilterSelect
                    label="User Type"
                    options=USER_TYPE_OPTIONS
                    value=user_type
                    on_change=on_user_type_change
                />
                <FilterSelect
                    label="Society"
                    options=SOCIETY_OPTIONS
                    value=society
                    on_change=on_society_change
                />
            </div>
            <div class="flex justify-end">
                <Button on_click=Callback::new(move |_| on_apply.call(()))>"Apply Filters"</Button>
            </div>
        </section>
    }
}

#[component]
fn FilterSelect(
    label: &'static str,
    options: &'static [&'static str],
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    let id = format!("filter-{}", label.to_lowercase().replace(' ', "-"));

    view! {
        <div>
            <label for=id.clone() class="block text-sm font-medium text-fg mb-2">{label}</label>
            <select
                id=id
                class="w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                on:change=move |ev| on_change.call(event_target_value(&ev))
            >
                {options
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <option value=option selected=move || value.with(|v| v == option)>
                                {option}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn noop() -> Callback<String> {
        Callback::new(|_| {})
    }

    #[test]
    fn filter_panel_renders_all_fields_and_actions() {
        let html = render_to_string(move || {
            view! {
                <FilterPanel
                    month=Signal::derive(|| "July".to_string())
                    year=Signal::derive(|| "2025".to_string())
                    user_type=Signal::derive(|| "All User Types".to_string())
                    society=Signal::derive(|| "Society B".to_string())
                    on_month_change=noop()
                    on_year_change=noop()
                    on_user_type_change=noop()
                    on_society_change=noop()
                    on_apply=Callback::new(|_| {})
                    on_reset=Callback::new(|_| {})
                />
            }
        });
        for label in ["Month", "Year", "User Type", "Society"] {
            assert!(html.contains(label), "missing {label}");
        }
        assert!(html.contains("December"));
        assert!(html.contains("2026"));
        assert!(html.contains("Site Supervisor"));
        assert!(html.contains("Society C"));
        assert!(html.contains("Apply Filters"));
        assert!(html.contains("Reset Filters"));
    }

    #[test]
    fn filter_select_marks_current_value() {
        let html = render_to_string(move || {
            view! {
                <FilterSelect
                    label="Society"
                    options=SOCIETY_OPTIONS
                    value=Signal::derive(|| "Society B".to_string())
                    on_change=noop()
                />
            }
        });
        assert!(html.contains("id=\"filter-society\""));
        assert_eq!(html.matches("selected").count(), 1);
        let selected_at = html.find("selected").unwrap();
        let option_start = html[..selected_at].rfind("<option").unwrap();
        assert!(html[option_start..selected_at].contains("Society B"));
    }
}
