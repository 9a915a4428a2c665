use crate::{
    components::{
        common::{Button, ButtonVariant},
        dialog::Dialog,
    },
    pages::attendance::types::AttendanceEntry,
};
use leptos::*;

#[component]
pub fn AttendanceDetailsDialog(
    is_open: Signal<bool>,
    day: u32,
    entries: Signal<Vec<AttendanceEntry>>,
    on_add_entry: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Dialog is_open=is_open title=format!("Attendance Details - Day {day}") on_close=on_close>
            <ul class="space-y-2">
                {move || {
                    entries
                        .get()
                        .into_iter()
                        .map(|entry| view! { <EntryDetail entry=entry/> })
                        .collect_view()
                }}
            </ul>
            <Button
                variant=ButtonVariant::Outline
                class="w-full"
                on_click=Callback::new(move |_| on_add_entry.call(()))
            >
                <i class="fas fa-plus mr-2" aria-hidden="true"></i>
                "Add Entry"
            </Button>
        </Dialog>
    }
}

#[component]
fn EntryDetail(entry: AttendanceEntry) -> impl IntoView {
    let AttendanceEntry { kind, time, notes } = entry;
    view! {
        <li class="p-3 border border-border rounded-lg">
            <div class="flex items-center justify-between">
                <span class=format!("px-2 py-0.5 rounded text-xs font-semibold {}", kind.badge_class())>
                    {kind.label()}
                </span>
                {time.map(|time| view! { <span class="text-sm text-fg-muted">{time}</span> })}
            </div>
            {notes.map(|notes| view! { <p class="text-sm text-fg-muted mt-1">{notes}</p> })}
        </li>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::attendance::types::AttendanceKind;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn details_list_entries_in_order() {
        let html = render_to_string(move || {
            let entries = Signal::derive(|| {
                vec![
                    AttendanceEntry::new(AttendanceKind::Present).with_time("09:00:00"),
                    AttendanceEntry::new(AttendanceKind::Late)
                        .with_time("09:45:00")
                        .with_notes("bus delay"),
                ]
            });
            view! {
                <AttendanceDetailsDialog
                    is_open=Signal::derive(|| true)
                    day=5
                    entries=entries
                    on_add_entry=Callback::new(|_| {})
                    on_close=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Attendance Details - Day 5"));
        let present = html.find("Present").unwrap();
        let late = html.find("Late").unwrap();
        assert!(present < late);
        assert!(html.contains("09:45:00"));
        assert!(html.contains("bus delay"));
        assert!(html.contains("Add Entry"));
    }
}
