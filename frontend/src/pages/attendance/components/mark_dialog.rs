use crate::{components::dialog::Dialog, pages::attendance::types::AttendanceKind};
use leptos::*;

/// Chooser for one of the four kinds, plus optional free-text notes.
#[component]
pub fn MarkAttendanceDialog(
    is_open: Signal<bool>,
    day: u32,
    on_choose: Callback<(AttendanceKind, String)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let notes = create_rw_signal(String::new());
    let choose = choose_with_notes(notes, on_choose);
    let dismiss = dismiss_clearing_notes(notes, on_close);

    view! {
        <Dialog is_open=is_open title=format!("Mark Attendance - Day {day}") on_close=dismiss>
            <div class="grid grid-cols-2 gap-2">
                {AttendanceKind::ALL
                    .iter()
                    .map(|kind| {
                        let kind = *kind;
                        view! {
                            <button
                                type="button"
                                class=format!(
                                    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold {}",
                                    kind.button_class(),
                                )
                                on:click=move |_| choose.call(kind)
                            >
                                <i class=format!("{} mr-2", kind.icon_class()) aria-hidden="true"></i>
                                {kind.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <label class="block text-sm font-medium text-fg">
                "Notes (optional)"
                <textarea
                    rows="2"
                    class="mt-1 w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                    prop:value=move || notes.get()
                    on:input=move |ev| notes.set(event_target_value(&ev))
                ></textarea>
            </label>
        </Dialog>
    }
}

/// Hands the chosen kind and the current notes upward, then clears the draft.
fn choose_with_notes(
    notes: RwSignal<String>,
    on_choose: Callback<(AttendanceKind, String)>,
) -> Callback<AttendanceKind> {
    Callback::new(move |kind| {
        let text = notes.get_untracked();
        notes.set(String::new());
        on_choose.call((kind, text));
    })
}

fn dismiss_clearing_notes(notes: RwSignal<String>, on_close: Callback<()>) -> Callback<()> {
    Callback::new(move |_| {
        notes.set(String::new());
        on_close.call(());
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{render_to_string, with_runtime};

    #[test]
    fn dismissing_discards_typed_notes() {
        with_runtime(|| {
            let notes = create_rw_signal("left early".to_string());
            let closed = create_rw_signal(false);
            dismiss_clearing_notes(notes, Callback::new(move |_| closed.set(true))).call(());
            assert!(closed.get_untracked());
            assert_eq!(notes.get_untracked(), "");

            let chosen = create_rw_signal(None::<(AttendanceKind, String)>);
            choose_with_notes(notes, Callback::new(move |pick| chosen.set(Some(pick))))
                .call(AttendanceKind::Present);
            assert_eq!(
                chosen.get_untracked(),
                Some((AttendanceKind::Present, String::new()))
            );
        });
    }

    #[test]
    fn choosing_passes_notes_then_clears_them() {
        with_runtime(|| {
            let notes = create_rw_signal("bus delay".to_string());
            let chosen = create_rw_signal(None::<(AttendanceKind, String)>);
            let choose = choose_with_notes(notes, Callback::new(move |pick| chosen.set(Some(pick))));
            choose.call(AttendanceKind::Late);
            assert_eq!(
                chosen.get_untracked(),
                Some((AttendanceKind::Late, "bus delay".to_string()))
            );
            assert_eq!(notes.get_untracked(), "");
        });
    }

    #[test]
    fn chooser_offers_every_kind() {
        let html = render_to_string(move || {
            view! {
                <MarkAttendanceDialog
                    is_open=Signal::derive(|| true)
                    day=7
                    on_choose=Callback::new(|_| {})
                    on_close=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Mark Attendance - Day 7"));
        for kind in AttendanceKind::ALL {
            assert!(html.contains(kind.label()), "missing {}", kind.label());
        }
        assert!(html.contains("Notes (optional)"));
    }
}
