use leptos::*;
use log::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

/// Fire-and-forget feedback sink. Only the latest notice is kept.
#[derive(Clone, Copy)]
pub struct NoticeState {
    current: RwSignal<Option<Notice>>,
}

impl NoticeState {
    pub fn new() -> Self {
        Self {
            current: create_rw_signal(None),
        }
    }

    pub fn push(&self, title: impl Into<String>, description: impl Into<String>) {
        let notice = Notice {
            title: title.into(),
            description: description.into(),
        };
        info!("notice: {} - {}", notice.title, notice.description);
        self.current.set(Some(notice));
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    pub fn current(&self) -> ReadSignal<Option<Notice>> {
        self.current.read_only()
    }
}

impl Default for NoticeState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_notices() -> NoticeState {
    let state = NoticeState::new();
    provide_context(state);
    state
}

pub fn use_notices() -> NoticeState {
    use_context::<NoticeState>().unwrap_or_else(provide_notices)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn push_replaces_previous_notice() {
        with_runtime(|| {
            let notices = NoticeState::new();
            notices.push("First", "one");
            notices.push("Second", "two");
            assert_eq!(
                notices.current().get_untracked(),
                Some(Notice {
                    title: "Second".into(),
                    description: "two".into(),
                })
            );
            notices.dismiss();
            assert!(notices.current().get_untracked().is_none());
        });
    }

    #[test]
    fn use_notices_shares_provided_state() {
        with_runtime(|| {
            let provided = provide_notices();
            use_notices().push("Filters Applied", "ok");
            assert!(provided.current().get_untracked().is_some());
        });
    }
}
