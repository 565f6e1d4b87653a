//! Drawer listing validation and export events, newest first.

use dioxus::prelude::*;

use crate::activity_log::{use_activity_log, LogEntry, LogLevel};
use crate::icons::{FaCircleCheck, FaCircleInfo, FaCircleXmark, FaTriangleExclamation};
use crate::Icon;

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    if !log().visible {
        return rsx! {};
    }

    let entries = log().entries.clone();
    let errors = entries.iter().filter(|e| e.level == LogLevel::Error).count();
    let empty = entries.is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: ACTIVITY_LOG_CSS }

        aside {
            class: "activity-log-panel",
            header {
                class: "activity-log-header",
                span { "Activity" }
                if errors > 0 {
                    span { class: "activity-log-badge", "{errors} failed" }
                }
                div {
                    class: "activity-log-header-actions",
                    button {
                        disabled: empty,
                        onclick: move |_| log.write().entries.clear(),
                        "Clear"
                    }
                    button {
                        onclick: move |_| log.write().visible = false,
                        "Close"
                    }
                }
            }
            ul {
                class: "activity-log-entries",
                if empty {
                    li { class: "activity-log-empty", "Nothing yet. Validate the form or export a card." }
                }
                for (i, entry) in entries.into_iter().enumerate().rev() {
                    LogRow { key: "{i}", entry }
                }
            }
        }
    }
}

#[component]
fn LogRow(entry: LogEntry) -> Element {
    let class = match entry.level {
        LogLevel::Error => "activity-log-entry error",
        LogLevel::Warning => "activity-log-entry warning",
        LogLevel::Success => "activity-log-entry success",
        LogLevel::Info => "activity-log-entry info",
    };

    rsx! {
        li {
            class,
            {match entry.level {
                LogLevel::Error => rsx! { Icon { icon: FaCircleXmark, width: 12, height: 12 } },
                LogLevel::Warning => rsx! { Icon { icon: FaTriangleExclamation, width: 12, height: 12 } },
                LogLevel::Success => rsx! { Icon { icon: FaCircleCheck, width: 12, height: 12 } },
                LogLevel::Info => rsx! { Icon { icon: FaCircleInfo, width: 12, height: 12 } },
            }}
            span { class: "activity-log-time", "{entry.timestamp}" }
            span { class: "activity-log-message", "{entry.message}" }
        }
    }
}

/// Navbar button that opens the drawer; turns red once an export has failed.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let count = log().entries.len();
    let has_errors = log().has_errors();

    rsx! {
        button {
            class: if has_errors { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            title: "Activity log",
            onclick: move |_| {
                let visible = log().visible;
                log.write().visible = !visible;
            },
            if count > 0 {
                "Activity ({count})"
            } else {
                "Activity"
            }
        }
    }
}
