//! Error boundaries for the filter pages.

use dioxus::prelude::*;

/// Page-level boundary; offers a way back to the query builder.
#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| rsx! {
                div { class: "x-error-panel",
                    h1 { class: "x-error-title", "Something broke in {boundary_name}" }
                    pre { class: "x-error-details", "{err:#?}" }
                    a { class: "x-error-link", href: "/", "Back to the query builder" }
                }
            },
            children
        }
    }
}

/// Wraps the task table so a failing render only blanks the table.
#[component]
pub fn TableErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let details = err
                    .error()
                    .map(|e| format!("{:#?}", e.0))
                    .unwrap_or_else(|| "Unknown error".to_string());
                rsx! {
                    div { class: "x-error-panel",
                        h2 { class: "x-error-title", "The table failed to render" }
                        pre { class: "x-error-details", "{details}" }
                        button {
                            class: "x-chip-button",
                            onclick: move |_| err.clear_errors(),
                            "Retry"
                        }
                    }
                }
            },
            {children}
        }
    }
}

/// Shown instead of a page body when its embedded filter data fails to parse.
#[component]
pub fn DataLoadError(dataset: String, error: String) -> Element {
    rsx! {
        div { class: "x-error-panel",
            h2 { class: "x-error-title", "Could not load {dataset}" }
            pre { class: "x-error-details", "{error}" }
        }
    }
}
