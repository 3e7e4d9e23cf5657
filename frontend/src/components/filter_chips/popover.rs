use dioxus::prelude::*;

/// Floating panel anchored under its parent, with a backdrop that closes it.
#[component]
pub fn PopoverPanel(on_close: Callback<()>, #[props(default = 250)] width: u32, children: Element) -> Element {
    rsx! {
        div {
            style: "position: fixed; top: 0px; left: 0px; width: 100vw; height: 100vh; z-index: 999;",
            onclick: move |_| {
                on_close.call(());
            },
        }
        div {
            style: "position: relative; width: 0px; height: 0px;",
            div {
                style: "
                    position: absolute;
                    top: 6px;
                    left: 0px;
                    width: {width}px;
                    max-height: 360px;
                    overflow-y: auto;
                    background-color: white;
                    border: 1px solid #E2E8F0;
                    border-radius: 8px;
                    box-shadow: 0 4px 12px 0 rgba(0, 0, 0, 0.1);
                    z-index: 1000;
                ",
                {children}
            }
        }
    }
}

#[component]
pub fn MenuItem(on_select: Callback<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "x-menu-item",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                padding: 6px 10px;
                font-size: 14px;
                cursor: pointer;
            ",
            onclick: move |_| on_select.call(()),
            {children}
        }
    }
}

#[component]
pub fn EmptyHint(text: String) -> Element {
    rsx! {
        div {
            style: "padding: 18px 10px; font-size: 14px; text-align: center; color: #64748B;",
            "{text}"
        }
    }
}
