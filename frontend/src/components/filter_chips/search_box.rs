use dioxus::prelude::*;

#[component]
pub fn SearchBox(
    placeholder: String,
    value: String,
    on_input: Callback<String>,
    on_enter: Option<Callback<()>>,
) -> Element {
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            if let Some(on_enter) = on_enter {
                on_enter.call(());
            }
        }
    };
    rsx! {
        input {
            r#type: "text",
            placeholder: "{placeholder}",
            autofocus: true,
            style: "
                box-sizing: border-box;
                width: 100%;
                height: 36px;
                padding: 0px 10px;
                border: none;
                border-bottom: 1px solid #E2E8F0;
                outline: none;
                font-size: 14px;
            ",
            value: "{value}",
            oninput: move |event: Event<FormData>| on_input.call(event.value()),
            onkeydown: search_onkeydown,
        }
    }
}
