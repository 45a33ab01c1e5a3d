use dioxus::prelude::*;

/// Filter box shared by the table views. Clearing it emits an empty string.
#[derive(Props, PartialEq, Clone)]
pub struct SearchInputProps {
    query: String,
    #[props(default = "Filter...".to_string(), into)]
    placeholder: String,
    on_change: EventHandler<String>,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    let has_query = !props.query.is_empty();

    rsx! {
        div { class: "search-container",
            input {
                class: "search-input",
                r#type: "text",
                placeholder: "{props.placeholder}",
                value: "{props.query}",
                oninput: move |evt| props.on_change.call(evt.value())
            }
            if has_query {
                button {
                    class: "search-clear",
                    title: "Clear filter",
                    onclick: move |_| props.on_change.call(String::new()),
                    "×"
                }
            }
        }
    }
}
