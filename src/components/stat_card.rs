use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct StatCardProps {
    #[props(into)]
    label: String,
    #[props(into)]
    value: String,
    #[props(default, into)]
    subtext: String,
    /// Extra class on the value, e.g. `status-healthy`
    #[props(default, into)]
    tone: String,
}

#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-label", "{props.label}" }
            span { class: "stat-value {props.tone}", "{props.value}" }
            if !props.subtext.is_empty() {
                span { class: "stat-subtext", "{props.subtext}" }
            }
        }
    }
}
