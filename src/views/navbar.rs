use crate::contexts::use_snapshot_provider;
use crate::Route;
use dioxus::prelude::*;
use kube::Client;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn Navbar() -> Element {
    let client = use_context::<Client>();
    let mut data = use_snapshot_provider(client);

    let loading = (data.loading)();
    let last_loaded = data
        .snapshot
        .read()
        .fetched_at
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        div { class: "layout-container",
            div {
                id: "sidebar",
                class: "k8s-sidebar",
                div {
                    class: "sidebar-logo",
                    span { "Kinsight" }
                }
                nav {
                    class: "sidebar-links",
                    div { class: "nav-group",
                        span { class: "nav-group-title", "CLUSTER" }
                        Link {
                            to: Route::Overview {},
                            class: "nav-overview",
                            "Overview"
                        }
                        Link {
                            to: Route::Nodes {},
                            class: "nav-nodes",
                            "Nodes"
                        }
                        Link {
                            to: Route::Namespaces {},
                            class: "nav-namespaces",
                            "Namespaces"
                        }
                    }
                    div { class: "nav-group",
                        span { class: "nav-group-title", "WORKLOADS" }
                        Link {
                            to: Route::Pods {},
                            class: "nav-pods",
                            "Pods"
                        }
                        Link {
                            to: Route::Events {},
                            class: "nav-events",
                            "Warning Events"
                        }
                    }
                }
                div { class: "sidebar-footer",
                    button {
                        class: "btn btn-secondary",
                        disabled: loading,
                        onclick: move |_| data.refresh(),
                        if loading { "Loading..." } else { "Refresh" }
                    }
                    span { class: "last-loaded", "Last loaded {last_loaded}" }
                }
            }
            div {
                class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}
