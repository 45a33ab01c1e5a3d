use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_desktop::{Config, WindowBuilder};
use views::{Events, Namespaces, Navbar, Nodes, Overview, Pods};

mod components;
mod contexts;
mod k8s;
mod views;
mod utils;

use contexts::{create_client, ClientSource};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Overview {},
        #[route("/nodes")]
        Nodes {},
        #[route("/namespaces")]
        Namespaces {},
        #[route("/pods")]
        Pods {},
        #[route("/events")]
        Events {},
}

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new().with_title("Kinsight")
            ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    // Resolved once from the command line; `--kubeconfig <path>` overrides the default chain
    let client_resource = use_resource(|| async move {
        let source = ClientSource::from_args(std::env::args().skip(1))?;
        tracing::info!("Connecting with {:?}", source);
        create_client(&source).await
    });

    let client_ref = client_resource.read();

    match &*client_ref {
        None => {
            rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }
                div { class: "loading-state", "Loading Kubernetes client..." }
            }
        }
        Some(Err(err)) => {
            tracing::error!("Failed to create Kubernetes client: {}", err);
            // No router without a client
            rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }

                div { class: "error-container",
                    div { class: "error-banner",
                        "⚠️ Failed to connect to Kubernetes cluster: {err}"
                    }
                    div { class: "error-help",
                        h2 { "No Kubernetes Connection" }
                        p { "Pass a valid kubeconfig with --kubeconfig <path>, or fix the default configuration, then restart." }
                    }
                }
            }
        }
        Some(Ok(client)) => {
            use_context_provider(|| client.clone());

            rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }

                Router::<Route> {}
            }
        }
    }
}
