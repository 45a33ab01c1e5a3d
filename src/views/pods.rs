use dioxus::prelude::*;
use k8s_openapi::chrono::Utc;

use crate::components::{DistributionBar, SearchInput, Segment, TableState};
use crate::contexts::SnapshotContext;
use crate::k8s::{problem_pods, PodPhase, PodPhaseCounts, ProblemPod};
use crate::utils::config::PROBLEM_POD_PAGE_SIZE;

const PODS_CSS: Asset = asset!("/assets/styling/pods.css");

fn phase_class(phase: PodPhase) -> &'static str {
    match phase {
        PodPhase::Running => "status-healthy",
        PodPhase::Succeeded => "status-done",
        PodPhase::Pending => "status-warning",
        PodPhase::Failed => "status-critical",
        PodPhase::Unknown => "status-unknown",
    }
}

fn matching_problems(problems: &[ProblemPod], table: &TableState<()>) -> Vec<ProblemPod> {
    problems
        .iter()
        .filter(|p| table.matches(&p.name) || table.matches(&p.namespace) || table.matches(&p.kind.to_string()))
        .cloned()
        .collect()
}

#[component]
pub fn Pods() -> Element {
    let data = use_context::<SnapshotContext>();
    let mut table = use_signal(|| TableState::new(()));
    let mut visible_pods = use_signal(|| PROBLEM_POD_PAGE_SIZE);

    let phases = use_memo(move || PodPhaseCounts::from_pods(&data.snapshot.read().pods));
    let problems = use_memo(move || problem_pods(&data.snapshot.read().pods, Utc::now()));

    let phases = phases();
    let matching = matching_problems(&problems.read(), &table.read());
    let total = matching.len();
    let shown = visible_pods().min(total);
    let segments: Vec<Segment> = PodPhase::ALL
        .iter()
        .map(|phase| Segment {
            label: phase.to_string(),
            count: phases.get(*phase),
            class: phase_class(*phase),
        })
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: PODS_CSS }
        div { class: "pods-container",
            div { class: "pods-header",
                div { class: "header-left",
                    h1 { "Pods" }
                    div { class: "header-controls",
                        SearchInput {
                            query: table.read().filter.clone(),
                            placeholder: "Filter problem pods...",
                            on_change: move |q| {
                                table.write().filter = q;
                                visible_pods.set(PROBLEM_POD_PAGE_SIZE);
                            }
                        }
                        span { class: "pod-count", "{phases.total()} pods" }
                    }
                }
            }

            div { class: "insights-section",
                h2 { "Phase Distribution" }
                DistributionBar { segments }
            }

            div { class: "insights-section",
                h2 { "Problem Pods ({total})" }
                if matching.is_empty() {
                    p { class: "empty-state", "No problem pods" }
                }
                div { class: "problem-pods-grid",
                    {matching.iter()
                        .take(shown)
                        .map(|pod| {
                            let owner = pod.owner.clone().unwrap_or_default();
                            rsx! {
                                div {
                                    key: "{pod.namespace}/{pod.name}",
                                    class: "problem-pod-card severity-{pod.severity.as_str()}",
                                    div { class: "problem-pod-header",
                                        h3 { "{pod.name}" }
                                        span { class: "pod-namespace", "{pod.namespace}" }
                                    }
                                    div { class: "problem-pod-content",
                                        div { class: "issue-type", "{pod.kind}" }
                                        p { class: "issue-details", "{pod.details}" }
                                        div { class: "pod-meta",
                                            span { "Restarts: {pod.restarts}" }
                                            span { "Age: {pod.age}" }
                                            if !owner.is_empty() {
                                                span { "Owner: {owner}" }
                                            }
                                        }
                                    }
                                }
                            }
                        })
                    }
                }

                if total > shown {
                    button {
                        class: "show-more-button",
                        onclick: move |_| visible_pods += PROBLEM_POD_PAGE_SIZE,
                        "Show More ({total - shown} remaining)"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::k8s::{IssueKind, Severity};

    fn problem(name: &str, namespace: &str, kind: IssueKind) -> ProblemPod {
        ProblemPod {
            name: name.to_string(),
            namespace: namespace.to_string(),
            owner: None,
            kind,
            details: String::new(),
            severity: Severity::High,
            restarts: 0,
            age: "1h".to_string(),
        }
    }

    #[test]
    fn test_matching_problems() {
        let problems = vec![
            problem("cart-1", "shop", IssueKind::CrashLoopBackOff),
            problem("dns-1", "kube-system", IssueKind::Evicted),
        ];
        let mut table = TableState::new(());
        assert_eq!(matching_problems(&problems, &table).len(), 2);

        table.filter = "crashloop".to_string();
        assert_eq!(matching_problems(&problems, &table)[0].name, "cart-1");

        table.filter = "kube-".to_string();
        assert_eq!(matching_problems(&problems, &table)[0].name, "dns-1");
    }
}
