//! Builders for the Kubernetes objects used across the aggregation tests.

use k8s_openapi::{
    api::core::v1::{
        ContainerState, ContainerStateRunning, ContainerStateTerminated, ContainerStateWaiting,
        ContainerStatus, Event, Namespace, Node, NodeCondition, NodeSpec, NodeStatus,
        ObjectReference, Pod, PodCondition, PodStatus, Taint,
    },
    apimachinery::pkg::apis::meta::v1::{ObjectMeta, Time},
    chrono::{DateTime, Utc},
};

pub fn node(name: &str, ready: Option<&str>) -> Node {
    let conditions = ready.map(|status| {
        vec![NodeCondition {
            type_: "Ready".to_string(),
            status: status.to_string(),
            message: Some(format!("kubelet reports Ready={}", status)),
            ..Default::default()
        }]
    });
    Node {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        spec: Some(NodeSpec::default()),
        status: Some(NodeStatus {
            conditions,
            ..Default::default()
        }),
    }
}

pub fn cordoned(mut node: Node) -> Node {
    node.spec.get_or_insert_with(NodeSpec::default).unschedulable = Some(true);
    node
}

pub fn tainted(mut node: Node, key: &str, value: Option<&str>, effect: &str) -> Node {
    node.spec
        .get_or_insert_with(NodeSpec::default)
        .taints
        .get_or_insert_with(Vec::new)
        .push(Taint {
            key: key.to_string(),
            value: value.map(str::to_string),
            effect: effect.to_string(),
            ..Default::default()
        });
    node
}

pub fn namespace(name: &str) -> Namespace {
    Namespace {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn pod(namespace: Option<&str>, name: &str, phase: Option<&str>) -> Pod {
    Pod {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: namespace.map(str::to_string),
            ..Default::default()
        },
        spec: None,
        status: Some(PodStatus {
            phase: phase.map(str::to_string),
            ..Default::default()
        }),
    }
}

/// A healthy running pod: one ready container, a passing Ready condition.
pub fn running_pod(namespace: &str, name: &str) -> Pod {
    let base = pod(Some(namespace), name, Some("Running"));
    with_condition(with_container(base, running_container("app", true, 0)), "Ready", "True", None)
}

pub fn with_container(mut pod: Pod, container: ContainerStatus) -> Pod {
    pod.status
        .get_or_insert_with(PodStatus::default)
        .container_statuses
        .get_or_insert_with(Vec::new)
        .push(container);
    pod
}

pub fn with_condition(mut pod: Pod, type_: &str, status: &str, reason: Option<&str>) -> Pod {
    pod.status
        .get_or_insert_with(PodStatus::default)
        .conditions
        .get_or_insert_with(Vec::new)
        .push(PodCondition {
            type_: type_.to_string(),
            status: status.to_string(),
            reason: reason.map(str::to_string),
            ..Default::default()
        });
    pod
}

pub fn created_at(mut pod: Pod, time: DateTime<Utc>) -> Pod {
    pod.metadata.creation_timestamp = Some(Time(time));
    pod
}

pub fn running_container(name: &str, ready: bool, restarts: i32) -> ContainerStatus {
    ContainerStatus {
        name: name.to_string(),
        ready,
        restart_count: restarts,
        state: Some(ContainerState {
            running: Some(ContainerStateRunning::default()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn waiting_container(name: &str, reason: &str, restarts: i32) -> ContainerStatus {
    ContainerStatus {
        name: name.to_string(),
        ready: false,
        restart_count: restarts,
        state: Some(ContainerState {
            waiting: Some(ContainerStateWaiting {
                reason: Some(reason.to_string()),
                message: Some(format!("container {} is waiting", name)),
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn terminated_container(name: &str, exit_code: i32, restarts: i32) -> ContainerStatus {
    ContainerStatus {
        name: name.to_string(),
        ready: false,
        restart_count: restarts,
        state: Some(ContainerState {
            terminated: Some(ContainerStateTerminated {
                exit_code,
                reason: Some(if exit_code == 0 { "Completed" } else { "Error" }.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn event(
    type_: &str,
    reason: Option<&str>,
    count: Option<i32>,
    namespace: Option<&str>,
    object: &str,
) -> Event {
    Event {
        metadata: ObjectMeta {
            name: Some(format!("{}.{}", object, reason.unwrap_or("event").to_lowercase())),
            namespace: namespace.map(str::to_string),
            ..Default::default()
        },
        type_: Some(type_.to_string()),
        reason: reason.map(str::to_string),
        message: reason.map(|r| format!("{} on {}", r, object)),
        count,
        involved_object: ObjectReference {
            kind: Some("Pod".to_string()),
            name: Some(object.to_string()),
            namespace: namespace.map(str::to_string),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn warning(reason: &str, count: i32, namespace: &str, object: &str) -> Event {
    event("Warning", Some(reason), Some(count), Some(namespace), object)
}

pub fn last_seen(mut event: Event, time: DateTime<Utc>) -> Event {
    event.last_timestamp = Some(Time(time));
    event
}
