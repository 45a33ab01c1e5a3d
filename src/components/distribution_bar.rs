use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub struct Segment {
    pub label: String,
    pub count: usize,
    pub class: &'static str,
}

/// Width of a segment as a percentage of `total`
pub fn segment_width(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct DistributionBarProps {
    segments: Vec<Segment>,
}

#[component]
pub fn DistributionBar(props: DistributionBarProps) -> Element {
    let total: usize = props.segments.iter().map(|s| s.count).sum();

    rsx! {
        div { class: "distribution",
            div { class: "distribution-bar",
                {props.segments.iter().filter(|s| s.count > 0).map(|segment| {
                    let width = format!("{:.1}", segment_width(segment.count, total));
                    rsx! {
                        div {
                            key: "{segment.label}",
                            class: "distribution-segment {segment.class}",
                            style: "width: {width}%",
                            title: "{segment.label}: {segment.count}",
                        }
                    }
                })}
            }
            div { class: "distribution-legend",
                {props.segments.iter().map(|segment| rsx! {
                    span {
                        key: "{segment.label}",
                        class: "legend-item {segment.class}",
                        "{segment.label} {segment.count}"
                    }
                })}
            }
        }
    }
}
