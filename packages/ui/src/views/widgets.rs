//! Tables and lists reused by several pages.

use api::{Alert, VitalReading, VitalsTrend};
use chrono::Utc;
use dioxus::prelude::*;
use health::models::{AlertBrief, TrendDirection, VitalKind};

use crate::components::{AlertTypeBadge, Button, ButtonVariant, EmptyState, SeverityBadge};
use crate::format;

#[component]
pub fn VitalsTable(readings: Vec<VitalReading>) -> Element {
    if readings.is_empty() {
        return rsx! { EmptyState { message: "No readings in this period." } };
    }

    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    th { "Measured" }
                    th { "Blood Pressure" }
                    th { "Heart Rate" }
                    th { "SpO2" }
                    th { "Temperature" }
                    th { "Status" }
                }
            }
            tbody {
                for reading in readings {
                    tr {
                        key: "{reading.id}",
                        class: if reading.is_anomaly { "row-anomaly" } else { "" },
                        td { "{format::timestamp(reading.measured_at)}" }
                        td { "{format::blood_pressure(reading.systolic_bp, reading.diastolic_bp)}" }
                        td { "{format::vital(&reading, VitalKind::HeartRate)}" }
                        td { "{format::vital(&reading, VitalKind::OxygenSaturation)}" }
                        td { "{format::vital(&reading, VitalKind::Temperature)}" }
                        td {
                            if reading.is_anomaly { "Anomaly" } else { "Normal" }
                        }
                    }
                }
            }
        }
    }
}

/// Latest reading as a row of stat tiles.
#[component]
pub fn VitalsSnapshot(reading: VitalReading) -> Element {
    let now = Utc::now();
    rsx! {
        div {
            class: "stat-grid",
            crate::components::StatCard {
                label: "Blood Pressure",
                value: format::blood_pressure(reading.systolic_bp, reading.diastolic_bp),
                hint: "mmHg".to_string(),
            }
            crate::components::StatCard {
                label: "Heart Rate",
                value: format::vital(&reading, VitalKind::HeartRate),
            }
            crate::components::StatCard {
                label: "SpO2",
                value: format::vital(&reading, VitalKind::OxygenSaturation),
            }
            crate::components::StatCard {
                label: "Temperature",
                value: format::vital(&reading, VitalKind::Temperature),
            }
        }
        p {
            class: "view-muted",
            "Measured {format::relative_time(reading.measured_at, now)}"
            if reading.is_anomaly { " · outside thresholds" }
        }
    }
}

#[component]
pub fn TrendsTable(trends: Vec<VitalsTrend>) -> Element {
    if trends.is_empty() {
        return rsx! { EmptyState { message: "Not enough readings to compute trends." } };
    }

    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    th { "Vital" }
                    th { "Average" }
                    th { "Min" }
                    th { "Max" }
                    th { "Readings" }
                    th { "Trend" }
                }
            }
            tbody {
                for trend in trends {
                    tr {
                        key: "{trend.vital.as_str()}",
                        td { "{trend.vital.label()} ({trend.vital.unit()})" }
                        td { "{format::number(trend.average)}" }
                        td { "{format::number(trend.min)}" }
                        td { "{format::number(trend.max)}" }
                        td { "{trend.data_points}" }
                        td {
                            class: match trend.trend {
                                TrendDirection::Increasing => "trend-up",
                                TrendDirection::Decreasing => "trend-down",
                                TrendDirection::Stable => "trend-stable",
                            },
                            "{trend.trend.as_str()}"
                        }
                    }
                }
            }
        }
    }
}

/// Alert rows with read / resolve actions. Actions are hidden when the
/// handler is absent.
#[component]
pub fn AlertList(
    alerts: Vec<Alert>,
    on_mark_read: Option<EventHandler<uuid::Uuid>>,
    on_resolve: Option<EventHandler<uuid::Uuid>>,
) -> Element {
    if alerts.is_empty() {
        return rsx! { EmptyState { message: "No alerts." } };
    }

    rsx! {
        ul {
            class: "alert-list",
            for alert in alerts {
                li {
                    key: "{alert.id}",
                    class: if alert.is_read { "alert-item" } else { "alert-item unread" },
                    div {
                        class: "alert-head",
                        AlertTypeBadge { alert_type: alert.alert_type }
                        SeverityBadge { severity: alert.severity }
                        strong { "{alert.title}" }
                        if alert.is_resolved {
                            span { class: "badge badge-resolved", "Resolved" }
                        }
                    }
                    p { "{alert.message}" }
                    div {
                        class: "alert-foot",
                        span { class: "view-muted", "{format::timestamp(alert.created_at)}" }
                        if let Some(handler) = on_mark_read {
                            if !alert.is_read {
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| handler.call(alert.id),
                                    "Mark read"
                                }
                            }
                        }
                        if let Some(handler) = on_resolve {
                            if !alert.is_resolved {
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| handler.call(alert.id),
                                    "Resolve"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AlertBriefList(alerts: Vec<AlertBrief>) -> Element {
    if alerts.is_empty() {
        return rsx! { EmptyState { message: "No recent alerts." } };
    }
    let now = Utc::now();

    rsx! {
        ul {
            class: "alert-list",
            for alert in alerts {
                li {
                    key: "{alert.id}",
                    class: "alert-item",
                    div {
                        class: "alert-head",
                        AlertTypeBadge { alert_type: alert.alert_type }
                        strong { "{alert.title}" }
                    }
                    p { "{alert.message}" }
                    span { class: "view-muted", "{format::relative_time(alert.created_at, now)}" }
                }
            }
        }
    }
}
