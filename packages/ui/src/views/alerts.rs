use api::{AlertFilter, AlertStats};
use dioxus::prelude::*;
use health::models::AlertType;
use uuid::Uuid;

use super::widgets::AlertList;
use crate::components::{Card, ErrorBanner, Loading, PageHeader, StatCard};
use crate::use_auth;

/// Filterable alert feed with stats. Carers can also resolve alerts.
#[component]
pub fn AlertsPanel(patient_id: Option<Uuid>) -> Element {
    let auth = use_auth();
    let can_resolve = auth().role().is_some_and(|role| role.is_carer());

    let mut alert_type = use_signal(|| Option::<AlertType>::None);
    let mut unread_only = use_signal(|| false);
    let mut action_error = use_signal(|| Option::<String>::None);

    let mut alerts = use_resource(move || {
        let filter = AlertFilter {
            patient_id,
            alert_type: alert_type(),
            is_read: unread_only().then_some(false),
            ..Default::default()
        };
        async move { api::list_alerts(filter).await }
    });
    let mut stats = use_resource(move || async move { api::alert_stats(patient_id).await });

    let on_mark_read = move |id: Uuid| {
        spawn(async move {
            match api::mark_alert_read(id).await {
                Ok(_) => {
                    alerts.restart();
                    stats.restart();
                }
                Err(e) => action_error.set(Some(e.to_string())),
            }
        });
    };

    let on_resolve = move |id: Uuid| {
        spawn(async move {
            match api::resolve_alert(id).await {
                Ok(_) => {
                    alerts.restart();
                    stats.restart();
                }
                Err(e) => action_error.set(Some(e.to_string())),
            }
        });
    };

    let list = match &*alerts.read() {
        None => rsx! { Loading {} },
        Some(Err(e)) => rsx! { ErrorBanner { message: e.to_string() } },
        Some(Ok(items)) => rsx! {
            AlertList {
                alerts: items.clone(),
                on_mark_read: on_mark_read,
                on_resolve: if can_resolve { Some(EventHandler::new(on_resolve)) } else { None },
            }
        },
    };

    let summary = match &*stats.read() {
        Some(Ok(s)) => rsx! { AlertStatsRow { stats: s.clone() } },
        _ => rsx! {},
    };

    rsx! {
        {summary}
        Card {
            title: "Alerts".to_string(),
            if let Some(message) = action_error() {
                ErrorBanner { message }
            }
            div {
                class: "segmented",
                for (value, label) in [
                    (None, "All"),
                    (Some(AlertType::Critical), "Critical"),
                    (Some(AlertType::Warning), "Warning"),
                    (Some(AlertType::Info), "Info"),
                ] {
                    button {
                        key: "{label}",
                        class: if alert_type() == value { "segment active" } else { "segment" },
                        onclick: move |_| alert_type.set(value),
                        "{label}"
                    }
                }
                label {
                    class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: unread_only(),
                        onchange: move |evt: FormEvent| unread_only.set(evt.checked()),
                    }
                    "Unread only"
                }
            }
            {list}
        }
    }
}

#[component]
fn AlertStatsRow(stats: AlertStats) -> Element {
    rsx! {
        div {
            class: "stat-grid",
            StatCard { label: "Total", value: "{stats.total}" }
            StatCard { label: "Unread", value: "{stats.unread}" }
            StatCard { label: "Critical", value: "{stats.critical}" }
            StatCard { label: "Warning", value: "{stats.warning}" }
            StatCard { label: "Resolved", value: "{stats.resolved}" }
        }
    }
}

#[component]
pub fn AlertsView() -> Element {
    rsx! {
        div {
            class: "view-page",
            PageHeader {
                title: "Alerts",
                subtitle: "Notifications raised from vital sign readings".to_string(),
            }
            AlertsPanel { patient_id: None }
        }
    }
}
