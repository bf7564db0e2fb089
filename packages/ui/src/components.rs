//! Small building blocks shared by the pages. Styling lives in `assets/ui.css`.

use dioxus::prelude::*;
use health::models::{AlertType, Severity};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Danger,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default = "button".to_string())] r#type: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: variant.class(),
            r#type: "{r#type}",
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "field-label", r#for: "{html_for}", {children} }
    }
}

#[component]
pub fn Input(
    id: String,
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "field-input",
            r#type: "{r#type}",
            placeholder: "{placeholder}",
            disabled: disabled,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// Labelled input on its own row.
#[component]
pub fn FormField(
    id: String,
    label: String,
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
) -> Element {
    rsx! {
        div {
            class: "field",
            Label { html_for: id.clone(), "{label}" }
            Input {
                id: id,
                r#type: r#type,
                placeholder: placeholder,
                value: value,
                oninput: oninput,
            }
        }
    }
}

#[component]
pub fn PageHeader(title: String, subtitle: Option<String>) -> Element {
    rsx! {
        div {
            class: "page-header",
            h1 { class: "page-title", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "page-subtitle", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn Card(title: Option<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "card",
            if let Some(title) = title {
                h2 { class: "card-title", "{title}" }
            }
            {children}
        }
    }
}

#[component]
pub fn StatCard(label: String, value: String, hint: Option<String>) -> Element {
    rsx! {
        div {
            class: "stat-card",
            p { class: "stat-label", "{label}" }
            p { class: "stat-value", "{value}" }
            if let Some(hint) = hint {
                p { class: "stat-hint", "{hint}" }
            }
        }
    }
}

#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "error-banner", role: "alert", "{message}" }
    }
}

#[component]
pub fn SuccessBanner(message: String) -> Element {
    rsx! {
        div { class: "success-banner", "{message}" }
    }
}

#[component]
pub fn Loading(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div { class: "loading", "{label}" }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        p { class: "empty-state", "{message}" }
    }
}

#[component]
pub fn AlertTypeBadge(alert_type: AlertType) -> Element {
    let (class, text) = match alert_type {
        AlertType::Critical => ("badge badge-critical", "Critical"),
        AlertType::Warning => ("badge badge-warning", "Warning"),
        AlertType::Info => ("badge badge-info", "Info"),
    };
    rsx! {
        span { class: class, "{text}" }
    }
}

#[component]
pub fn SeverityBadge(severity: Severity) -> Element {
    let (class, text) = match severity {
        Severity::High => ("badge badge-critical", "High"),
        Severity::Medium => ("badge badge-warning", "Medium"),
        Severity::Low => ("badge badge-info", "Low"),
    };
    rsx! {
        span { class: class, "{text}" }
    }
}
