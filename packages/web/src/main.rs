use dioxus::prelude::*;
use uuid::Uuid;

use ui::components::Loading;
use ui::views::{
    AddPatientView, AlertsView, AnalysisView, CalibrationView, CaregiverDashboardView,
    ClinicianDashboardView, HistoryView, LiveMonitorView, PatientDashboardView, PatientDetailView,
    PatientsView, ProfileView,
};
use ui::{use_auth, AuthProvider};
use views::{CaregiverLayout, ClinicianLayout, Login, PatientLayout, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},

    #[nest("/patient")]
        #[layout(PatientLayout)]
            #[route("/dashboard", PatientDashboardView)]
            PatientDashboard {},
            #[route("/live", LiveMonitorView)]
            PatientLive {},
            #[route("/history", HistoryView)]
            PatientHistory {},
            #[route("/alerts", AlertsView)]
            PatientAlerts {},
            #[route("/calibration", CalibrationView)]
            PatientCalibration {},
            #[route("/profile", ProfileView)]
            PatientProfile {},
        #[end_layout]
    #[end_nest]

    #[nest("/caregiver")]
        #[layout(CaregiverLayout)]
            #[route("/dashboard", CaregiverDashboardView)]
            CaregiverDashboard {},
            #[route("/patients", PatientsView)]
            CaregiverPatients {},
            #[route("/patients/:patient_id", PatientDetail)]
            CaregiverPatientDetail { patient_id: Uuid },
            #[route("/add-patient", AddPatientView)]
            CaregiverAddPatient {},
            #[route("/alerts", AlertsView)]
            CaregiverAlerts {},
            #[route("/profile", ProfileView)]
            CaregiverProfile {},
        #[end_layout]
    #[end_nest]

    #[nest("/clinician")]
        #[layout(ClinicianLayout)]
            #[route("/dashboard", ClinicianDashboardView)]
            ClinicianDashboard {},
            #[route("/patients", PatientsView)]
            ClinicianPatients {},
            #[route("/patients/:patient_id", PatientDetail)]
            ClinicianPatientDetail { patient_id: Uuid },
            #[route("/add-patient", AddPatientView)]
            ClinicianAddPatient {},
            #[route("/alerts", AlertsView)]
            ClinicianAlerts {},
            #[route("/analysis", AnalysisView)]
            ClinicianAnalysis {},
            #[route("/profile", ProfileView)]
            ClinicianProfile {},
        #[end_layout]
    #[end_nest]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        init_tracing();
        match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime.block_on(launch_server()),
            Err(e) => tracing::error!("Failed to start tokio runtime: {}", e),
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,web=debug,api=debug,health=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower::ServiceBuilder;
    use tower_sessions::cookie::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    dotenvy::dotenv().ok();

    let settings = match api::settings::Settings::new() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Invalid settings: {}", e);
            return;
        }
    };

    let pool = match api::db::get_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            return;
        }
    };

    if let Err(e) = api::db::run_migrations(pool).await {
        tracing::error!("Failed to run migrations: {}", e);
        return;
    }

    // Sessions live next to the app tables
    let session_store = PostgresStore::new(pool.clone());
    if let Err(e) = session_store.migrate().await {
        tracing::error!("Failed to create session table: {}", e);
        return;
    }

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(settings.session.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            settings.session.expiry_days,
        )));

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(ServiceBuilder::new().layer(session_layer));

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            return;
        }
    };
    tracing::info!(
        "{} {} listening on {}",
        settings.app.name,
        settings.app.version,
        addr
    );

    if let Err(e) = axum::serve(listener, router.into_make_service()).await {
        tracing::error!("Server error: {}", e);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::UI_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Send `/` to the signed-in user's dashboard, or to the login page.
#[component]
fn Root() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        let state = auth();
        if state.loading {
            return;
        }
        match state.role() {
            Some(role) => nav.replace(role.dashboard_route()),
            None => nav.replace(Route::Login {}),
        };
    });

    rsx! { Loading {} }
}

/// Keyed so that moving between patients starts each page fresh.
#[component]
fn PatientDetail(patient_id: Uuid) -> Element {
    rsx! {
        PatientDetailView { key: "{patient_id}", patient_id }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Page not found" }
                p { class: "auth-subtitle", "Nothing lives at /{path}." }
                Link { to: Route::Root {}, class: "view-link", "Back to HyperWatch" }
            }
        }
    }
}
