use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use verity_adapters::SessionManager;
use verity_axum::{
    FlowState,
    routes::{check_code, code_request_form, code_verification_form, request_code},
};
use verity_core::{Route, SessionStore, VerificationProvider};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The two-step phone verification web application
pub struct VerificationService {
    router: Router,
}

impl VerificationService {
    /// Create a new VerificationService
    ///
    /// # Arguments
    /// * `provider` - Client of the verification provider (must be Clone)
    /// * `sessions` - Session manager over the session store
    /// * `assets_dir` - Directory served under `/assets`
    pub fn new<P, S>(provider: P, sessions: SessionManager<S>, assets_dir: String) -> Self
    where
        P: VerificationProvider + Clone + 'static,
        S: SessionStore + Clone + 'static,
    {
        let router = Router::new()
            .route(
                Route::CodeRequest.path(),
                get(code_request_form::<P, S>).post(request_code::<P, S>),
            )
            .route(
                Route::CodeVerification.path(),
                get(code_verification_form::<P, S>).post(check_code::<P, S>),
            )
            .with_state(FlowState::new(provider, sessions))
            .nest_service("/assets", ServeDir::new(assets_dir));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router that can be nested into another application
    pub fn as_nested_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.as_nested_router();

        tracing::info!("Verification service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
