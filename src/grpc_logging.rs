//! Tower layer logging every gRPC call with its status and duration.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use http::{Request, Response};
use tower::{Layer, Service};
use tracing::{debug, info, warn};

/// Split `/package.Service/Method` into service and method.
#[must_use]
pub fn split_grpc_path(path: &str) -> (&str, &str) {
    let trimmed = path.trim_start_matches('/');
    match trimmed.split_once('/') {
        Some((service, method)) if !service.is_empty() && !method.is_empty() => (service, method),
        _ => ("unknown", "unknown"),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GrpcLoggingLayer;

impl<S> Layer<S> for GrpcLoggingLayer {
    type Service = GrpcLoggingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        GrpcLoggingService { inner }
    }
}

#[derive(Debug, Clone)]
pub struct GrpcLoggingService<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for GrpcLoggingService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let start = Instant::now();
        let (service, method) = split_grpc_path(req.uri().path());
        let (service, method) = (service.to_string(), method.to_string());
        debug!(grpc.service = %service, grpc.method = %method, "gRPC request started");

        // Use the clone that was driven to readiness, leave a fresh one behind
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        Box::pin(async move {
            let result = inner.call(req).await;
            let duration_ms = start.elapsed().as_millis();
            match &result {
                Ok(response) => {
                    let status = response
                        .headers()
                        .get("grpc-status")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("0");
                    info!(
                        grpc.service = %service,
                        grpc.method = %method,
                        grpc.status = %status,
                        duration_ms = %duration_ms,
                        "gRPC request completed"
                    );
                }
                Err(_) => {
                    warn!(
                        grpc.service = %service,
                        grpc.method = %method,
                        duration_ms = %duration_ms,
                        "gRPC request failed"
                    );
                }
            }
            result
        })
    }
}
