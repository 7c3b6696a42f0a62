use crate::{users_mock, Method, Request, RequestError, Response};
use pushstream::{Handlers, Observable, Subscription};
use tracing::{error, info, warn};

/// Answer a single request against the mock user table
pub fn handle_request(request: &Request) -> Response {
    match request.method {
        Method::Post => Response::status(200),
        Method::Get => {
            let Some(query) = &request.query else {
                return Response::ok(serde_json::json!(users_mock()));
            };
            match users_mock().into_iter().find(|user| user.id == query.id) {
                Some(user) => Response::ok(serde_json::json!(user)),
                None => Response::status(404),
            }
        }
    }
}

pub fn handle_error(error: &RequestError) -> Response {
    error!("request stream failed: {error}");
    Response::status(500)
}

/// The handler set the demo subscribes with. Every handler answers with a response, which the
/// stream itself never looks at - it only shows up in the logs.
pub fn request_handlers() -> Handlers<Request, RequestError> {
    Handlers::new()
        .on_next(|request: Request| {
            let response = handle_request(&request);
            info!("{:?} {} -> {}", request.method, request.url, response.status);
            response
        })
        .on_error(|error: RequestError| {
            let response = handle_error(&error);
            warn!("responded {} to stream error", response.status);
            response
        })
        .on_complete(|| info!("request stream complete"))
}

/// Subscribe the demo handlers to a request stream
pub fn serve(requests: &Observable<Request, RequestError>) -> Subscription { requests.subscribe(request_handlers()) }
