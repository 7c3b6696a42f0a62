use crate::{Method, Query, Request, RequestError, Role, User};
use pushstream::{Observable, Observer, Teardown};
use serde_json::json;
use tracing::debug;

/// Two requests: a POST creating a user, and a GET fetching one by id
pub fn requests_mock() -> Vec<Request> {
    vec![
        Request {
            method: Method::Post,
            url: "/users".to_string(),
            body: Some(json!({ "name": "Grace", "role": "user" })),
            query: None,
        },
        Request { method: Method::Get, url: "/users".to_string(), body: None, query: Some(Query { id: 1 }) },
    ]
}

pub fn users_mock() -> Vec<User> {
    vec![
        User { id: 1, name: "Ada".to_string(), role: Role::Admin },
        User { id: 2, name: "Linus".to_string(), role: Role::User },
    ]
}

/// The mock traffic as a stream
pub fn requests() -> Observable<Request, RequestError> { Observable::from(requests_mock()) }

/// Parse a JSON array of requests. A malformed document yields a stream that fails immediately
/// rather than a stream of partial values.
pub fn requests_from_json(document: &str) -> Observable<Request, RequestError> {
    let parsed: Result<Vec<Request>, serde_json::Error> = serde_json::from_str(document);
    match parsed {
        Ok(requests) => Observable::from(requests),
        Err(error) => {
            // serde_json::Error isn't Clone, so keep the message and rebuild it per subscription
            let message = error.to_string();
            Observable::new(move |observer: Observer<Request, RequestError>| {
                debug!("requests_from_json: rejecting malformed document");
                observer.error(RequestError::Malformed(<serde_json::Error as serde::de::Error>::custom(&message)));
                Teardown::none()
            })
        }
    }
}
