//! A throwaway GitHub stand-in. It answers with scripted responses in order and records every
//! request it receives.

#![allow(dead_code)]

use futures::future;
use hyper::{
    body,
    header::ACCEPT,
    server::conn::AddrStream,
    service::{make_service_fn, service_fn},
    Body, Method, Request, Response, Server, StatusCode,
};
use std::{
    collections::VecDeque,
    convert::Infallible,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

pub const PREVIEW: &str = "application/vnd.github.swamp-thing-preview+json";

pub const INVITATION_JSON: &str = include_str!("../fixtures/repository-invitation.json");

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub accept: Option<String>,
    pub body: String,
}

#[derive(Clone, Debug)]
pub struct ScriptedResponse {
    status: StatusCode,
    headers: Vec<(&'static str, String)>,
    body: String,
}

impl ScriptedResponse {
    pub fn status(status: u16) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            headers: Vec::new(),
            body: String::new(),
        }
    }

    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self::status(status)
            .header("Content-Type", "application/json; charset=utf-8")
            .body(body)
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

#[derive(Default)]
struct State {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<VecDeque<ScriptedResponse>>,
}

pub struct MockGithub {
    addr: SocketAddr,
    state: Arc<State>,
}

impl MockGithub {
    pub fn start() -> Self {
        let state = Arc::new(State::default());

        let service_state = state.clone();
        let make_service = make_service_fn(move |_socket: &AddrStream| {
            let state = service_state.clone();

            future::ok::<_, Infallible>(service_fn(move |request| {
                let state = state.clone();
                handle(state, request)
            }))
        });

        let server = Server::bind(&([127, 0, 0, 1], 0).into()).serve(make_service);
        let addr = server.local_addr();
        tokio::spawn(server);

        Self { addr, state }
    }

    /// Base URL, with trailing slash, to hand to the client under test
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn respond(&self, response: ScriptedResponse) -> &Self {
        self.state.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn handle(state: Arc<State>, request: Request<Body>) -> Result<Response<Body>, Infallible> {
    let (parts, body) = request.into_parts();
    let body = body::to_bytes(body).await.unwrap_or_default();

    state.requests.lock().unwrap().push(RecordedRequest {
        method: parts.method,
        path: parts.uri.path().to_owned(),
        query: parts.uri.query().map(ToOwned::to_owned),
        accept: parts
            .headers
            .get(ACCEPT)
            .and_then(|h| h.to_str().ok())
            .map(ToOwned::to_owned),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let scripted = state
        .responses
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| ScriptedResponse::json(500, r#"{"message": "no scripted response"}"#));

    let mut builder = Response::builder().status(scripted.status);
    for (name, value) in scripted.headers {
        builder = builder.header(name, value);
    }

    Ok(builder.body(Body::from(scripted.body)).unwrap())
}

/// An invitation document with the given id, based on the shared fixture
pub fn invitation_json(id: u64) -> String {
    let mut invitation: serde_json::Value = serde_json::from_str(INVITATION_JSON).unwrap();
    invitation["id"] = id.into();
    invitation.to_string()
}
