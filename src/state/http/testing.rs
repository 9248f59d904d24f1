use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Request, Response, Server};
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub struct Route {
    pub method: &'static str,
    pub path: &'static str,
    pub status: u16,
    pub body: String,
}

pub fn route(method: &'static str, path: &'static str, status: u16, body: &str) -> Route {
    Route {
        method,
        path,
        status,
        body: body.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

/// Local backend stand-in that answers with canned responses and keeps every
/// request it receives.
pub struct MockServer {
    pub url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
    runtime: JoinHandle<()>,
}

impl MockServer {
    pub async fn start(routes: Vec<Route>) -> Self {
        let routes = Arc::new(routes);
        let requests = Arc::new(Mutex::new(Vec::new()));

        let service = {
            let requests = requests.clone();

            make_service_fn(move |_| {
                let routes = routes.clone();
                let requests = requests.clone();

                async move {
                    Ok::<_, Infallible>(service_fn(move |req: Request<Body>| {
                        request_handler(req, routes.clone(), requests.clone())
                    }))
                }
            })
        };

        let address: SocketAddr = ([127, 0, 0, 1], 0).into();
        let server = Server::bind(&address).serve(service);
        let url = format!("http://{}", server.local_addr());

        let runtime = tokio::spawn(async move {
            if let Err(error) = server.await {
                eprintln!("Server error: {error}");
            }
        });

        Self {
            url,
            requests,
            runtime,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.runtime.abort();
    }
}

async fn request_handler(
    req: Request<Body>,
    routes: Arc<Vec<Route>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
) -> Result<Response<Body>, Infallible> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let headers = req
        .headers()
        .iter()
        .map(|(key, value)| {
            (
                key.to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let body = hyper::body::to_bytes(req.into_body())
        .await
        .map(|bytes| bytes.to_vec())
        .unwrap_or_default();

    requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        headers,
        body,
    });

    let response = match routes
        .iter()
        .find(|route| route.method == method && route.path == path)
    {
        Some(route) => Response::builder()
            .status(route.status)
            .header("content-type", "application/json")
            .body(Body::from(route.body.clone())),

        None => Response::builder()
            .status(404)
            .header("content-type", "application/json")
            .body(Body::from(r#"{"detail":"Not Found"}"#)),
    };

    Ok(response.unwrap())
}
