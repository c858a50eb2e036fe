
use std::sync::Arc;

use iron::prelude::*;
use iron::Headers;
use iron::headers::ContentType;
use iron_test::{request, response};
use slog::{Discard, Logger, o};
use url::form_urlencoded;

use crate::config::Config;
use crate::system::System;
use crate::api::get_chain;


fn chain() -> Chain {
    // Start a dummy instance
    let log = Logger::root(Discard, o!());
    let system = Arc::new(System::new(log, Config::default()));

    get_chain(system)
}


pub fn encode(params: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish()
}


pub fn get(path: &str) -> IronResult<Response> {
    request::get(&format!("http://localhost:8080{}", path), Headers::new(), &chain())
}


pub fn post(path: &str, body: &str) -> IronResult<Response> {
    let mut headers = Headers::new();
    headers.set(ContentType::form_url_encoded());

    request::post(&format!("http://localhost:8080{}", path), headers, body, &chain())
}


pub fn content_type(response: &Response) -> Option<Vec<u8>> {
    response.headers.get_raw("Content-Type").and_then(|raw| raw.first().cloned())
}


pub fn body(response: Response) -> String {
    response::extract_body_to_string(response)
}
