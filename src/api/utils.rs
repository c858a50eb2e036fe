use std::collections::HashMap;
use std::io::Read;

use iron::prelude::*;
use iron::status;
use iron::modifier::Modifier;
use serde_json::json;
use url::form_urlencoded;

use ranker_core::ParseError;


macro_rules! get_system {
    ($req: expr) => {{
        use iron::status;
        use crate::api::Context;

        match $req.get::<persistent::Read<Context>>() {
            Ok(context) => context.system.clone(),
            Err(error) => return Err(IronError::new(error, status::InternalServerError)),
        }
    }}
}


pub fn json_response<T: Modifier<Response>>(status: status::Status, content: T) -> Response {
    let mut response = Response::with((status, content));
    response.headers.set_raw("Content-Type", vec![b"application/json".to_vec()]);
    response
}


pub fn html_response<T: Modifier<Response>>(status: status::Status, content: T) -> Response {
    let mut response = Response::with((status, content));
    response.headers.set_raw("Content-Type", vec![b"text/html;charset=utf-8".to_vec()]);
    response
}


pub fn query_error_response(error: &ParseError) -> Response {
    json_response(status::BadRequest, json!({
        "message": "Query error",
        "error": error.to_string(),
    }).to_string())
}


/// Collects parameters from the query string and a form encoded body
///
/// Body parameters replace query string parameters with the same name.
pub fn read_params(req: &mut Request) -> IronResult<HashMap<String, String>> {
    let mut params = HashMap::new();

    if let Some(query) = req.url.query() {
        params.extend(form_urlencoded::parse(query.as_bytes()).into_owned());
    }

    let mut payload = String::new();
    if let Err(error) = req.body.read_to_string(&mut payload) {
        return Err(IronError::new(error, (status::BadRequest, "Couldn't read request body")));
    }

    if !payload.is_empty() {
        params.extend(form_urlencoded::parse(payload.as_bytes()).into_owned());
    }

    Ok(params)
}


/// Looks up a parameter, treating whitespace-only values as missing
pub fn non_blank<'a>(params: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    params.get(name)
        .map(|value| value.as_str())
        .filter(|value| !value.trim().is_empty())
}
