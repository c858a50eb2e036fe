use iron::prelude::*;
use iron::status;
use serde_json::json;
use slog::{info, warn, error};

use ranker_core::format_score;

use crate::VERSION;
use crate::api::utils::{json_response, html_response, query_error_response, read_params, non_blank};


pub const GREETING: &'static str = "<h1>Ranker2 - please give me some work to do</h1>\n";


pub fn view_rank(req: &mut Request) -> IronResult<Response> {
    let ref system = get_system!(req);
    let params = read_params(req)?;

    let (html, key_phrase) = match (non_blank(&params, "html"), non_blank(&params, "keyPhrase")) {
        (Some(html), Some(key_phrase)) => (html, key_phrase),
        _ => return Ok(html_response(status::Ok, GREETING)),
    };

    match system.ranker.rank(html, key_phrase) {
        Ok(score) => {
            info!(system.log, "[api] ranked document"; "length" => html.len(), "key_phrase" => key_phrase, "score" => score);

            Ok(html_response(status::Ok, format!("{}\n", format_score(score))))
        }
        Err(error) => {
            warn!(system.log, "[api] bad key phrase"; "key_phrase" => key_phrase, "error" => %error);

            Ok(query_error_response(&error))
        }
    }
}


pub fn view_explain(req: &mut Request) -> IronResult<Response> {
    let ref system = get_system!(req);
    let params = read_params(req)?;

    let (html, key_phrase) = match (non_blank(&params, "html"), non_blank(&params, "keyPhrase")) {
        (Some(html), Some(key_phrase)) => (html, key_phrase),
        _ => {
            return Ok(json_response(status::BadRequest, "{\"message\": \"Missing html or keyPhrase parameter\"}"));
        }
    };

    let explanation = match system.ranker.explain(html, key_phrase) {
        Ok(explanation) => explanation,
        Err(error) => {
            warn!(system.log, "[api] bad key phrase"; "key_phrase" => key_phrase, "error" => %error);

            return Ok(query_error_response(&error));
        }
    };

    match serde_json::to_string(&explanation) {
        Ok(body) => Ok(json_response(status::Ok, body)),
        Err(e) => {
            error!(system.log, "[api] unable to serialize explanation"; "error" => %e);

            Err(IronError::new(e, status::InternalServerError))
        }
    }
}


pub fn view_status(_: &mut Request) -> IronResult<Response> {
    Ok(json_response(status::Ok, json!({
        "name": "ranker",
        "version": {
            "number": VERSION
        }
    }).to_string()))
}
