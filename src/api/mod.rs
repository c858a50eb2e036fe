#[macro_use]
mod utils;
mod rank_api;
#[cfg(test)]
mod tests;

use std::sync::Arc;

use iron::prelude::*;
use iron::typemap::Key;
use router::Router;
use slog::{info, crit};

use crate::system::System;


fn get_router() -> Router {
    router!(rank_get: get "/" => rank_api::view_rank,
            rank_post: post "/" => rank_api::view_rank,
            explain_get: get "/_explain" => rank_api::view_explain,
            explain_post: post "/_explain" => rank_api::view_explain,
            status: get "/_status" => rank_api::view_status)
}


// The "Context" struct just wraps Arc<System> so we can put it into chain.link()
// Workaround for: https://github.com/iron/persistent/issues/55

struct Context {
    system: Arc<System>,
}


impl Context {
    fn new(system: Arc<System>) -> Context {
        Context {
            system: system,
        }
    }
}


impl Key for Context {
    type Value = Context;
}


fn get_chain(system: Arc<System>) -> Chain {
    let mut chain = Chain::new(get_router());
    chain.link(persistent::Read::<Context>::both(Context::new(system)));
    chain
}


pub fn api_main(system: Arc<System>) {
    let chain = get_chain(system.clone());
    let ref bind = system.config.bind;
    info!(system.log, "[api] listening"; "scheme" => "http", "address" => bind);

    if let Err(error) = Iron::new(chain).http(bind.as_str()) {
        crit!(system.log, "[api] unable to start api server"; "address" => bind, "error" => %error);
    }
}
