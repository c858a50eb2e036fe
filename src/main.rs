#[macro_use]
extern crate router;

mod api;
mod config;
mod logger;
mod system;

use std::sync::{Arc, Mutex};

use clap::Parser;
use slog::{Drain, Logger, info, o};

use crate::config::Config;
use crate::system::System;


const VERSION: &'static str = env!("CARGO_PKG_VERSION");


fn main() {
    let config = Config::parse();

    println!("ranker ({})", VERSION);
    println!("");

    if let Err(error) = logger::init() {
        eprintln!("ranker: unable to install logger: {}", error);
    }

    let decorator = slog_term::TermDecorator::new().build();
    let drain = Mutex::new(slog_term::FullFormat::new(decorator).build()).fuse();
    let log = Logger::root(drain, o!());

    info!(log, "[sys] starting ranker"; "version" => VERSION);

    let system = Arc::new(System::new(log, config));
    api::api_main(system);
}
