use slog::Logger;

use ranker_core::Ranker;

use crate::config::Config;


pub struct System {
    pub log: Logger,
    pub config: Config,
    pub ranker: Ranker,
}


impl System {
    pub fn new(log: Logger, config: Config) -> System {
        System {
            log: log,
            config: config,
            ranker: Ranker::default(),
        }
    }
}
