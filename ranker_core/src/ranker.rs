use log::debug;

use crate::analysis::Analyzer;
use crate::index::EphemeralIndex;
use crate::query::parser::{QueryParser, ParseError};
use crate::scoring::{self, Explanation};


/// Scores a key phrase against the text of one document
///
/// Holds no per-request state, so a single `Ranker` can be shared between
/// threads. Every call builds and then discards its own index.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranker {
    analyzer: Analyzer,
    parser: QueryParser,
}


impl Ranker {
    pub fn new(analyzer: Analyzer) -> Ranker {
        Ranker {
            parser: QueryParser::new(analyzer.clone()),
            analyzer: analyzer,
        }
    }

    fn build_index(&self, text: &str) -> EphemeralIndex {
        let index = EphemeralIndex::build(self.analyzer.analyze(text));
        debug!("indexed {} tokens ({} distinct terms)", index.length(), index.term_count());
        index
    }

    pub fn rank(&self, text: &str, query: &str) -> Result<f64, ParseError> {
        let query = self.parser.parse(query)?;
        let index = self.build_index(text);

        Ok(scoring::score(&index, &query))
    }

    pub fn explain(&self, text: &str, query: &str) -> Result<Explanation, ParseError> {
        let query = self.parser.parse(query)?;
        let index = self.build_index(text);

        Ok(scoring::explain(&index, &query))
    }
}


impl Default for Ranker {
    fn default() -> Ranker {
        Ranker::new(Analyzer::default())
    }
}


/// Formats a score with two decimal places
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}
