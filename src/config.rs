use clap::Parser;


/// Listens on every interface, like the Jetty server this replaces
pub const DEFAULT_BIND: &'static str = "0.0.0.0:8080";


/// Accepts "host:port" where port is a number
fn parse_bind(bind: &str) -> Result<String, String> {
    let valid = match bind.rfind(':') {
        Some(split) => split > 0 && bind[split + 1..].parse::<u16>().is_ok(),
        None => false,
    };

    if valid {
        Ok(bind.to_owned())
    } else {
        Err(format!("invalid bind address {:?}, expected host:port", bind))
    }
}


#[derive(Debug, Clone, PartialEq, Parser)]
#[command(
    name = "ranker",
    version,
    about = "Scores how well a key phrase matches an HTML document"
)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "RANKER_BIND", default_value = DEFAULT_BIND, value_parser = parse_bind)]
    pub bind: String,
}


impl Default for Config {
    fn default() -> Config {
        Config {
            bind: DEFAULT_BIND.to_owned(),
        }
    }
}


#[cfg(test)]
mod tests {
    use clap::Parser;
    use clap::error::ErrorKind;

    use super::{Config, DEFAULT_BIND};

    #[test]
    fn test_default() {
        // Only meaningful when RANKER_BIND isn't set in the test environment
        if std::env::var_os("RANKER_BIND").is_none() {
            assert_eq!(Config::try_parse_from(&["ranker"]).unwrap(), Config::default());
            assert_eq!(Config::default().bind, DEFAULT_BIND);
        }
    }

    #[test]
    fn test_bind_argument() {
        assert_eq!(Config::try_parse_from(&["ranker", "--bind", "localhost:9000"]).unwrap().bind, "localhost:9000");
        assert_eq!(Config::try_parse_from(&["ranker", "--bind=127.0.0.1:80"]).unwrap().bind, "127.0.0.1:80");
    }

    #[test]
    fn test_invalid_bind() {
        for bind in &["8080", "localhost:http", ":8080", "localhost:70000"] {
            let error = Config::try_parse_from(&["ranker", "--bind", *bind]).unwrap_err();

            assert_eq!(error.kind(), ErrorKind::ValueValidation, "bind: {}", bind);
        }
    }

    #[test]
    fn test_bad_arguments() {
        assert_eq!(Config::try_parse_from(&["ranker", "--bind"]).unwrap_err().kind(), ErrorKind::InvalidValue);
        assert_eq!(Config::try_parse_from(&["ranker", "--port", "80"]).unwrap_err().kind(), ErrorKind::UnknownArgument);
        assert_eq!(Config::try_parse_from(&["ranker", "--help"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
    }
}
