use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Hard failures of reference resolution.
///
/// A token that denotes nothing is not an error; resolvers report it as
/// `None`.
#[derive(Debug, Error, Diagnostic)]
pub enum HoverError {
    #[error("library root is not configured; set the `{variable}` environment variable")]
    #[diagnostic(
        code(mizar::config::missing_root),
        help("point it at a Mizar installation containing an `abstr` directory")
    )]
    MissingConfiguration { variable: &'static str },

    #[error("cannot read library file `{}`", path.display())]
    #[diagnostic(code(mizar::library::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type HoverResult<T> = std::result::Result<T, HoverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_and_codes() {
        let err = HoverError::MissingConfiguration { variable: "MIZFILES" };
        assert!(err.to_string().contains("`MIZFILES`"));
        assert_eq!(err.code().map(|c| c.to_string()).as_deref(), Some("mizar::config::missing_root"));

        let err = HoverError::Io {
            path: PathBuf::from("/mml/abstr/tarski.abs"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("tarski.abs"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
