/// A cited token, split by where its construct lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Citation<'a> {
    /// Label, definition key or theorem name in the same document.
    Local(&'a str),
    /// `FILE:reference` into the library, e.g. `XBOOLE_0:def 1`.
    Library { file_label: &'a str, reference: &'a str },
}

impl<'a> Citation<'a> {
    /// Split on the first `:`; anything without one is local.
    pub fn parse(token: &'a str) -> Self {
        match token.split_once(':') {
            Some((file_label, reference)) => Citation::Library { file_label, reference },
            None => Citation::Local(token),
        }
    }
}
