use regex::Regex;
use std::sync::LazyLock;

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// Identity column of every sheet row. Rows that don't match ("GPCs", blank
// separators, stray notes) are expected and skipped.
regex!(SET_ID_REGEX, r"Set (\d+)");
