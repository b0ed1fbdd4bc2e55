use serde::{Deserialize, Serialize};

/// Supported languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ar,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        match code.as_str() {
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            c if c == "ar" || c.starts_with("ar-") => Some(Lang::Ar),
            _ => None,
        }
    }

    /// The language the toggle switches to.
    pub fn other(self) -> Self {
        match self {
            Lang::En => Lang::Ar,
            Lang::Ar => Lang::En,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Lang::En => Direction::Ltr,
            Lang::Ar => Direction::Rtl,
        }
    }
}

/// Reading direction, applied to the document root as `dir`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_and_accept_regions() {
        assert_eq!(Lang::from_code("EN"), Some(Lang::En));
        assert_eq!(Lang::from_code("en-GB"), Some(Lang::En));
        assert_eq!(Lang::from_code("ar-PS"), Some(Lang::Ar));
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::Ar.code(), "ar");
    }

    #[test]
    fn arabic_reads_right_to_left() {
        assert_eq!(Lang::En.direction(), Direction::Ltr);
        assert_eq!(Lang::Ar.direction(), Direction::Rtl);
        assert_eq!(Lang::Ar.direction().as_str(), "rtl");
        assert_eq!(Lang::En.other(), Lang::Ar);
        assert_eq!(Lang::Ar.other(), Lang::En);
    }
}
