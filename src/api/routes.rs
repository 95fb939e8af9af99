//! The closed set of action paths.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiPath {
    PullMessages,
    DetectLanguage,
    Translate,
    Summarize,
    QueryChat,
}

static ROUTES: [(&str, ApiPath); 5] = [
    ("/pull-messages", ApiPath::PullMessages),
    ("/detect-language", ApiPath::DetectLanguage),
    ("/translate", ApiPath::Translate),
    ("/summarize", ApiPath::Summarize),
    ("/query-chat", ApiPath::QueryChat),
];

impl ApiPath {
    /// Exact, case-sensitive lookup in the route table.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        ROUTES
            .iter()
            .find(|(route, _)| *route == path)
            .map(|(_, api)| *api)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ApiPath::PullMessages => "/pull-messages",
            ApiPath::DetectLanguage => "/detect-language",
            ApiPath::Translate => "/translate",
            ApiPath::Summarize => "/summarize",
            ApiPath::QueryChat => "/query-chat",
        }
    }

    #[must_use]
    pub fn all() -> impl Iterator<Item = ApiPath> {
        ROUTES.iter().map(|(_, api)| *api)
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
