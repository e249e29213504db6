/// Problems found while building a route table or converting a URL into a
/// typed route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Two routes join to the same full path pattern.
    #[error("duplicate route path: {0}")]
    DuplicatePath(String),
    /// Two routes share the same name.
    #[error("duplicate route name: {0}")]
    DuplicateName(&'static str),
    /// A `:` or `:?` segment with nothing after it.
    #[error("empty parameter name in route path: {0}")]
    EmptyParamName(String),
    /// No declared route matches the URL.
    #[error("no route matches path: {0}")]
    NoMatch(String),
}
