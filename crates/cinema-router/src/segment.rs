use std::fmt;

/// One `/`-separated piece of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteSegment {
    /// Literal text that must match exactly.
    Static(String),
    /// `:name`, a required parameter.
    Param(String),
    /// `:name?`, a parameter that may be absent at the end of the path.
    OptionalParam(String),
}

impl RouteSegment {
    /// Splits a pattern such as `/movie/:id?` into segments. Empty pieces
    /// (leading, trailing or doubled slashes) are dropped, so `""` and `"/"`
    /// both yield no segments.
    pub fn parse_all(pattern: &str) -> Vec<RouteSegment> {
        pattern
            .trim_start_matches('/')
            .split('/')
            .filter(|part| !part.is_empty())
            .map(|part| match part.strip_prefix(':') {
                Some(param) => match param.strip_suffix('?') {
                    Some(optional) => Self::OptionalParam(optional.to_string()),
                    None => Self::Param(param.to_string()),
                },
                None => Self::Static(part.to_string()),
            })
            .collect()
    }

    /// Parameter name for `Param` / `OptionalParam`, [`None`] for literals.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Self::Static(_) => None,
            Self::Param(name) | Self::OptionalParam(name) => Some(name),
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::OptionalParam(_))
    }
}

impl fmt::Display for RouteSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(text) => f.write_str(text),
            Self::Param(name) => write!(f, ":{name}"),
            Self::OptionalParam(name) => write!(f, ":{name}?"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_pattern() {
        let segs = RouteSegment::parse_all("/movie/:id/seat/:row?");
        assert_eq!(
            segs,
            vec![
                RouteSegment::Static("movie".into()),
                RouteSegment::Param("id".into()),
                RouteSegment::Static("seat".into()),
                RouteSegment::OptionalParam("row".into()),
            ]
        );
    }

    #[test]
    fn root_and_empty_have_no_segments() {
        assert!(RouteSegment::parse_all("/").is_empty());
        assert!(RouteSegment::parse_all("").is_empty());
    }

    #[test]
    fn relative_child_pattern() {
        assert_eq!(
            RouteSegment::parse_all(":id"),
            vec![RouteSegment::Param("id".into())]
        );
    }

    #[test]
    fn display_round_trips_pattern_text() {
        let text: Vec<String> = RouteSegment::parse_all("/a/:b/:c?")
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(text.join("/"), "a/:b/:c?");
    }
}
