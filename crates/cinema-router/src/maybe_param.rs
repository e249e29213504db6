use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use std::str::FromStr;

use crate::outlet::RouteParams;

/// Parsed state of a route or query parameter that is allowed to be absent.
#[derive(Debug, PartialEq, Clone, Eq)]
pub enum ParamValue<T> {
    /// Not present in the URL, or present but empty.
    Missing,
    /// Present but not parseable as `T`; holds the raw text.
    ParseError(String),
    Value(T),
}

impl<T: FromStr> ParamValue<T> {
    /// Classifies a raw parameter string.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Self::Missing,
            Some(s) => match s.parse::<T>() {
                Ok(parsed) => Self::Value(parsed),
                Err(_) => Self::ParseError(s.to_string()),
            },
        }
    }
}

impl<T> ParamValue<T> {
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Missing | Self::ParseError(_) => None,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.ok().unwrap_or(default)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Converts into a `Result`, naming `key` when the value is missing.
    pub fn require(self, key: &'static str) -> Result<T, ParamError> {
        match self {
            Self::Value(v) => Ok(v),
            Self::Missing => Err(ParamError::Missing(key)),
            Self::ParseError(raw) => Err(ParamError::ParseError(raw)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    #[error("missing param: {0}")]
    Missing(&'static str),
    #[error("failed to parse param: {0}")]
    ParseError(String),
}

/// Path parameter `key` of the current table match. Empty outside a view
/// rendered by [`route_outlet`](crate::route_outlet).
fn path_value(key: &'static str) -> Signal<Option<String>> {
    let params = use_context::<RouteParams>();
    Signal::derive(move || params.and_then(|params| params.get(key)))
}

fn query_value(key: &'static str) -> Signal<Option<String>> {
    let query = use_query_map();
    Signal::derive(move || query.with(|q| q.get_str(key).map(str::to_string)))
}

/// Generates a reactive wrapper that re-parses one path or query parameter
/// whenever the location changes.
macro_rules! define_typed_param_type {
    (
        $(#[$meta:meta])*
        $type_name:ident,
        $source:path
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $type_name<T>
        where
            T: FromStr + Send + Sync + Clone + PartialEq + 'static,
        {
            key: &'static str,
            memo: Memo<ParamValue<T>>,
        }

        // Copy regardless of `T`; the memo is an arena handle.
        impl<T> Clone for $type_name<T>
        where
            T: FromStr + Send + Sync + Clone + PartialEq + 'static,
        {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $type_name<T> where
            T: FromStr + Send + Sync + Clone + PartialEq + 'static
        {
        }

        impl<T> $type_name<T>
        where
            T: FromStr + Send + Sync + Clone + PartialEq + 'static,
        {
            /// Must be called inside a component rendered by the router.
            pub fn new(key: &'static str) -> Self {
                let raw = $source(key);
                let memo = Memo::new(move |_| raw.with(|r| ParamValue::from_raw(r.as_deref())));
                Self { key, memo }
            }

            pub fn key(&self) -> &'static str {
                self.key
            }

            pub fn get(&self) -> ParamValue<T> {
                self.memo.get()
            }

            /// `Some(T)` while the param parses, [`None`] otherwise.
            pub fn ok(&self) -> Memo<Option<T>> {
                let memo = self.memo;
                Memo::new(move |_| memo.get().ok())
            }

            pub fn is_missing(&self) -> Memo<bool> {
                let memo = self.memo;
                Memo::new(move |_| memo.with(ParamValue::is_missing))
            }
        }

        impl<T> From<&'static str> for $type_name<T>
        where
            T: FromStr + Send + Sync + Clone + PartialEq + 'static,
        {
            fn from(key: &'static str) -> Self {
                Self::new(key)
            }
        }
    };
}

define_typed_param_type!(
    /// A path parameter such as `:id`.
    MaybeParam,
    path_value
);
define_typed_param_type!(
    /// A `?key=value` query parameter.
    MaybeQuery,
    query_value
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_are_classified() {
        assert_eq!(ParamValue::<u32>::from_raw(None), ParamValue::Missing);
        assert_eq!(ParamValue::<u32>::from_raw(Some("")), ParamValue::Missing);
        assert_eq!(ParamValue::<u32>::from_raw(Some("42")), ParamValue::Value(42));
        assert_eq!(
            ParamValue::<u32>::from_raw(Some("abc")),
            ParamValue::ParseError("abc".into())
        );
    }

    #[test]
    fn require_reports_the_key() {
        assert_eq!(
            ParamValue::<String>::Missing.require("id"),
            Err(ParamError::Missing("id"))
        );
        assert_eq!(ParamValue::Value(String::from("7")).require("id"), Ok("7".into()));
    }

    #[test]
    fn unwrap_or_falls_back() {
        assert_eq!(ParamValue::<u8>::ParseError("x".into()).unwrap_or(3), 3);
        assert_eq!(ParamValue::Value(9u8).unwrap_or(3), 9);
    }

    #[test]
    fn path_param_reads_the_provided_match() {
        let owner = Owner::new();
        owner.with(|| {
            let params = crate::Params::from([("id".to_string(), "a b".to_string())]);
            let source = RwSignal::new(params);
            provide_context(RouteParams(Memo::new(move |_| source.get())));

            let id = MaybeParam::<String>::new("id");
            assert_eq!(id.get(), ParamValue::Value("a b".into()));
            source.set(crate::Params::new());
            assert!(id.get().is_missing());
        });
    }

    #[test]
    fn path_param_is_missing_outside_an_outlet() {
        let owner = Owner::new();
        owner.with(|| {
            assert!(MaybeParam::<u32>::new("id").get().is_missing());
        });
    }
}
