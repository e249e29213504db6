use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};

use crate::combine_paths::combine_paths;
use crate::error::RouteError;
use crate::segment::RouteSegment;

/// Percent-decoded path or query parameters, keyed by name.
pub type Params = BTreeMap<String, String>;

/// Data shared by every kind of route: its pattern, parsed segments, the view
/// it renders and an optional name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry<V> {
    path: &'static str,
    segments: Vec<RouteSegment>,
    view: V,
    name: Option<&'static str>,
}

impl<V> RouteEntry<V> {
    fn new(path: &'static str, view: V) -> Self {
        Self {
            path,
            segments: RouteSegment::parse_all(path),
            view,
            name: None,
        }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn name(&self) -> Option<&'static str> {
        self.name
    }
}

/// A single declaration in a [`RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDef<V> {
    /// Only literal segments, e.g. `/cinemas`.
    Static(RouteEntry<V>),
    /// At least one `:param` or `:param?` segment.
    Param(RouteEntry<V>),
    /// A group whose children match whatever follows its own pattern.
    Nested(RouteEntry<V>, Vec<RouteDef<V>>),
}

impl<V> RouteDef<V> {
    /// Declares a leaf route. Patterns containing parameters become
    /// [`RouteDef::Param`], all others [`RouteDef::Static`].
    pub fn route(path: &'static str, view: V) -> Self {
        let entry = RouteEntry::new(path, view);
        if entry.segments.iter().any(|s| s.param_name().is_some()) {
            Self::Param(entry)
        } else {
            Self::Static(entry)
        }
    }

    /// Declares a group of child routes under `path`.
    pub fn nested(path: &'static str, view: V, children: Vec<RouteDef<V>>) -> Self {
        Self::Nested(RouteEntry::new(path, view), children)
    }

    pub fn named(mut self, name: &'static str) -> Self {
        match &mut self {
            Self::Static(entry) | Self::Param(entry) | Self::Nested(entry, _) => {
                entry.name = Some(name)
            }
        }
        self
    }

    pub fn entry(&self) -> &RouteEntry<V> {
        match self {
            Self::Static(entry) | Self::Param(entry) | Self::Nested(entry, _) => entry,
        }
    }

    pub fn path(&self) -> &'static str {
        self.entry().path
    }

    pub fn view(&self) -> &V {
        &self.entry().view
    }

    pub fn name(&self) -> Option<&'static str> {
        self.entry().name
    }

    pub fn children(&self) -> &[RouteDef<V>] {
        match self {
            Self::Nested(_, children) => children,
            Self::Static(_) | Self::Param(_) => &[],
        }
    }

    /// Names of the parameters this route's own pattern declares.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.entry().segments.iter().filter_map(RouteSegment::param_name)
    }
}

/// The outcome of resolving a URL: the chain of routes from the outermost
/// group down to the leaf, plus the extracted parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a, V> {
    chain: Vec<&'a RouteDef<V>>,
    params: Params,
    query: Params,
}

impl<'a, V> RouteMatch<'a, V> {
    /// Outermost first, leaf last. Never empty.
    pub fn chain(&self) -> &[&'a RouteDef<V>] {
        &self.chain
    }

    pub fn leaf(&self) -> &'a RouteDef<V> {
        self.chain[self.chain.len() - 1]
    }

    /// The view of the deepest matched route.
    pub fn view(&self) -> &'a V {
        self.leaf().view()
    }

    pub fn name(&self) -> Option<&'static str> {
        self.leaf().name()
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// The full pattern that matched, e.g. `/movie/:id`.
    pub fn pattern(&self) -> String {
        self.chain
            .iter()
            .fold(String::from("/"), |acc, def| combine_paths(&acc, def.path()))
    }
}

/// An ordered, validated list of route declarations. Resolution walks the
/// list in declaration order and returns the first match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable<V> {
    routes: Vec<RouteDef<V>>,
}

impl<V> RouteTable<V> {
    pub fn new(routes: Vec<RouteDef<V>>) -> Result<Self, RouteError> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();
        for def in &routes {
            validate(def, "/", &mut paths, &mut names)?;
        }
        Ok(Self { routes })
    }

    pub fn routes(&self) -> &[RouteDef<V>] {
        &self.routes
    }

    /// Every addressable full pattern, in declaration order. An empty child
    /// pattern refines its parent and does not add a path of its own.
    pub fn paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        for def in &self.routes {
            collect_paths(def, "/", &mut out);
        }
        out
    }

    /// Matches `url` (path with optional `?query` and `#fragment`) against the
    /// table. First declared match wins. Segments are split before they are
    /// decoded, so `%2F` stays inside its segment.
    pub fn resolve(&self, url: &str) -> Option<RouteMatch<'_, V>> {
        let (path, query) = split_url(url);
        let input: Vec<Cow<'_, str>> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(decode_component)
            .collect();

        for def in &self.routes {
            let mut chain = Vec::new();
            let mut params = Params::new();
            if match_def(def, &input, &mut chain, &mut params) {
                log::trace!("{url} matched {}", def.path());
                return Some(RouteMatch { chain, params, query });
            }
        }
        log::debug!("no route matches {url}");
        None
    }
}

fn validate<V>(
    def: &RouteDef<V>,
    prefix: &str,
    paths: &mut HashSet<String>,
    names: &mut HashSet<&'static str>,
) -> Result<(), RouteError> {
    let full = combine_paths(prefix, def.path());

    if def.entry().segments.iter().any(|s| s.param_name() == Some("")) {
        return Err(RouteError::EmptyParamName(full));
    }
    let refines_parent = prefix != "/" && def.entry().segments.is_empty();
    if !refines_parent && !paths.insert(full.clone()) {
        return Err(RouteError::DuplicatePath(full));
    }
    if let Some(name) = def.name() {
        if !names.insert(name) {
            return Err(RouteError::DuplicateName(name));
        }
    }
    for child in def.children() {
        validate(child, &full, paths, names)?;
    }
    Ok(())
}

fn collect_paths<V>(def: &RouteDef<V>, prefix: &str, out: &mut Vec<String>) {
    let full = combine_paths(prefix, def.path());
    if prefix == "/" || !def.entry().segments.is_empty() {
        out.push(full.clone());
    }
    for child in def.children() {
        collect_paths(child, &full, out);
    }
}

/// Consumes the leading part of `input` described by `segments`, returning
/// how many input segments were used.
fn match_segments(
    segments: &[RouteSegment],
    input: &[Cow<'_, str>],
    params: &mut Params,
) -> Option<usize> {
    let mut consumed = 0;
    for seg in segments {
        match seg {
            RouteSegment::Static(text) => {
                if input.get(consumed).map(|s| &**s) != Some(text.as_str()) {
                    return None;
                }
                consumed += 1;
            }
            RouteSegment::Param(name) => {
                let value = input.get(consumed)?;
                params.insert(name.clone(), value.to_string());
                consumed += 1;
            }
            RouteSegment::OptionalParam(name) => {
                if let Some(value) = input.get(consumed) {
                    params.insert(name.clone(), value.to_string());
                    consumed += 1;
                }
            }
        }
    }
    Some(consumed)
}

fn match_def<'a, V>(
    def: &'a RouteDef<V>,
    input: &[Cow<'_, str>],
    chain: &mut Vec<&'a RouteDef<V>>,
    params: &mut Params,
) -> bool {
    let mut own = Params::new();
    let Some(consumed) = match_segments(&def.entry().segments, input, &mut own) else {
        return false;
    };
    let rest = &input[consumed..];
    chain.push(def);

    for child in def.children() {
        let mark = chain.len();
        let mut child_params = Params::new();
        if match_def(child, rest, chain, &mut child_params) {
            params.extend(own);
            params.extend(child_params);
            return true;
        }
        chain.truncate(mark);
    }

    // A group with no matching child still matches its own exact path.
    if rest.is_empty() {
        params.extend(own);
        return true;
    }
    chain.pop();
    false
}

/// Percent-decodes one path segment or query component. Text that does not
/// decode to UTF-8 is kept as written.
fn decode_component(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

/// Splits a URL into its raw path and decoded query parameters, discarding
/// any fragment. Query text is form-encoded, so `+` stands for a space.
pub(crate) fn split_url(url: &str) -> (&str, Params) {
    let url = url.split_once('#').map_or(url, |(before, _)| before);
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url, None),
    };

    let mut params = Params::new();
    for pair in query.into_iter().flat_map(|q| q.split('&')).filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_component(&key.replace('+', " ")).into_owned();
        let value = decode_component(&value.replace('+', " ")).into_owned();
        params.insert(key, value);
    }
    (path, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum V {
        Root,
        List,
        Detail,
        Group,
        Inner,
    }

    fn table() -> RouteTable<V> {
        RouteTable::new(vec![
            RouteDef::route("/", V::Root),
            RouteDef::route("/list", V::List),
            RouteDef::nested(
                "/detail",
                V::Detail,
                vec![RouteDef::route(":id", V::Detail).named("detailId")],
            )
            .named("detail"),
            RouteDef::nested("/group", V::Group, vec![RouteDef::route("", V::Inner)]),
        ])
        .unwrap()
    }

    #[test]
    fn static_routes_resolve() {
        let t = table();
        assert_eq!(t.resolve("/").map(|m| *m.view()), Some(V::Root));
        assert_eq!(t.resolve("/list").map(|m| *m.view()), Some(V::List));
        assert_eq!(t.resolve("/list/").map(|m| *m.view()), Some(V::List));
        assert!(t.resolve("/list/extra").is_none());
    }

    #[test]
    fn nested_param_is_extracted() {
        let t = table();
        let m = t.resolve("/detail/7").unwrap();
        assert_eq!(*m.view(), V::Detail);
        assert_eq!(m.param("id"), Some("7"));
        assert_eq!(m.name(), Some("detailId"));
        assert_eq!(m.chain().len(), 2);
        assert_eq!(m.pattern(), "/detail/:id");
    }

    #[test]
    fn nested_group_without_child_matches_itself() {
        let t = table();
        let m = t.resolve("/detail").unwrap();
        assert_eq!(*m.view(), V::Detail);
        assert_eq!(m.param("id"), None);
        assert_eq!(m.name(), Some("detail"));
        assert_eq!(m.chain().len(), 1);
    }

    #[test]
    fn empty_child_refines_group() {
        let t = table();
        let m = t.resolve("/group").unwrap();
        assert_eq!(*m.view(), V::Inner);
        assert_eq!(m.chain().len(), 2);
        assert_eq!(m.pattern(), "/group");
    }

    #[test]
    fn query_and_fragment_are_split_off() {
        let t = table();
        let m = t.resolve("/detail/9?lang=en&flag#top").unwrap();
        assert_eq!(m.param("id"), Some("9"));
        assert_eq!(m.query("lang"), Some("en"));
        assert_eq!(m.query("flag"), Some(""));
    }

    #[test]
    fn segments_and_query_are_percent_decoded() {
        let t = table();
        let m = t.resolve("/detail/a%2Fb%20c?rating=MA15%2B&q=two+words").unwrap();
        assert_eq!(m.param("id"), Some("a/b c"));
        assert_eq!(m.query("rating"), Some("MA15+"));
        assert_eq!(m.query("q"), Some("two words"));
        assert_eq!(t.resolve("/%6Cist").map(|m| *m.view()), Some(V::List));
    }

    #[test]
    fn undecodable_segments_are_kept_verbatim() {
        let t = table();
        let m = t.resolve("/detail/%FF").unwrap();
        assert_eq!(m.param("id"), Some("%FF"));
    }

    #[test]
    fn first_declared_match_wins() {
        let t = RouteTable::new(vec![
            RouteDef::route("/item/:id", V::Detail),
            RouteDef::route("/item/new", V::List),
        ])
        .unwrap();
        assert_eq!(t.resolve("/item/new").map(|m| *m.view()), Some(V::Detail));
    }

    #[test]
    fn optional_param_may_be_absent() {
        let t = RouteTable::new(vec![RouteDef::route("/movie/:id?", V::Detail)]).unwrap();
        assert_eq!(t.resolve("/movie").unwrap().param("id"), None);
        assert_eq!(t.resolve("/movie/3").unwrap().param("id"), Some("3"));
    }

    #[test]
    fn unknown_path_does_not_match() {
        assert!(table().resolve("/unknown").is_none());
    }

    #[test]
    fn rejects_duplicate_paths() {
        let err = RouteTable::new(vec![
            RouteDef::route("/list", V::List),
            RouteDef::nested("/", V::Group, vec![RouteDef::route("list", V::Inner)]),
        ])
        .unwrap_err();
        assert_eq!(err, RouteError::DuplicatePath("/list".into()));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = RouteTable::new(vec![
            RouteDef::route("/a", V::List).named("same"),
            RouteDef::route("/b", V::List).named("same"),
        ])
        .unwrap_err();
        assert_eq!(err, RouteError::DuplicateName("same"));
    }

    #[test]
    fn rejects_empty_param_name() {
        let err = RouteTable::new(vec![RouteDef::route("/a/:", V::List)]).unwrap_err();
        assert_eq!(err, RouteError::EmptyParamName("/a/:".into()));
    }

    #[test]
    fn paths_skip_empty_children() {
        assert_eq!(table().paths(), vec!["/", "/list", "/detail", "/detail/:id", "/group"]);
    }

    #[test]
    fn route_kind_follows_pattern() {
        assert!(matches!(RouteDef::route("/a", V::List), RouteDef::Static(_)));
        assert!(matches!(RouteDef::route("/a/:b", V::List), RouteDef::Param(_)));
        let names: Vec<_> = RouteDef::route("/a/:b/:c?", V::List)
            .param_names()
            .map(str::to_owned)
            .collect();
        assert_eq!(names, vec!["b", "c"]);
    }
}
