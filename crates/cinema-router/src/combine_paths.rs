/// Joins a parent route pattern with a child pattern, yielding a single
/// absolute pattern. Child patterns may be relative (`":id"`) or empty (`""`).
pub fn combine_paths(prefix: &str, nested: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    let nested = nested.trim_start_matches('/');

    let prefix_is_root = prefix.is_empty();
    let nested_is_root = nested.is_empty();

    match (prefix_is_root, nested_is_root) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{nested}"),
        (false, true) if prefix.starts_with('/') => prefix.to_string(),
        (false, true) => format!("/{prefix}"),
        (false, false) => {
            combine_paths("", &format!("{}/{}", prefix.trim_start_matches('/'), nested))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::combine_paths;

    #[test]
    fn empty_child_keeps_parent() {
        assert_eq!(combine_paths("/home", ""), "/home");
        assert_eq!(combine_paths("/home/", "/"), "/home");
    }

    #[test]
    fn relative_child_is_appended() {
        assert_eq!(combine_paths("/movie", ":id"), "/movie/:id");
        assert_eq!(combine_paths("/movie/", "/:id"), "/movie/:id");
    }

    #[test]
    fn root_cases() {
        assert_eq!(combine_paths("", ""), "/");
        assert_eq!(combine_paths("/", "/"), "/");
        assert_eq!(combine_paths("/", "cinemas"), "/cinemas");
        assert_eq!(combine_paths("aboutus", ""), "/aboutus");
    }
}
