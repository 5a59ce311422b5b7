//! Conversions between router paths and URL fragments.
//!
//! In hash mode the router path lives in the fragment: `/about` is shown as
//! `#/about`. Empty fragments map to the root path.

/// Router path encoded in a URL hash.
///
/// `""`, `"#"` and `"#/"` all map to `/`; a missing leading slash is added.
pub fn hash_to_path(hash: &str) -> String {
    let fragment = hash.strip_prefix('#').unwrap_or(hash);

    if fragment.is_empty() {
        "/".to_string()
    } else if fragment.starts_with('/') {
        fragment.to_string()
    } else {
        format!("/{}", fragment)
    }
}

/// URL hash for a router path.
pub fn path_to_hash(path: &str) -> String {
    if path.starts_with('/') {
        format!("#{}", path)
    } else {
        format!("#/{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_to_path() {
        assert_eq!(hash_to_path(""), "/");
        assert_eq!(hash_to_path("#"), "/");
        assert_eq!(hash_to_path("#/"), "/");
        assert_eq!(hash_to_path("#/about"), "/about");
        assert_eq!(hash_to_path("#about"), "/about");
        assert_eq!(hash_to_path("#/movies/550"), "/movies/550");
    }

    #[test]
    fn test_path_to_hash() {
        assert_eq!(path_to_hash("/"), "#/");
        assert_eq!(path_to_hash("/about"), "#/about");
        assert_eq!(path_to_hash("about"), "#/about");
    }

    #[test]
    fn test_hash_path_round_trip() {
        for path in ["/", "/about", "/movies/550"] {
            assert_eq!(hash_to_path(&path_to_hash(path)), path);
        }
    }
}
