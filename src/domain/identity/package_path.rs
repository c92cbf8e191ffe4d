//! Helpers for reading versions and aliases out of Go import paths.

use std::sync::LazyLock;

use regex::Regex;

use super::tables::API_ROOT;

static VERSION_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v\d+((alpha|beta|rc)\d+)?$").expect("version token pattern must be valid")
});

/// Default version when nothing more specific is known.
pub const DEFAULT_VERSION: &str = "v1";

/// Whether a path segment is an API version such as `v1` or `v2beta1`.
pub fn is_version_token(segment: &str) -> bool {
    VERSION_TOKEN.is_match(segment)
}

/// The last version token found among the segments of `package`.
pub fn version_from_package(package: &str) -> Option<&str> {
    package.rsplit('/').find(|segment| is_version_token(segment))
}

/// Best-effort group name implied by a package path.
///
/// Under the builtin API root the group is the segment after the root;
/// elsewhere it is the last segment that is not a version.
pub fn group_from_package(package: &str) -> Option<String> {
    if let Some(rest) = package.strip_prefix(API_ROOT).and_then(|rest| rest.strip_prefix('/'))
        && let Some(group) = rest.split('/').next()
        && !group.is_empty()
    {
        return Some(group.to_string());
    }
    package
        .rsplit('/')
        .find(|segment| !segment.is_empty() && !is_version_token(segment))
        .map(str::to_string)
}

/// Import alias for a package path.
///
/// Versioned packages combine the last two segments (`k8s.io/api/apps/v1`
/// becomes `appsv1`) so that several versions of one package can coexist.
pub fn import_alias(package: &str) -> String {
    let segments: Vec<&str> = package.split('/').filter(|s| !s.is_empty()).collect();
    let raw = match segments.as_slice() {
        [] => String::new(),
        [.., parent, last] if is_version_token(last) => format!("{parent}{last}"),
        [.., last] => (*last).to_string(),
    };
    raw.chars().filter(|c| c.is_ascii_alphanumeric() || *c == '_').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_version_tokens() {
        assert!(is_version_token("v1"));
        assert!(is_version_token("v2beta1"));
        assert!(is_version_token("v1alpha3"));
        assert!(is_version_token("v3rc1"));
        assert!(!is_version_token("v1beta"));
        assert!(!is_version_token("version1"));
        assert!(!is_version_token("apps"));
    }

    #[test]
    fn version_prefers_last_segment() {
        assert_eq!(version_from_package("k8s.io/api/apps/v1"), Some("v1"));
        assert_eq!(version_from_package("example.com/v2/apis/v1beta1"), Some("v1beta1"));
        assert_eq!(version_from_package("example.com/apis/widgets"), None);
        assert_eq!(version_from_package(""), None);
    }

    #[test]
    fn group_from_builtin_and_third_party_paths() {
        assert_eq!(group_from_package("k8s.io/api/batch/v1").as_deref(), Some("batch"));
        assert_eq!(group_from_package("example.com/apis/widgets/v1").as_deref(), Some("widgets"));
        assert_eq!(group_from_package("v1"), None);
    }

    #[test]
    fn alias_joins_versioned_segments() {
        assert_eq!(import_alias("k8s.io/api/core/v1"), "corev1");
        assert_eq!(import_alias("controller/api/v1alpha1"), "apiv1alpha1");
        assert_eq!(import_alias("github.com/acme/widgets"), "widgets");
        assert_eq!(import_alias("github.com/acme/my-widgets"), "mywidgets");
        assert_eq!(import_alias("widgets"), "widgets");
    }
}
