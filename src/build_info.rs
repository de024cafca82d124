//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Version line shown by `--version`. Non-release builds name their profile.
pub fn version_string() -> String {
    let version = format!(
        "{} {} ({} {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    );
    if BUILD_PROFILE == "release" {
        version
    } else {
        format!("{} [{}]", version, BUILD_PROFILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_version_string_mentions_commit() {
        let version = version_string();
        assert!(version.starts_with("treasure-hunt "));
        assert!(version.contains(BUILD_COMMIT));
    }

    #[test]
    fn test_version_string_marks_non_release_builds() {
        let version = version_string();
        if BUILD_PROFILE == "release" {
            assert!(!version.contains('['));
        } else {
            assert!(version.ends_with(&format!("[{}]", BUILD_PROFILE)));
        }
    }
}
