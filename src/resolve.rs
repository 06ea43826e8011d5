//! Module specifier resolution
//!
//! Maps one bare specifier to an esm.sh URL. Resolution is an ordered
//! decision chain evaluated with early return: exact registry match, scoped
//! prefix match, first-segment match, relative exclusion, Node built-in
//! exclusion, best-effort fallback. The resolver never fails; `None` means
//! the specifier is not this engine's concern and the sandbox loader handles
//! it (or surfaces a warning) itself.
//!
//! Unknown packages get a permissive fallback URL rather than an error:
//! blocking sandbox execution for a plausible but unregistered package is
//! worse than a URL that might 404.

use crate::registry::{PackageConfig, Registry};

/// CDN host every resolved URL points at.
pub const ESM_CDN_HOST: &str = "https://esm.sh";

/// Node built-ins with no browser equivalent.
pub const NODE_BUILTINS: [&str; 10] = [
    "fs", "path", "os", "crypto", "http", "https", "stream", "util", "events", "buffer",
];

/// Resolve a specifier to a CDN URL, or `None` when it has no mapping.
///
/// `None` covers relative/absolute specifiers and Node built-ins; everything
/// else resolves, through the registry when possible and through a
/// best-effort fallback otherwise.
pub fn resolve_specifier(specifier: &str, registry: &Registry) -> Option<String> {
    // 1. Exact registry match
    if let Some(config) = registry.get(specifier) {
        return Some(build_esm_url(config));
    }

    // 2. Scoped package: look up the @scope/name base, carry the rest as a
    //    subpath. Unregistered scoped packages are overwhelmingly UI-library
    //    peers, so the fallback declares the React pair as externals.
    if specifier.starts_with('@') {
        let segments: Vec<&str> = specifier.split('/').collect();
        if segments.len() >= 2 {
            let base = segments[..2].join("/");
            if let Some(config) = registry.get(&base) {
                let mut config = config.clone();
                if segments.len() > 2 {
                    config.subpath = Some(format!("/{}", segments[2..].join("/")));
                }
                return Some(build_esm_url(&config));
            }
            log::debug!("scoped package {specifier} not registered, using fallback URL");
            return Some(fallback_url(specifier));
        }
    }

    // 3. Non-scoped multi-segment: look up the first segment, carry the rest
    //    as a subpath.
    if !specifier.starts_with('.') && !specifier.starts_with('/') {
        if let Some((first, rest)) = specifier.split_once('/') {
            if let Some(config) = registry.get(first) {
                let mut config = config.clone();
                config.subpath = Some(format!("/{rest}"));
                return Some(build_esm_url(&config));
            }
        }
    }

    // 4. Relative and absolute specifiers resolve against the sandbox file
    //    system, not the CDN.
    if specifier.starts_with('.') || specifier.starts_with('/') {
        return None;
    }

    // 5. Node built-ins, as the whole specifier or its first segment
    //    (fs, fs/promises).
    let first_segment = specifier.split('/').next().unwrap_or(specifier);
    if NODE_BUILTINS.contains(&first_segment) {
        return None;
    }

    // 6. Unknown package: best-effort URL for the literal specifier.
    log::debug!("unknown package {specifier}, using fallback URL");
    Some(fallback_url(specifier))
}

/// Build the CDN URL for a package config.
///
/// Shape: `https://esm.sh/<package>[@<version>][<subpath>][?external=<a>,<b>]`
/// with the external list preserving declaration order.
pub fn build_esm_url(config: &PackageConfig) -> String {
    let mut url = format!("{ESM_CDN_HOST}/{}", config.package);
    if let Some(version) = &config.version {
        url.push('@');
        url.push_str(version);
    }
    if let Some(subpath) = &config.subpath {
        url.push_str(subpath);
    }
    if !config.external.is_empty() {
        url.push_str("?external=");
        url.push_str(&config.external.join(","));
    }
    url
}

fn fallback_url(specifier: &str) -> String {
    build_esm_url(&PackageConfig {
        package: specifier.to_string(),
        version: None,
        subpath: None,
        external: vec!["react".to_string(), "react-dom".to_string()],
    })
}
