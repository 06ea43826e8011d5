//! The curated built-in package table
//!
//! Pins cover the packages generated frontend projects reach for most:
//! React core and its JSX runtimes, the common UI/animation/state libraries,
//! and a handful of general-purpose utilities. Versions are pinned so a
//! sandbox session is reproducible; UI libraries declare `react` (and
//! `react-dom` where they render portals) as externals so the page never
//! loads two React instances.

use super::PackageConfig;

fn entry(
    specifier: &str,
    package: &str,
    version: &str,
    subpath: Option<&str>,
    external: &[&str],
) -> (String, PackageConfig) {
    (
        specifier.to_string(),
        PackageConfig {
            package: package.to_string(),
            version: Some(version.to_string()),
            subpath: subpath.map(str::to_string),
            external: external.iter().map(|name| (*name).to_string()).collect(),
        },
    )
}

pub(super) fn entries() -> Vec<(String, PackageConfig)> {
    const REACT: &str = "18.3.1";

    vec![
        // React core and JSX runtimes
        entry("react", "react", REACT, None, &[]),
        entry("react-dom", "react-dom", REACT, None, &["react"]),
        entry(
            "react-dom/client",
            "react-dom",
            REACT,
            Some("/client"),
            &["react"],
        ),
        entry(
            "react/jsx-runtime",
            "react",
            REACT,
            Some("/jsx-runtime"),
            &[],
        ),
        entry(
            "react/jsx-dev-runtime",
            "react",
            REACT,
            Some("/jsx-dev-runtime"),
            &[],
        ),
        // Icons & animation
        entry("lucide-react", "lucide-react", "0.469.0", None, &["react"]),
        entry(
            "framer-motion",
            "framer-motion",
            "11.15.0",
            None,
            &["react", "react-dom"],
        ),
        entry("motion", "motion", "12.0.0", None, &["react", "react-dom"]),
        entry(
            "motion/react",
            "motion",
            "12.0.0",
            Some("/react"),
            &["react", "react-dom"],
        ),
        // Radix primitives
        entry(
            "@radix-ui/react-dialog",
            "@radix-ui/react-dialog",
            "1.1.4",
            None,
            &["react", "react-dom"],
        ),
        entry(
            "@radix-ui/react-dropdown-menu",
            "@radix-ui/react-dropdown-menu",
            "2.1.4",
            None,
            &["react", "react-dom"],
        ),
        entry(
            "@radix-ui/react-popover",
            "@radix-ui/react-popover",
            "1.1.4",
            None,
            &["react", "react-dom"],
        ),
        entry(
            "@radix-ui/react-tooltip",
            "@radix-ui/react-tooltip",
            "1.1.6",
            None,
            &["react", "react-dom"],
        ),
        entry(
            "@radix-ui/react-tabs",
            "@radix-ui/react-tabs",
            "1.1.2",
            None,
            &["react", "react-dom"],
        ),
        entry(
            "@radix-ui/react-slot",
            "@radix-ui/react-slot",
            "1.1.1",
            None,
            &["react"],
        ),
        // Styling utilities
        entry("clsx", "clsx", "2.1.1", None, &[]),
        entry("tailwind-merge", "tailwind-merge", "2.6.0", None, &[]),
        entry(
            "class-variance-authority",
            "class-variance-authority",
            "0.7.1",
            None,
            &[],
        ),
        // State & data
        entry("zustand", "zustand", "5.0.2", None, &["react"]),
        entry(
            "@tanstack/react-query",
            "@tanstack/react-query",
            "5.62.11",
            None,
            &["react"],
        ),
        entry(
            "react-router-dom",
            "react-router-dom",
            "7.1.1",
            None,
            &["react", "react-dom"],
        ),
        entry(
            "react-hook-form",
            "react-hook-form",
            "7.54.2",
            None,
            &["react"],
        ),
        entry(
            "@hookform/resolvers",
            "@hookform/resolvers",
            "3.9.1",
            None,
            &["react"],
        ),
        entry("zod", "zod", "3.24.1", None, &[]),
        entry("axios", "axios", "1.7.9", None, &[]),
        // Charts & 3D
        entry(
            "recharts",
            "recharts",
            "2.15.0",
            None,
            &["react", "react-dom"],
        ),
        entry("d3", "d3", "7.9.0", None, &[]),
        entry("three", "three", "0.172.0", None, &[]),
        entry(
            "@react-three/fiber",
            "@react-three/fiber",
            "8.17.10",
            None,
            &["react", "react-dom"],
        ),
        entry(
            "@react-three/drei",
            "@react-three/drei",
            "9.120.4",
            None,
            &["react", "react-dom"],
        ),
        // Misc
        entry("sonner", "sonner", "1.7.1", None, &["react", "react-dom"]),
        entry("react-markdown", "react-markdown", "9.0.3", None, &["react"]),
        entry("date-fns", "date-fns", "4.1.0", None, &[]),
        entry("uuid", "uuid", "11.0.3", None, &[]),
        entry("lodash", "lodash", "4.17.21", None, &[]),
        entry("lodash-es", "lodash-es", "4.17.21", None, &[]),
    ]
}
