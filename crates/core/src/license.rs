use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// License families the conventions know how to describe in a POM.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LicenseKind {
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "Apache-2.0")]
    Apache2,
    #[serde(rename = "GPL-3.0-only")]
    Gpl3,
    #[serde(rename = "LGPL-3.0-only")]
    Lgpl3,
}

impl LicenseKind {
    /// SPDX identifier, also the tag used in config files
    #[must_use]
    pub const fn spdx(&self) -> &'static str {
        match self {
            Self::Mit => "MIT",
            Self::Apache2 => "Apache-2.0",
            Self::Gpl3 => "GPL-3.0-only",
            Self::Lgpl3 => "LGPL-3.0-only",
        }
    }

    /// Human-readable name written to `<licenses><license><name>`
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Mit => "MIT License",
            Self::Apache2 => "Apache License, Version 2.0",
            Self::Gpl3 => "GNU General Public License version 3",
            Self::Lgpl3 => "GNU Lesser General Public License version 3",
        }
    }

    #[must_use]
    pub const fn url(&self) -> &'static str {
        match self {
            Self::Mit => "https://opensource.org/licenses/MIT",
            Self::Apache2 => "https://opensource.org/licenses/Apache-2.0",
            Self::Gpl3 => "https://opensource.org/licenses/GPL-3.0",
            Self::Lgpl3 => "https://opensource.org/licenses/LGPL-3.0",
        }
    }
}

impl Display for LicenseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spdx())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(LicenseKind::Mit, "\"MIT\"")]
    #[case(LicenseKind::Apache2, "\"Apache-2.0\"")]
    #[case(LicenseKind::Gpl3, "\"GPL-3.0-only\"")]
    #[case(LicenseKind::Lgpl3, "\"LGPL-3.0-only\"")]
    fn test_license_kind_serializes_as_spdx(#[case] kind: LicenseKind, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&kind).unwrap(), expected);
        assert_eq!(format!("\"{kind}\""), expected);
    }

    #[test]
    fn test_unknown_license_is_rejected() {
        let result: Result<LicenseKind, _> = serde_json::from_str("\"WTFPL\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_mit_metadata() {
        assert_eq!(LicenseKind::Mit.display_name(), "MIT License");
        assert_eq!(LicenseKind::Mit.url(), "https://opensource.org/licenses/MIT");
    }
}
