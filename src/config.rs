use chrono_tz::Tz;

/// Timezone whose offset is used to derive the local `epoch` of a commit date.
///
/// jc computes naive timestamps in the machine's local zone and its fixtures were
/// recorded in America/Los_Angeles; pinning the zone keeps output reproducible
/// across machines.
pub const DEFAULT_REFERENCE_TZ: Tz = Tz::America__Los_Angeles;

/// Settings that influence parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    pub reference_tz: Tz,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { reference_tz: DEFAULT_REFERENCE_TZ }
    }
}

impl ParserConfig {
    pub fn with_reference_tz(reference_tz: Tz) -> Self {
        Self { reference_tz }
    }
}

/// Parse an IANA timezone name such as `Europe/Zurich`
pub fn parse_timezone(name: &str) -> Result<Tz, String> {
    name.parse::<Tz>().map_err(|e| format!("unknown timezone '{}': {}", name, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reference_tz() {
        assert_eq!(ParserConfig::default().reference_tz, Tz::America__Los_Angeles);
    }

    #[test]
    fn test_parse_timezone_valid() {
        assert_eq!(parse_timezone("Europe/Zurich").unwrap(), Tz::Europe__Zurich);
        assert_eq!(parse_timezone("UTC").unwrap(), Tz::UTC);
    }

    #[test]
    fn test_parse_timezone_invalid() {
        let err = parse_timezone("Mars/Olympus_Mons").unwrap_err();
        assert!(err.contains("unknown timezone"));
    }
}
