//! JSON output encoder

use std::io::{self, Write};

use serde::Serialize;

/// Layout of the emitted JSON document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Compact,
    /// Two-space indentation
    Pretty,
}

impl OutputFormat {
    pub fn from_pretty(pretty: bool) -> Self {
        if pretty { OutputFormat::Pretty } else { OutputFormat::Compact }
    }
}

/// Write `value` as a single JSON document followed by a newline
pub fn write_json<W, T>(mut writer: W, value: &T, format: OutputFormat) -> io::Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    match format {
        OutputFormat::Compact => serde_json::to_writer(&mut writer, value)?,
        OutputFormat::Pretty => serde_json::to_writer_pretty(&mut writer, value)?,
    }
    writer.write_all(b"\n")?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn encode(value: &serde_json::Value, format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_json(&mut out, value, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_compact_output() {
        let out = encode(&json!([{ "commit": "abc", "message": "" }]), OutputFormat::Compact);
        assert_eq!(out, "[{\"commit\":\"abc\",\"message\":\"\"}]\n");
    }

    #[test]
    fn test_pretty_output_uses_two_spaces() {
        let out = encode(&json!([{ "commit": "abc" }]), OutputFormat::Pretty);
        assert_eq!(out, "[\n  {\n    \"commit\": \"abc\"\n  }\n]\n");
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(encode(&json!([]), OutputFormat::Compact), "[]\n");
    }

    #[test]
    fn test_from_pretty() {
        assert_eq!(OutputFormat::from_pretty(true), OutputFormat::Pretty);
        assert_eq!(OutputFormat::from_pretty(false), OutputFormat::Compact);
    }
}
