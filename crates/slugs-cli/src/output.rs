//! Rendering of the slug list on stdout.

use anyhow::Result;
use slugs_core::SlugSet;
use std::io::Write;

use crate::cli::OutputFormat;

/// Write `slugs` to `out` in the requested format.
pub fn write_slugs<W: Write>(out: &mut W, slugs: &SlugSet, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for slug in slugs {
                writeln!(out, "{slug}")?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, slugs)?;
            writeln!(out)?;
        },
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn render(format: OutputFormat) -> String {
        let slugs: SlugSet = ["", "about", "contact"].into_iter().collect();
        let mut buf = Vec::new();
        write_slugs(&mut buf, &slugs, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_is_one_slug_per_line() {
        assert_eq!(render(OutputFormat::Text), "/\n/about\n/contact\n");
    }

    #[test]
    fn test_json_is_an_array() {
        let value: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(value, serde_json::json!(["/", "/about", "/contact"]));
    }

    #[test]
    fn test_empty_text_output() {
        let mut buf = Vec::new();
        write_slugs(&mut buf, &SlugSet::new(), OutputFormat::Text).unwrap();
        assert!(buf.is_empty());
    }
}
