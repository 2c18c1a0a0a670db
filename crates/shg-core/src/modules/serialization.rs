use std::fs;
use std::path::Path;

/// C-style `%.*e` scientific formatting: fixed digits after the decimal
/// point, signed exponent padded to two digits. Matches the reference
/// output tables byte for byte.
pub fn format_scientific_f64(value: f64, precision: usize) -> String {
    let raw = format!("{value:.precision$e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(rest) => ("-", rest),
                None => ("+", exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => raw,
    }
}

pub fn normalize_text_artifact(content: &str) -> String {
    let mut normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    if !normalized.is_empty() && !normalized.ends_with('\n') {
        normalized.push('\n');
    }
    normalized
}

pub fn write_text_artifact(path: &Path, content: &str) -> std::io::Result<()> {
    fs::write(path, normalize_text_artifact(content))
}

#[cfg(test)]
mod tests {
    use super::{format_scientific_f64, normalize_text_artifact, write_text_artifact};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn scientific_format_pads_the_exponent() {
        assert_eq!(format_scientific_f64(0.01, 14), "1.00000000000000e-02");
        assert_eq!(format_scientific_f64(12.0, 14), "1.20000000000000e+01");
        assert_eq!(format_scientific_f64(0.0, 14), "0.00000000000000e+00");
        assert_eq!(format_scientific_f64(-2.5e-13, 14), "-2.50000000000000e-13");
        assert_eq!(format_scientific_f64(1.0e123, 14), "1.00000000000000e+123");
    }

    #[test]
    fn scientific_format_is_deterministic() {
        let first = format_scientific_f64(6.626_070_15e-34, 14);
        let second = format_scientific_f64(6.626_070_15e-34, 14);
        assert_eq!(first, second);
        assert_eq!(first, "6.62607015000000e-34");
    }

    #[test]
    fn normalize_text_artifact_uses_canonical_line_endings() {
        let normalized = normalize_text_artifact("alpha\r\nbeta\rgamma");
        assert_eq!(normalized, "alpha\nbeta\ngamma\n");
    }

    #[test]
    fn repeated_text_writes_produce_identical_bytes() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("Rss");
        let input = "1.0\t2.0\n3.0\t4.0";

        write_text_artifact(&path, input).expect("first write should succeed");
        let first = fs::read(&path).expect("artifact should be readable");

        write_text_artifact(&path, input).expect("second write should succeed");
        let second = fs::read(&path).expect("artifact should be readable");

        assert_eq!(first, second);
        assert_eq!(second, b"1.0\t2.0\n3.0\t4.0\n");
    }
}
