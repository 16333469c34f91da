use std::path::PathBuf;
use token_scan_engine::config::ScanJob;

/// Validate a search target given on the command line.
///
/// Matching lines are reported one line at a time, so a target spanning a
/// line break could be counted without ever being shown.
pub fn parse_target(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("target must not be empty".to_string());
    }
    if s.contains('\n') || s.contains('\r') {
        return Err("target must not contain a line break".to_string());
    }
    Ok(s.to_string())
}

/// Turn the flat `--pair PATH TARGET` values into jobs.
pub fn parse_pairs(values: &[String]) -> Result<Vec<ScanJob>, String> {
    if values.len() % 2 != 0 {
        return Err(format!(
            "--pair expects PATH and TARGET, got {} value(s)",
            values.len()
        ));
    }

    values
        .chunks_exact(2)
        .map(|pair| {
            let target = parse_target(&pair[1]).map_err(|e| format!("{e} (for '{}')", pair[0]))?;
            Ok(ScanJob::new(PathBuf::from(&pair[0]), target))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target("DEFAULT_TERMS").unwrap(), "DEFAULT_TERMS");
        assert!(parse_target("").is_err());
        assert!(parse_target("a\nb").is_err());
    }

    #[test]
    fn test_parse_pairs() {
        let values = vec![
            "src/a.tsx".to_string(),
            "FOO".to_string(),
            "src/b.tsx".to_string(),
            "BAR".to_string(),
        ];
        let jobs = parse_pairs(&values).unwrap();
        assert_eq!(
            jobs,
            vec![ScanJob::new("src/a.tsx", "FOO"), ScanJob::new("src/b.tsx", "BAR")]
        );
    }

    #[test]
    fn test_parse_pairs_rejects_odd_and_empty() {
        assert!(parse_pairs(&["a.tsx".to_string()]).is_err());
        let err = parse_pairs(&["a.tsx".to_string(), String::new()]).unwrap_err();
        assert!(err.contains("a.tsx"));
    }
}
