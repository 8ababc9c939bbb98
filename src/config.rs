use std::path::PathBuf;

/// Runtime parameters for one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Newline-delimited dictionary file.
    pub word_list: PathBuf,
    /// Exclusive upper bound for the sum, in base 10.
    pub max: i64,
    /// Cipher key of distinct symbols.
    pub key: String,
    /// Place `0` first in the digit assignment instead of last.
    pub leading0: bool,
    /// Explicit CSV destination; derived from the other fields when unset.
    pub output: Option<PathBuf>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            word_list: PathBuf::from("words.txt"),
            max: 200_000,
            key: "wanderlust".to_string(),
            leading0: false,
            output: None,
        }
    }
}

impl SearchConfig {
    /// CSV destination: the explicit output, or `<key>-<max>[-0].csv`.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(p) => p.clone(),
            None => {
                let suffix = if self.leading0 { "-0" } else { "" };
                PathBuf::from(format!("{}-{}{}.csv", self.key, self.max, suffix))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_output_name() {
        let mut cfg = SearchConfig::default();
        assert_eq!(cfg.output_path(), PathBuf::from("wanderlust-200000.csv"));
        cfg.leading0 = true;
        cfg.max = 50;
        assert_eq!(cfg.output_path(), PathBuf::from("wanderlust-50-0.csv"));
        cfg.output = Some(PathBuf::from("out.csv"));
        assert_eq!(cfg.output_path(), PathBuf::from("out.csv"));
    }
}
