//! Inline `style` attribute builder.

use std::fmt;

/// Ordered CSS-like property list, rendered as `name:value;name:value;`
///
/// Output is normalised: no space after the colon, and every pair ends with `;`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    entries: Vec<(&'static str, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: &'static str, value: impl fmt::Display) -> Self {
        self.entries.push((property, value.to_string()));
        self
    }

    /// Set `property` only when `value` is present
    pub fn set_opt(self, property: &'static str, value: Option<impl fmt::Display>) -> Self {
        match value {
            Some(v) => self.set(property, v),
            None => self,
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, v) in &self.entries {
            write!(f, "{k}:{v};")?;
        }
        Ok(())
    }
}

/// Integer rendering of a width: fractional part truncated
pub(crate) fn whole(v: f64) -> i64 {
    v.trunc() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_in_insertion_order() {
        let style = Style::new().set("stroke-width", 1).set("stroke", "black");
        assert_eq!(style.to_string(), "stroke-width:1;stroke:black;");
    }

    #[test]
    fn optional_entries_are_skipped() {
        let style = Style::new()
            .set("stroke", "red")
            .set_opt("stroke-dasharray", None::<&str>)
            .set_opt("font-family", Some("serif"));
        assert_eq!(style.to_string(), "stroke:red;font-family:serif;");
        assert_eq!(style.get("font-family"), Some("serif"));
        assert_eq!(style.get("stroke-dasharray"), None);
    }

    #[test]
    fn empty_style_renders_nothing() {
        assert!(Style::new().is_empty());
        assert_eq!(Style::new().to_string(), "");
    }

    #[test]
    fn whole_truncates() {
        assert_eq!(whole(1.9), 1);
        assert_eq!(whole(-2.5), -2);
    }
}
