//! Turns engine outcomes into text for the terminal.
//!
//! Templates are looked up by key and `%0`, `%1`, ... are replaced with the
//! outcome's params in order. The built-in templates are English; the config
//! file's `[messages]` table can replace any of them.

use std::collections::{BTreeMap, HashMap};

use shortstay_engine::{ErrorCode, Outcome, SCHENGEN_MAXSTAY};

/// Notices that are not engine codes.
pub mod notice {
    pub const OK: &str = "ok";
    pub const ADDED: &str = "added";
    pub const REMOVED: &str = "removed";
    pub const NO_STAY: &str = "no_stay";
    pub const EMPTY_NAME: &str = "empty_name";
}

fn defaults() -> HashMap<&'static str, String> {
    HashMap::from([
        (ErrorCode::None.key(), "Ok".to_string()),
        (
            ErrorCode::Order.key(),
            "The end date is before the start date".to_string(),
        ),
        (
            ErrorCode::Length.key(),
            format!("A single stay cannot be longer than {SCHENGEN_MAXSTAY} days"),
        ),
        (
            ErrorCode::Overlap.key(),
            "This stay overlaps a stay already in the plan".to_string(),
        ),
        (
            ErrorCode::Limit.key(),
            "This stay exceeds the 90/180-day limit by %0 days".to_string(),
        ),
        (notice::OK, "Ok".to_string()),
        (notice::ADDED, "Stay added at position %0".to_string()),
        (notice::REMOVED, "Stay removed: %0".to_string()),
        (notice::NO_STAY, "There is no stay at position %0".to_string()),
        (notice::EMPTY_NAME, "A stay needs a name".to_string()),
    ])
}

/// Message templates, keyed by [`ErrorCode::key`] or a [`notice`] name.
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: HashMap<&'static str, String>,
    overrides: BTreeMap<String, String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(BTreeMap::new())
    }
}

impl Catalog {
    pub fn new(overrides: BTreeMap<String, String>) -> Self {
        Self {
            templates: defaults(),
            overrides,
        }
    }

    fn template<'a>(&'a self, key: &'a str) -> &'a str {
        self.overrides
            .get(key)
            .or_else(|| self.templates.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }

    /// Fill in the template for `key` with `params`.
    ///
    /// Placeholders are read in one pass over the template, so text coming
    /// from a param is never substituted again. A `%` not followed by the
    /// index of a param is kept as written.
    pub fn format(&self, key: &str, params: &[String]) -> String {
        let template = self.template(key);
        let mut text = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(pos) = rest.find('%') {
            text.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];
            let digits = after.bytes().take_while(u8::is_ascii_digit).count();
            match after[..digits].parse::<usize>().ok().and_then(|i| params.get(i)) {
                Some(param) => text.push_str(param),
                None => text.push_str(&rest[pos..pos + 1 + digits]),
            }
            rest = &after[digits..];
        }
        text.push_str(rest);
        text
    }

    /// Render a rejection or plain acceptance. Successful inserts are
    /// reported through the `added` notice instead.
    pub fn render(&self, outcome: &Outcome) -> String {
        self.format(outcome.code.key(), &outcome.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortstay_engine::PlanError;

    #[test]
    fn every_code_has_a_default() {
        let catalog = Catalog::default();
        for code in ErrorCode::ALL {
            assert_ne!(catalog.format(code.key(), &[]), code.key());
        }
    }

    #[test]
    fn limit_substitutes_excess() {
        let outcome = Outcome::from(PlanError::Limit { excess: 5 });
        assert_eq!(
            Catalog::default().render(&outcome),
            "This stay exceeds the 90/180-day limit by 5 days"
        );
    }

    #[test]
    fn override_replaces_default() {
        let catalog = Catalog::new(BTreeMap::from([(
            "limit".to_string(),
            "Limite dépassée de %0 jours".to_string(),
        )]));
        let outcome = Outcome::from(PlanError::Limit { excess: 2 });
        assert_eq!(catalog.render(&outcome), "Limite dépassée de 2 jours");
        assert_eq!(
            catalog.render(&Outcome::from(PlanError::Overlap)),
            "This stay overlaps a stay already in the plan"
        );
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(Catalog::default().format("mystery", &[]), "mystery");
    }

    #[test]
    fn param_text_is_not_substituted_again() {
        let catalog = Catalog::new(BTreeMap::from([(
            "pair".to_string(),
            "%0 then %1".to_string(),
        )]));
        let params = vec!["a".to_string(), "%0".to_string()];
        assert_eq!(catalog.format("pair", &params), "a then %0");
    }

    #[test]
    fn stray_percent_and_missing_params_are_kept() {
        let catalog = Catalog::new(BTreeMap::from([(
            "odd".to_string(),
            "100% of %0, not %3 %".to_string(),
        )]));
        assert_eq!(
            catalog.format("odd", &["x".to_string()]),
            "100% of x, not %3 %"
        );
    }

    #[test]
    fn double_digit_placeholders() {
        let params: Vec<String> = (0..11).map(|i| format!("p{i}")).collect();
        let catalog = Catalog::new(BTreeMap::from([("many".to_string(), "%1 %10".to_string())]));
        assert_eq!(catalog.format("many", &params), "p1 p10");
    }
}
