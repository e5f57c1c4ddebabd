//! Element class names with optional caller overrides.
//!
//! A tile rendered with base `TileBankSigningDetails` and custom class
//! `BankOverview__tile` names its title element
//! `["TileBankSigningDetails__title", "BankOverview__tile__title"]`.

pub const TILE_BASE: &str = "TileBankSigningDetails";

pub const TOP: &str = "__top";
pub const TITLE: &str = "__title";
pub const COPY_CONTAINER: &str = "__copy-container";
pub const COPY_ICON: &str = "__copy-icon";
pub const COPY_TEXT: &str = "__copy-text";
pub const VALUE: &str = "__value";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    base: String,
    custom: Option<String>,
}

impl ClassNames {
    pub fn new(base: impl Into<String>, custom: Option<&str>) -> Self {
        Self {
            base: base.into(),
            custom: custom
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(ToOwned::to_owned),
        }
    }

    /// Names for the root element.
    pub fn root(&self) -> Vec<String> {
        let mut names = vec![self.base.clone()];
        names.extend(self.custom.clone());
        names
    }

    /// Base name for `suffix` followed by the caller's override, if any.
    pub fn element(&self, suffix: &str) -> Vec<String> {
        let mut names = vec![format!("{}{}", self.base, suffix)];
        if let Some(custom) = &self.custom {
            names.push(format!("{}{}", custom, suffix));
        }
        names
    }

    /// Base name only; the element accepts no override.
    pub fn base_only(&self, suffix: &str) -> Vec<String> {
        vec![format!("{}{}", self.base, suffix)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_without_custom_class_is_base_only() {
        let names = ClassNames::new(TILE_BASE, None);
        assert_eq!(names.element(TOP), vec!["TileBankSigningDetails__top"]);
        assert_eq!(names.root(), vec!["TileBankSigningDetails"]);
    }

    #[test]
    fn element_with_custom_class_appends_override() {
        let names = ClassNames::new(TILE_BASE, Some("BankOverview__tile"));
        assert_eq!(
            names.element(COPY_CONTAINER),
            vec![
                "TileBankSigningDetails__copy-container",
                "BankOverview__tile__copy-container"
            ]
        );
        assert_eq!(names.base_only(VALUE), vec!["TileBankSigningDetails__value"]);
    }

    #[test]
    fn blank_custom_class_is_ignored() {
        let names = ClassNames::new(TILE_BASE, Some("  "));
        assert_eq!(names.root(), vec!["TileBankSigningDetails"]);
    }
}
