//! Derived categorical fields computed from raw survey columns.
//!
//! Both derivations return `Option`: `None` stands for an unresolved value.
//! The pipeline drops rows whose age band is unresolved and keeps unresolved
//! gender as a null cell.

/// Age band derived from the numeric age column.
///
/// Bands are inclusive integer ranges checked in order: Child [0,12],
/// Adolescence [13,18], Adult [19,59], Senior [60,120]. Ages outside every
/// band do not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgeGroup {
    Child,
    Adolescence,
    Adult,
    Senior,
}

impl AgeGroup {
    /// Column name the derivation writes.
    pub const COLUMN: &'static str = "AgeGroup";

    /// Resolve an age to its band, first matching band wins.
    pub fn from_age(age: f64) -> Option<Self> {
        if !age.is_finite() {
            return None;
        }
        if (0.0..=12.0).contains(&age) {
            Some(Self::Child)
        } else if (13.0..=18.0).contains(&age) {
            Some(Self::Adolescence)
        } else if (19.0..=59.0).contains(&age) {
            Some(Self::Adult)
        } else if (60.0..=120.0).contains(&age) {
            Some(Self::Senior)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Child => "Child",
            Self::Adolescence => "Adolescence",
            Self::Adult => "Adult",
            Self::Senior => "Senior",
        }
    }
}

/// Standardized gender derived from the free-text gender column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Column name the derivation writes.
    pub const COLUMN: &'static str = "StandardizedGender";

    /// Classify a raw gender string via the ordered rule chain.
    ///
    /// First match wins, in this exact order:
    /// 1. case-insensitive prefix `m` => Male
    /// 2. case-insensitive prefix `f` => Female
    /// 3. contains `female` => Female
    /// 4. contains `male` => Male
    /// 5. contains `wom` => Female
    /// 6. contains `man` => Male
    ///
    /// The precedence is a fixed classification policy. Reordering changes
    /// how values matching several rules classify (e.g. a value containing
    /// both `wom` and `man` substrings), so the chain must stay as written.
    pub fn classify(raw: &str) -> Option<Self> {
        let lower = raw.trim().to_lowercase();
        if lower.is_empty() {
            return None;
        }
        if lower.starts_with('m') {
            return Some(Self::Male);
        }
        if lower.starts_with('f') {
            return Some(Self::Female);
        }
        if lower.contains("female") {
            return Some(Self::Female);
        }
        if lower.contains("male") {
            return Some(Self::Male);
        }
        if lower.contains("wom") {
            return Some(Self::Female);
        }
        if lower.contains("man") {
            return Some(Self::Male);
        }
        None
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_bands_resolve_in_order() {
        assert_eq!(AgeGroup::from_age(0.0), Some(AgeGroup::Child));
        assert_eq!(AgeGroup::from_age(12.0), Some(AgeGroup::Child));
        assert_eq!(AgeGroup::from_age(13.0), Some(AgeGroup::Adolescence));
        assert_eq!(AgeGroup::from_age(25.0), Some(AgeGroup::Adult));
        assert_eq!(AgeGroup::from_age(60.0), Some(AgeGroup::Senior));
        assert_eq!(AgeGroup::from_age(120.0), Some(AgeGroup::Senior));
    }

    #[test]
    fn ages_outside_every_band_do_not_resolve() {
        assert_eq!(AgeGroup::from_age(-1.0), None);
        assert_eq!(AgeGroup::from_age(121.0), None);
        assert_eq!(AgeGroup::from_age(150.0), None);
        assert_eq!(AgeGroup::from_age(12.5), None);
        assert_eq!(AgeGroup::from_age(f64::NAN), None);
    }

    #[test]
    fn gender_prefix_rules_win_over_substrings() {
        assert_eq!(Gender::classify("Male"), Some(Gender::Male));
        assert_eq!(Gender::classify("m"), Some(Gender::Male));
        assert_eq!(Gender::classify("Female"), Some(Gender::Female));
        assert_eq!(Gender::classify("f"), Some(Gender::Female));
        // Prefix m matches before the contains-female rule could.
        assert_eq!(Gender::classify("make"), Some(Gender::Male));
    }

    #[test]
    fn gender_substring_rules_apply_in_order() {
        assert_eq!(Gender::classify("cis female"), Some(Gender::Female));
        assert_eq!(Gender::classify("cis male"), Some(Gender::Male));
        // "woman" carries no male/female substring and resolves via "wom".
        assert_eq!(Gender::classify("woman"), Some(Gender::Female));
        assert_eq!(Gender::classify("trans woman"), Some(Gender::Female));
        // "human" only matches the final "man" rule.
        assert_eq!(Gender::classify("human"), Some(Gender::Male));
    }

    #[test]
    fn gender_unmatched_values_stay_unresolved() {
        assert_eq!(Gender::classify(""), None);
        assert_eq!(Gender::classify("   "), None);
        assert_eq!(Gender::classify("unknown"), None);
        assert_eq!(Gender::classify("x"), None);
    }
}
