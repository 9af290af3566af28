use serde::Deserialize;

/// Catch-all brand for names that match no rule; excluded from the brand
/// facet and never offered as a filter value.
pub const OTHER_BRAND: &str = "Other";

/// One entry of the brand vocabulary: a display label plus the lowercase
/// substrings that classify a cinema name under it.
#[derive(Debug, Clone, Deserialize)]
pub struct BrandRule {
    pub label: String,
    pub needles: Vec<String>,
}

/// Classifies cinema names into a small fixed brand vocabulary by
/// case-insensitive substring match. The vocabulary is configuration data;
/// `Default` carries the built-in chains.
#[derive(Debug, Clone)]
pub struct BrandClassifier {
    rules: Vec<BrandRule>,
}

impl Default for BrandClassifier {
    fn default() -> Self {
        Self::new(vec![
            BrandRule {
                label: "CGV".to_string(),
                needles: vec!["cgv".to_string()],
            },
            BrandRule {
                label: "Cinépolis".to_string(),
                needles: vec!["cinepolis".to_string(), "cinépolis".to_string()],
            },
            BrandRule {
                label: "Cinema XXI".to_string(),
                needles: vec!["xxi".to_string()],
            },
        ])
    }
}

impl BrandClassifier {
    pub fn new(rules: Vec<BrandRule>) -> Self {
        Self { rules }
    }

    /// Returns the brand label for a cinema name, or [`OTHER_BRAND`] when the
    /// name is absent or matches no rule.
    pub fn classify(&self, name: Option<&str>) -> String {
        let Some(name) = name else {
            return OTHER_BRAND.to_string();
        };
        let lowered = name.to_lowercase();
        for rule in &self.rules {
            if rule
                .needles
                .iter()
                .any(|needle| lowered.contains(&needle.to_lowercase()))
            {
                return rule.label.clone();
            }
        }
        OTHER_BRAND.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_is_case_insensitive() {
        let brands = BrandClassifier::default();
        assert_eq!(brands.classify(Some("CGV Sun Plaza")), "CGV");
        assert_eq!(brands.classify(Some("cgv sun plaza")), "CGV");
        assert_eq!(brands.classify(Some("CGV SUN PLAZA")), "CGV");
    }

    #[test]
    fn classify_knows_the_builtin_chains() {
        let brands = BrandClassifier::default();
        assert_eq!(brands.classify(Some("Cinépolis Plaza Medan Fair")), "Cinépolis");
        assert_eq!(brands.classify(Some("cinepolis medan")), "Cinépolis");
        assert_eq!(brands.classify(Some("Hermes XXI")), "Cinema XXI");
    }

    #[test]
    fn unmatched_and_missing_names_are_other() {
        let brands = BrandClassifier::default();
        assert_eq!(brands.classify(Some("Bioskop Keluarga")), OTHER_BRAND);
        assert_eq!(brands.classify(None), OTHER_BRAND);
    }

    #[test]
    fn vocabulary_extends_through_configuration() {
        let brands = BrandClassifier::new(vec![BrandRule {
            label: "Flix".to_string(),
            needles: vec!["flix".to_string()],
        }]);
        assert_eq!(brands.classify(Some("Flix Cinema Summarecon")), "Flix");
        assert_eq!(brands.classify(Some("CGV Focal Point")), OTHER_BRAND);
    }
}
