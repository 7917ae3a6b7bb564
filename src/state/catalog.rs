//! Treatment catalog and category filtering

use super::lead_form::TreatmentInterest;

/// Clinical category a treatment is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreatmentCategory {
    General,
    Cosmetic,
    Orthodontics,
    Restorative,
    Surgical,
    Facial,
}

impl TreatmentCategory {
    pub const ALL: [TreatmentCategory; 6] = [
        Self::General,
        Self::Cosmetic,
        Self::Orthodontics,
        Self::Restorative,
        Self::Surgical,
        Self::Facial,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Cosmetic => "Cosmetic",
            Self::Orthodontics => "Orthodontics",
            Self::Restorative => "Restorative",
            Self::Surgical => "Surgical",
            Self::Facial => "Facial",
        }
    }
}

/// Category selection on the treatments page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(TreatmentCategory),
}

impl CategoryFilter {
    /// All -> General -> ... -> Facial -> All
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Only(TreatmentCategory::ALL[0]),
            Self::Only(current) => {
                let idx = TreatmentCategory::ALL
                    .iter()
                    .position(|c| c == current)
                    .unwrap_or(0);
                TreatmentCategory::ALL
                    .get(idx + 1)
                    .map(|c| Self::Only(*c))
                    .unwrap_or(Self::All)
            }
        }
    }

    /// Reverse of [`CategoryFilter::next`]
    pub fn prev(&self) -> Self {
        match self {
            Self::All => Self::Only(TreatmentCategory::ALL[TreatmentCategory::ALL.len() - 1]),
            Self::Only(current) => {
                let idx = TreatmentCategory::ALL
                    .iter()
                    .position(|c| c == current)
                    .unwrap_or(0);
                if idx == 0 {
                    Self::All
                } else {
                    Self::Only(TreatmentCategory::ALL[idx - 1])
                }
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, category: TreatmentCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }
}

/// One clinical service offering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Treatment {
    pub id: &'static str,
    pub category: TreatmentCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub price_from: &'static str,
    pub features: &'static [&'static str],
    /// Form option preselected when booking from this treatment
    pub interest: Option<TreatmentInterest>,
}

/// The clinic's treatment catalog, in display order
pub static TREATMENTS: &[Treatment] = &[
    Treatment {
        id: "general",
        category: TreatmentCategory::General,
        title: "General Dentistry",
        description: "Comprehensive care including checkups, fillings, and hygiene to maintain optimal oral health.",
        icon: "🛡️",
        price_from: "£45",
        features: &["Preventative care", "NHS options", "Emergency support"],
        interest: Some(TreatmentInterest::GeneralCheckUp),
    },
    Treatment {
        id: "hygiene",
        category: TreatmentCategory::General,
        title: "Hygiene Appointment",
        description: "Thorough scale and polish with our hygienists, plus tailored advice for healthier gums.",
        icon: "🪥",
        price_from: "£75",
        features: &["Gum health check", "Stain removal", "Fresh breath"],
        interest: Some(TreatmentInterest::GeneralCheckUp),
    },
    Treatment {
        id: "emergency",
        category: TreatmentCategory::General,
        title: "Emergency Dentistry",
        description: "Same-day appointments for toothache, swelling, and broken teeth, seven days a week.",
        icon: "🚑",
        price_from: "£95",
        features: &["Same-day relief", "Sunday slots", "Pain management"],
        interest: Some(TreatmentInterest::EmergencyCare),
    },
    Treatment {
        id: "whitening",
        category: TreatmentCategory::Cosmetic,
        title: "Professional Whitening",
        description: "Transform your smile in one visit with our premium whitening treatments for long-lasting brightness.",
        icon: "🌟",
        price_from: "£299",
        features: &["Instant results", "Safe for enamel", "Custom fit"],
        interest: Some(TreatmentInterest::TeethWhitening),
    },
    Treatment {
        id: "bonding",
        category: TreatmentCategory::Cosmetic,
        title: "Composite Bonding",
        description: "Reshape chipped or uneven teeth in a single, minimally invasive appointment.",
        icon: "💎",
        price_from: "£250",
        features: &["No drilling", "Single visit", "Colour matched"],
        interest: None,
    },
    Treatment {
        id: "veneers",
        category: TreatmentCategory::Cosmetic,
        title: "Porcelain Veneers",
        description: "Hand-crafted porcelain shells that correct colour, shape, and spacing for a flawless finish.",
        icon: "😁",
        price_from: "£650",
        features: &["Stain resistant", "Natural translucency", "Long lasting"],
        interest: None,
    },
    Treatment {
        id: "invisalign",
        category: TreatmentCategory::Orthodontics,
        title: "Invisalign® Aligners",
        description: "Straighten your teeth discreetly with clear, removable aligners. No wires, no brackets, just results.",
        icon: "✨",
        price_from: "£2,500",
        features: &["Virtually invisible", "Removable", "Faster results"],
        interest: Some(TreatmentInterest::Invisalign),
    },
    Treatment {
        id: "implants",
        category: TreatmentCategory::Restorative,
        title: "Dental Implants",
        description: "The gold standard for permanent tooth replacement. Restore your smile and bite with natural-looking results.",
        icon: "🦷",
        price_from: "£1,800",
        features: &["Permanent solution", "Bone preservation", "Natural feel"],
        interest: Some(TreatmentInterest::DentalImplants),
    },
    Treatment {
        id: "crowns",
        category: TreatmentCategory::Restorative,
        title: "Crowns & Bridges",
        description: "Digitally designed restorations that rebuild damaged teeth and close gaps.",
        icon: "👑",
        price_from: "£750",
        features: &["Digital scanning", "Ceramic finish", "Strong bite"],
        interest: None,
    },
    Treatment {
        id: "wisdom-teeth",
        category: TreatmentCategory::Surgical,
        title: "Wisdom Tooth Removal",
        description: "Gentle surgical extraction with sedation options for nervous patients.",
        icon: "🩺",
        price_from: "£250",
        features: &["Sedation available", "Fast recovery", "Aftercare plan"],
        interest: None,
    },
    Treatment {
        id: "facial",
        category: TreatmentCategory::Facial,
        title: "Facial Aesthetics",
        description: "Subtle, clinician-led treatments that complement your new smile.",
        icon: "🌸",
        price_from: "£200",
        features: &["Natural results", "Medical team", "Free review"],
        interest: None,
    },
];

/// Ordered sub-sequence of `catalog` matching `filter`
pub fn filter_treatments(catalog: &[Treatment], filter: CategoryFilter) -> Vec<&Treatment> {
    catalog
        .iter()
        .filter(|t| filter.matches(t.category))
        .collect()
}

/// Number of treatments per category, in [`TreatmentCategory::ALL`] order
pub fn category_counts(catalog: &[Treatment]) -> Vec<(TreatmentCategory, usize)> {
    TreatmentCategory::ALL
        .iter()
        .map(|category| {
            let count = catalog.iter().filter(|t| t.category == *category).count();
            (*category, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn ids(treatments: &[&Treatment]) -> Vec<&'static str> {
        treatments.iter().map(|t| t.id).collect()
    }

    mod category_filter {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_all() {
            assert_eq!(CategoryFilter::default(), CategoryFilter::All);
        }

        #[test]
        fn test_next_cycles_through_every_category() {
            let mut filter = CategoryFilter::All;
            let mut seen = Vec::new();
            for _ in 0..TreatmentCategory::ALL.len() {
                filter = filter.next();
                seen.push(filter);
            }
            assert_eq!(
                seen,
                TreatmentCategory::ALL
                    .iter()
                    .map(|c| CategoryFilter::Only(*c))
                    .collect::<Vec<_>>()
            );
            assert_eq!(filter.next(), CategoryFilter::All);
        }

        #[test]
        fn test_prev_is_inverse_of_next() {
            let mut filter = CategoryFilter::All;
            for _ in 0..=TreatmentCategory::ALL.len() {
                assert_eq!(filter.next().prev(), filter);
                filter = filter.next();
            }
        }

        #[test]
        fn test_labels() {
            assert_eq!(CategoryFilter::All.label(), "All");
            assert_eq!(
                CategoryFilter::Only(TreatmentCategory::Orthodontics).label(),
                "Orthodontics"
            );
        }
    }

    mod catalog {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_ids_are_unique() {
            let unique: HashSet<_> = TREATMENTS.iter().map(|t| t.id).collect();
            assert_eq!(unique.len(), TREATMENTS.len());
        }

        #[test]
        fn test_every_category_is_represented() {
            for (category, count) in category_counts(TREATMENTS) {
                assert!(count > 0, "{} has no treatments", category.label());
            }
        }
    }

    mod filter {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_all_returns_full_catalog_in_order() {
            let filtered = filter_treatments(TREATMENTS, CategoryFilter::All);
            let expected: Vec<_> = TREATMENTS.iter().map(|t| t.id).collect();
            assert_eq!(ids(&filtered), expected);
        }

        #[test]
        fn test_category_returns_exact_ordered_subsequence() {
            for category in TreatmentCategory::ALL {
                let filtered = filter_treatments(TREATMENTS, CategoryFilter::Only(category));
                let expected: Vec<_> = TREATMENTS
                    .iter()
                    .filter(|t| t.category == category)
                    .map(|t| t.id)
                    .collect();
                assert_eq!(ids(&filtered), expected);
            }
        }

        #[test]
        fn test_cosmetic_preserves_catalog_order() {
            let filtered =
                filter_treatments(TREATMENTS, CategoryFilter::Only(TreatmentCategory::Cosmetic));
            assert_eq!(ids(&filtered), vec!["whitening", "bonding", "veneers"]);
        }

        #[test]
        fn test_empty_catalog() {
            assert!(filter_treatments(&[], CategoryFilter::All).is_empty());
            assert!(
                filter_treatments(&[], CategoryFilter::Only(TreatmentCategory::General))
                    .is_empty()
            );
        }

        #[test]
        fn test_category_absent_from_catalog() {
            let general_only: Vec<Treatment> = TREATMENTS
                .iter()
                .filter(|t| t.category == TreatmentCategory::General)
                .cloned()
                .collect();
            let filtered = filter_treatments(
                &general_only,
                CategoryFilter::Only(TreatmentCategory::Surgical),
            );
            assert!(filtered.is_empty());
        }

        #[test]
        fn test_repeated_calls_are_stable() {
            let filter = CategoryFilter::Only(TreatmentCategory::Restorative);
            let first = ids(&filter_treatments(TREATMENTS, filter));
            let second = ids(&filter_treatments(TREATMENTS, filter));
            assert_eq!(first, second);
        }

        #[test]
        fn test_counts_sum_to_catalog_len() {
            let total: usize = category_counts(TREATMENTS).iter().map(|(_, n)| n).sum();
            assert_eq!(total, TREATMENTS.len());
        }
    }
}
