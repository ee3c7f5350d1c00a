use crate::models::{Classification, DessertKind, DrinkKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Item contains any of the keywords.
    ContainsAny(&'static [&'static str]),
    /// Item is exactly this string.
    Equals(&'static str),
}

impl Matcher {
    /// Returns the keyword that matched, if any. Expects a normalized item.
    pub fn hit(&self, normalized: &str) -> Option<&'static str> {
        match self {
            Self::ContainsAny(keywords) => keywords.iter().copied().find(|k| normalized.contains(k)),
            Self::Equals(word) => (normalized == *word).then_some(*word),
        }
    }
}

pub struct Rule {
    pub matcher: Matcher,
    pub class: Classification,
}

const MEAL_KEYWORDS: &[&str] = &[
    "sandwich",
    "spanish brunch",
    "soup",
    "tacos/fajita",
    "focaccia",
    "scandinavian",
    "baguette",
    "scone",
    "bowl",
    "toast",
    "miso",
    "truffle",
    "bacon",
    "eggs",
    "extra salami or feta",
    "choc spread",
    "brownie",
    "tiffin",
];

// Evaluated top to bottom, first hit wins. Meal must stay first: an item
// naming both a meal and a drink is a meal.
static RULES: &[Rule] = &[
    Rule {
        matcher: Matcher::ContainsAny(MEAL_KEYWORDS),
        class: Classification::Meal,
    },
    Rule {
        matcher: Matcher::ContainsAny(&["coffee", "latte", "espresso", "cappuccino"]),
        class: Classification::Drink(DrinkKind::Coffee),
    },
    Rule {
        matcher: Matcher::ContainsAny(&["tea", "hot chocolate"]),
        class: Classification::Drink(DrinkKind::Tea),
    },
    Rule {
        matcher: Matcher::ContainsAny(&["coke", "juice", "smoothies", "fanta"]),
        class: Classification::Drink(DrinkKind::Sweet),
    },
    Rule {
        matcher: Matcher::Equals("bread"),
        class: Classification::Dessert(DessertKind::Bread),
    },
    Rule {
        matcher: Matcher::ContainsAny(&["cookies", "biscotti", "granola"]),
        class: Classification::Dessert(DessertKind::Crunch),
    },
    Rule {
        matcher: Matcher::ContainsAny(&["cake", "tart", "fudge"]),
        class: Classification::Dessert(DessertKind::Sweet),
    },
    Rule {
        matcher: Matcher::ContainsAny(&["pastry", "medialuna", "muffin"]),
        class: Classification::Dessert(DessertKind::Soft),
    },
];

pub fn rules() -> &'static [Rule] {
    RULES
}

pub fn normalize(item: &str) -> String {
    item.trim().to_lowercase()
}

/// First rule matching the item, with the keyword that triggered it.
pub fn matching_rule(item: &str) -> Option<(&'static Rule, &'static str)> {
    let normalized = normalize(item);
    RULES
        .iter()
        .find_map(|rule| rule.matcher.hit(&normalized).map(|kw| (rule, kw)))
}

/// Map an item name onto the taxonomy. Unmatched names fall back to Other.
pub fn classify(item: &str) -> Classification {
    matching_rule(item)
        .map(|(rule, _)| rule.class)
        .unwrap_or(Classification::Other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_known_menu_items() {
        let cases = [
            ("Coffee", Classification::Drink(DrinkKind::Coffee)),
            ("Bread", Classification::Dessert(DessertKind::Bread)),
            ("Tea", Classification::Drink(DrinkKind::Tea)),
            ("Hot chocolate", Classification::Drink(DrinkKind::Tea)),
            ("Juice", Classification::Drink(DrinkKind::Sweet)),
            ("Smoothies", Classification::Drink(DrinkKind::Sweet)),
            ("Cookies", Classification::Dessert(DessertKind::Crunch)),
            ("Granola", Classification::Dessert(DessertKind::Crunch)),
            ("Cake", Classification::Dessert(DessertKind::Sweet)),
            ("Tartine", Classification::Dessert(DessertKind::Sweet)),
            ("Pastry", Classification::Dessert(DessertKind::Soft)),
            ("Medialuna", Classification::Dessert(DessertKind::Soft)),
            ("Muffin", Classification::Dessert(DessertKind::Soft)),
            ("Sandwich", Classification::Meal),
            ("Brownie", Classification::Meal),
            ("Scone", Classification::Meal),
            ("Truffles", Classification::Meal),
            ("Extra Salami or Feta", Classification::Meal),
            ("Tacos/Fajita", Classification::Meal),
        ];
        for (item, expected) in cases {
            assert_eq!(classify(item), expected, "item: {item}");
        }
    }

    #[test]
    fn test_unmatched_is_other() {
        assert_eq!(classify("Alfajores"), Classification::Other);
        assert_eq!(classify("Farm House"), Classification::Other);
        assert_eq!(classify(""), Classification::Other);
    }

    #[test]
    fn test_bread_is_exact_match_only() {
        assert_eq!(classify("bread"), Classification::Dessert(DessertKind::Bread));
        assert_eq!(classify("  BREAD \t"), Classification::Dessert(DessertKind::Bread));
        assert_eq!(classify("BREAD CRUMBS"), Classification::Other);
    }

    #[test]
    fn test_meal_checked_before_drink() {
        assert_eq!(classify("sandwich coffee"), Classification::Meal);
        assert_eq!(classify("Coffee & toast"), Classification::Meal);
    }

    #[test]
    fn test_drink_chain_order() {
        // "coffee" wins over "tea" when both appear.
        assert_eq!(classify("tea or coffee"), Classification::Drink(DrinkKind::Coffee));
        // A drink keyword beats a dessert keyword.
        assert_eq!(classify("juice cake"), Classification::Drink(DrinkKind::Sweet));
    }

    #[test]
    fn test_result_always_in_taxonomy() {
        for item in ["Coffee", "Bread", "Muffin", "Soup", "???", "Hot chocolate", "Art Tray"] {
            let class = classify(item);
            assert!(class.category().sub_categories().contains(&class), "item: {item}");
        }
    }

    #[test]
    fn test_classify_is_deterministic() {
        for item in ["Coffee", "Alfajores", "Scandinavian"] {
            assert_eq!(classify(item), classify(item));
        }
    }

    #[test]
    fn test_matching_rule_reports_keyword() {
        let (rule, keyword) = matching_rule("Cappuccino").unwrap();
        assert_eq!(rule.class, Classification::Drink(DrinkKind::Coffee));
        assert_eq!(keyword, "cappuccino");
        assert!(matching_rule("Alfajores").is_none());
    }

    #[test]
    fn test_rules_cover_every_classified_category() {
        let categories: Vec<Category> = rules().iter().map(|r| r.class.category()).collect();
        assert_eq!(categories[0], Category::Meal);
        assert!(categories.contains(&Category::Drink));
        assert!(categories.contains(&Category::Dessert));
        assert!(!categories.contains(&Category::Other));
    }
}
