//! Keyword lookup tables for the travel-style and food-preference scorers.
//!
//! Style and food codes are matched against event tag names by
//! case-insensitive substring search, so every keyword is stored lowercase.

/// Keyword fragments per travel-style code. A selected style that is not
/// in this table contributes no check to the travel score.
pub const TRAVEL_STYLE_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "healing",
        &["healing", "relax", "spa", "wellness", "nature", "retreat"],
    ),
    (
        "activity",
        &["hiking", "surfing", "climbing", "cycling", "sports", "adventure"],
    ),
    (
        "foodie",
        &["food", "restaurant", "cafe", "tasting", "gourmet", "street food"],
    ),
    (
        "culture",
        &["museum", "history", "art", "exhibition", "heritage", "temple"],
    ),
    ("photo", &["photo", "scenic", "view", "sunset", "landmark"]),
    ("shopping", &["shopping", "market", "outlet", "mall"]),
    ("nightlife", &["bar", "club", "party", "pub", "night"]),
];

/// Keyword fragments per food category code. Used to map food-kind tags
/// onto the categories a user records preferences for.
pub const FOOD_CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("korean", &["korean", "bbq", "kimchi", "bibimbap", "gogi"]),
    ("japanese", &["japanese", "sushi", "ramen", "izakaya", "udon"]),
    ("chinese", &["chinese", "dim sum", "dumpling", "noodle"]),
    ("western", &["western", "pasta", "steak", "burger", "pizza"]),
    ("seafood", &["seafood", "fish", "shrimp", "crab", "oyster"]),
    ("vegan", &["vegan", "vegetarian", "salad", "plant"]),
    ("dessert", &["dessert", "cake", "bakery", "ice cream", "sweet"]),
    ("spicy", &["spicy", "hot pot", "chili"]),
];

/// Keywords for a travel-style code, or None if the code is unrecognized
pub fn style_keywords(code: &str) -> Option<&'static [&'static str]> {
    let code = code.to_lowercase();
    TRAVEL_STYLE_KEYWORDS
        .iter()
        .find(|(style, _)| *style == code)
        .map(|(_, keywords)| *keywords)
}

/// Food category codes whose keyword list matches the given tag name
/// (already lowercased by the caller)
pub fn matching_food_categories(tag_name: &str) -> impl Iterator<Item = &'static str> + '_ {
    FOOD_CATEGORY_KEYWORDS
        .iter()
        .filter(move |(_, keywords)| keywords.iter().any(|kw| tag_name.contains(kw)))
        .map(|(category, _)| *category)
}
