//! Detail answers for queries that name a specific meal.
//!
//! "what is in X", "how do I make X", "texture of X" and friends are
//! answered from the named meal's record instead of the topic categories.
//! A query only lands here when the extracted name actually resolves
//! against the dataset; everything else falls through untouched.

use crate::data::Meal;

/// What a detail query asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailTopic {
    Ingredients,
    Preparation,
    Sensory,
    Time,
}

/// Trigger phrase and its topic. Scanned in order; the text after the
/// first phrase found is the meal-name candidate.
const DETAIL_PHRASES: &[(&str, DetailTopic)] = &[
    ("what is in ", DetailTopic::Ingredients),
    ("what's in ", DetailTopic::Ingredients),
    ("ingredients in ", DetailTopic::Ingredients),
    ("ingredients for ", DetailTopic::Ingredients),
    ("how do i make ", DetailTopic::Preparation),
    ("how to make ", DetailTopic::Preparation),
    ("preparation for ", DetailTopic::Preparation),
    ("instructions for ", DetailTopic::Preparation),
    ("steps for ", DetailTopic::Preparation),
    ("recipe for ", DetailTopic::Preparation),
    ("sensory profile of ", DetailTopic::Sensory),
    ("texture of ", DetailTopic::Sensory),
    ("taste of ", DetailTopic::Sensory),
    ("smell of ", DetailTopic::Sensory),
    ("temperature of ", DetailTopic::Sensory),
    ("feel of ", DetailTopic::Sensory),
    ("how long does it take to make ", DetailTopic::Time),
    ("how long to make ", DetailTopic::Time),
    ("time to make ", DetailTopic::Time),
    ("duration of ", DetailTopic::Time),
];

/// Queries that ask for suggestions rather than facts about one meal.
const SUGGESTION_PHRASES: &[&str] = &[
    "what should i",
    "what can i",
    "what are",
    "suggest",
    "recommend",
    "recommendation",
    "ideas",
    "options",
];

/// Words too generic to be a meal name.
const GENERIC_NAMES: &[&str] = &[
    "dinner",
    "lunch",
    "breakfast",
    "meal",
    "food",
    "foods",
    "recipe",
    "recipes",
    "dish",
    "dishes",
];

// ── Entry points ─────────────────────────────────────────────────

/// Answer a phrase-triggered detail question, if the query is one and the
/// named meal exists. Expects the lower-cased query.
pub fn detail_response(lower: &str, meals: &[Meal]) -> Option<String> {
    if is_suggestion_query(lower) {
        return None;
    }
    let (topic, candidate) = detail_request(lower)?;
    let meal = find_meal(meals, &candidate)?;
    Some(match topic {
        DetailTopic::Ingredients => ingredients_response(meal),
        DetailTopic::Preparation => preparation_response(meal),
        DetailTopic::Sensory => sensory_details_response(meal),
        DetailTopic::Time => timing_response(meal),
    })
}

/// Answer a query that is nothing but a meal name. Expects the lower-cased
/// query; returns `None` for generic food words and unknown names.
pub fn named_meal_response(lower: &str, meals: &[Meal]) -> Option<String> {
    if is_suggestion_query(lower) {
        return None;
    }
    let candidate = normalize_name(lower);
    if candidate.is_empty() || GENERIC_NAMES.contains(&candidate.as_str()) {
        return None;
    }
    find_meal(meals, &candidate).map(general_response)
}

// ── Query parsing ────────────────────────────────────────────────

fn is_suggestion_query(lower: &str) -> bool {
    SUGGESTION_PHRASES.iter().any(|p| lower.contains(p))
}

fn detail_request(lower: &str) -> Option<(DetailTopic, String)> {
    for (phrase, topic) in DETAIL_PHRASES {
        if let Some(pos) = lower.find(phrase) {
            let candidate = normalize_name(&lower[pos + phrase.len()..]);
            if candidate.is_empty() || GENERIC_NAMES.contains(&candidate.as_str()) {
                return None;
            }
            return Some((*topic, candidate));
        }
    }
    None
}

/// Trim whitespace and trailing punctuation, strip one leading article.
fn normalize_name(raw: &str) -> String {
    let mut name = raw.trim();
    for article in ["a ", "an ", "the "] {
        if let Some(rest) = name.strip_prefix(article) {
            name = rest;
            break;
        }
    }
    name.trim_end_matches(['?', '!', '.', ',']).trim().to_string()
}

/// Resolve a name candidate against the meal list. An exact
/// (case-insensitive) match wins outright; otherwise substring containment
/// in either direction, scored by length closeness.
fn find_meal<'a>(meals: &'a [Meal], candidate: &str) -> Option<&'a Meal> {
    let mut best: Option<(&Meal, i64)> = None;
    for meal in meals {
        let name = meal.name.to_lowercase();
        if name == candidate {
            return Some(meal);
        }
        if name.contains(candidate) || candidate.contains(name.as_str()) {
            let score = 100 - (name.len() as i64 - candidate.len() as i64).abs();
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((meal, score));
            }
        }
    }
    best.map(|(meal, _)| meal)
}

// ── Responses ────────────────────────────────────────────────────

fn ingredients_response(meal: &Meal) -> String {
    if meal.ingredients.is_empty() {
        return format!("I don't have an ingredient list for {} yet.", meal.name);
    }
    let names: Vec<&str> = meal.ingredients.iter().map(|i| i.name.as_str()).collect();
    format!(
        "The ingredients for {} are: {}.",
        meal.name,
        names.join(", ")
    )
}

fn preparation_response(meal: &Meal) -> String {
    if meal.preparation_steps.is_empty() {
        return format!("I don't have preparation steps for {} yet.", meal.name);
    }
    let steps: Vec<String> = meal
        .preparation_steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}) {}", i + 1, step))
        .collect();
    format!("Here's how to make {}: {}.", meal.name, steps.join("; "))
}

fn sensory_details_response(meal: &Meal) -> String {
    let profile = &meal.sensory_profile;
    if profile.is_empty() {
        return format!("I don't have sensory details for {} yet.", meal.name);
    }

    let mut parts: Vec<String> = Vec::new();
    for (dimension, tags) in [
        ("texture", &profile.texture),
        ("temperature", &profile.temperature),
        ("taste", &profile.taste),
        ("smell", &profile.smell),
    ] {
        if !tags.is_empty() {
            parts.push(format!("{dimension} - {}", tags.join(", ")));
        }
    }
    format!("Sensory profile for {}: {}.", meal.name, parts.join("; "))
}

fn timing_response(meal: &Meal) -> String {
    let prep = &meal.prep_time;
    match &meal.cook_time {
        // Durations only add up when the units agree.
        Some(cook) if cook.unit == prep.unit => format!(
            "{} takes {} {} to prepare, {} {} to cook ({} {} total).",
            meal.name,
            prep.duration,
            prep.unit,
            cook.duration,
            cook.unit,
            prep.duration + cook.duration,
            cook.unit
        ),
        Some(cook) => format!(
            "{} takes {} {} to prepare and {} {} to cook.",
            meal.name, prep.duration, prep.unit, cook.duration, cook.unit
        ),
        None => format!(
            "{} takes {} {} to prepare.",
            meal.name, prep.duration, prep.unit
        ),
    }
}

fn general_response(meal: &Meal) -> String {
    match meal.description.as_deref() {
        Some(description) => format!(
            "About {}: {} Prep time: {} {}.",
            meal.name, description, meal.prep_time.duration, meal.prep_time.unit
        ),
        None => format!(
            "{} is in my meal list, but I don't have a description for it yet.",
            meal.name
        ),
    }
}

// ── Tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Ingredient, SensoryProfile, TimeSpan};

    fn make_meal(name: &str) -> Meal {
        Meal {
            id: None,
            name: name.into(),
            meal_type: Vec::new(),
            sensory_profile: SensoryProfile::default(),
            prep_time: TimeSpan {
                duration: 10,
                unit: "minutes".into(),
            },
            cook_time: None,
            ingredients: Vec::new(),
            preparation_steps: Vec::new(),
            description: None,
        }
    }

    fn make_catalog() -> Vec<Meal> {
        let mut smoothie = make_meal("Berry Smoothie");
        smoothie.prep_time.duration = 5;
        smoothie.sensory_profile.texture = vec!["smooth".into()];
        smoothie.sensory_profile.temperature = vec!["cold".into()];
        smoothie.ingredients = vec![
            Ingredient {
                name: "frozen berries".into(),
                quantity: Some("1 cup".into()),
            },
            Ingredient {
                name: "yogurt".into(),
                quantity: None,
            },
        ];
        smoothie.preparation_steps = vec![
            "add everything to the blender".into(),
            "blend until smooth".into(),
        ];
        smoothie.description = Some("A cold, sweet blend with no surprise lumps.".into());

        let mut tofu = make_meal("Crispy Baked Tofu");
        tofu.cook_time = Some(TimeSpan {
            duration: 25,
            unit: "minutes".into(),
        });

        vec![smoothie, tofu]
    }

    #[test]
    fn ingredients_question_lists_ingredient_names() {
        let meals = make_catalog();
        let reply = detail_response("what is in the berry smoothie?", &meals).unwrap();
        assert_eq!(
            reply,
            "The ingredients for Berry Smoothie are: frozen berries, yogurt."
        );
    }

    #[test]
    fn preparation_question_numbers_the_steps() {
        let meals = make_catalog();
        let reply = detail_response("how do i make a berry smoothie", &meals).unwrap();
        assert_eq!(
            reply,
            "Here's how to make Berry Smoothie: 1) add everything to the blender; \
             2) blend until smooth."
        );
    }

    #[test]
    fn sensory_question_reports_present_dimensions_only() {
        let meals = make_catalog();
        let reply = detail_response("texture of berry smoothie", &meals).unwrap();
        assert_eq!(
            reply,
            "Sensory profile for Berry Smoothie: texture - smooth; temperature - cold."
        );
    }

    #[test]
    fn timing_question_totals_matching_units() {
        let meals = make_catalog();
        let reply = detail_response("how long to make crispy baked tofu", &meals).unwrap();
        assert_eq!(
            reply,
            "Crispy Baked Tofu takes 10 minutes to prepare, 25 minutes to cook \
             (35 minutes total)."
        );
    }

    #[test]
    fn timing_question_without_cook_time() {
        let meals = make_catalog();
        let reply = detail_response("time to make berry smoothie", &meals).unwrap();
        assert_eq!(reply, "Berry Smoothie takes 5 minutes to prepare.");
    }

    #[test]
    fn missing_ingredient_list_gets_a_stub_answer() {
        let meals = make_catalog();
        let reply = detail_response("what's in crispy baked tofu", &meals).unwrap();
        assert_eq!(reply, "I don't have an ingredient list for Crispy Baked Tofu yet.");
    }

    #[test]
    fn missing_sensory_details_get_a_stub_answer() {
        let meals = make_catalog();
        let reply = detail_response("taste of crispy baked tofu", &meals).unwrap();
        assert_eq!(reply, "I don't have sensory details for Crispy Baked Tofu yet.");
    }

    #[test]
    fn unknown_meal_name_falls_through() {
        let meals = make_catalog();
        assert!(detail_response("what is in the mystery casserole", &meals).is_none());
    }

    #[test]
    fn suggestion_queries_never_enter_the_catalog() {
        let meals = make_catalog();
        assert!(detail_response("recommend a recipe for berry smoothie", &meals).is_none());
        assert!(named_meal_response("suggest berry smoothie", &meals).is_none());
    }

    #[test]
    fn generic_names_are_not_meals() {
        let meals = make_catalog();
        assert!(detail_response("what is in a meal", &meals).is_none());
        assert!(named_meal_response("dinner", &meals).is_none());
    }

    #[test]
    fn normalize_strips_article_and_punctuation() {
        assert_eq!(normalize_name(" the berry smoothie?! "), "berry smoothie");
        assert_eq!(normalize_name("an omelette."), "omelette");
        assert_eq!(normalize_name("a"), "a");
    }

    #[test]
    fn find_meal_exact_match_wins() {
        let meals = vec![make_meal("Berry Smoothie Deluxe"), make_meal("Smoothie")];
        let found = find_meal(&meals, "smoothie").unwrap();
        assert_eq!(found.name, "Smoothie");
    }

    #[test]
    fn find_meal_prefers_closest_length() {
        // Both names are contained in the candidate; the longer one is the
        // closer fit and must win.
        let meals = vec![make_meal("Berry"), make_meal("Berry Smoothie")];
        let found = find_meal(&meals, "berry smoothie deluxe").unwrap();
        assert_eq!(found.name, "Berry Smoothie");
    }

    #[test]
    fn find_meal_requires_containment() {
        let meals = make_catalog();
        assert!(find_meal(&meals, "lentil soup").is_none());
    }

    #[test]
    fn named_meal_answer_includes_description_and_prep_time() {
        let meals = make_catalog();
        let reply = named_meal_response("the berry smoothie", &meals).unwrap();
        assert_eq!(
            reply,
            "About Berry Smoothie: A cold, sweet blend with no surprise lumps. \
             Prep time: 5 minutes."
        );
    }

    #[test]
    fn named_meal_without_description_gets_a_stub_answer() {
        let meals = make_catalog();
        let reply = named_meal_response("crispy baked tofu", &meals).unwrap();
        assert_eq!(
            reply,
            "Crispy Baked Tofu is in my meal list, but I don't have a description for it yet."
        );
    }
}
