use crate::core::data::Recipe;

/// Truncate to `max_chars` characters, appending "..." when shortened
pub fn truncate_string(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let head: String = text.chars().take(max_chars - 3).collect();
    format!("{}...", head.trim_end())
}

/// Pad or cut `text` to exactly `width` characters
pub fn fit_width(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.chars().take(width).collect()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

/// Center `text` within `width` characters
pub fn center_text(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.chars().take(width).collect();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Word-wrap text to `width` columns, keeping explicit line breaks.
/// Words longer than the width are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > width {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            if current_len > 0 && current_len + 1 + word.len() > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current_len += word.len();
            current.extend(word);
        }

        lines.push(current);
    }

    lines
}

pub fn format_minutes(minutes: u32) -> String {
    format!("{} minutes", minutes)
}

/// Full detail text of a recipe, as shown in the detail view
pub fn recipe_detail_text(recipe: &Recipe) -> String {
    format!(
        "Ingredients:\n{}\n\n\
         Instructions:\n{}\n\n\
         Cooking Time: {}\n\
         Preparation Time: {}\n\
         Difficulty: {}\n\
         Cuisine: {}\n\
         Dietary Preferences: {}",
        recipe.ingredients(),
        recipe.instructions(),
        format_minutes(recipe.cooking_time()),
        format_minutes(recipe.prep_time()),
        recipe.difficulty(),
        recipe.cuisine_type(),
        recipe.dietary_preferences(),
    )
}
