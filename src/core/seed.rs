//! Built-in recipe data
//!
//! The catalog ships with a fixed set of recipes. Image paths are relative to
//! the configured assets directory.

use crate::core::data::{Difficulty, Recipe};
use crate::core::traits::RecipeSource;

/// The recipes bundled with the application
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRecipes;

impl RecipeSource for BuiltinRecipes {
    fn load_recipes(&self) -> Vec<Recipe> {
        builtin_recipes()
    }
}

/// Build the bundled recipe list in display order
pub fn builtin_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "Spaghetti Bolognese",
            "Spaghetti, Ground Beef, Tomato Sauce, Onion, Garlic, Olive Oil, Basil, Oregano, Salt, Pepper",
            "1. Boil spaghetti in salted water until al dente.\n\
             2. In a pan, sauté chopped onions and garlic in olive oil.\n\
             3. Add ground beef to the pan, cooking until browned.\n\
             4. Add tomato sauce, basil, oregano, salt, and pepper. Simmer for 15-20 minutes.\n\
             5. Combine the sauce with the cooked spaghetti and serve with grated Parmesan on top.",
            30,
            "j/images/shepeggeti.jpg",
            Difficulty::Medium,
            15,
            "Italian",
            "Gluten-Free",
        ),
        Recipe::new(
            "Vegetable Stir Fry",
            "Broccoli, Bell Peppers, Carrots, Soy Sauce, Garlic, Ginger, Sesame Oil, Rice",
            "1. Cook rice according to package instructions.\n\
             2. In a wok or large pan, heat sesame oil over medium heat.\n\
             3. Add chopped garlic and ginger, sauté for 1 minute.\n\
             4. Add broccoli, bell peppers, and carrots, stir-frying for about 5 minutes.\n\
             5. Add soy sauce and stir to combine. Serve with rice.",
            20,
            "j/images/vegetable-stir.jpg",
            Difficulty::Easy,
            10,
            "Chinese",
            "Vegan",
        ),
        Recipe::new(
            "Chicken Caesar Salad",
            "Chicken Breast, Romaine Lettuce, Caesar Dressing, Croutons, Parmesan Cheese",
            "1. Grill or pan-fry chicken breasts until fully cooked, then slice.\n\
             2. Toss chopped romaine lettuce with Caesar dressing.\n\
             3. Add grilled chicken slices, croutons, and grated Parmesan cheese.\n\
             4. Serve immediately.",
            15,
            "j/images/chicken-ceaser.jpg",
            Difficulty::Easy,
            10,
            "American",
            "Gluten-Free",
        ),
        Recipe::new(
            "Chicken Tikka Masala",
            "Chicken, Yogurt, Onion, Tomato, Garlic, Ginger, Garam Masala, Cumin, Coriander, Cream, Rice",
            "1. Marinate chicken in yogurt, garlic, ginger, and spices for at least 30 minutes.\n\
             2. Cook marinated chicken in a pan until browned.\n\
             3. Sauté onions, garlic, and ginger in a separate pan, add spices, and cook for a few minutes.\n\
             4. Add tomatoes and simmer until the sauce thickens.\n\
             5. Stir in cream and cooked chicken. Serve with rice.",
            40,
            "j/images/chicken-tikka-masala.jpg",
            Difficulty::Hard,
            20,
            "Indian",
            "Gluten-Free",
        ),
        Recipe::new(
            "Vegan Chili",
            "Black Beans, Kidney Beans, Tomatoes, Onion, Garlic, Bell Pepper, Chili Powder, Cumin, Olive Oil, Vegetable Broth",
            "1. Heat olive oil in a large pot. Sauté onions, garlic, and bell pepper for 5 minutes.\n\
             2. Add chili powder and cumin, cook for another 2 minutes.\n\
             3. Add beans, tomatoes, and vegetable broth. Bring to a boil.\n\
             4. Reduce heat and simmer for 30 minutes.\n\
             5. Serve hot with cornbread or over rice.",
            40,
            "j/images/vegan-chilli.jpg",
            Difficulty::Medium,
            15,
            "Mexican",
            "Vegan",
        ),
        Recipe::new(
            "Beef Tacos",
            "Ground Beef, Taco Shells, Lettuce, Tomatoes, Cheddar Cheese, Salsa, Sour Cream",
            "1. Cook ground beef in a skillet over medium heat until browned.\n\
             2. Warm taco shells in the oven.\n\
             3. Assemble tacos by filling shells with cooked beef, shredded lettuce, chopped tomatoes, and grated cheddar cheese.\n\
             4. Top with salsa and sour cream.",
            20,
            "j/images/beef-tacos.jpg",
            Difficulty::Easy,
            10,
            "Mexican",
            "Gluten-Free",
        ),
        Recipe::new(
            "Shrimp Scampi",
            "Shrimp, Garlic, Butter, Olive Oil, Lemon, Parsley, Spaghetti, Parmesan Cheese",
            "1. Cook spaghetti according to package directions.\n\
             2. Sauté garlic in butter and olive oil until fragrant.\n\
             3. Add shrimp and cook until pink and opaque.\n\
             4. Add lemon juice and chopped parsley.\n\
             5. Toss shrimp mixture with cooked spaghetti, then serve with grated Parmesan cheese.",
            25,
            "j/images/Shrimp-Scampi.jpg",
            Difficulty::Medium,
            15,
            "Italian",
            "Gluten-Free",
        ),
        Recipe::new(
            "Quinoa Salad",
            "Quinoa, Cucumber, Cherry Tomatoes, Red Onion, Feta Cheese, Olive Oil, Lemon, Parsley",
            "1. Cook quinoa according to package instructions and let it cool.\n\
             2. In a large bowl, combine quinoa, chopped cucumber, halved cherry tomatoes, and finely chopped red onion.\n\
             3. Add crumbled feta cheese, olive oil, lemon juice, and chopped parsley. Toss to combine.\n\
             4. Serve chilled or at room temperature.",
            30,
            "j/images/quinoa-salad.jpg",
            Difficulty::Easy,
            15,
            "Mediterranean",
            "Vegan",
        ),
        Recipe::new(
            "Margherita Pizza",
            "Pizza Dough, Tomato Sauce, Mozzarella Cheese, Basil, Olive Oil",
            "1. Preheat the oven to 475°F (245°C).\n\
             2. Roll out pizza dough on a floured surface.\n\
             3. Spread tomato sauce over the dough, leaving a border around the edges.\n\
             4. Top with fresh mozzarella slices and basil leaves.\n\
             5. Bake in the oven for 10-12 minutes or until golden brown. Drizzle with olive oil before serving.",
            25,
            "j/images/margherita-pizza.jpg",
            Difficulty::Medium,
            15,
            "Italian",
            "Gluten-Free",
        ),
        Recipe::new(
            "Banana Pancakes",
            "Bananas, Flour, Milk, Eggs, Baking Powder, Vanilla Extract, Butter, Maple Syrup",
            "1. Mash ripe bananas in a bowl.\n\
             2. In a separate bowl, whisk together flour, baking powder, milk, eggs, and vanilla extract.\n\
             3. Add mashed bananas to the wet ingredients and mix to combine.\n\
             4. Heat butter on a griddle or skillet and pour batter to form pancakes.\n\
             5. Cook until golden brown, flipping once. Serve with maple syrup.",
            20,
            "j/images/banana-pancakes.jpg",
            Difficulty::Easy,
            10,
            "American",
            "Vegetarian",
        ),
        Recipe::new(
            "Vegan Buddha Bowl",
            "Quinoa, Chickpeas, Avocado, Spinach, Red Cabbage, Carrot, Sesame Seeds, Olive Oil, Lemon",
            "1. Cook quinoa according to package instructions.\n\
             2. In a pan, sauté chickpeas with olive oil until crispy.\n\
             3. Assemble bowl with quinoa, spinach, shredded cabbage, grated carrot, and avocado slices.\n\
             4. Top with crispy chickpeas, sesame seeds, and a squeeze of lemon juice.",
            35,
            "j/images/bhudda-bowl.jpg",
            Difficulty::Medium,
            20,
            "Vegan",
            "Vegan",
        ),
        Recipe::new(
            "Pad Thai",
            "Rice Noodles, Shrimp, Tofu, Eggs, Bean Sprouts, Peanuts, Lime, Fish Sauce, Soy Sauce, Garlic, Chili Flakes",
            "1. Soak rice noodles according to package instructions.\n\
             2. In a pan, scramble eggs and cook shrimp until pink.\n\
             3. Add tofu and stir-fry for a few minutes.\n\
             4. Toss noodles with fish sauce, soy sauce, chili flakes, and lime juice.\n\
             5. Garnish with peanuts, bean sprouts, and lime wedges.",
            30,
            "j/images/pad-thai.jpg",
            Difficulty::Medium,
            15,
            "Thai",
            "Gluten-Free",
        ),
        Recipe::new(
            "Grilled Vegetable Skewers",
            "Bell Peppers, Zucchini, Mushrooms, Cherry Tomatoes, Olive Oil, Garlic, Oregano, Lemon",
            "1. Cut vegetables into chunks and thread onto skewers.\n\
             2. Marinate with olive oil, minced garlic, oregano, and lemon juice.\n\
             3. Grill over medium heat until vegetables are tender and slightly charred.\n\
             4. Serve with a side of rice or couscous.",
            25,
            "j/images/grilled-vegetables.jpg",
            Difficulty::Easy,
            10,
            "Mediterranean",
            "Vegetarian",
        ),
        Recipe::new(
            "Falafel",
            "Chickpeas, Onion, Garlic, Parsley, Cilantro, Cumin, Coriander, Flour, Baking Powder, Olive Oil, Lemon, Tahini",
            "1. Soak chickpeas overnight and blend them with onions, garlic, herbs, and spices.\n\
             2. Form the mixture into balls and refrigerate for 30 minutes.\n\
             3. Deep fry falafel until golden and crispy.\n\
             4. Serve with tahini sauce and pita bread.",
            45,
            "j/images/falafal.jpg",
            Difficulty::Hard,
            20,
            "Middle Eastern",
            "Vegan",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_recipe_count_and_order() {
        let recipes = BuiltinRecipes.load_recipes();
        assert_eq!(recipes.len(), 14);
        assert_eq!(recipes[0].name(), "Spaghetti Bolognese");
        assert_eq!(recipes[13].name(), "Falafel");
    }

    #[test]
    fn test_instructions_keep_line_breaks() {
        let recipes = builtin_recipes();
        let first = recipes[0].instructions();
        assert_eq!(first.lines().count(), 5);
        assert!(first.lines().all(|l| !l.starts_with(' ')));
        assert!(first.starts_with("1. Boil spaghetti"));
    }

    #[test]
    fn test_builtin_fields_are_populated() {
        for recipe in builtin_recipes() {
            assert!(!recipe.name().is_empty());
            assert!(!recipe.ingredients().is_empty());
            assert!(!recipe.instructions().is_empty());
            assert!(recipe.image_path().starts_with("j/images/"));
            assert!(!recipe.cuisine_type().is_empty());
            assert!(!recipe.dietary_preferences().is_empty());
        }
    }
}
