use reqwest::Client;
use serde_json::json;
use std::path::Path;

use crate::recommender::Recommendation;
use crate::{dataset, Error, Result};

/// Request recommendations from a running server and print them
pub async fn recommend(
    server_url: &str,
    ingredients: &str,
    taste: Option<String>,
    course: Option<String>,
    dietary: Option<String>,
    max_time: Option<String>,
) -> Result<()> {
    let client = Client::new();

    let body = json!({
        "ingredients": ingredients,
        "taste": taste,
        "course": course,
        "dietary": dietary,
        "max_time": max_time,
    });

    let url = format!("{server_url}/api/recommend");
    let response = client.post(&url).json(&body).send().await?;

    if !response.status().is_success() {
        return Err(Error::Http(response.error_for_status().unwrap_err()));
    }

    let recommendations: Vec<Recommendation> = response.json().await?;

    print_recommendations(&recommendations);

    Ok(())
}

fn print_recommendations(recommendations: &[Recommendation]) {
    if recommendations.is_empty() {
        println!("No recipes share any of those ingredients.");
        return;
    }

    println!("Found {} recommendation(s):\n", recommendations.len());

    for (i, r) in recommendations.iter().enumerate() {
        println!("{}. {}", i + 1, r.name);
        if !r.description.is_empty() {
            println!("   {}", r.description);
        }
        println!(
            "   Matched ({}): {}",
            r.overlap,
            if r.matched_ingredients.is_empty() {
                "-"
            } else {
                r.matched_ingredients.as_str()
            }
        );
        match (r.prep_time_minutes, r.cook_time_minutes) {
            (Some(prep), Some(cook)) => println!("   Prep: {prep} min, Cook: {cook} min"),
            (Some(prep), None) => println!("   Prep: {prep} min"),
            (None, Some(cook)) => println!("   Cook: {cook} min"),
            (None, None) => {}
        }
        println!();
    }
}

/// Load a dataset file locally and print a summary
pub fn validate_dataset(path: &Path) -> Result<()> {
    let recipes = dataset::load_recipes(path)?;

    if recipes.is_empty() {
        return Err(Error::Validation(format!(
            "Dataset {} contains no usable recipes",
            path.display()
        )));
    }

    let empty_ingredients = recipes
        .iter()
        .filter(|r| r.ingredients_tokens.is_empty())
        .count();

    let mut courses: Vec<&str> = recipes
        .iter()
        .map(|r| r.course.as_str())
        .filter(|c| !c.is_empty())
        .collect();
    courses.sort();
    courses.dedup();

    println!("\u{2713} Dataset valid: {}", path.display());
    println!("  Recipes: {}", recipes.len());
    println!("  Courses: {}", courses.join(", "));
    if empty_ingredients > 0 {
        println!("  Recipes with no ingredient text: {empty_ingredients}");
    }

    Ok(())
}
