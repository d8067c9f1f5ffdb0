//! Plain-text export of recipes, for downloading or printing.
//!
//! The layout is fixed so that exporting the same recipe always produces the
//! same bytes.

use crate::model::text::fold;
use crate::model::RecipeView;
use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;
use std::fs;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write export file: {0}")]
    IoError(#[from] std::io::Error),
}

/// Renders a recipe in the export layout:
///
/// ```text
///
/// <title>
///
/// Descripción:
/// <description>
///
/// Ingredientes:
/// <ingredients>
///
/// Pasos:
/// <steps>
///
/// Tiempo: <time> min
/// Dificultad: <difficulty>
/// ```
///
/// The text starts with a newline and has no trailing newline.
pub fn to_text<R: RecipeView + ?Sized>(recipe: &R) -> String {
    format!(
        "\n{}\n\nDescripción:\n{}\n\nIngredientes:\n{}\n\nPasos:\n{}\n\nTiempo: {} min\nDificultad: {}",
        recipe.title(),
        recipe.description(),
        recipe.ingredients(),
        recipe.steps(),
        recipe.time(),
        recipe.difficulty(),
    )
}

fn slug_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is valid"))
}

/// File name stem for a recipe title: "Pernil navideño" becomes
/// "pernil-navideno". Falls back to "receta" when nothing is left.
pub fn file_stem(title: &str) -> String {
    let folded = fold(title);
    let slug = slug_regex().replace_all(&folded, "-");
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "receta".to_string()
    } else {
        slug.to_string()
    }
}

/// Writes the exported text to `<dir>/<file_stem>.txt`, creating `dir` if
/// needed, and returns the written path. An existing file is overwritten.
pub fn write_to_dir<R: RecipeView + ?Sized>(
    dir: &Utf8Path,
    recipe: &R,
) -> Result<Utf8PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.txt", file_stem(recipe.title())));
    fs::write(&path, to_text(recipe))?;
    debug!(path = %path, "exported recipe");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Difficulty, GeneratedRecipe, Recipe};
    use tempfile::TempDir;

    fn recipe() -> Recipe {
        Recipe::new("r2", "Pernil navideño", Difficulty::Hard, 300)
            .with_description("Asado lento con adobo cítrico y hierbas.")
            .with_ingredients("1 pernil\n4 naranjas")
            .with_steps("Marinar\nAsar")
    }

    #[test]
    fn test_to_text_layout() {
        let text = to_text(&recipe());
        let expected = "\nPernil navideño\n\nDescripción:\nAsado lento con adobo cítrico y hierbas.\n\nIngredientes:\n1 pernil\n4 naranjas\n\nPasos:\nMarinar\nAsar\n\nTiempo: 300 min\nDificultad: Alta";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_to_text_generated() {
        let generated = GeneratedRecipe {
            title: "Receta sugerida".to_string(),
            description: "Idea".to_string(),
            ingredients: "kiwi\ndragon fruit".to_string(),
            steps: "1. Cortar".to_string(),
            difficulty: Difficulty::Easy,
            time: 30,
        };
        let text = to_text(&generated);
        assert!(text.starts_with("\nReceta sugerida\n\n"));
        assert!(text.contains("\nIngredientes:\nkiwi\ndragon fruit\n\n"));
        assert!(text.ends_with("Tiempo: 30 min\nDificultad: Baja"));
    }

    #[test]
    fn test_to_text_is_stable() {
        assert_eq!(to_text(&recipe()), to_text(&recipe()));
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("Pernil navideño"), "pernil-navideno");
        assert_eq!(
            file_stem("  Panettone casero (con tus ingredientes) "),
            "panettone-casero-con-tus-ingredientes"
        );
        assert_eq!(file_stem("¡¡!!"), "receta");
        assert_eq!(file_stem(""), "receta");
    }

    #[test]
    fn test_write_to_dir() {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf())
            .unwrap()
            .join("exports");

        let path = write_to_dir(&dir, &recipe()).unwrap();
        assert_eq!(path, dir.join("pernil-navideno.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), to_text(&recipe()));
    }
}
