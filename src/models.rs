//! The Gemma models offered at startup.

use crate::ui::Style;

/// Model used when no choice is made.
pub const DEFAULT_MODEL: &str = "gemma2:2b";

/// Selectable models and a short description of each.
pub const AVAILABLE_MODELS: &[(&str, &str)] = &[
    ("gemma2:2b", "Lightest (2GB) - fastest"),
    ("gemma2:9b", "Medium (5GB) - balanced performance"),
    ("gemma2:27b", "Large (15GB) - best quality"),
];

/// Resolves a menu choice (`1`, `2`, `3` or a model name) to a model.
///
/// Blank or unrecognized choices fall back to [`DEFAULT_MODEL`].
pub fn model_for_choice(choice: &str) -> &'static str {
    let choice = choice.trim();

    choice
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| AVAILABLE_MODELS.get(index))
        .or_else(|| AVAILABLE_MODELS.iter().find(|(name, _)| *name == choice))
        .map_or(DEFAULT_MODEL, |&(name, _)| name)
}

/// Returns `true` if `model` is one of the offered models.
pub fn is_known_model(model: &str) -> bool {
    AVAILABLE_MODELS.iter().any(|(name, _)| *name == model)
}

/// Prints the numbered model menu to stdout.
pub fn print_models() {
    println!("{}", Style::header("Available models"));
    for (index, (name, description)) in AVAILABLE_MODELS.iter().enumerate() {
        println!(
            "  {}. {} {}",
            index + 1,
            Style::value(format!("{name:<11}")),
            Style::secondary(description)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_for_numeric_choice() {
        assert_eq!(model_for_choice("1"), "gemma2:2b");
        assert_eq!(model_for_choice("2"), "gemma2:9b");
        assert_eq!(model_for_choice(" 3 \n"), "gemma2:27b");
    }

    #[test]
    fn test_model_for_name_choice() {
        assert_eq!(model_for_choice("gemma2:27b"), "gemma2:27b");
    }

    #[test]
    fn test_model_for_invalid_choice_falls_back() {
        assert_eq!(model_for_choice(""), DEFAULT_MODEL);
        assert_eq!(model_for_choice("0"), DEFAULT_MODEL);
        assert_eq!(model_for_choice("4"), DEFAULT_MODEL);
        assert_eq!(model_for_choice("llama3"), DEFAULT_MODEL);
    }

    #[test]
    fn test_is_known_model() {
        assert!(is_known_model("gemma2:9b"));
        assert!(!is_known_model("gemma3:12b"));
    }
}
