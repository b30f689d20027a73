//! Formatting utilities for terminal output

/// Join a ladder into `CAT → COT → DOG`
#[must_use]
pub fn ladder_line<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|w| w.as_ref().to_uppercase())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        width
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar of moves used out of the budget
#[must_use]
pub fn moves_bar(used: usize, max: usize) -> String {
    format!("[{}] {used}/{max}", create_progress_bar(used, max, max.min(20)))
}

/// Uppercase `word` with the letter at `position` bracketed: `C[O]T`
#[must_use]
pub fn highlight_change(word: &str, position: usize) -> String {
    word.to_uppercase()
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i == position {
                format!("[{c}]")
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// One-line description of a puzzle's obstacles
#[must_use]
pub fn obstacle_summary(banned_words: &[String], restricted_letters: &[char]) -> String {
    let mut parts = Vec::new();
    if !banned_words.is_empty() {
        parts.push(format!("banned: {}", banned_words.join(", ")));
    }
    if !restricted_letters.is_empty() {
        let letters: Vec<String> = restricted_letters
            .iter()
            .map(|c| c.to_ascii_uppercase().to_string())
            .collect();
        parts.push(format!("no letters: {}", letters.join(" ")));
    }

    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join(" | ")
    }
}
