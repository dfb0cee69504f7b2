//! Daily motivational quote.
//!
//! # Responsibility
//! - Provide the cached quote-of-the-day record and its selection rule.
//!
//! # Invariants
//! - The quote for a given date is deterministic, so refreshing twice on the
//!   same day never changes state.

use serde::{Deserialize, Serialize};

const QUOTES: [(&str, &str); 8] = [
    (
        "Дисциплина — это мост между целями и достижениями.",
        "Джим Рон",
    ),
    (
        "Маленькие ежедневные улучшения — ключ к потрясающим долгосрочным результатам.",
        "Робин Шарма",
    ),
    (
        "Ты не поднимаешься до уровня своих целей. Ты падаешь до уровня своих систем.",
        "Джеймс Клир",
    ),
    (
        "Успех — это сумма небольших усилий, повторяемых изо дня в день.",
        "Роберт Кольер",
    ),
    (
        "Единственный способ сделать великую работу — любить то, что делаешь.",
        "Стив Джобс",
    ),
    (
        "Не жди идеального момента. Возьми момент и сделай его идеальным.",
        "Зиг Зиглар",
    ),
    (
        "Инвестируй в себя. Твоя карьера — это двигатель твоего богатства.",
        "Пол Клитеро",
    ),
    ("Здоровье — это инвестиция, а не расход.", "Неизвестный"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyQuote {
    pub text: String,
    pub author: String,
    /// The day this quote was drawn for.
    pub date: String,
}

/// Picks the quote for a calendar day.
///
/// The index is a stable hash of the date string, so the whole day shows one
/// quote and tests can pin expectations.
pub fn quote_for(date: &str) -> DailyQuote {
    let index = date
        .bytes()
        .fold(0usize, |acc, byte| acc.wrapping_mul(31).wrapping_add(byte as usize))
        % QUOTES.len();
    let (text, author) = QUOTES[index];

    DailyQuote {
        text: text.to_string(),
        author: author.to_string(),
        date: date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::quote_for;

    #[test]
    fn same_day_yields_same_quote() {
        assert_eq!(quote_for("2024-01-01"), quote_for("2024-01-01"));
    }

    #[test]
    fn quote_carries_its_date() {
        let quote = quote_for("2024-05-09");
        assert_eq!(quote.date, "2024-05-09");
        assert!(!quote.text.is_empty());
        assert!(!quote.author.is_empty());
    }
}
