//! KZPM house-brand lookup keyed on the dispersion medium polarity.

pub const RHEOLOGY_ADDITIVE: &str = "Органобент - реологическая добавка";
pub const PAINT_GRADE: &str = "Органобент - ЛКМ";

/// Map the model's free-text polarity to the matching KZPM organobentonite.
///
/// Low-polarity media take the rheology additive, medium-polarity media the
/// paint grade; anything else has no KZPM equivalent.
pub fn kzpm_recommendation(medium_polarity: &str) -> Option<&'static str> {
    let polarity = medium_polarity.to_lowercase();
    if polarity.contains("очень низкая") || polarity.contains("низкая") {
        return Some(RHEOLOGY_ADDITIVE);
    }
    if polarity.contains("чуть более полярная") || polarity.contains("средняя") {
        return Some(PAINT_GRADE);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_polarity_gets_rheology_additive() {
        assert_eq!(kzpm_recommendation("Низкая"), Some(RHEOLOGY_ADDITIVE));
        assert_eq!(
            kzpm_recommendation("Очень низкая (минеральное масло)"),
            Some(RHEOLOGY_ADDITIVE)
        );
    }

    #[test]
    fn test_medium_polarity_gets_paint_grade() {
        assert_eq!(kzpm_recommendation("Средняя"), Some(PAINT_GRADE));
        assert_eq!(
            kzpm_recommendation("Чуть более полярная, чем уайт-спирит"),
            Some(PAINT_GRADE)
        );
    }

    #[test]
    fn test_mixed_low_medium_prefers_low() {
        assert_eq!(
            kzpm_recommendation("Низкая/Средняя"),
            Some(RHEOLOGY_ADDITIVE)
        );
    }

    #[test]
    fn test_high_polarity_has_no_kzpm_match() {
        assert_eq!(kzpm_recommendation("Высокая"), None);
        assert_eq!(kzpm_recommendation(""), None);
    }
}
