pub const ANALYSIS_SYSTEM: &str = include_str!("../data/prompts/analysis_system.txt");
pub const REFERENCE_DATA: &str = include_str!("../data/prompts/reference_data.txt");
pub const TEXT_USER: &str = include_str!("../data/prompts/text_user.txt");
pub const IMAGE_USER: &str = include_str!("../data/prompts/image_user.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

/// System instruction sent with every analysis: persona, output language
/// directive and the reference knowledge block.
pub fn system_instruction() -> String {
    render(ANALYSIS_SYSTEM, &[("reference", REFERENCE_DATA.trim_end())])
        .trim_end()
        .to_string()
}

pub fn text_prompt(query: &str) -> String {
    render(TEXT_USER, &[("query", query)]).trim_end().to_string()
}

pub fn image_prompt() -> String {
    IMAGE_USER.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_var() {
        assert_eq!(
            render("Hello {{name}}!", &[("name", "world")]),
            "Hello world!"
        );
    }

    #[test]
    fn test_render_multiple_vars() {
        assert_eq!(
            render("{{a}} and {{b}}", &[("a", "cats"), ("b", "dogs")]),
            "cats and dogs"
        );
    }

    #[test]
    fn test_prompts_are_non_empty() {
        assert!(!ANALYSIS_SYSTEM.is_empty());
        assert!(!REFERENCE_DATA.is_empty());
        assert!(!TEXT_USER.is_empty());
        assert!(!IMAGE_USER.is_empty());
    }

    #[test]
    fn test_templates_have_placeholders() {
        assert!(ANALYSIS_SYSTEM.contains("{{reference}}"));
        assert!(TEXT_USER.contains("{{query}}"));
    }

    #[test]
    fn test_system_instruction_embeds_reference_and_language() {
        let system = system_instruction();
        assert!(system.contains("эксперт-химик"));
        assert!(system.contains("на русском языке"));
        assert!(system.contains("Bentone 34 (Elementis, США)"));
        assert!(!system.contains("{{reference}}"));
    }

    #[test]
    fn test_text_prompt_interpolates_query() {
        let prompt = text_prompt("ПФ-115");
        assert!(prompt.contains("\"ПФ-115\""));
        assert!(!prompt.contains("{{query}}"));
        assert!(!prompt.ends_with('\n'));
    }

    #[test]
    fn test_image_prompt_mentions_label() {
        assert!(image_prompt().contains("этикетку"));
    }
}
