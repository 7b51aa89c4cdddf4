//! Prompt construction for the text and image models.

/// Number of pages the story prompt asks the model for.
pub const PAGE_COUNT: usize = 8;

/// Style clause prepended to every illustration prompt.
const ILLUSTRATION_STYLE: &str = "동화책 스타일의 일러스트, 따뜻한 색감, 수채화 느낌, ";

/// Builds the storybook instruction prompt for a validated topic.
///
/// The template pins down the exact per-page format the parser relies on:
/// a numeric page marker, a parenthesized illustration clause introduced by
/// `삽화:`, then the narrative body.
pub fn story_prompt(topic: &str) -> String {
    format!(
        "아래 주제를 바탕으로 어린이용 그림책 스타일의 스토리를 작성하세요.\n\
         - 주제: \"{topic}\"\n\
         - 스토리는 총 {PAGE_COUNT}페이지로 구성하세요.\n\
         - 각 페이지는 아래 형식을 반드시 따르세요:\n\
         \n\
           1. 페이지 (삽화: [한국어로 된 삽화 장면 설명])\n\
           [해당 페이지의 한국어 스토리 본문, 짧고 동화체로 작성]\n\
         \n\
         - 삽화 설명은 실제로 그림을 그릴 수 있을 정도로 구체적으로 써주세요.\n\
         - 전체 이야기의 분위기는 따뜻하고 희망적으로 마무리하세요.\n\
         - 출력 형식(페이지 번호, 괄호, 줄바꿈 등)은 그대로 유지하세요."
    )
}

/// Builds the styled image prompt for one illustration description.
pub fn illustration_prompt(description: &str) -> String {
    format!("{ILLUSTRATION_STYLE}{description}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_prompt_embeds_topic() {
        let prompt = story_prompt("a lonely cloud");
        assert!(prompt.contains("a lonely cloud"));
        assert!(prompt.contains("8페이지"));
        assert!(prompt.contains("삽화:"));
    }

    #[test]
    fn illustration_prompt_applies_style_prefix() {
        let prompt = illustration_prompt("구름 위의 작은 집");
        assert!(prompt.starts_with("동화책 스타일의 일러스트"));
        assert!(prompt.ends_with("구름 위의 작은 집"));
    }
}
