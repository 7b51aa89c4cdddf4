//! HTML rendering for the storybook views.
//!
//! All user-controlled text (topic, model output, error messages) is
//! escaped before it reaches the page.

use donghwa_core::{Story, StoryPage};
use html_escape::encode_text;

/// Fixed label prefixed to every user-facing error message.
pub const ERROR_LABEL: &str = "이야기를 만들지 못했어요: ";

/// Renders the topic input form without a result.
pub fn render_index() -> String {
    page_shell("")
}

/// Renders a completed story below the input form.
pub fn render_story(story: &Story) -> String {
    let mut result = String::new();
    result.push_str(&format!(
        "<section class=\"story\">\n<h2>\u{201c}{}\u{201d}</h2>\n",
        encode_text(story.topic())
    ));
    for page in story.pages() {
        result.push_str(&render_page(page));
    }
    result.push_str("</section>\n");
    page_shell(&result)
}

/// Renders an error view with the fixed user-facing label.
pub fn render_error(message: &str) -> String {
    let error = format!(
        "<section class=\"error\"><p>{}{}</p></section>\n",
        ERROR_LABEL,
        encode_text(message)
    );
    page_shell(&error)
}

fn render_page(page: &StoryPage) -> String {
    let image = match page.image() {
        Some(image) => format!(
            "<img class=\"illustration\" src=\"{}\" alt=\"{}\">",
            image.data_uri(),
            encode_text(page.illustration().as_deref().unwrap_or("삽화"))
        ),
        None => "<div class=\"placeholder\">삽화가 준비되지 않았어요</div>".to_string(),
    };

    format!(
        "<article class=\"page\">\n<h3>{}</h3>\n{}\n<p>{}</p>\n</article>\n",
        encode_text(page.title()),
        image,
        encode_text(page.body()).replace('\n', "<br>")
    )
}

/// Wraps the form and an optional result/error section in the page shell.
fn page_shell(result: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"ko\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>동화 만들기</title>\n\
         <style>\n\
         body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }}\n\
         .page {{ margin: 2rem 0; }}\n\
         .illustration {{ max-width: 100%; border-radius: 0.5rem; }}\n\
         .placeholder {{ padding: 2rem; background: #f4f1ea; border-radius: 0.5rem; color: #8a8273; }}\n\
         .error {{ color: #a03030; }}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <h1>동화 만들기</h1>\n\
         <form method=\"post\" action=\"/generate\">\n\
         <input type=\"text\" name=\"prompt\" placeholder=\"이야기 주제를 입력하세요\" required>\n\
         <button type=\"submit\">만들기</button>\n\
         </form>\n\
         {result}\
         </body>\n\
         </html>\n"
    )
}
