//! Prompt assembly for article generation.

use super::render::{Vars, render, vars};
use crate::article::GenerationRequest;
use crate::catalog::Template;

/// Persona and quality bar sent as the system message of every request.
pub const SYSTEM_INSTRUCTION: &str = "\
You are an expert technical writer whose articles consistently earn a large, engaged readership. \
Write high-quality technical articles in Markdown.

What makes an article stand out:
- Concrete, practical code examples readers can use right away
- Explanations a beginner can follow
- The reasoning behind each step, not only the steps
- Common pitfalls and how to get out of them
- Content that answers what the reader actually wanted to know
- A clear heading structure that is easy to scan
- Well-commented code
- Practices that hold up in real projects";

/// Body of the user message. `{language_line}` is empty when no language is set.
const USER_PROMPT_TEMPLATE: &str = "\
Write a technical article under the following conditions:

- Topic: {topic}
- Target audience: {audience}
- Length: {length_guidance}
- Writing style: {style}
{language_line}
Structure:
1. An engaging title
2. Introduction: what the reader will learn and who the article is for
3. Body: concrete explanation with working, commented code examples and common pitfalls
4. Conclusion with suggested next steps
5. Proper Markdown formatting throughout

Output format (exactly these three sections, in this order):
```
TITLE: [article title]
TAGS: [tag1,tag2,tag3]
BODY:
[article body in Markdown]
```

Make the article practical and easy to read.
";

/// The two messages sent to the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Build the system instruction and user prompt for `request`.
///
/// Audience and length overrides on the request win over the template's
/// defaults. Pure: no I/O, same inputs always give the same prompt.
pub fn build(request: &GenerationRequest, template: &Template) -> Prompt {
    let audience = request.audience.as_deref().unwrap_or(template.audience);
    let length = request.length.unwrap_or(template.length);
    let language_line = match &request.language {
        Some(language) => format!("- Programming language: {}\n", language),
        None => String::new(),
    };

    let values = vars([
        ("topic", request.topic.as_str()),
        ("audience", audience),
        ("length_guidance", length.guidance()),
        ("style", template.style),
        ("language_line", language_line.as_str()),
    ]);

    Prompt {
        system: SYSTEM_INSTRUCTION.to_string(),
        user: render_user_prompt(&values),
    }
}

fn render_user_prompt(values: &Vars) -> String {
    // Constant template with every placeholder bound in `build`.
    render(USER_PROMPT_TEMPLATE, values)
        .unwrap_or_else(|e| unreachable!("built-in prompt template failed to render: {}", e))
}
