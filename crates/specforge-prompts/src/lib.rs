mod context;

pub use context::PromptContext;

/// The two messages sent to the chat-completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub system_message: String,
    pub user_message: String,
}

const PREAMBLE: &str =
    "Please generate a comprehensive technical specification based on the following information:";

const CLOSING: &str = "Please create a well-structured specification document that includes \
appropriate sections such as:\n\
- Introduction/Overview\n\
- Specification Details\n\
- Implementation Guidelines\n\
- Security Considerations (if applicable)\n\
- References (if applicable)\n\n\
Format the output as a clear, professional specification document in Markdown format.";

/// Assemble the user prompt and accompanying system message.
///
/// Sections appear in a fixed order; optional sections (examples, reference
/// documents, template references) are omitted entirely when empty. Performs
/// no validation — callers check the required fields first.
pub fn assemble(ctx: &PromptContext) -> PromptRequest {
    let mut prompt = String::new();

    prompt.push_str(PREAMBLE);
    prompt.push_str("\n\n");
    prompt.push_str(&format!("Title: {}\n\n", ctx.spec.title));
    prompt.push_str(&format!("Description:\n{}\n\n", ctx.spec.description));

    ctx.append_examples(&mut prompt);
    ctx.append_documents(&mut prompt);
    ctx.append_templates(&mut prompt);

    prompt.push_str(CLOSING);

    PromptRequest {
        system_message: ctx.system_prompt.to_string(),
        user_message: prompt,
    }
}
