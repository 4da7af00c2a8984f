//! Outbound prompt templates

/// Persona and style instruction sent with every prompt
pub const PERSONA_INSTRUCTION: &str = "You are a friendly, upbeat chat companion. \
Answer in a casual, natural tone, keep replies short and clear, \
and never invent facts you are unsure about.";

/// Closing line used when facts were retrieved
pub const GROUNDED_INSTRUCTION: &str =
    "Please provide a helpful, friendly answer based on the information above.";

/// Build the prompt forwarded to the inference server.
///
/// `context` is a rendered fact block, or `""` when nothing matched.
pub fn compose(prompt: &str, context: &str) -> String {
    if context.is_empty() {
        format!("{}\n\nUser question: {}", PERSONA_INSTRUCTION, prompt)
    } else {
        format!(
            "{}\n\n{}\n\nUser question: {}\n{}",
            PERSONA_INSTRUCTION, context, prompt, GROUNDED_INSTRUCTION
        )
    }
}
