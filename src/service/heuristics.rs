//! Deterministic prompt-enrichment passes.
//!
//! Each pass appends a fixed instruction block to the prompt. The order
//! is part of the service's observable behavior: clarity, context,
//! output format, examples, step-by-step, quality.

/// Push for concrete wording and explicit constraints.
const CLARITY: &str = "Please be specific and clear. Replace vague terms with concrete details, \
    and add constraints such as length, format, and style if applicable. \
    Specify the desired output structure.";

/// Ask for background, purpose, and audience.
const CONTEXT: &str = "Include relevant background information and specify the purpose or goal. \
    If relevant, consider the target audience.";

/// Ask for an explicit output structure.
const OUTPUT_FORMAT: &str = "Structure the output clearly: use numbered lists, bullet points, \
    headers, or specific formats like JSON if suitable.";

/// Suggest illustrative input/output samples.
const EXAMPLES: &str =
    "For example, you can provide 1–2 input/output samples illustrating the desired format or content.";

/// Ask the model to reason out loud.
const STEP_BY_STEP: &str =
    "Please think step-by-step, explain your reasoning, and show your work.";

/// Ask for accuracy and stated uncertainty.
const QUALITY: &str =
    "Be accurate and thorough. If uncertain, please say so. Double-check your reasoning.";

const PASSES: &[&str] = &[CLARITY, CONTEXT, OUTPUT_FORMAT, EXAMPLES, STEP_BY_STEP, QUALITY];

/// Apply every enrichment pass to a raw prompt.
pub fn enrich(prompt: &str) -> String {
    let mut enriched = prompt.trim().to_string();
    for pass in PASSES {
        enriched.push_str("\n\n");
        enriched.push_str(pass);
    }
    enriched
}
