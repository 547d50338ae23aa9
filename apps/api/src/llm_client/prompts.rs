// Cross-cutting prompt fragments.
// Each operation defines its own prompts.rs alongside it; this file holds
// only the pieces shared by every structured call.

/// System prompt fragment that enforces JSON-only output for structured calls.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured career intelligence assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON payload. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
