// Shared prompt fragments. Each caller defines its own prompts.rs alongside it;
// this file holds the cross-cutting pieces.

/// System prompt fragment that enforces the plain `Name: WxH` line format.
pub const PLAIN_LINES_ONLY: &str = "\
    Respond with plain text only, one item per line. \
    Do NOT use markdown, bullets, numbering or code fences. \
    Do NOT include explanations, headings or apologies.";
