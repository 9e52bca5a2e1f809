//! LLM prompt constants for room extraction.
//!
//! The reply is parsed line by line by `parser::parse_room_lines`, so the
//! format instruction here and the parser must stay in step.

pub const EXTRACT_SYSTEM: &str = "\
You are an expert architect. From the user's description of a building, extract \
every room and its approximate size in meters.\n\
\n\
Return one room per line in the form `Room Name: WIDTHxHEIGHT`, for example:\n\
Living Room: 6x5\n\
Kitchen: 4x3\n\
Bedroom 1: 4x4\n\
\n\
Number repeated rooms (Bedroom 1, Bedroom 2). Use plausible residential sizes \
when the description gives none.";

pub const EXTRACT_PROMPT_TEMPLATE: &str = "\
BUILDING DESCRIPTION:\n\
{description}\n\
\n\
List the rooms now, one `Room Name: WxH` line each.";

pub fn build_extract_prompt(description: &str) -> String {
    EXTRACT_PROMPT_TEMPLATE.replace("{description}", description.trim())
}
