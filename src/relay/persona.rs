//! Stabilizer persona and request construction
//!
//! The generateContent request shape has no dedicated system-instruction
//! field, so the persona is simulated as the first exchange of the
//! conversation: one synthetic user turn carrying the instruction, one
//! synthetic model turn acknowledging it.

use super::types::{
    Content, ConversationTurn, GenerateContentRequest, GenerationConfig, Part, SafetySetting,
};

/// Persona instruction prepended to every upstream conversation.
pub const STABILIZER_PROMPT: &str = "You are a compassionate, encouraging, non-judgmental mental-state stabilizer. Your goal is to provide short, empathetic, motivating, and grounding responses to help users cope with stress, anxiety, and low mood. \n\nGuidelines:\n- Use calm, warm language and validate feelings without judgment\n- Suggest small actionable coping steps (breathing exercises, grounding techniques, journaling, talking to a trusted person)\n- Encourage professional help if someone expresses suicidal ideation or severe distress\n- Keep responses brief (1-3 short paragraphs) unless asked for more detail\n- Never provide medical or legal advice\n- Always be hopeful and remind them that they're not alone and that these feelings will pass\n- End with an encouraging note or gentle action suggestion\n\nRemember: Your role is to support and encourage, not to replace professional mental health services.";

/// Canned acknowledgment of the persona instruction.
pub const STABILIZER_ACK: &str =
    "I understand. I am here to support and encourage you with compassion and care.";

const TEMPERATURE: f32 = 0.7;
const TOP_K: u32 = 40;
const TOP_P: f32 = 0.95;
const MAX_OUTPUT_TOKENS: u32 = 500;

const BLOCK_MEDIUM_AND_ABOVE: &str = "BLOCK_MEDIUM_AND_ABOVE";

/// Collapse a client role into the upstream's two-valued vocabulary.
///
/// Only `assistant` maps to the model-side label; every other value,
/// including an explicit `system` role, becomes `user`.
pub fn map_role(role: &str) -> &'static str {
    if role == "assistant" {
        "model"
    } else {
        "user"
    }
}

/// Build the upstream request for a conversation.
///
/// Pure function of its input: persona bootstrap first, then the client
/// turns verbatim with collapsed roles, then the fixed generation and
/// safety parameters.
pub fn build_request(turns: &[ConversationTurn]) -> GenerateContentRequest {
    let mut contents = Vec::with_capacity(turns.len() + 2);

    contents.push(Content {
        role: "user",
        parts: vec![Part {
            text: STABILIZER_PROMPT.to_string(),
        }],
    });
    contents.push(Content {
        role: "model",
        parts: vec![Part {
            text: STABILIZER_ACK.to_string(),
        }],
    });

    for turn in turns {
        contents.push(Content {
            role: map_role(&turn.role),
            parts: vec![Part {
                text: turn.content.clone(),
            }],
        });
    }

    GenerateContentRequest {
        contents,
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
            top_k: TOP_K,
            top_p: TOP_P,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        },
        safety_settings: safety_settings(),
    }
}

/// Fixed content-safety thresholds, all categories at medium-and-above.
fn safety_settings() -> Vec<SafetySetting> {
    [
        "HARM_CATEGORY_HARASSMENT",
        "HARM_CATEGORY_HATE_SPEECH",
        "HARM_CATEGORY_SEXUALLY_EXPLICIT",
        "HARM_CATEGORY_DANGEROUS_CONTENT",
    ]
    .into_iter()
    .map(|category| SafetySetting {
        category,
        threshold: BLOCK_MEDIUM_AND_ABOVE,
    })
    .collect()
}
