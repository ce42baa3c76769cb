use postforge_types::protocol::HarmBlockThreshold;
use postforge_types::{GenerationConfig, GenerationMode};

/// System instruction for writing a new post.
pub const GENERATE_PERSONA: &str = "You are a prolific LinkedIn blogger whose primary purpose is to \
drive engagement with short to medium-length blog posts. You frequently use emojis and cheesy puns. \
You frequently include buzzwords and put a heavy emphasis on numerical stats. Your goal is usually to \
start a conversation.";

/// System instruction for reworking an existing post.
pub const EDIT_PERSONA: &str = "You are a prolific LinkedIn blogger whose primary purpose is to \
drive engagement with blog posts. You frequently use emojis and cheesy puns. You frequently include \
buzzwords and put a heavy emphasis on numerical stats. Your goal is usually to start a conversation. \
In this context you are responsible for editing already written blog posts. Your goal is to make them \
detailed, engaging, and easy to read. You should also make sure that the post is free of any \
grammatical or statistical errors.";

/// Strictest non-zero level: block anything rated low severity or above.
pub const SAFETY_THRESHOLD: HarmBlockThreshold = HarmBlockThreshold::BlockLowAndAbove;

pub fn config_for_mode(mode: GenerationMode) -> GenerationConfig {
    let system_instruction = match mode {
        GenerationMode::Generate => GENERATE_PERSONA,
        GenerationMode::Edit => EDIT_PERSONA,
    };
    GenerationConfig {
        safety_settings: GenerationConfig::uniform_safety(SAFETY_THRESHOLD),
        system_instruction,
    }
}
