//! Narrator prompt assembly.
//!
//! The system instruction is fixed text plus an optional mood clause and the
//! drama clause. Caller history is forwarded untouched.

use storyloom_domain::{ConversationTurn, DramaLevel, Mood, NarrationRequest};

/// Persona, tense, rating and continuity rules for every turn.
pub const NARRATOR_INSTRUCTION: &str = "You are the narrator of an interactive text adventure. \
Describe what happens next in response to the player's action, speaking to the player in the \
second person and the present tense. Keep every response PG-13. Never break the fourth wall: \
do not mention being an AI, a model or a game. Stay consistent with everything that has \
already happened in the story.";

/// Full system instruction for one turn.
pub fn system_instruction(mood: &Mood, drama: DramaLevel) -> String {
    let mut instruction = String::from(NARRATOR_INSTRUCTION);

    if let Some(mood) = mood.custom() {
        instruction.push_str(&format!(
            "\n\nMood: {mood}. Keep the tone, imagery and pacing consistent with this genre."
        ));
    }

    instruction.push_str("\n\n");
    instruction.push_str(drama.instruction());
    instruction
}

/// System instruction, then history in order, then the player's new turn.
pub fn build_messages(request: &NarrationRequest) -> Vec<ConversationTurn> {
    let mut messages = Vec::with_capacity(request.history.len() + 2);
    messages.push(ConversationTurn::system(system_instruction(
        &request.mood,
        request.drama,
    )));
    messages.extend(request.history.iter().cloned());
    messages.push(ConversationTurn::user(request.user_turn.clone()));
    messages
}
