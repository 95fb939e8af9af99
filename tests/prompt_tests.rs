use chatpilot::prompt::{
    NO_MESSAGES_SENTINEL, SUMMARIZE_INSTRUCTIONS, build_prompt, query_instructions,
};

#[test]
fn sentinel_text_is_stable() {
    assert_eq!(
        NO_MESSAGES_SENTINEL,
        "No messages was found. Consider using other chat."
    );
}

#[test]
fn summarize_prompt_is_preamble_then_messages() {
    let prompt = build_prompt(SUMMARIZE_INSTRUCTIONS, "mom: Dinner at 7, ");
    assert_eq!(
        prompt,
        "Given messages extracted from the chat, summarize the chat and extract my action points.\nmom: Dinner at 7, "
    );
}

#[test]
fn query_instructions_embed_question() {
    let instructions = query_instructions("Who is cooking?");
    assert!(instructions.contains("answer the following question: Who is cooking?"));
    assert!(instructions.ends_with(" \n"));
}
