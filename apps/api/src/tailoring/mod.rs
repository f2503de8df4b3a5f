// Resume tailoring: multipart request → language-model completion → layout engine → PDF download.
// All model calls go through the CompletionService trait in llm_client.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod source;
