//! `OpenAI`-compatible [`LlmProvider`] implementation.

use super::client::OpenAiCompatClient;
use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Role};
use async_trait::async_trait;
use voyage_models::llm::{
    AssistantBlock, GenerationError, GenerationRequest, GenerationResponse, LlmProvider, Message,
    Usage,
};

/// `OpenAI`-compatible [`LlmProvider`] implementation.
#[derive(Debug, Clone)]
pub struct OpenAiCompatProvider {
    client: OpenAiCompatClient,
}

impl OpenAiCompatProvider {
    /// Creates a new provider for the given endpoint and credential.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: OpenAiCompatClient::new(base_url, api_key),
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatProvider {
    async fn generate(
        &self,
        model: &str,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let chat_request = convert_request(model, &request)?;

        let response = self.client.create_chat_completion(&chat_request).await?;

        convert_response(response)
    }
}

fn convert_request(
    model: &str,
    request: &GenerationRequest,
) -> Result<ChatCompletionRequest, GenerationError> {
    if request.messages.is_empty() {
        return Err(GenerationError::InvalidRequest(
            "request contains no messages".to_string(),
        ));
    }

    let system = request.system.as_ref().map(|system| ChatMessage {
        role: Role::System,
        content: system.clone(),
    });

    let messages = system
        .into_iter()
        .chain(request.messages.iter().map(convert_message))
        .collect();

    Ok(ChatCompletionRequest {
        model: model.to_string(),
        messages,
        temperature: request.temperature,
        stream: false,
    })
}

fn convert_message(message: &Message) -> ChatMessage {
    let role = match message {
        Message::User { .. } => Role::User,
        Message::Assistant { .. } => Role::Assistant,
    };
    ChatMessage {
        role,
        content: message.text(),
    }
}

fn convert_response(response: ChatCompletionResponse) -> Result<GenerationResponse, GenerationError> {
    let choice = response.choices.into_iter().next().ok_or_else(|| {
        GenerationError::InvalidResponse("response contained no choices".to_string())
    })?;

    if let Some(reason) = choice.finish_reason.as_deref()
        && reason != "stop"
    {
        tracing::debug!(finish_reason = reason, "completion did not stop naturally");
    }

    let mut content = Vec::new();
    if let Some(reasoning) = choice.message.reasoning.filter(|r| !r.is_empty()) {
        content.push(AssistantBlock::reasoning(reasoning));
    }
    if let Some(text) = choice.message.content {
        content.push(AssistantBlock::Text(text));
    }

    let usage = response.usage.map_or_else(Usage::default, |usage| Usage {
        input_tokens: usage.prompt_tokens,
        output_tokens: usage.completion_tokens,
        total_tokens: usage.total_tokens.or_else(|| {
            usage
                .prompt_tokens
                .zip(usage.completion_tokens)
                .map(|(input, output)| input + output)
        }),
    });

    Ok(GenerationResponse { content, usage })
}
