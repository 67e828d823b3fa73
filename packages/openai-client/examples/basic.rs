//! JSON-mode chat completion example

use openai_client::{ChatRequest, Message, OpenAIClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("OPENAI_API_KEY")?;
    let client = OpenAIClient::new(api_key);

    let response = client
        .chat_completion(
            ChatRequest::new("gpt-3.5-turbo")
                .message(Message::system(
                    "Answer with a JSON object holding a single field `language`.",
                ))
                .message(Message::user("Which language is `fn main() {}` written in?"))
                .temperature(0.7)
                .json_object(),
        )
        .await?;

    println!("Response: {}", response.content);
    if let Some(usage) = response.usage {
        println!("Tokens used: {}", usage.total_tokens);
    }

    Ok(())
}
