//! Basic chat completion example

use openai_client::{ChatRequest, Message, OpenAIClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize from environment
    let client = OpenAIClient::from_env()?;

    let response = client
        .chat_completion(
            ChatRequest::new("gpt-4-turbo")
                .message(Message::system("Du er en dansk tekstforfatter."))
                .message(Message::user("Skriv én sætning om håndlavede keramikkrus."))
                .temperature(0.7)
                .max_tokens(100),
        )
        .await?;

    println!("{}", response.content);
    if let Some(usage) = response.usage {
        println!("({} tokens i alt)", usage.total_tokens);
    }

    Ok(())
}
