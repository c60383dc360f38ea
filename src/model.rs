use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::ModelConfig;

/// Decoding settings sent with every generation. Not user-configurable.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub repetition_penalty: f32,
    pub no_repeat_ngram_size: u32,
    pub num_return_sequences: u32,
    pub do_sample: bool,
    pub early_stopping: bool,
}

impl GenerationParams {
    pub const fn fixed() -> Self {
        Self {
            max_new_tokens: 640,
            temperature: 0.7,
            top_p: 0.9,
            repetition_penalty: 1.4,
            no_repeat_ngram_size: 4,
            num_return_sequences: 1,
            do_sample: true,
            early_stopping: true,
        }
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::fixed()
    }
}

/// Text-in, text-out generation backend. Returns the single best sequence.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> anyhow::Result<String>;
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParams,
    options: InferenceOptions,
}

#[derive(Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
struct GeneratedSequence {
    generated_text: String,
}

/// Hosted seq2seq model reached over HTTP (`POST {endpoint}/models/{name}`).
#[derive(Clone)]
pub struct HttpTextGenerator {
    client: reqwest::Client,
    url: String,
    api_token: Option<String>,
}

impl HttpTextGenerator {
    pub fn new(config: &ModelConfig) -> anyhow::Result<Self> {
        // No request timeout: a slow model blocks the request until it answers.
        let client = reqwest::Client::builder()
            .build()
            .context("build model http client")?;
        Ok(Self {
            client,
            url: model_url(&config.endpoint, &config.name),
            api_token: config.api_token.clone(),
        })
    }
}

fn model_url(endpoint: &str, name: &str) -> String {
    format!("{}/models/{}", endpoint.trim_end_matches('/'), name)
}

#[async_trait]
impl TextGenerator for HttpTextGenerator {
    #[instrument(skip(self, prompt, params), fields(url = %self.url))]
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> anyhow::Result<String> {
        let body = InferenceRequest {
            inputs: prompt,
            parameters: params,
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let mut req = self.client.post(&self.url).json(&body);
        if let Some(token) = &self.api_token {
            req = req.bearer_auth(token);
        }

        let sequences: Vec<GeneratedSequence> = req
            .send()
            .await
            .context("send generation request")?
            .error_for_status()
            .context("model returned error status")?
            .json()
            .await
            .context("decode generation response")?;

        let text = sequences
            .into_iter()
            .next()
            .map(|s| s.generated_text.trim().to_string())
            .context("model returned no sequences")?;
        debug!(chars = text.len(), "model generation complete");
        Ok(text)
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::sync::Mutex;

    use super::*;

    /// Returns a fixed reply (or fails) and records every prompt it receives.
    pub struct CannedGenerator {
        reply: Option<String>,
        prompts: Mutex<Vec<String>>,
    }

    impl CannedGenerator {
        pub fn new(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn failing() -> Self {
            Self {
                reply: None,
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, prompt: &str, params: &GenerationParams) -> anyhow::Result<String> {
            assert_eq!(params, &GenerationParams::fixed());
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Some(reply) => Ok(reply.clone()),
                None => anyhow::bail!("model unavailable"),
            }
        }
    }
}
