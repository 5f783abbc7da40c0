use crate::client::GenerationClient;
use async_trait::async_trait;
use promptsite_core::{Error, Result};
use std::sync::Mutex;

/// Replays canned responses in order and records every call
pub struct ScriptedClient {
    responses: Mutex<Vec<Result<String>>>,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedClient {
    pub fn new(responses: Vec<Result<String>>) -> Self {
        let mut responses = responses;
        responses.reverse();
        Self {
            responses: Mutex::new(responses),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }
}

#[async_trait]
impl GenerationClient for ScriptedClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), user.to_string()));
        self.responses
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Err(Error::Transport("no scripted response".to_string())))
    }

    fn model(&self) -> &str {
        "scripted"
    }
}
